//! The action capability and adapters lifting plain functions into it.

mod adapter;

pub use adapter::{AsyncFnAction, FnAction};

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::error::ActionResult;

/// Ordered list of opaque values passed into an action.
pub type ArgList = Vec<Value>;

/// Shared handle to a dynamically dispatched action.
pub type ActionRef = Arc<dyn Action>;

/// A unit of work taking an ordered list of opaque values and producing at
/// most one value.
///
/// Argument count and types are a convention between caller and callee, not
/// part of the contract: a mismatch surfaces as a runtime error inside the
/// action body (typically
/// [`ActionError::InvalidArgs`](crate::error::ActionError::InvalidArgs)),
/// never at composition time.
#[async_trait]
pub trait Action: Send + Sync {
    /// Execute the unit of work.
    async fn run(&self, args: &[Value]) -> ActionResult<Option<Value>>;

    /// Human-readable name for logging.
    fn name(&self) -> &str {
        "action"
    }
}
