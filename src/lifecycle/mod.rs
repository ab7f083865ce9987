//! Before/after hook lifecycle around provisioning operations.
//!
//! Hosting operations (provision, status, credentials, deprovision)
//! conventionally set the shared argument buffer, fire the
//! [`HookPoint::Before`] slot, perform their own work, and fire
//! [`HookPoint::After`] only when that work succeeded.
//! [`HookContext::surround`] encodes the convention in one call.

use parking_lot::Mutex;
use serde_json::Value;
use std::future::Future;

use crate::action::ActionRef;
use crate::error::{ActionError, ActionResult};

/// Points around a hosting operation where a hook can fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookPoint {
    Before,
    After,
}

/// Caller-owned composition context holding the two hook slots and the
/// shared argument buffer.
///
/// Each slot holds at most one action; arming replaces silently, firing
/// consumes. After [`fire`](HookContext::fire) returns, the fired slot is
/// empty regardless of success or failure — a hook runs exactly once, then
/// is forgotten. Both slots read the same buffer, and
/// [`set_args`](HookContext::set_args) replaces it wholesale with no
/// slot-specific scoping.
#[derive(Default)]
pub struct HookContext {
    before: Mutex<Option<ActionRef>>,
    after: Mutex<Option<ActionRef>>,
    args: Mutex<Vec<Value>>,
}

impl HookContext {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, point: HookPoint) -> &Mutex<Option<ActionRef>> {
        match point {
            HookPoint::Before => &self.before,
            HookPoint::After => &self.after,
        }
    }

    /// Arm a hook slot, silently discarding any previously armed action.
    pub fn arm(&self, point: HookPoint, action: ActionRef) {
        *self.slot(point).lock() = Some(action);
    }

    pub fn is_armed(&self, point: HookPoint) -> bool {
        self.slot(point).lock().is_some()
    }

    /// Replace the shared argument buffer wholesale.
    pub fn set_args(&self, args: Vec<Value>) {
        *self.args.lock() = args;
    }

    /// Snapshot of the shared argument buffer.
    pub fn args(&self) -> Vec<Value> {
        self.args.lock().clone()
    }

    /// Run and clear a hook slot.
    ///
    /// An armed slot is emptied before its action runs and the shared buffer
    /// is consumed by the run, so a hook fires exactly once even when it
    /// fails, and its error is forwarded unchanged. Firing an empty slot is
    /// a no-op that returns no error and leaves the buffer untouched.
    pub async fn fire(&self, point: HookPoint) -> ActionResult<Option<Value>> {
        let armed = self.slot(point).lock().take();
        let Some(action) = armed else {
            return Ok(None);
        };
        let args = std::mem::take(&mut *self.args.lock());
        tracing::debug!(hook = ?point, action = action.name(), "firing hook");
        action.run(&args).await
    }

    /// Surround a hosting operation with the armed hooks.
    ///
    /// Sets the shared buffer, fires `Before` (a failing before-hook aborts
    /// the operation), runs `work`, then re-sets the buffer and fires
    /// `After` — only when `work` succeeded. Hook errors are forwarded
    /// unchanged; on a failed operation the after-hook stays armed.
    pub async fn surround<T, E, F, Fut>(&self, args: Vec<Value>, work: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: From<ActionError>,
    {
        self.set_args(args.clone());
        self.fire(HookPoint::Before).await?;
        let value = work().await?;
        self.set_args(args);
        self.fire(HookPoint::After).await?;
        Ok(value)
    }
}
