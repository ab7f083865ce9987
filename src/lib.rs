//! # actionflow — composable actions for cluster provisioning
//!
//! `actionflow` extends a cluster-provisioning toolkit with a generic
//! action-composition layer. Callers define arbitrary units of work
//! ("actions") and combine them into sequential, piped, or concurrent
//! workflows, and may attach before/after hooks around higher-level
//! provisioning operations (provision, status, credentials, deprovision):
//!
//! - **[`Action`]**: a unit of work taking an ordered list of opaque
//!   [`serde_json::Value`]s and producing at most one value.
//! - **[`FnAction`] / [`AsyncFnAction`]**: lift plain functions into actions.
//! - **[`Sequence`]**: run every child against identical input; never
//!   short-circuits; aggregates all results and all errors.
//! - **[`Pipe`]**: feed each child's output into the next child's argument
//!   list; halts at the first error.
//! - **[`Parallel`]**: fan out one worker per child and drain exactly one
//!   outcome each, in arrival order; optional [`CancelSignal`].
//! - **[`HookContext`]**: caller-owned before/after hook slots with a shared
//!   argument buffer, consumed run-and-clear.
//!
//! Composites are actions too, so they nest freely and may themselves be
//! armed as hooks.
//!
//! # Quick Start
//!
//! ```rust
//! use actionflow::{Action, FnAction, Pipe};
//! use serde_json::{json, Value};
//!
//! #[tokio::main]
//! async fn main() {
//!     let pipe = Pipe::new(vec![
//!         FnAction::shared("seed", |_: &[Value]| Ok(Some(json!(21)))),
//!         FnAction::shared("double", |args: &[Value]| {
//!             Ok(Some(json!(args[0].as_i64().unwrap_or(0) * 2)))
//!         }),
//!     ]);
//!     let out = pipe.run(&[]).await.unwrap();
//!     assert_eq!(out, Some(json!(42)));
//! }
//! ```
//!
//! Argument arity and types between composed actions are a runtime
//! convention, not a compile-time contract; this layer is not a durable
//! workflow engine and does no retry, persistence, or DAG resolution.

pub mod action;
pub mod cancel;
pub mod composite;
pub mod error;
pub mod lifecycle;

pub use crate::action::{Action, ActionRef, ArgList, AsyncFnAction, FnAction};
pub use crate::cancel::CancelSignal;
pub use crate::composite::{Parallel, Pipe, Sequence};
pub use crate::error::{ActionError, ActionResult, AggregateError};
pub use crate::lifecycle::{HookContext, HookPoint};
