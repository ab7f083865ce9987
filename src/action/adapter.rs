//! Adapters that lift plain functions into the [`Action`] capability.

use async_trait::async_trait;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::{Action, ActionRef};
use crate::error::ActionResult;

/// Lifts a plain function or closure into an [`Action`], so ordinary code can
/// participate in composition without defining a new type.
pub struct FnAction<F> {
    name: String,
    func: F,
}

impl<F> FnAction<F>
where
    F: Fn(&[Value]) -> ActionResult<Option<Value>> + Send + Sync + 'static,
{
    pub fn new(func: F) -> Self {
        Self::named("fn", func)
    }

    pub fn named(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }

    /// Lift directly into a shared [`ActionRef`].
    pub fn shared(name: impl Into<String>, func: F) -> ActionRef {
        Arc::new(Self::named(name, func))
    }
}

#[async_trait]
impl<F> Action for FnAction<F>
where
    F: Fn(&[Value]) -> ActionResult<Option<Value>> + Send + Sync + 'static,
{
    async fn run(&self, args: &[Value]) -> ActionResult<Option<Value>> {
        (self.func)(args)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

type ActionFuture = Pin<Box<dyn Future<Output = ActionResult<Option<Value>>> + Send>>;

/// Lifts an async function into an [`Action`], for I/O-bound collaborators
/// such as provisioning backends or metadata stores.
pub struct AsyncFnAction {
    name: String,
    func: Box<dyn Fn(Vec<Value>) -> ActionFuture + Send + Sync>,
}

impl AsyncFnAction {
    pub fn named<F, Fut>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(Vec<Value>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ActionResult<Option<Value>>> + Send + 'static,
    {
        Self {
            name: name.into(),
            func: Box::new(move |args| Box::pin(func(args))),
        }
    }

    /// Lift directly into a shared [`ActionRef`].
    pub fn shared<F, Fut>(name: impl Into<String>, func: F) -> ActionRef
    where
        F: Fn(Vec<Value>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ActionResult<Option<Value>>> + Send + 'static,
    {
        Arc::new(Self::named(name, func))
    }
}

#[async_trait]
impl Action for AsyncFnAction {
    async fn run(&self, args: &[Value]) -> ActionResult<Option<Value>> {
        (self.func)(args.to_vec()).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}
