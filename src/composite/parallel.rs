use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::action::{Action, ActionRef};
use crate::cancel::CancelSignal;
use crate::error::{ActionError, ActionResult, AggregateError};

/// Runs its children concurrently against identical input.
///
/// One worker is spawned per child, each invoked with a shared read-only
/// snapshot of the arguments and each sending its outcome into a channel
/// sized to the child count, so no sender ever blocks. The calling task
/// drains exactly one outcome per worker; results and error messages collect
/// in arrival order, which varies run to run. The channel is the only shared
/// mutable point.
///
/// There is no timeout: without an attached [`CancelSignal`] a hung child
/// blocks the caller indefinitely. A worker that panics is reported in the
/// aggregate instead of hanging the drain loop.
pub struct Parallel {
    children: Vec<ActionRef>,
    cancel: Option<CancelSignal>,
}

impl Parallel {
    pub fn new(children: Vec<ActionRef>) -> Self {
        Self {
            children,
            cancel: None,
        }
    }

    /// Attach a cancellation signal raced against every worker. A cancelled
    /// worker still sends an outcome, so the drain never comes up short.
    pub fn with_cancel(mut self, cancel: CancelSignal) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

#[async_trait]
impl Action for Parallel {
    async fn run(&self, args: &[Value]) -> ActionResult<Option<Value>> {
        let count = self.children.len();
        if count == 0 {
            return Ok(Some(Value::Array(Vec::new())));
        }

        let shared: Arc<[Value]> = args.to_vec().into();
        let (tx, mut rx) = mpsc::channel(count);
        for child in &self.children {
            let child = Arc::clone(child);
            let shared = Arc::clone(&shared);
            let cancel = self.cancel.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let outcome = match cancel {
                    Some(signal) => tokio::select! {
                        outcome = child.run(&shared) => outcome,
                        _ = signal.cancelled() => {
                            Err(ActionError::Cancelled(child.name().to_string()))
                        }
                    },
                    None => child.run(&shared).await,
                };
                // Capacity equals the worker count, so the send cannot block.
                let _ = tx.send(outcome).await;
            });
        }
        drop(tx);

        let mut results = Vec::new();
        let mut messages = Vec::new();
        for _ in 0..count {
            match rx.recv().await {
                Some(Ok(Some(value))) => results.push(value),
                Some(Ok(None)) => {}
                Some(Err(err)) => {
                    tracing::debug!(error = %err, "parallel worker failed");
                    messages.push(err.to_string());
                }
                // The channel only closes once every sender is gone, so a
                // missing outcome means a worker panicked before sending.
                None => messages.push(
                    ActionError::Panicked("worker exited without an outcome".into()).to_string(),
                ),
            }
        }

        if messages.is_empty() {
            Ok(Some(Value::Array(results)))
        } else {
            Err(ActionError::Aggregate(AggregateError::new(messages, results)))
        }
    }

    fn name(&self) -> &str {
        "parallel"
    }
}
