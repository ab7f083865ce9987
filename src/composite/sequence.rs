use async_trait::async_trait;
use serde_json::Value;

use crate::action::{Action, ActionRef};
use crate::error::{ActionError, ActionResult, AggregateError};

/// Runs its children in declared order against identical input, on the
/// calling task.
///
/// Every child always runs, regardless of earlier failures. Present results
/// collect in declaration order and the success value is always an array of
/// them. If any child fails, the run fails with an [`ActionError::Aggregate`]
/// combining every child's error message in declaration order; the results
/// the surviving children produced are preserved alongside the messages.
pub struct Sequence {
    children: Vec<ActionRef>,
}

impl Sequence {
    pub fn new(children: Vec<ActionRef>) -> Self {
        Self { children }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

#[async_trait]
impl Action for Sequence {
    async fn run(&self, args: &[Value]) -> ActionResult<Option<Value>> {
        let mut results = Vec::new();
        let mut messages = Vec::new();
        for child in &self.children {
            match child.run(args).await {
                Ok(Some(value)) => results.push(value),
                Ok(None) => {}
                Err(err) => messages.push(err.to_string()),
            }
        }
        if messages.is_empty() {
            Ok(Some(Value::Array(results)))
        } else {
            Err(ActionError::Aggregate(AggregateError::new(messages, results)))
        }
    }

    fn name(&self) -> &str {
        "sequence"
    }
}
