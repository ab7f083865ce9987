use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Errors raised by a single action or aggregated from a composite.
#[derive(Debug, Error)]
pub enum ActionError {
    /// A leaf action failed.
    #[error("{0}")]
    Failed(String),
    /// A leaf action received arguments of an unexpected shape or type.
    /// Arity and typing are a caller/callee convention, so this surfaces at
    /// run time inside the leaf body rather than at composition time.
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    /// One or more children of a sequence or parallel composite failed.
    #[error("{0}")]
    Aggregate(AggregateError),
    /// A pipe stage failed. Carries the accumulator that was fed to the
    /// failing stage; the display text is exactly the stage's own error.
    #[error("{source}")]
    Halted {
        stage: usize,
        accumulator: Vec<Value>,
        #[source]
        source: Box<ActionError>,
    },
    /// A parallel worker was cancelled before its child completed.
    #[error("action cancelled: {0}")]
    Cancelled(String),
    /// A parallel worker panicked before reporting an outcome.
    #[error("worker panicked: {0}")]
    Panicked(String),
}

impl ActionError {
    pub fn failed(message: impl Into<String>) -> Self {
        ActionError::Failed(message.into())
    }

    pub fn invalid_args(message: impl Into<String>) -> Self {
        ActionError::InvalidArgs(message.into())
    }
}

/// Child failures combined by a sequence or parallel composite.
///
/// `messages` holds every failing child's error text in append order
/// (declaration order for sequences, arrival order for parallels);
/// `partial` holds the results the surviving children produced alongside.
#[derive(Debug, Default)]
pub struct AggregateError {
    pub messages: Vec<String>,
    pub partial: Vec<Value>,
}

impl AggregateError {
    pub fn new(messages: Vec<String>, partial: Vec<Value>) -> Self {
        Self { messages, partial }
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages.join("; "))
    }
}
