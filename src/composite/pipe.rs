use async_trait::async_trait;
use serde_json::Value;

use crate::action::{Action, ActionRef};
use crate::error::{ActionError, ActionResult};

/// Runs its children in declared order, feeding each child's output into the
/// next child's argument list.
///
/// The caller's arguments seed an accumulator. Each child is invoked with the
/// accumulator expanded: a multi-value accumulator becomes multiple
/// arguments, a single value one argument, an empty accumulator none. On
/// success the child's output becomes the new accumulator — an array fans
/// out into a multi-value accumulator (multi-argument handoff to the next
/// stage), any other value stands alone, and an absent result empties it.
/// Whether an array means "several arguments" or "one array value" is a
/// convention between adjacent stages, not a contract enforced here.
///
/// The first failing child halts the pipe: remaining children are never
/// invoked, and the returned [`ActionError::Halted`] carries the accumulator
/// that was fed to the failing stage while displaying exactly that stage's
/// own error.
pub struct Pipe {
    children: Vec<ActionRef>,
}

impl Pipe {
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

fn expand(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        other => vec![other],
    }
}

fn collapse(mut accumulator: Vec<Value>) -> Option<Value> {
    match accumulator.len() {
        0 => None,
        1 => Some(accumulator.remove(0)),
        _ => Some(Value::Array(accumulator)),
    }
}

#[async_trait]
impl Action for Pipe {
    async fn run(&self, args: &[Value]) -> ActionResult<Option<Value>> {
        let mut accumulator: Vec<Value> = args.to_vec();
        for (stage, child) in self.children.iter().enumerate() {
            match child.run(&accumulator).await {
                Ok(Some(value)) => accumulator = expand(value),
                Ok(None) => accumulator.clear(),
                Err(err) => {
                    return Err(ActionError::Halted {
                        stage,
                        accumulator,
                        source: Box::new(err),
                    })
                }
            }
        }
        Ok(collapse(accumulator))
    }

    fn name(&self) -> &str {
        "pipe"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::FnAction;
    use serde_json::json;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_pipe_feeds_output_to_next_stage() {
        let pipe = Pipe::new(vec![
            FnAction::shared("cube", |_: &[Value]| Ok(Some(json!(27)))),
            FnAction::shared("pair", |args: &[Value]| {
                let n = args[0].as_i64().unwrap_or(0);
                Ok(Some(json!([n, n * n * n])))
            }),
        ]);
        let out = pipe.run(&[]).await.unwrap();
        assert_eq!(out, Some(json!([27, 729])));
    }

    #[tokio::test]
    async fn test_pipe_expands_array_into_multiple_arguments() {
        let pipe = Pipe::new(vec![
            FnAction::shared("split", |_: &[Value]| Ok(Some(json!([2, 3])))),
            FnAction::shared("add", |args: &[Value]| {
                assert_eq!(args.len(), 2);
                Ok(Some(json!(
                    args[0].as_i64().unwrap_or(0) + args[1].as_i64().unwrap_or(0)
                )))
            }),
        ]);
        let out = pipe.run(&[]).await.unwrap();
        assert_eq!(out, Some(json!(5)));
    }

    #[tokio::test]
    async fn test_pipe_halts_on_first_error() {
        let reached = Arc::new(AtomicBool::new(false));
        let reached_probe = Arc::clone(&reached);
        let pipe = Pipe::new(vec![
            FnAction::shared("ok", |_: &[Value]| Ok(Some(json!(1)))),
            FnAction::shared("boom", |_: &[Value]| Err(ActionError::failed("stage down"))),
            FnAction::shared("unreached", move |_: &[Value]| {
                reached_probe.store(true, Ordering::SeqCst);
                Ok(None)
            }),
        ]);
        let err = pipe.run(&[]).await.unwrap_err();
        assert!(!reached.load(Ordering::SeqCst), "third stage must not run");
        assert_eq!(err.to_string(), "stage down");
        let ActionError::Halted {
            stage, accumulator, ..
        } = err
        else {
            panic!("expected halted error");
        };
        assert_eq!(stage, 1);
        assert_eq!(accumulator, vec![json!(1)]);
    }

    #[tokio::test]
    async fn test_pipe_seeds_accumulator_from_caller_args() {
        let pipe = Pipe::new(vec![FnAction::shared("sum", |args: &[Value]| {
            let total: i64 = args.iter().filter_map(Value::as_i64).sum();
            Ok(Some(json!(total)))
        })]);
        let out = pipe.run(&[json!(1), json!(2), json!(3)]).await.unwrap();
        assert_eq!(out, Some(json!(6)));
    }

    #[tokio::test]
    async fn test_pipe_absent_result_empties_accumulator() {
        let pipe = Pipe::new(vec![
            FnAction::shared("drop", |_: &[Value]| Ok(None)),
            FnAction::shared("count", |args: &[Value]| Ok(Some(json!(args.len())))),
        ]);
        let out = pipe.run(&[json!("seed")]).await.unwrap();
        assert_eq!(out, Some(json!(0)));
    }

    #[tokio::test]
    async fn test_empty_pipe_collapses_caller_args() {
        let pipe = Pipe::new(vec![]);
        assert!(pipe.is_empty());
        assert_eq!(pipe.run(&[]).await.unwrap(), None);
        assert_eq!(pipe.run(&[json!(7)]).await.unwrap(), Some(json!(7)));
        assert_eq!(
            pipe.run(&[json!(1), json!(2)]).await.unwrap(),
            Some(json!([1, 2]))
        );
    }
}
