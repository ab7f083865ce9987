use actionflow::{
    Action, ActionError, AsyncFnAction, FnAction, HookContext, HookPoint, Parallel, Pipe, Sequence,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== actionflow demo: provisioning with composed hooks ===\n");

    let ctx = HookContext::new();

    // Before the cluster comes up, run preflight checks concurrently.
    let preflight = Parallel::new(vec![
        check("quota"),
        check("network"),
        check("credentials"),
    ]);
    ctx.arm(HookPoint::Before, Arc::new(preflight));

    // After it comes up, tag it and announce it, in order.
    let announce = Sequence::new(vec![
        FnAction::shared("tag", |args: &[Value]| {
            println!("  tagging {}", args[0]);
            Ok(Some(json!("tagged")))
        }),
        FnAction::shared("announce", |args: &[Value]| {
            println!("  announcing {}", args[0]);
            Ok(Some(json!("announced")))
        }),
    ]);
    ctx.arm(HookPoint::After, Arc::new(announce));

    // The provisioning work itself: pick a name, then render a manifest from it.
    let provision = Pipe::new(vec![
        FnAction::shared("pick-name", |_: &[Value]| Ok(Some(json!("walrus-7")))),
        AsyncFnAction::shared("render-manifest", render_manifest),
    ]);

    let outcome: Result<Option<Value>, ActionError> = ctx
        .surround(vec![json!("cluster/walrus-7")], || provision.run(&[]))
        .await;

    match outcome {
        Ok(manifest) => println!("\nprovisioned: {}", manifest.unwrap_or(Value::Null)),
        Err(err) => eprintln!("\nprovisioning failed: {err}"),
    }
}

fn check(what: &str) -> actionflow::ActionRef {
    let what = what.to_string();
    FnAction::shared(what.clone(), move |_: &[Value]| {
        println!("  preflight: {what} ok");
        Ok(Some(json!(format!("{what}-ok"))))
    })
}

async fn render_manifest(args: Vec<Value>) -> Result<Option<Value>, ActionError> {
    tokio::time::sleep(Duration::from_millis(50)).await;
    let name = args
        .first()
        .and_then(Value::as_str)
        .ok_or_else(|| ActionError::invalid_args("expected a cluster name"))?;
    Ok(Some(json!({ "cluster": name, "nodes": 3 })))
}
