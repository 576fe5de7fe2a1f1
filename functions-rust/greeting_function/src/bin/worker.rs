//! Worker that hosts `greeting_function` and its one-step workflow.

use std::sync::Arc;

use env_logger::Env;
use greeting_function::activities::greeting_function;
use greeting_function::definition::{CALLBACK_ID, greeting_function_definition};
use greeting_function::workflow::greeting_workflow;
use greeting_function::{TASK_QUEUE, WORKFLOW_TYPE};
use helpers::{ConnectionSettings, connect};
use log::info;
use temporal_sdk::Worker;
use temporal_sdk_core::{CoreRuntime, init_worker};
use temporal_sdk_core_api::{
    telemetry::TelemetryOptionsBuilder,
    worker::{WorkerConfigBuilder, WorkerVersioningStrategy},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize env_logger; RUST_LOG overrides the `info` default.
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Refuse to start with an inconsistent contract.
    greeting_function_definition().check()?;

    let settings = ConnectionSettings::from_env();
    info!(
        "Starting greeting_function worker (namespace={}, task_queue={TASK_QUEUE})",
        settings.namespace
    );

    // Create an SDK client to communicate with the Temporal server.
    let client = connect(&settings).await?;

    // Set up telemetry and runtime for the core worker.
    let telemetry_options = TelemetryOptionsBuilder::default().build()?;
    let runtime = CoreRuntime::new_assume_tokio(telemetry_options)?;

    // Configure worker: namespace from the environment, fixed task queue.
    let worker_config = WorkerConfigBuilder::default()
        .namespace(settings.namespace.clone())
        .task_queue(TASK_QUEUE)
        .versioning_strategy(WorkerVersioningStrategy::None {
            build_id: "rust-sdk".to_owned(),
        })
        .build()?;

    // Initialize core worker and wrap it with the high-level Worker API.
    let core_worker = init_worker(&runtime, worker_config, client)?;
    let mut worker = Worker::new_from_core(Arc::new(core_worker), TASK_QUEUE);

    // Register the function as an activity, plus the workflow that calls it.
    worker.register_activity(CALLBACK_ID, greeting_function);
    worker.register_wf(WORKFLOW_TYPE, greeting_workflow);

    // Run the worker. This blocks until shutdown.
    worker.run().await?;

    Ok(())
}
