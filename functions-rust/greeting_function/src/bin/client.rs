//! Client that starts `greeting_workflow` and prints the greeting.
//!
//! Usage: `client <recipient> <message> [string_with_format]`

use anyhow::{anyhow, bail};
use env_logger::Env;
use greeting_function::{TASK_QUEUE, WORKFLOW_TYPE};
use helpers::get_client;
use log::info;
use serde_json::json;
use temporal_client::{WfClientExt, WorkflowClientTrait, WorkflowOptions};
use temporal_sdk_core_protos::coresdk::{AsJsonPayloadExt, FromJsonPayloadExt};
use temporal_sdk_core_protos::temporal::api::common::v1::Payload;
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Recipient and message are required; the formatted string is optional.
    let mut args = std::env::args().skip(1);
    let (Some(recipient), Some(message)) = (args.next(), args.next()) else {
        bail!("usage: client <recipient> <message> [string_with_format]");
    };
    let mut inputs = json!({ "recipient": recipient, "message": message });
    if let Some(formatted) = args.next() {
        inputs["string_with_format"] = json!(formatted);
    }

    // Connect to the Temporal server via helper.
    let client = get_client().await?;

    let workflow_id = format!("greeting-{}", Uuid::new_v4());
    info!("Starting {WORKFLOW_TYPE} id={workflow_id} inputs={inputs}");

    // Start the workflow and keep the run id for fetching the result.
    let start_res = client
        .start_workflow(
            vec![inputs.as_json_payload()?],
            TASK_QUEUE.to_string(),
            workflow_id.clone(),
            WORKFLOW_TYPE.to_string(),
            None,
            WorkflowOptions::default(),
        )
        .await?;

    let handle = client.get_untyped_workflow_handle(workflow_id, start_res.run_id);

    // Await workflow completion and extract the single string payload.
    let payloads: Vec<Payload> = handle
        .get_workflow_result(Default::default())
        .await?
        .unwrap_success();

    let first = payloads
        .first()
        .ok_or_else(|| anyhow!("missing result payload"))?;
    let greeting = String::from_json_payload(first)?;
    println!("{greeting}");

    Ok(())
}
