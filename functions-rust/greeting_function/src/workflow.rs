//! One-step workflow that runs `greeting_function` and returns its greeting.
use std::time::Duration;

use anyhow::anyhow;
use helpers::parse_activity_result;
use log::info;
use serde_json::Value;
use temporal_sdk::{ActivityOptions, WfContext, WfExitValue, WorkflowResult};
use temporal_sdk_core_protos::coresdk::{
    AsJsonPayloadExt, FromJsonPayloadExt, workflow_commands::ActivityCancellationType,
};

use crate::definition::CALLBACK_ID;
use crate::generator::GreetingOutputs;

/// Workflow: takes the function inputs as a JSON object and returns the greeting.
pub async fn greeting_workflow(ctx: WfContext) -> WorkflowResult<String> {
    let inputs: Value = ctx
        .get_args()
        .first()
        .map(Value::from_json_payload)
        .transpose()? // Option<Result<T>> -> Result<Option<T>>
        .ok_or_else(|| anyhow!("greeting_workflow expects the function inputs as its argument"))?;

    let act_handle = ctx
        .activity(ActivityOptions {
            activity_type: CALLBACK_ID.to_string(),
            input: inputs.as_json_payload()?,
            start_to_close_timeout: Some(Duration::from_secs(10)),
            cancellation_type: ActivityCancellationType::TryCancel,
            ..Default::default()
        })
        .await;

    let outputs: GreetingOutputs = parse_activity_result(&act_handle)?;
    info!("Workflow got greeting from {CALLBACK_ID}");

    Ok(WfExitValue::Normal(outputs.greeting))
}
