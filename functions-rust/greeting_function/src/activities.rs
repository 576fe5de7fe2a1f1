//! Temporal activity that hosts the greeting function.
use log::{info, warn};
use serde_json::Value;
use temporal_sdk::{ActContext, ActivityError};

use crate::function::{FunctionError, run_greeting_function};
use crate::generator::GreetingOutputs;

/// Activity registered under [`crate::definition::CALLBACK_ID`].
pub async fn greeting_function(
    _ctx: ActContext,
    inputs: Value,
) -> Result<GreetingOutputs, ActivityError> {
    let outputs = run_greeting_function(inputs).map_err(rejection)?;
    info!("Generated greeting: {:?}", outputs.greeting);
    Ok(outputs)
}

/// Map a rejected invocation to an activity error.
///
/// Rejections are not retried; a retry would see the same payload.
pub fn rejection(err: FunctionError) -> ActivityError {
    warn!("Rejected greeting_function inputs: {err}");
    ActivityError::NonRetryable(err.into())
}
