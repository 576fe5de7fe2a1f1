//! Runs the greeting function behind the schema validation boundary.

use log::debug;
use serde_json::Value;
use thiserror::Error;

use crate::definition::GREETING_FUNCTION;
use crate::generator::{GreetingInputs, GreetingOutputs, generate_greeting};
use crate::schema::ValidationError;

#[derive(Debug, Error)]
pub enum FunctionError {
    #[error("parameter_validation: {0}")]
    ParameterValidation(#[from] ValidationError),
    #[error("payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Validate `inputs` against the input schema, generate the greeting and
/// check it against the output schema.
pub fn run_greeting_function(inputs: Value) -> Result<GreetingOutputs, FunctionError> {
    let definition = &*GREETING_FUNCTION;
    definition.input_parameters.validate(&inputs)?;

    let inputs: GreetingInputs = serde_json::from_value(inputs)?;
    debug!("Generating greeting for recipient={}", inputs.recipient);
    let outputs = generate_greeting(&inputs);

    definition
        .output_parameters
        .validate(&serde_json::to_value(&outputs)?)?;
    Ok(outputs)
}
