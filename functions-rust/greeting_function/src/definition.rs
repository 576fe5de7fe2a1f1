//! Declarative definition of the greeting function: its routing id and the
//! input/output contract the host validates against.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schema::{
    ParameterDefinition, ParameterType, ParametersSchema, SchemaError, StringFormat,
};

/// Stable id the host routes invocations by.
pub const CALLBACK_ID: &str = "greeting_function";

/// The greeting function definition, built once per process.
pub static GREETING_FUNCTION: Lazy<FunctionDefinition> = Lazy::new(greeting_function_definition);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub callback_id: String,
    pub title: String,
    pub description: String,
    pub source_file: String,
    pub input_parameters: ParametersSchema,
    pub output_parameters: ParametersSchema,
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("malformed function manifest: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid input parameters: {0}")]
    Inputs(SchemaError),
    #[error("invalid output parameters: {0}")]
    Outputs(SchemaError),
}

impl FunctionDefinition {
    /// Parse a manifest entry and check both schemas.
    pub fn from_manifest_json(raw: &str) -> Result<Self, ManifestError> {
        let def: FunctionDefinition = serde_json::from_str(raw)?;
        def.check()?;
        Ok(def)
    }

    pub fn to_manifest_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn check(&self) -> Result<(), ManifestError> {
        self.input_parameters
            .check_definition()
            .map_err(ManifestError::Inputs)?;
        self.output_parameters
            .check_definition()
            .map_err(ManifestError::Outputs)?;
        Ok(())
    }
}

/// Definition of `greeting_function`.
///
/// `recipient` is required alongside `message` because the greeting always
/// renders a mention for it.
pub fn greeting_function_definition() -> FunctionDefinition {
    FunctionDefinition {
        callback_id: CALLBACK_ID.to_owned(),
        title: "Generate a greeting".to_owned(),
        description: "Generate a greeting".to_owned(),
        source_file: "greeting_function/src/generator.rs".to_owned(),
        input_parameters: ParametersSchema::new()
            .property(
                "recipient",
                ParameterDefinition::new(ParameterType::UserId, "Greeting recipient"),
            )
            .property(
                "message",
                ParameterDefinition::new(ParameterType::String, "Message to the recipient"),
            )
            .property(
                "string_with_format",
                ParameterDefinition::new(ParameterType::String, "testing out the format property")
                    .with_format(StringFormat::Email),
            )
            .require("message")
            .require("recipient"),
        output_parameters: ParametersSchema::new()
            .property(
                "greeting",
                ParameterDefinition::new(ParameterType::String, "Greeting for the recipient"),
            )
            .require("greeting"),
    }
}
