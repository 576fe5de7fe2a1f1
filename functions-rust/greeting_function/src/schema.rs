//! Input/output parameter schemas and the validation boundary that runs
//! before a function is invoked.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email regex"));

static USER_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[UW][A-Z0-9]+$").expect("user id regex"));

/// Declared type of a single parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterType {
    #[serde(rename = "string")]
    String,
    /// A workspace user id. Values must be `U` or `W` followed by uppercase
    /// letters and digits; anything else is rejected before the function
    /// runs, so the rendered mention always points at a user.
    #[serde(rename = "slack#/types/user_id")]
    UserId,
}

impl ParameterType {
    pub fn name(self) -> &'static str {
        match self {
            ParameterType::String => "string",
            ParameterType::UserId => "slack#/types/user_id",
        }
    }
}

/// Format constraint that may be attached to a `string` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StringFormat {
    Email,
    Url,
}

impl StringFormat {
    pub fn name(self) -> &'static str {
        match self {
            StringFormat::Email => "email",
            StringFormat::Url => "url",
        }
    }

    pub fn matches(self, value: &str) -> bool {
        match self {
            StringFormat::Email => EMAIL_RE.is_match(value),
            StringFormat::Url => url::Url::parse(value)
                .map(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDefinition {
    #[serde(rename = "type")]
    pub kind: ParameterType,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<StringFormat>,
}

impl ParameterDefinition {
    pub fn new(kind: ParameterType, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            format: None,
        }
    }

    pub fn with_format(mut self, format: StringFormat) -> Self {
        self.format = Some(format);
        self
    }
}

/// A set of named parameters plus the names that must be supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParametersSchema {
    pub properties: BTreeMap<String, ParameterDefinition>,
    #[serde(default)]
    pub required: Vec<String>,
}

/// Problems with a schema itself, found while loading a manifest.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("required parameter `{0}` is not declared in properties")]
    UndeclaredRequired(String),
    #[error("parameter `{name}` has format `{format}` but type `{kind}`; formats apply to strings only")]
    FormatOnNonString {
        name: String,
        format: &'static str,
        kind: &'static str,
    },
}

/// A value rejected at the validation boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("parameters must be a JSON object")]
    NotAnObject,
    #[error("missing required parameter `{0}`")]
    MissingRequired(String),
    #[error("parameter `{name}` must be of type `{expected}`")]
    WrongType { name: String, expected: &'static str },
    #[error("parameter `{name}` is not a valid {format}: {value:?}")]
    InvalidFormat {
        name: String,
        format: &'static str,
        value: String,
    },
    #[error("parameter `{name}` is not a valid user id: {value:?}")]
    InvalidUserId { name: String, value: String },
}

impl ParametersSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(mut self, name: impl Into<String>, def: ParameterDefinition) -> Self {
        self.properties.insert(name.into(), def);
        self
    }

    pub fn require(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    /// Check the schema is internally consistent.
    pub fn check_definition(&self) -> Result<(), SchemaError> {
        if let Some(missing) = self
            .required
            .iter()
            .find(|name| !self.properties.contains_key(name.as_str()))
        {
            return Err(SchemaError::UndeclaredRequired(missing.clone()));
        }
        for (name, def) in &self.properties {
            if let Some(format) = def.format {
                if def.kind != ParameterType::String {
                    return Err(SchemaError::FormatOnNonString {
                        name: name.clone(),
                        format: format.name(),
                        kind: def.kind.name(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Validate a JSON object of parameter values against this schema.
    ///
    /// Keys that are not declared are ignored.
    pub fn validate(&self, values: &Value) -> Result<(), ValidationError> {
        let object = values.as_object().ok_or(ValidationError::NotAnObject)?;

        for name in &self.required {
            match object.get(name) {
                None | Some(Value::Null) => {
                    return Err(ValidationError::MissingRequired(name.clone()));
                }
                Some(Value::String(s)) if s.is_empty() => {
                    return Err(ValidationError::MissingRequired(name.clone()));
                }
                _ => {}
            }
        }

        for (name, def) in &self.properties {
            let value = match object.get(name) {
                None | Some(Value::Null) => continue,
                Some(v) => v,
            };
            let text = value.as_str().ok_or_else(|| ValidationError::WrongType {
                name: name.clone(),
                expected: def.kind.name(),
            })?;

            if def.kind == ParameterType::UserId && !USER_ID_RE.is_match(text) {
                return Err(ValidationError::InvalidUserId {
                    name: name.clone(),
                    value: text.to_owned(),
                });
            }
            if let Some(format) = def.format {
                if !format.matches(text) {
                    return Err(ValidationError::InvalidFormat {
                        name: name.clone(),
                        format: format.name(),
                        value: text.to_owned(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> ParametersSchema {
        ParametersSchema::new()
            .property(
                "recipient",
                ParameterDefinition::new(ParameterType::UserId, "who"),
            )
            .property(
                "message",
                ParameterDefinition::new(ParameterType::String, "what"),
            )
            .property(
                "contact",
                ParameterDefinition::new(ParameterType::String, "where")
                    .with_format(StringFormat::Email),
            )
            .require("message")
    }

    #[test]
    fn accepts_valid_values() {
        let values = json!({"recipient": "U123", "message": "hi", "contact": "a@b.com"});
        assert_eq!(schema().validate(&values), Ok(()));
    }

    #[test]
    fn optional_values_may_be_absent_or_null() {
        assert_eq!(schema().validate(&json!({"message": "hi"})), Ok(()));
        assert_eq!(
            schema().validate(&json!({"message": "hi", "contact": null})),
            Ok(())
        );
    }

    #[test]
    fn missing_required_is_rejected() {
        assert_eq!(
            schema().validate(&json!({"recipient": "U123"})),
            Err(ValidationError::MissingRequired("message".into()))
        );
        assert_eq!(
            schema().validate(&json!({"message": ""})),
            Err(ValidationError::MissingRequired("message".into()))
        );
    }

    #[test]
    fn bad_email_is_rejected() {
        let err = schema()
            .validate(&json!({"message": "hi", "contact": "not-an-email"}))
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { format: "email", .. }));
    }

    #[test]
    fn non_string_is_rejected() {
        let err = schema().validate(&json!({"message": 42})).unwrap_err();
        assert_eq!(
            err,
            ValidationError::WrongType {
                name: "message".into(),
                expected: "string"
            }
        );
    }

    #[test]
    fn user_id_shape_is_checked() {
        let err = schema()
            .validate(&json!({"message": "hi", "recipient": "bob"}))
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidUserId { .. }));
        assert!(schema()
            .validate(&json!({"message": "hi", "recipient": "W0ABC12"}))
            .is_ok());
    }

    #[test]
    fn non_object_is_rejected() {
        assert_eq!(
            schema().validate(&json!(["hi"])),
            Err(ValidationError::NotAnObject)
        );
    }

    #[test]
    fn formats() {
        assert!(StringFormat::Email.matches("first.last@example.co.uk"));
        assert!(!StringFormat::Email.matches("a@b"));
        assert!(!StringFormat::Email.matches("a b@c.com"));
        assert!(StringFormat::Url.matches("https://example.com/path"));
        assert!(!StringFormat::Url.matches("example.com"));
        assert!(!StringFormat::Url.matches("ftp://example.com"));
    }

    #[test]
    fn definition_checks() {
        assert_eq!(schema().check_definition(), Ok(()));

        let undeclared = schema().require("nope");
        assert_eq!(
            undeclared.check_definition(),
            Err(SchemaError::UndeclaredRequired("nope".into()))
        );

        let bad = ParametersSchema::new().property(
            "who",
            ParameterDefinition::new(ParameterType::UserId, "who").with_format(StringFormat::Url),
        );
        assert!(matches!(
            bad.check_definition(),
            Err(SchemaError::FormatOnNonString { .. })
        ));
    }

    #[test]
    fn unknown_format_fails_to_parse() {
        let raw = r#"{"type": "string", "description": "x", "format": "banana"}"#;
        assert!(serde_json::from_str::<ParameterDefinition>(raw).is_err());
    }
}
