//! `greeting_function` crate.
//!
//! A single automation function that turns a recipient, a message and an
//! email-formatted string into a greeting. The function is described by a
//! declarative [`definition::FunctionDefinition`], its inputs are checked by
//! [`schema::ParametersSchema::validate`] before [`generator`] runs, and a
//! Temporal worker hosts it as an activity.

pub mod activities;
pub mod definition;
pub mod function;
pub mod generator;
pub mod schema;
pub mod workflow;

/// Task queue the worker polls and the client targets.
pub const TASK_QUEUE: &str = "greeting-function";

/// Workflow type name registered by the worker.
pub const WORKFLOW_TYPE: &str = "greeting_workflow";
