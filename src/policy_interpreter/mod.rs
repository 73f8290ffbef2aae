//! Policy interpreter module for parsing JSON policy definitions into cores.

mod interpreter;
mod types;
mod validator;

pub use interpreter::PolicyInterpreter;
pub use types::{JsonPermissionEntry, JsonPermissionRule, JsonPolicyDefinition};

use crate::error::AccessError;

/// Result type for policy interpretation operations
pub type Result<T> = std::result::Result<T, AccessError>;
