// Re-export types needed for testing
pub use crate::cores::Core;
pub use crate::error::{AccessError, AccessResult};
pub use crate::permissions::field_permissions::FieldsPermission;
pub use crate::permissions::permission_set::{PermissionsSet, DEFAULT_PERMISSION};
pub use crate::permissions::predicate::{
    Permission, ACTION_CREATE, ACTION_DELETE, ACTION_READ, ACTION_UPDATE,
};
pub use crate::permissions::types::{AccessTarget, RequestIdentity, Subject};
pub use crate::permissions::ACTION_EDIT;
pub use crate::policy_interpreter::{
    JsonPermissionEntry, JsonPermissionRule, JsonPolicyDefinition, PolicyInterpreter,
};

use serde_json::Value;

pub fn create_test_core(name: &str) -> Core {
    Core::new(name)
}

pub fn create_test_value(value: &str) -> Value {
    serde_json::from_str(value).unwrap()
}
