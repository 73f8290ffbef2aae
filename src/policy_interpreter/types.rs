use serde::{Deserialize, Serialize};

/// Represents a complete JSON policy definition
///
/// Permissions are an ordered array so the resulting permission set keeps
/// the document's entry order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonPolicyDefinition {
    pub name: String,
    pub permissions: Vec<JsonPermissionEntry>,
}

/// One `action -> rule` entry of a policy definition
///
/// The reserved action name `__default__` registers the fallback rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonPermissionEntry {
    pub action: String,
    pub rule: JsonPermissionRule,
}

/// JSON representation of a permission rule
///
/// Custom closure permissions have no JSON form; they can only be attached
/// in code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JsonPermissionRule {
    AllowAny,
    IsAuthenticated,
    IsSuperuser,
    IsAdminUser,
    CoreAllowed {
        #[serde(default)]
        action: Option<String>,
    },
    SelfReference {
        action: String,
    },
    All {
        rules: Vec<JsonPermissionRule>,
    },
    Any {
        rules: Vec<JsonPermissionRule>,
    },
    Not {
        rule: Box<JsonPermissionRule>,
    },
}
