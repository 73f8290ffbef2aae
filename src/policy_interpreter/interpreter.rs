use crate::cores::Core;
use crate::error::AccessError;
use crate::permissions::predicate::Permission;
use crate::policy_interpreter::types::{JsonPermissionRule, JsonPolicyDefinition};
use crate::policy_interpreter::validator::PolicyValidator;

/// Interprets JSON policy definitions and converts them to cores.
#[derive(Default)]
pub struct PolicyInterpreter;

impl PolicyInterpreter {
    /// Creates a new policy interpreter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Interprets a JSON policy definition and converts it to a [`Core`].
    ///
    /// # Errors
    /// Returns an `AccessError::InvalidPolicy` if:
    /// - The policy validation fails
    /// - Action names are empty or duplicated
    /// - A self-reference points at an unknown action
    pub fn interpret(
        &self,
        policy: JsonPolicyDefinition,
    ) -> crate::policy_interpreter::Result<Core> {
        // First validate the JSON policy
        PolicyValidator::validate(&policy)?;

        let mut core = Core::new(policy.name);
        for entry in policy.permissions {
            core.set_permission(entry.action, Self::convert_rule(entry.rule));
        }

        Ok(core)
    }

    /// Converts a JSON permission rule to a [`Permission`].
    fn convert_rule(rule: JsonPermissionRule) -> Permission {
        match rule {
            JsonPermissionRule::AllowAny => Permission::AllowAny,
            JsonPermissionRule::IsAuthenticated => Permission::IsAuthenticated,
            JsonPermissionRule::IsSuperuser => Permission::IsSuperuser,
            JsonPermissionRule::IsAdminUser => Permission::IsAdminUser,
            JsonPermissionRule::CoreAllowed { action } => match action {
                Some(action) => Permission::core_action_allowed(action),
                None => Permission::core_allowed(),
            },
            JsonPermissionRule::SelfReference { action } => Permission::self_reference(action),
            JsonPermissionRule::All { rules } => {
                Permission::and(rules.into_iter().map(Self::convert_rule))
            }
            JsonPermissionRule::Any { rules } => {
                Permission::or(rules.into_iter().map(Self::convert_rule))
            }
            JsonPermissionRule::Not { rule } => Permission::negate(Self::convert_rule(*rule)),
        }
    }

    /// Interprets a JSON policy from a string.
    ///
    /// # Errors
    /// Returns an `AccessError::InvalidPolicy` if:
    /// - The JSON string is invalid
    /// - The policy validation fails
    pub fn interpret_str(&self, json_str: &str) -> crate::policy_interpreter::Result<Core> {
        let policy: JsonPolicyDefinition = serde_json::from_str(json_str)
            .map_err(|e| AccessError::invalid_policy(format!("Invalid JSON policy: {e}")))?;
        self.interpret(policy)
    }

    /// Interprets a JSON policy from a file.
    ///
    /// # Errors
    /// Returns an `AccessError::InvalidPolicy` if:
    /// - The file cannot be read
    /// - The file contains invalid JSON
    /// - The policy validation fails
    pub fn interpret_file(&self, path: &str) -> crate::policy_interpreter::Result<Core> {
        let json_str = std::fs::read_to_string(path)
            .map_err(|e| AccessError::invalid_policy(format!("Failed to read policy file: {e}")))?;
        self.interpret_str(&json_str)
    }
}
