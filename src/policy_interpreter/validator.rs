use std::collections::HashSet;

use crate::error::AccessError;
use crate::policy_interpreter::types::{JsonPermissionRule, JsonPolicyDefinition};

/// Validates JSON policy definitions before conversion.
pub struct PolicyValidator;

impl PolicyValidator {
    /// Validates a complete policy definition.
    ///
    /// # Errors
    /// Returns an `AccessError::InvalidPolicy` if:
    /// - The policy name is empty
    /// - An entry has an empty action name
    /// - Two entries share an action name
    /// - A self-reference points at an action absent from the document
    pub fn validate(policy: &JsonPolicyDefinition) -> crate::policy_interpreter::Result<()> {
        if policy.name.is_empty() {
            return Err(AccessError::invalid_policy("policy name cannot be empty"));
        }

        let mut actions = HashSet::new();
        for entry in &policy.permissions {
            if entry.action.is_empty() {
                return Err(AccessError::invalid_policy(format!(
                    "policy '{}' contains an entry with an empty action name",
                    policy.name
                )));
            }
            if !actions.insert(entry.action.as_str()) {
                return Err(AccessError::invalid_policy(format!(
                    "policy '{}' registers action '{}' more than once",
                    policy.name, entry.action
                )));
            }
        }

        for entry in &policy.permissions {
            Self::validate_rule(&entry.rule, &actions, &policy.name)?;
        }

        Ok(())
    }

    /// Checks self-references recursively, including inside combinators.
    fn validate_rule(
        rule: &JsonPermissionRule,
        actions: &HashSet<&str>,
        policy_name: &str,
    ) -> crate::policy_interpreter::Result<()> {
        match rule {
            JsonPermissionRule::SelfReference { action } => {
                if actions.contains(action.as_str()) {
                    Ok(())
                } else {
                    Err(AccessError::invalid_policy(format!(
                        "policy '{policy_name}' references unknown action '{action}'"
                    )))
                }
            }
            JsonPermissionRule::All { rules } | JsonPermissionRule::Any { rules } => {
                for nested in rules {
                    Self::validate_rule(nested, actions, policy_name)?;
                }
                Ok(())
            }
            JsonPermissionRule::Not { rule } => Self::validate_rule(rule, actions, policy_name),
            _ => Ok(()),
        }
    }
}
