use log::{info, warn};
use serde_json::Value;

use crate::error::AccessResult;
use crate::permissions::predicate::Permission;
use crate::permissions::types::{AccessTarget, Subject};

/// Reserved entry name used as the fallback when the requested action has no
/// permission of its own.
pub const DEFAULT_PERMISSION: &str = "__default__";

/// A set of permissions identified by action name.
///
/// Permission is granted if the entry registered under the requested action
/// grants access. When no entry matches, the entry registered under
/// [`DEFAULT_PERMISSION`] is consulted instead. When neither is present the
/// set denies - a missing permission means no access, never an error.
///
/// Entries registered in a set may use [`Permission::SelfReference`] to
/// redirect to another entry of the same set; the set passes itself as the
/// enclosing context during evaluation, so references resolve against this
/// set even when the check was started from a different one.
///
/// Entries are kept in insertion order. Iteration order carries no
/// decision semantics and exists for deterministic diagnostics.
#[derive(Debug, Clone, Default)]
pub struct PermissionsSet {
    entries: Vec<(String, Permission)>,
}

impl PermissionsSet {
    /// Creates an empty permission set. An empty set denies every action.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a permission set from initial `(action, permission)` entries.
    ///
    /// Later entries override earlier ones with the same action name.
    pub fn from_entries<N, I>(entries: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Permission)>,
    {
        let mut set = Self::new();
        for (action, permission) in entries {
            set.set(action, permission);
        }
        set
    }

    /// Adds a permission under the given action name.
    ///
    /// An existing entry with the same name is overwritten in place, keeping
    /// its original position.
    pub fn set(&mut self, action: impl Into<String>, permission: Permission) {
        let action = action.into();
        match self.entries.iter_mut().find(|(name, _)| *name == action) {
            Some(entry) => entry.1 = permission,
            None => self.entries.push((action, permission)),
        }
    }

    /// Returns the permission registered under the given action name, if any.
    ///
    /// Does not fall back to the default entry.
    #[must_use]
    pub fn get(&self, action: &str) -> Option<&Permission> {
        self.entries
            .iter()
            .find(|(name, _)| name == action)
            .map(|(_, permission)| permission)
    }

    /// Returns the number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(action, permission)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Permission)> {
        self.entries
            .iter()
            .map(|(name, permission)| (name.as_str(), permission))
    }

    /// Iterates over registered action names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Checks if the subject has permission to the given action.
    ///
    /// Looks up the action name, falling back to the [`DEFAULT_PERMISSION`]
    /// entry when absent. With neither registered the set denies and never
    /// errors. A found permission is evaluated with this set as the
    /// enclosing context, so self-references inside it resolve here.
    ///
    /// # Errors
    ///
    /// Propagates [`AccessError`] from nested evaluation. Entries of this
    /// set always evaluate with an enclosing context, so lookups through a
    /// well-formed set do not produce configuration errors themselves.
    ///
    /// [`AccessError`]: crate::error::AccessError
    pub fn has_permission(
        &self,
        action: &str,
        subject: &dyn Subject,
        target: &dyn AccessTarget,
        object: Option<&Value>,
    ) -> AccessResult<bool> {
        let permission = match self.get(action) {
            Some(permission) => {
                info!(
                    "PERMISSION SET: action={} pub_key={:?} - entry found",
                    action,
                    subject.public_key()
                );
                permission
            }
            None => match self.get(DEFAULT_PERMISSION) {
                Some(default) => {
                    info!(
                        "PERMISSION SET: action={} pub_key={:?} - falling back to default entry",
                        action,
                        subject.public_key()
                    );
                    default
                }
                None => {
                    warn!(
                        "PERMISSION SET: action={} pub_key={:?} - no entry and no default, denying",
                        action,
                        subject.public_key()
                    );
                    return Ok(false);
                }
            },
        };

        permission.has_permission_in_set(action, subject, target, object, self)
    }
}
