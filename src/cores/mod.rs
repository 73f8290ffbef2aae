//! # Core Units
//!
//! A [`Core`] is a named administrative unit that owns the access rules for
//! one kind of record: a [`PermissionsSet`] keyed by action name and an
//! optional [`FieldsPermission`] mask. Cores are assembled once during
//! application setup and then serve read-only permission checks.
//!
//! A core implements [`AccessTarget`], so permissions registered on one core
//! can delegate to it (or to another core) through
//! [`Permission::core_allowed`] and friends.

use std::collections::HashSet;

use serde_json::Value;

use crate::error::AccessResult;
use crate::permissions::field_permissions::FieldsPermission;
use crate::permissions::permission_set::PermissionsSet;
use crate::permissions::predicate::{
    Permission, ACTION_CREATE, ACTION_DELETE, ACTION_READ, ACTION_UPDATE,
};
use crate::permissions::types::{AccessTarget, Subject};
use crate::permissions::DEFAULT_PERMISSION;

/// A named unit owning the permission set and field mask for one record kind.
#[derive(Debug, Clone, Default)]
pub struct Core {
    name: String,
    permission: PermissionsSet,
    field_permissions: Option<FieldsPermission>,
}

impl Core {
    /// Creates a core with an empty permission set. An empty set denies
    /// every action until permissions are registered.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            permission: PermissionsSet::new(),
            field_permissions: None,
        }
    }

    /// The core's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers a permission for an action, builder style.
    #[must_use]
    pub fn with_permission(mut self, action: impl Into<String>, permission: Permission) -> Self {
        self.permission.set(action, permission);
        self
    }

    /// Registers the fallback permission used for unlisted actions.
    #[must_use]
    pub fn with_default_permission(mut self, permission: Permission) -> Self {
        self.permission.set(DEFAULT_PERMISSION, permission);
        self
    }

    /// Attaches a field mask, builder style.
    #[must_use]
    pub fn with_field_permissions(mut self, field_permissions: FieldsPermission) -> Self {
        self.field_permissions = Some(field_permissions);
        self
    }

    /// Registers a permission for an action after construction.
    ///
    /// Registration must happen before the core is shared with concurrent
    /// readers; the set performs no internal synchronization.
    pub fn set_permission(&mut self, action: impl Into<String>, permission: Permission) {
        self.permission.set(action, permission);
    }

    /// Checks if the subject has permission to the given action on this core.
    ///
    /// # Errors
    ///
    /// Propagates [`AccessError`] from permission evaluation.
    ///
    /// [`AccessError`]: crate::error::AccessError
    pub fn has_permission(
        &self,
        action: &str,
        subject: &dyn Subject,
        object: Option<&Value>,
    ) -> AccessResult<bool> {
        self.permission.has_permission(action, subject, self, object)
    }

    /// Checks the standard `create` action.
    ///
    /// # Errors
    ///
    /// Propagates [`AccessError`] from permission evaluation.
    ///
    /// [`AccessError`]: crate::error::AccessError
    pub fn can_create(&self, subject: &dyn Subject, object: Option<&Value>) -> AccessResult<bool> {
        self.has_permission(ACTION_CREATE, subject, object)
    }

    /// Checks the standard `read` action.
    ///
    /// # Errors
    ///
    /// Propagates [`AccessError`] from permission evaluation.
    ///
    /// [`AccessError`]: crate::error::AccessError
    pub fn can_read(&self, subject: &dyn Subject, object: Option<&Value>) -> AccessResult<bool> {
        self.has_permission(ACTION_READ, subject, object)
    }

    /// Checks the standard `update` action.
    ///
    /// # Errors
    ///
    /// Propagates [`AccessError`] from permission evaluation.
    ///
    /// [`AccessError`]: crate::error::AccessError
    pub fn can_update(&self, subject: &dyn Subject, object: Option<&Value>) -> AccessResult<bool> {
        self.has_permission(ACTION_UPDATE, subject, object)
    }

    /// Checks the standard `delete` action.
    ///
    /// # Errors
    ///
    /// Propagates [`AccessError`] from permission evaluation.
    ///
    /// [`AccessError`]: crate::error::AccessError
    pub fn can_delete(&self, subject: &dyn Subject, object: Option<&Value>) -> AccessResult<bool> {
        self.has_permission(ACTION_DELETE, subject, object)
    }

    /// Field names the subject must not see on this core's records.
    ///
    /// Empty when no field mask is attached.
    ///
    /// # Errors
    ///
    /// Propagates [`AccessError`] from field mask evaluation.
    ///
    /// [`AccessError`]: crate::error::AccessError
    pub fn hidden_fields(
        &self,
        subject: &dyn Subject,
        object: Option<&Value>,
    ) -> AccessResult<HashSet<String>> {
        match &self.field_permissions {
            Some(mask) => mask.disallowed_fields(subject, self, object),
            None => Ok(HashSet::new()),
        }
    }

    /// Field names the subject may see but not edit on this core's records.
    ///
    /// Empty when no field mask is attached.
    ///
    /// # Errors
    ///
    /// Propagates [`AccessError`] from field mask evaluation.
    ///
    /// [`AccessError`]: crate::error::AccessError
    pub fn readonly_fields(
        &self,
        subject: &dyn Subject,
        object: Option<&Value>,
    ) -> AccessResult<HashSet<String>> {
        match &self.field_permissions {
            Some(mask) => mask.readonly_fields(subject, self, object),
            None => Ok(HashSet::new()),
        }
    }
}

impl AccessTarget for Core {
    fn permission_set(&self) -> &PermissionsSet {
        &self.permission
    }

    fn field_permissions(&self) -> Option<&FieldsPermission> {
        self.field_permissions.as_ref()
    }
}
