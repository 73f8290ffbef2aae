use std::collections::HashSet;

use serde_json::Value;

use crate::error::AccessResult;
use crate::permissions::predicate::{Permission, ACTION_READ};
use crate::permissions::types::{AccessTarget, Subject};

/// Pseudo-action a field mask asks its permission about when computing
/// read-only fields. Hidden fields are computed against [`ACTION_READ`].
pub const ACTION_EDIT: &str = "edit";

/// Field-level access mask derived from read/write permissions.
///
/// A mask answers two questions for a subject: which fields must be hidden
/// entirely (`disallowed_fields`) and which fields stay visible but must not
/// be edited (`readonly_fields`).
///
/// A `Rule` covers a fixed field set with one permission: when the
/// permission denies the `"read"` pseudo-action the whole set is disallowed,
/// when it denies `"edit"` the whole set is read-only. A rule cannot
/// partially restrict fields within its own set.
///
/// A `Union` combines rules by set union on both queries. Restrictions only
/// accumulate - any member hiding a field hides it overall, and there is no
/// "allow" contribution that could cancel another member's restriction.
#[derive(Debug, Clone)]
pub enum FieldsPermission {
    /// One permission guarding a fixed set of field names
    Rule {
        permission: Permission,
        fields: HashSet<String>,
    },
    /// Union of the restrictions of every member
    Union(Vec<FieldsPermission>),
}

impl FieldsPermission {
    /// Creates a rule guarding the given field names with one permission.
    pub fn rule<N, I>(permission: Permission, fields: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = N>,
    {
        FieldsPermission::Rule {
            permission,
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Combines masks into a union of their restrictions.
    #[must_use]
    pub fn union(members: Vec<FieldsPermission>) -> Self {
        FieldsPermission::Union(members)
    }

    /// Returns the field names the subject must not see at all.
    ///
    /// A rule returns its whole field set when its permission denies the
    /// `"read"` pseudo-action, otherwise the empty set. A union returns the
    /// union of its members' results.
    ///
    /// # Errors
    ///
    /// Propagates [`AccessError::ImproperlyConfigured`] from the guarding
    /// permission, e.g. a self-reference evaluated outside a permission set.
    ///
    /// [`AccessError::ImproperlyConfigured`]: crate::error::AccessError::ImproperlyConfigured
    pub fn disallowed_fields(
        &self,
        subject: &dyn Subject,
        target: &dyn AccessTarget,
        object: Option<&Value>,
    ) -> AccessResult<HashSet<String>> {
        self.restricted_fields(ACTION_READ, subject, target, object)
    }

    /// Returns the field names the subject may see but not edit.
    ///
    /// A rule returns its whole field set when its permission denies the
    /// `"edit"` pseudo-action, otherwise the empty set. A union returns the
    /// union of its members' results.
    ///
    /// # Errors
    ///
    /// Propagates [`AccessError::ImproperlyConfigured`] from the guarding
    /// permission.
    ///
    /// [`AccessError::ImproperlyConfigured`]: crate::error::AccessError::ImproperlyConfigured
    pub fn readonly_fields(
        &self,
        subject: &dyn Subject,
        target: &dyn AccessTarget,
        object: Option<&Value>,
    ) -> AccessResult<HashSet<String>> {
        self.restricted_fields(ACTION_EDIT, subject, target, object)
    }

    fn restricted_fields(
        &self,
        action: &str,
        subject: &dyn Subject,
        target: &dyn AccessTarget,
        object: Option<&Value>,
    ) -> AccessResult<HashSet<String>> {
        match self {
            FieldsPermission::Rule { permission, fields } => {
                if permission.has_permission(action, subject, target, object)? {
                    Ok(HashSet::new())
                } else {
                    Ok(fields.clone())
                }
            }
            FieldsPermission::Union(members) => {
                let mut restricted = HashSet::new();
                for member in members {
                    restricted.extend(member.restricted_fields(action, subject, target, object)?);
                }
                Ok(restricted)
            }
        }
    }
}
