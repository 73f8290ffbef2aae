use std::fmt;
use std::sync::Arc;

use log::debug;
use serde_json::Value;

use crate::error::{AccessError, AccessResult};
use crate::permissions::permission_set::PermissionsSet;
use crate::permissions::types::{AccessTarget, Subject};

/// Standard action name for creating records.
pub const ACTION_CREATE: &str = "create";
/// Standard action name for reading records.
pub const ACTION_READ: &str = "read";
/// Standard action name for updating records.
pub const ACTION_UPDATE: &str = "update";
/// Standard action name for deleting records.
pub const ACTION_DELETE: &str = "delete";

/// Caller-supplied decision function for the `Custom` leaf.
///
/// Receives the action name, the requesting subject, the target the check is
/// running against and an optional record value. Must be `Send + Sync` so
/// frozen permission trees can be shared across request threads.
pub type DecisionFn =
    dyn Fn(&str, &dyn Subject, &dyn AccessTarget, Option<&Value>) -> bool + Send + Sync;

/// A composable access control predicate.
///
/// A `Permission` is a tree of leaf decisions and boolean combinators that
/// answers "is this named action allowed for this subject and target?".
/// Trees are built once during setup and evaluated read-only on the request
/// path, so evaluation never mutates the tree and performs no I/O.
///
/// Leaf decisions:
///
/// * `AllowAny` - grants every request
/// * `IsAuthenticated` - grants authenticated and active subjects
/// * `IsSuperuser` - grants subjects with the superuser flag
/// * `IsAdminUser` - grants subjects with the staff flag
/// * `CoreAllowed` - delegates to the permission set attached to the target
/// * `SelfReference` - redirects to another named entry of the enclosing
///   [`PermissionsSet`]; evaluating it outside of a set is a configuration
///   error, not a denial
/// * `Custom` - caller-supplied decision closure
///
/// Combinators (`And`, `Or`, `Not`) close over any mix of leaves and other
/// combinators. `And` over no children grants, `Or` over no children denies.
#[derive(Clone)]
pub enum Permission {
    /// Grant permission every time
    AllowAny,
    /// Grant permission if the subject is authenticated and active
    IsAuthenticated,
    /// Grant permission if the subject is a superuser
    IsSuperuser,
    /// Grant permission if the subject is a staff user
    IsAdminUser,
    /// Grant permission if the target's own permission set grants the
    /// action; `action` overrides the incoming action name when set
    CoreAllowed { action: Option<String> },
    /// Redirect to another named entry in the enclosing permission set
    SelfReference { action: String },
    /// Grant permission if every child grants it
    And(Vec<Permission>),
    /// Grant permission if at least one child grants it
    Or(Vec<Permission>),
    /// Invert the child decision
    Not(Box<Permission>),
    /// Grant permission if the supplied closure returns true
    Custom(Arc<DecisionFn>),
}

impl Permission {
    /// Joins permissions with the AND operator.
    ///
    /// Directly nested `And` children are flattened into a single n-ary
    /// `And`; flattened and non-flattened trees evaluate identically.
    /// An empty child list grants every request.
    #[must_use]
    pub fn and(children: impl IntoIterator<Item = Permission>) -> Self {
        let mut flat = Vec::new();
        for child in children {
            match child {
                Permission::And(nested) => flat.extend(nested),
                other => flat.push(other),
            }
        }
        Permission::And(flat)
    }

    /// Joins permissions with the OR operator.
    ///
    /// Directly nested `Or` children are flattened into a single n-ary
    /// `Or`. An empty child list denies every request.
    #[must_use]
    pub fn or(children: impl IntoIterator<Item = Permission>) -> Self {
        let mut flat = Vec::new();
        for child in children {
            match child {
                Permission::Or(nested) => flat.extend(nested),
                other => flat.push(other),
            }
        }
        Permission::Or(flat)
    }

    /// Inverts a permission.
    ///
    /// Double negation is kept as two `Not` nodes; evaluation passes
    /// through both.
    #[must_use]
    pub fn negate(child: Permission) -> Self {
        Permission::Not(Box::new(child))
    }

    /// Creates a custom leaf from a decision closure.
    pub fn custom<F>(decision: F) -> Self
    where
        F: Fn(&str, &dyn Subject, &dyn AccessTarget, Option<&Value>) -> bool
            + Send
            + Sync
            + 'static,
    {
        Permission::Custom(Arc::new(decision))
    }

    /// Delegates to the target's permission set under the incoming action name.
    #[must_use]
    pub fn core_allowed() -> Self {
        Permission::CoreAllowed { action: None }
    }

    /// Delegates to the target's permission set under a fixed action name.
    #[must_use]
    pub fn core_action_allowed(action: impl Into<String>) -> Self {
        Permission::CoreAllowed {
            action: Some(action.into()),
        }
    }

    /// Delegates to the target's `create` permission.
    #[must_use]
    pub fn core_create_allowed() -> Self {
        Self::core_action_allowed(ACTION_CREATE)
    }

    /// Delegates to the target's `read` permission.
    #[must_use]
    pub fn core_read_allowed() -> Self {
        Self::core_action_allowed(ACTION_READ)
    }

    /// Delegates to the target's `update` permission.
    #[must_use]
    pub fn core_update_allowed() -> Self {
        Self::core_action_allowed(ACTION_UPDATE)
    }

    /// Delegates to the target's `delete` permission.
    #[must_use]
    pub fn core_delete_allowed() -> Self {
        Self::core_action_allowed(ACTION_DELETE)
    }

    /// Redirects to another named entry of the enclosing permission set.
    ///
    /// Only meaningful for entries registered inside a [`PermissionsSet`];
    /// evaluating the result standalone returns
    /// [`AccessError::ImproperlyConfigured`].
    #[must_use]
    pub fn self_reference(action: impl Into<String>) -> Self {
        Permission::SelfReference {
            action: action.into(),
        }
    }

    /// Checks if the subject has permission to the given action.
    ///
    /// This is the standalone evaluation entry point. A [`SelfReference`]
    /// anywhere in the tree fails with
    /// [`AccessError::ImproperlyConfigured`] on this path because there is
    /// no enclosing permission set to resolve it against.
    ///
    /// # Arguments
    ///
    /// * `action` - name of the checked action
    /// * `subject` - subject requesting access
    /// * `target` - target the check runs against
    /// * `object` - record related to the request, if any
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::ImproperlyConfigured`] if a self-reference is
    /// reached without an enclosing permission set.
    ///
    /// [`SelfReference`]: Permission::SelfReference
    pub fn has_permission(
        &self,
        action: &str,
        subject: &dyn Subject,
        target: &dyn AccessTarget,
        object: Option<&Value>,
    ) -> AccessResult<bool> {
        self.evaluate(action, subject, target, object, None)
    }

    /// Evaluation path used when a parent permission set is available.
    ///
    /// Identical to [`has_permission`] for ordinary predicates; a
    /// [`SelfReference`] resolves against `enclosing`. Combinators keep
    /// propagating `enclosing` to their children, so a self-reference
    /// nested inside `And`/`Or`/`Not` within a set entry still resolves
    /// against the outer set.
    ///
    /// [`has_permission`]: Permission::has_permission
    /// [`SelfReference`]: Permission::SelfReference
    pub(crate) fn has_permission_in_set(
        &self,
        action: &str,
        subject: &dyn Subject,
        target: &dyn AccessTarget,
        object: Option<&Value>,
        enclosing: &PermissionsSet,
    ) -> AccessResult<bool> {
        self.evaluate(action, subject, target, object, Some(enclosing))
    }

    fn evaluate(
        &self,
        action: &str,
        subject: &dyn Subject,
        target: &dyn AccessTarget,
        object: Option<&Value>,
        enclosing: Option<&PermissionsSet>,
    ) -> AccessResult<bool> {
        match self {
            Permission::AllowAny => Ok(true),
            Permission::IsAuthenticated => {
                let allowed = subject.is_authenticated() && subject.is_active();
                debug!(
                    "PERMISSION CHECK: action={} pub_key={:?} - IsAuthenticated = {}",
                    action,
                    subject.public_key(),
                    allowed
                );
                Ok(allowed)
            }
            Permission::IsSuperuser => {
                let allowed = subject.is_superuser();
                debug!(
                    "PERMISSION CHECK: action={} pub_key={:?} - IsSuperuser = {}",
                    action,
                    subject.public_key(),
                    allowed
                );
                Ok(allowed)
            }
            Permission::IsAdminUser => {
                let allowed = subject.is_staff();
                debug!(
                    "PERMISSION CHECK: action={} pub_key={:?} - IsAdminUser = {}",
                    action,
                    subject.public_key(),
                    allowed
                );
                Ok(allowed)
            }
            Permission::CoreAllowed { action: fixed } => {
                let effective = fixed.as_deref().unwrap_or(action);
                target
                    .permission_set()
                    .has_permission(effective, subject, target, object)
            }
            Permission::SelfReference { action: referenced } => match enclosing {
                Some(set) => set.has_permission(referenced, subject, target, object),
                None => Err(AccessError::improperly_configured(
                    "a self reference can only be evaluated inside a permission set",
                )),
            },
            Permission::And(children) => {
                for child in children {
                    if !child.evaluate(action, subject, target, object, enclosing)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Permission::Or(children) => {
                for child in children {
                    if child.evaluate(action, subject, target, object, enclosing)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Permission::Not(child) => {
                Ok(!child.evaluate(action, subject, target, object, enclosing)?)
            }
            Permission::Custom(decision) => Ok(decision(action, subject, target, object)),
        }
    }
}

impl fmt::Debug for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Permission::AllowAny => write!(f, "AllowAny"),
            Permission::IsAuthenticated => write!(f, "IsAuthenticated"),
            Permission::IsSuperuser => write!(f, "IsSuperuser"),
            Permission::IsAdminUser => write!(f, "IsAdminUser"),
            Permission::CoreAllowed { action } => {
                f.debug_struct("CoreAllowed").field("action", action).finish()
            }
            Permission::SelfReference { action } => {
                f.debug_struct("SelfReference").field("action", action).finish()
            }
            Permission::And(children) => f.debug_tuple("And").field(children).finish(),
            Permission::Or(children) => f.debug_tuple("Or").field(children).finish(),
            Permission::Not(child) => f.debug_tuple("Not").field(child).finish(),
            Permission::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}
