use crate::permissions::field_permissions::FieldsPermission;
use crate::permissions::permission_set::PermissionsSet;

/// Capability a permission check target must expose.
///
/// [`Permission::CoreAllowed`] delegates its decision to the permission set
/// returned here, so any type used as a delegation target must implement
/// this trait. The target is otherwise passed through checks unexamined.
///
/// [`Permission::CoreAllowed`]: crate::permissions::Permission::CoreAllowed
pub trait AccessTarget {
    /// The permission set attached to this target.
    fn permission_set(&self) -> &PermissionsSet;

    /// The field mask attached to this target, if any.
    fn field_permissions(&self) -> Option<&FieldsPermission> {
        None
    }
}
