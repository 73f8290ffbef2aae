//! # Permissions System
//!
//! The permissions module implements composable access control for core
//! operations. It combines atomic leaf predicates with boolean operators
//! and named permission sets to control access to actions and fields.
//!
//! ## Components
//!
//! * `predicate` - The [`Permission`] algebra: leaf decisions, AND/OR/NOT
//!   combinators, self-references and custom closures
//! * `permission_set` - [`PermissionsSet`], a registry of permissions by
//!   action name with a default fallback
//! * `field_permissions` - [`FieldsPermission`], field-level masks deriving
//!   hidden and read-only field sets
//! * `types` - Subject and target contracts used during evaluation
//!
//! ## Architecture
//!
//! Permission trees are built once during application setup and evaluated
//! read-only on the request path. Evaluation is synchronous and pure: leaf
//! predicates consult flags already loaded on the subject, and the only
//! failure a check can surface is a configuration error for a self-reference
//! evaluated without an enclosing set. Every legitimate "no" is a plain
//! `false`.
//!
//! Sets fail closed: an action with no registered permission and no default
//! entry is denied, never an error.

pub mod field_permissions;
pub mod permission_set;
pub mod predicate;
pub mod types;

pub use field_permissions::{FieldsPermission, ACTION_EDIT};
pub use permission_set::{PermissionsSet, DEFAULT_PERMISSION};
pub use predicate::{
    DecisionFn, Permission, ACTION_CREATE, ACTION_DELETE, ACTION_READ, ACTION_UPDATE,
};
