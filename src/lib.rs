//! # FoldAccess Library
//!
//! This library implements a composable access control engine for
//! schema-driven platforms. It answers "may this subject perform this named
//! action on this core, and which fields may it see or edit?" from
//! declarative permission descriptions.
//!
//! ## Core Components
//!
//! * `permissions` - Permission predicates, boolean combinators, named
//!   permission sets and field-level masks
//! * `cores` - Named administrative units owning the permission set and
//!   field mask for one record kind
//! * `policy_interpreter` - Parses JSON policy definitions into cores
//! * `error` - Error types and handling
//!
//! ## Architecture
//!
//! Permission trees and cores are assembled once during application setup
//! and then serve read-only checks on the request path. Evaluation is
//! synchronous, pure and lock-free; the build-then-freeze discipline makes
//! frozen trees safe to share across request-handling threads.
//!
//! Decisions fail closed: an action with no registered permission and no
//! default entry is denied. The only error a check can surface is a
//! configuration mistake (a self-reference evaluated outside a permission
//! set), which is kept distinct from a denial so callers cannot mistake a
//! broken setup for "access denied".

pub mod cores;
pub mod error;
pub mod permissions;
pub mod policy_interpreter;
pub mod testing;

// Re-export main types for convenience
pub use cores::Core;
pub use error::{AccessError, AccessResult};
pub use permissions::types::{AccessTarget, RequestIdentity, Subject};
pub use permissions::{
    DecisionFn, FieldsPermission, Permission, PermissionsSet, ACTION_CREATE, ACTION_DELETE,
    ACTION_EDIT, ACTION_READ, ACTION_UPDATE, DEFAULT_PERMISSION,
};
pub use policy_interpreter::PolicyInterpreter;
