pub mod identity;
pub mod target;

pub use identity::{RequestIdentity, Subject};
pub use target::AccessTarget;
