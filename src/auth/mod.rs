//! Authentication module for ATOM.
//!
//! Callers are identified by an [`Identity`] that the web layer builds from
//! a verified token and passes into every service call.

mod identity;
mod permission;

pub use identity::{Identity, Role};
pub use permission::can_modify;
