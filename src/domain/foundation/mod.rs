//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary and small display helpers shared by the
//! revenue, lifecycle and analysis modules.

mod errors;
mod money;

pub use errors::{ErrorCode, ValidationError};
pub use money::format_usd;
