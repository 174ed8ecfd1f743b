//! Contract lifecycle HTTP adapter module.
//!
//! Read-only endpoints over the contract table. Every date-dependent
//! endpoint accepts `?as_of=YYYY-MM-DD` and defaults to today (UTC).

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{LifecycleApiError, LifecycleAppState};
pub use routes::lifecycle_routes;
