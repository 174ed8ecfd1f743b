//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (validation errors, dollar formatting)
//! - `revenue` - Revenue impact simulation (projection, metrics, scenarios)
//! - `lifecycle` - Contract table, expiry tracking and renewal planning
//! - `analyzer` - Uploaded document metadata and the fixed analysis result
//! - `dashboard` - Home page overview
//!
//! Everything here is pure: no I/O, no clock reads, no shared state.

pub mod analyzer;
pub mod dashboard;
pub mod foundation;
pub mod lifecycle;
pub mod revenue;
