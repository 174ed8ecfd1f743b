//! Lifecycle Module - Contract expiry tracking over a fixed contract table.
//!
//! # Components
//!
//! - `Contract` - immutable contract record with status and risk level
//! - `ContractLifecycleView` - summary, filtering, renewal calendar, action
//!   items and portfolio breakdown
//! - `CONTRACT_FIXTURES` - the built-in six-contract table
//!
//! Days-to-expiration is always derived from an as-of date at query time.

mod calendar;
mod contract;
mod errors;
mod filter;
pub mod fixtures;
mod summary;
mod view;

pub use calendar::{
    ActionItem, ActionSeverity, RenewalEntry, UrgencyBucket, RENEWAL_HORIZON_DAYS,
    URGENT_WINDOW_DAYS,
};
pub use contract::{Contract, ContractStatus, RiskLevel};
pub use errors::LifecycleError;
pub use filter::{ContractFilter, ContractView, EXPIRING_WINDOW_DAYS};
pub use fixtures::CONTRACT_FIXTURES;
pub use summary::{LifecycleSummary, PayerRevenue, PortfolioBreakdown, StatusCount};
pub use view::ContractLifecycleView;
