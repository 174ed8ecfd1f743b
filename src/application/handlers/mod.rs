//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod analyzer;
pub mod dashboard;
pub mod lifecycle;
pub mod revenue;

pub use analyzer::{AnalyzeContractCommand, AnalyzeContractHandler, AnalyzeContractResult};
pub use dashboard::{GetDashboardOverviewHandler, GetDashboardOverviewResult};
pub use lifecycle::{
    GetActionItemsHandler, GetActionItemsQuery, GetActionItemsResult, GetLifecycleSummaryHandler,
    GetLifecycleSummaryQuery, GetLifecycleSummaryResult, GetPortfolioHandler, GetPortfolioResult,
    GetRenewalCalendarHandler, GetRenewalCalendarQuery, GetRenewalCalendarResult,
    ListContractsHandler, ListContractsQuery, ListContractsResult,
};
pub use revenue::{RunSimulationHandler, RunSimulationQuery, RunSimulationResult};
