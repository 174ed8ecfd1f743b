//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Lifecycle and dashboard handlers are read-only queries; contract analysis
//! is the single command.

pub mod handlers;

pub use handlers::{
    AnalyzeContractCommand, AnalyzeContractHandler, GetActionItemsHandler,
    GetDashboardOverviewHandler, GetLifecycleSummaryHandler, GetPortfolioHandler,
    GetRenewalCalendarHandler, ListContractsHandler, RunSimulationHandler,
};
