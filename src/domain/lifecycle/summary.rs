//! Headline counts and portfolio breakdowns over a contract table.

use serde::Serialize;

use super::contract::{ContractStatus, RiskLevel};

/// Headline metrics of the lifecycle tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleSummary {
    pub total_contracts: usize,
    /// Contracts with 90 days or fewer to expiry, already-expired included.
    pub expiring_within_90_days: usize,
    pub total_monthly_revenue: u64,
    pub high_risk_contracts: usize,
}

/// Number of contracts in one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub status: ContractStatus,
    pub label: &'static str,
    pub count: usize,
}

/// Monthly revenue contributed by one contract's payer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayerRevenue {
    pub payer: String,
    pub monthly_revenue: u64,
    pub risk_level: RiskLevel,
}

/// Data behind the status pie chart and the revenue-by-payer bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioBreakdown {
    /// Most common status first.
    pub status_distribution: Vec<StatusCount>,
    /// One entry per contract, in table order.
    pub revenue_by_payer: Vec<PayerRevenue>,
}
