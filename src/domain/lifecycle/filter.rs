//! Status, risk and expiry filtering of a contract table.

use chrono::NaiveDate;
use serde::Serialize;

use super::contract::{Contract, ContractStatus, RiskLevel};

/// Contracts expiring within this many days count as "expiring".
pub const EXPIRING_WINDOW_DAYS: i64 = 90;

/// Selection applied to a contract table.
///
/// An empty status or risk set matches nothing, mirroring a multiselect with
/// every option cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractFilter {
    pub statuses: Vec<ContractStatus>,
    pub risks: Vec<RiskLevel>,
    /// Restrict to contracts within [`EXPIRING_WINDOW_DAYS`] of expiry.
    pub expiring_only: bool,
}

impl ContractFilter {
    /// Selects every status and risk level.
    pub fn all() -> Self {
        Self {
            statuses: ContractStatus::ALL.to_vec(),
            risks: RiskLevel::ALL.to_vec(),
            expiring_only: false,
        }
    }

    pub fn with_statuses(mut self, statuses: Vec<ContractStatus>) -> Self {
        self.statuses = statuses;
        self
    }

    pub fn with_risks(mut self, risks: Vec<RiskLevel>) -> Self {
        self.risks = risks;
        self
    }

    pub fn expiring_only(mut self, expiring_only: bool) -> Self {
        self.expiring_only = expiring_only;
        self
    }

    /// Whether `contract` passes this filter on `as_of`.
    pub fn matches(&self, contract: &Contract, as_of: NaiveDate) -> bool {
        self.statuses.contains(&contract.status)
            && self.risks.contains(&contract.risk_level)
            && (!self.expiring_only
                || contract.days_to_expiration(as_of) <= EXPIRING_WINDOW_DAYS)
    }
}

impl Default for ContractFilter {
    fn default() -> Self {
        Self::all()
    }
}

/// A contract together with its expiry countdown on a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractView {
    #[serde(flatten)]
    pub contract: Contract,
    pub days_to_expiration: i64,
}

impl ContractView {
    pub fn new(contract: &Contract, as_of: NaiveDate) -> Self {
        Self {
            contract: contract.clone(),
            days_to_expiration: contract.days_to_expiration(as_of),
        }
    }
}
