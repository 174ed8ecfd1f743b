//! Contract record and its status and risk enumerations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Where a contract stands in its term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    Active,
    ExpiringSoon,
    Expired,
}

impl ContractStatus {
    pub const ALL: [ContractStatus; 3] = [
        ContractStatus::Active,
        ContractStatus::ExpiringSoon,
        ContractStatus::Expired,
    ];

    /// Returns the display label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            ContractStatus::Active => "Active",
            ContractStatus::ExpiringSoon => "Expiring Soon",
            ContractStatus::Expired => "Expired",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ContractStatus::Active => "active",
            ContractStatus::ExpiringSoon => "expiring_soon",
            ContractStatus::Expired => "expired",
        }
    }
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ContractStatus {
    type Err = ValidationError;

    /// Accepts either the snake_case code or the display label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| {
                status.code().eq_ignore_ascii_case(needle)
                    || status.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| {
                let codes: Vec<_> = Self::ALL.iter().map(|s| s.code()).collect();
                ValidationError::not_allowed("status", &codes, needle)
            })
    }
}

/// Assessed risk of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    /// Returns the display label for this risk level.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for RiskLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|risk| risk.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                let codes = ["low", "medium", "high"];
                ValidationError::not_allowed("risk", &codes, needle)
            })
    }
}

/// A managed care contract. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub name: String,
    pub payer: String,
    pub start_date: NaiveDate,
    pub expiration: NaiveDate,
    pub status: ContractStatus,
    pub auto_renew: bool,
    /// Monthly revenue in whole dollars.
    pub monthly_revenue: u64,
    pub risk_level: RiskLevel,
}

impl Contract {
    /// Whole days from `as_of` until expiration. Negative once expired.
    pub fn days_to_expiration(&self, as_of: NaiveDate) -> i64 {
        self.expiration.signed_duration_since(as_of).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contract_expiring(expiration: NaiveDate) -> Contract {
        Contract {
            name: "Aetna Specialty".to_string(),
            payer: "Aetna".to_string(),
            start_date: date(2023, 3, 15),
            expiration,
            status: ContractStatus::ExpiringSoon,
            auto_renew: false,
            monthly_revenue: 18_000,
            risk_level: RiskLevel::Medium,
        }
    }

    #[test]
    fn days_to_expiration_counts_whole_days() {
        let contract = contract_expiring(date(2024, 3, 14));
        assert_eq!(contract.days_to_expiration(date(2024, 1, 1)), 73);
    }

    #[test]
    fn days_to_expiration_is_zero_on_expiration_day() {
        let contract = contract_expiring(date(2024, 3, 14));
        assert_eq!(contract.days_to_expiration(date(2024, 3, 14)), 0);
    }

    #[test]
    fn days_to_expiration_is_negative_after_expiry() {
        let contract = contract_expiring(date(2024, 3, 14));
        assert_eq!(contract.days_to_expiration(date(2024, 3, 24)), -10);
    }

    #[test]
    fn status_parses_codes_and_labels() {
        assert_eq!("active".parse::<ContractStatus>().unwrap(), ContractStatus::Active);
        assert_eq!(
            "expiring_soon".parse::<ContractStatus>().unwrap(),
            ContractStatus::ExpiringSoon
        );
        assert_eq!(
            "Expiring Soon".parse::<ContractStatus>().unwrap(),
            ContractStatus::ExpiringSoon
        );
        assert_eq!(" EXPIRED ".parse::<ContractStatus>().unwrap(), ContractStatus::Expired);
    }

    #[test]
    fn status_rejects_unknown_value() {
        let err = "terminated".parse::<ContractStatus>().unwrap_err();
        assert_eq!(err.field(), "status");
    }

    #[test]
    fn risk_parses_case_insensitively() {
        assert_eq!("HIGH".parse::<RiskLevel>().unwrap(), RiskLevel::High);
        assert_eq!("medium".parse::<RiskLevel>().unwrap(), RiskLevel::Medium);
        assert!("severe".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn contract_serializes_camel_case_with_codes() {
        let contract = contract_expiring(date(2024, 3, 14));
        let json = serde_json::to_value(&contract).unwrap();

        assert_eq!(json["expiration"], "2024-03-14");
        assert_eq!(json["status"], "expiring_soon");
        assert_eq!(json["riskLevel"], "medium");
        assert_eq!(json["autoRenew"], false);
        assert_eq!(json["monthlyRevenue"], 18_000);
    }
}
