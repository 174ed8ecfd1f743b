//! The built-in contract table served when no fixture file is configured.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use super::contract::{Contract, ContractStatus, RiskLevel};

/// Six sample payer contracts.
pub static CONTRACT_FIXTURES: Lazy<Vec<Contract>> = Lazy::new(|| {
    vec![
        contract(
            "BlueCross Primary Care",
            "BlueCross",
            (2023, 1, 1),
            (2025, 12, 31),
            ContractStatus::Active,
            true,
            25_000,
            RiskLevel::Low,
        ),
        contract(
            "Aetna Specialty",
            "Aetna",
            (2023, 3, 15),
            (2024, 3, 14),
            ContractStatus::ExpiringSoon,
            false,
            18_000,
            RiskLevel::Medium,
        ),
        contract(
            "Medicare Advantage",
            "Medicare",
            (2023, 1, 1),
            (2024, 12, 31),
            ContractStatus::Active,
            true,
            35_000,
            RiskLevel::Low,
        ),
        contract(
            "Medicaid MCO",
            "State Medicaid",
            (2023, 7, 1),
            (2024, 6, 30),
            ContractStatus::ExpiringSoon,
            true,
            12_000,
            RiskLevel::High,
        ),
        contract(
            "United Healthcare",
            "UHC",
            (2022, 12, 1),
            (2025, 11, 30),
            ContractStatus::Active,
            false,
            28_000,
            RiskLevel::Medium,
        ),
        contract(
            "Cigna Behavioral Health",
            "Cigna",
            (2023, 6, 1),
            (2024, 5, 31),
            ContractStatus::Expired,
            false,
            8_000,
            RiskLevel::High,
        ),
    ]
});

#[allow(clippy::too_many_arguments)]
fn contract(
    name: &str,
    payer: &str,
    start: (i32, u32, u32),
    expiration: (i32, u32, u32),
    status: ContractStatus,
    auto_renew: bool,
    monthly_revenue: u64,
    risk_level: RiskLevel,
) -> Contract {
    Contract {
        name: name.to_string(),
        payer: payer.to_string(),
        start_date: date(start),
        expiration: date(expiration),
        status,
        auto_renew,
        monthly_revenue,
        risk_level,
    }
}

fn date((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture dates are valid calendar dates")
}
