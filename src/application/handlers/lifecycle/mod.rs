//! Contract lifecycle query handlers.
//!
//! Read-only handlers over the contract table. Each query carries the as-of
//! date it measures expirations against.

mod get_action_items;
mod get_lifecycle_summary;
mod get_portfolio;
mod get_renewal_calendar;
mod list_contracts;

pub use get_action_items::{GetActionItemsHandler, GetActionItemsQuery, GetActionItemsResult};
pub use get_lifecycle_summary::{
    GetLifecycleSummaryHandler, GetLifecycleSummaryQuery, GetLifecycleSummaryResult,
};
pub use get_portfolio::{GetPortfolioHandler, GetPortfolioResult};
pub use get_renewal_calendar::{
    GetRenewalCalendarHandler, GetRenewalCalendarQuery, GetRenewalCalendarResult,
};
pub use list_contracts::{ListContractsHandler, ListContractsQuery, ListContractsResult};

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;

    use crate::domain::lifecycle::{Contract, CONTRACT_FIXTURES};
    use crate::ports::{ContractReadError, ContractReader};

    // ─────────────────────────────────────────────────────────────────────
    // Mock Implementation
    // ─────────────────────────────────────────────────────────────────────

    pub struct MockContractReader {
        contracts: Vec<Contract>,
        should_fail: bool,
    }

    impl MockContractReader {
        pub fn with_fixtures() -> Self {
            Self {
                contracts: CONTRACT_FIXTURES.clone(),
                should_fail: false,
            }
        }

        pub fn with_contracts(contracts: Vec<Contract>) -> Self {
            Self {
                contracts,
                should_fail: false,
            }
        }

        pub fn failing() -> Self {
            Self {
                contracts: vec![],
                should_fail: true,
            }
        }
    }

    #[async_trait]
    impl ContractReader for MockContractReader {
        async fn list_contracts(&self) -> Result<Vec<Contract>, ContractReadError> {
            if self.should_fail {
                return Err(ContractReadError::Unavailable("Simulated failure".to_string()));
            }
            Ok(self.contracts.clone())
        }
    }

    pub fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
        chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }
}
