//! Read-only projections over a contract table.

use chrono::NaiveDate;

use crate::domain::foundation::format_usd;

use super::calendar::{ActionItem, RenewalEntry, UrgencyBucket, RENEWAL_HORIZON_DAYS};
use super::contract::{Contract, ContractStatus, RiskLevel};
use super::errors::LifecycleError;
use super::filter::{ContractFilter, ContractView, EXPIRING_WINDOW_DAYS};
use super::summary::{LifecycleSummary, PayerRevenue, PortfolioBreakdown, StatusCount};

/// Lifecycle tracker computations.
///
/// Every function borrows the contract table and returns fresh values; the
/// table itself is never modified.
pub struct ContractLifecycleView;

impl ContractLifecycleView {
    /// Whole days from `as_of` until `contract` expires.
    pub fn days_to_expiration(contract: &Contract, as_of: NaiveDate) -> i64 {
        contract.days_to_expiration(as_of)
    }

    /// Computes the headline counts for the tracker.
    pub fn summarize(contracts: &[Contract], as_of: NaiveDate) -> LifecycleSummary {
        LifecycleSummary {
            total_contracts: contracts.len(),
            expiring_within_90_days: contracts
                .iter()
                .filter(|c| c.days_to_expiration(as_of) <= EXPIRING_WINDOW_DAYS)
                .count(),
            total_monthly_revenue: contracts
                .iter()
                .fold(0u64, |acc, c| acc.saturating_add(c.monthly_revenue)),
            high_risk_contracts: contracts
                .iter()
                .filter(|c| c.risk_level == RiskLevel::High)
                .count(),
        }
    }

    /// Returns the contracts passing `filter`, in table order.
    pub fn filter(
        contracts: &[Contract],
        filter: &ContractFilter,
        as_of: NaiveDate,
    ) -> Vec<ContractView> {
        contracts
            .iter()
            .filter(|c| filter.matches(c, as_of))
            .map(|c| ContractView::new(c, as_of))
            .collect()
    }

    /// Like [`ContractLifecycleView::filter`], but reports an empty selection.
    ///
    /// # Errors
    ///
    /// Returns `LifecycleError::EmptyContractSet` when nothing matches.
    pub fn filter_non_empty(
        contracts: &[Contract],
        filter: &ContractFilter,
        as_of: NaiveDate,
    ) -> Result<Vec<ContractView>, LifecycleError> {
        let matched = Self::filter(contracts, filter, as_of);
        if matched.is_empty() {
            return Err(LifecycleError::EmptyContractSet);
        }
        Ok(matched)
    }

    /// Contracts expiring within a year of `as_of`, soonest first.
    pub fn renewal_calendar(contracts: &[Contract], as_of: NaiveDate) -> Vec<RenewalEntry> {
        let mut upcoming: Vec<(i64, &Contract)> = contracts
            .iter()
            .map(|c| (c.days_to_expiration(as_of), c))
            .filter(|(days, _)| *days <= RENEWAL_HORIZON_DAYS)
            .collect();
        upcoming.sort_by_key(|(days, _)| *days);

        upcoming
            .into_iter()
            .map(|(days, contract)| {
                let expires_month = contract.expiration.format("%B %Y").to_string();
                let headline = format!(
                    "{} expires {} ({}/month at risk)",
                    contract.name,
                    expires_month,
                    format_usd(contract.monthly_revenue as f64)
                );
                RenewalEntry {
                    contract_name: contract.name.clone(),
                    payer: contract.payer.clone(),
                    expiration: contract.expiration,
                    expires_month,
                    days_to_expiration: days,
                    urgency: UrgencyBucket::from_days(days),
                    monthly_revenue_at_risk: contract.monthly_revenue,
                    headline,
                }
            })
            .collect()
    }

    /// Follow-ups for every contract within 90 days of expiry, in table order.
    pub fn action_items(contracts: &[Contract], as_of: NaiveDate) -> Vec<ActionItem> {
        contracts
            .iter()
            .map(|c| (c, c.days_to_expiration(as_of)))
            .filter(|(_, days)| *days <= EXPIRING_WINDOW_DAYS)
            .map(|(c, days)| ActionItem::for_contract(&c.name, days))
            .collect()
    }

    /// Status distribution and revenue by payer.
    pub fn portfolio(contracts: &[Contract]) -> PortfolioBreakdown {
        let mut status_distribution: Vec<StatusCount> = Vec::new();
        for contract in contracts {
            match status_distribution
                .iter_mut()
                .find(|entry| entry.status == contract.status)
            {
                Some(entry) => entry.count += 1,
                None => status_distribution.push(status_count(contract.status)),
            }
        }
        // Stable: equal counts keep first-seen order.
        status_distribution.sort_by(|a, b| b.count.cmp(&a.count));

        let revenue_by_payer = contracts
            .iter()
            .map(|c| PayerRevenue {
                payer: c.payer.clone(),
                monthly_revenue: c.monthly_revenue,
                risk_level: c.risk_level,
            })
            .collect();

        PortfolioBreakdown {
            status_distribution,
            revenue_by_payer,
        }
    }
}

fn status_count(status: ContractStatus) -> StatusCount {
    StatusCount {
        status,
        label: status.label(),
        count: 1,
    }
}
