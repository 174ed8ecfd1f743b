//! GetRenewalCalendarHandler - Contracts expiring within the next year.

use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

use crate::domain::foundation::format_usd;
use crate::domain::lifecycle::{ContractLifecycleView, RenewalEntry};
use crate::ports::{ContractReadError, ContractReader};

/// Query for the renewal calendar.
#[derive(Debug, Clone)]
pub struct GetRenewalCalendarQuery {
    pub as_of: NaiveDate,
}

/// Result of successful renewal calendar query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRenewalCalendarResult {
    pub as_of: NaiveDate,
    pub entries: Vec<RenewalEntry>,
    pub total_revenue_at_risk: u64,
    /// Formatted `total_revenue_at_risk`, e.g. "$53,000".
    pub total_revenue_at_risk_display: String,
}

/// Handler for the renewal calendar.
pub struct GetRenewalCalendarHandler {
    reader: Arc<dyn ContractReader>,
}

impl GetRenewalCalendarHandler {
    pub fn new(reader: Arc<dyn ContractReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: GetRenewalCalendarQuery,
    ) -> Result<GetRenewalCalendarResult, ContractReadError> {
        let contracts = self.reader.list_contracts().await?;
        let entries = ContractLifecycleView::renewal_calendar(&contracts, query.as_of);
        let total_revenue_at_risk = entries
            .iter()
            .fold(0u64, |acc, e| acc.saturating_add(e.monthly_revenue_at_risk));

        Ok(GetRenewalCalendarResult {
            as_of: query.as_of,
            entries,
            total_revenue_at_risk,
            total_revenue_at_risk_display: format_usd(total_revenue_at_risk as f64),
        })
    }
}
