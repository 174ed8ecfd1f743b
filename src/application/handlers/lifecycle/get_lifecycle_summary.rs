//! GetLifecycleSummaryHandler - Headline counts of the lifecycle tracker.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::lifecycle::{ContractLifecycleView, LifecycleSummary};
use crate::ports::{ContractReadError, ContractReader};

/// Query for the lifecycle summary.
#[derive(Debug, Clone)]
pub struct GetLifecycleSummaryQuery {
    pub as_of: NaiveDate,
}

/// Result of successful lifecycle summary query.
pub type GetLifecycleSummaryResult = LifecycleSummary;

/// Handler for the lifecycle summary.
pub struct GetLifecycleSummaryHandler {
    reader: Arc<dyn ContractReader>,
}

impl GetLifecycleSummaryHandler {
    pub fn new(reader: Arc<dyn ContractReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: GetLifecycleSummaryQuery,
    ) -> Result<GetLifecycleSummaryResult, ContractReadError> {
        let contracts = self.reader.list_contracts().await?;
        Ok(ContractLifecycleView::summarize(&contracts, query.as_of))
    }
}
