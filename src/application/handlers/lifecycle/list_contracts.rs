//! ListContractsHandler - Filtered contract table.
//!
//! An empty selection is not an error: the result carries an empty list and
//! a notice instead.

use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

use crate::domain::lifecycle::{ContractFilter, ContractLifecycleView, ContractView};
use crate::ports::{ContractReadError, ContractReader};

/// Query for the filtered contract table.
#[derive(Debug, Clone)]
pub struct ListContractsQuery {
    pub filter: ContractFilter,
    pub as_of: NaiveDate,
}

/// Result of successful contract listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListContractsResult {
    pub as_of: NaiveDate,
    pub contracts: Vec<ContractView>,
    /// Set when the filters matched nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Handler for listing contracts.
pub struct ListContractsHandler {
    reader: Arc<dyn ContractReader>,
}

impl ListContractsHandler {
    pub fn new(reader: Arc<dyn ContractReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: ListContractsQuery,
    ) -> Result<ListContractsResult, ContractReadError> {
        let contracts = self.reader.list_contracts().await?;

        let (contracts, notice) =
            match ContractLifecycleView::filter_non_empty(&contracts, &query.filter, query.as_of) {
                Ok(matched) => (matched, None),
                Err(e) => {
                    tracing::debug!(
                        statuses = query.filter.statuses.len(),
                        risks = query.filter.risks.len(),
                        expiring_only = query.filter.expiring_only,
                        "Contract filter matched nothing"
                    );
                    (Vec::new(), Some(e.to_string()))
                }
            };

        Ok(ListContractsResult {
            as_of: query.as_of,
            contracts,
            notice,
        })
    }
}
