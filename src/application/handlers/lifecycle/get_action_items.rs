//! GetActionItemsHandler - Follow-ups for contracts near or past expiry.

use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

use crate::domain::lifecycle::{ActionItem, ContractLifecycleView};
use crate::ports::{ContractReadError, ContractReader};

/// Query for action items.
#[derive(Debug, Clone)]
pub struct GetActionItemsQuery {
    pub as_of: NaiveDate,
}

/// Result of successful action items query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetActionItemsResult {
    pub as_of: NaiveDate,
    pub items: Vec<ActionItem>,
}

/// Handler for action items.
pub struct GetActionItemsHandler {
    reader: Arc<dyn ContractReader>,
}

impl GetActionItemsHandler {
    pub fn new(reader: Arc<dyn ContractReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: GetActionItemsQuery,
    ) -> Result<GetActionItemsResult, ContractReadError> {
        let contracts = self.reader.list_contracts().await?;
        Ok(GetActionItemsResult {
            as_of: query.as_of,
            items: ContractLifecycleView::action_items(&contracts, query.as_of),
        })
    }
}
