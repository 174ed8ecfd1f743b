//! GetPortfolioHandler - Status distribution and revenue by payer.

use std::sync::Arc;

use crate::domain::lifecycle::{ContractLifecycleView, PortfolioBreakdown};
use crate::ports::{ContractReadError, ContractReader};

/// Result of successful portfolio query.
pub type GetPortfolioResult = PortfolioBreakdown;

/// Handler for the portfolio breakdown.
///
/// Takes no query: the breakdown does not depend on the as-of date.
pub struct GetPortfolioHandler {
    reader: Arc<dyn ContractReader>,
}

impl GetPortfolioHandler {
    pub fn new(reader: Arc<dyn ContractReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self) -> Result<GetPortfolioResult, ContractReadError> {
        let contracts = self.reader.list_contracts().await?;
        Ok(ContractLifecycleView::portfolio(&contracts))
    }
}
