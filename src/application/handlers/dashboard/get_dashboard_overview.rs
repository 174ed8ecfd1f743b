//! GetDashboardOverviewHandler - Home page overview.

use crate::domain::dashboard::DashboardOverview;

/// Result of the overview query.
pub type GetDashboardOverviewResult = DashboardOverview;

/// Handler for the dashboard home overview.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetDashboardOverviewHandler;

impl GetDashboardOverviewHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self) -> GetDashboardOverviewResult {
        DashboardOverview::canned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_links_every_tool() {
        let overview = GetDashboardOverviewHandler::new().handle();

        let paths: Vec<_> = overview.tools.iter().map(|t| t.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["/api/contracts/analyze", "/api/revenue/simulations", "/api/contracts"]
        );
        assert_eq!(overview.metrics.len(), 4);
    }
}
