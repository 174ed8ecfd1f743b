//! HTTP routes for contract lifecycle endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    get_action_items, get_portfolio, get_renewal_calendar, get_summary, list_contracts,
    LifecycleAppState,
};

/// Creates the lifecycle router with all routes.
pub fn lifecycle_routes(state: LifecycleAppState) -> Router {
    Router::new()
        // GET /api/contracts?status=&risk=&expiring_only=&as_of=
        .route("/api/contracts", get(list_contracts))
        // GET /api/contracts/summary?as_of=
        .route("/api/contracts/summary", get(get_summary))
        // GET /api/contracts/portfolio
        .route("/api/contracts/portfolio", get(get_portfolio))
        // GET /api/contracts/renewals?as_of=
        .route("/api/contracts/renewals", get(get_renewal_calendar))
        // GET /api/contracts/action-items?as_of=
        .route("/api/contracts/action-items", get(get_action_items))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::adapters::contracts::InMemoryContractReader;
    use crate::domain::lifecycle::Contract;
    use crate::ports::{ContractReadError, ContractReader};

    struct UnavailableReader;

    #[async_trait]
    impl ContractReader for UnavailableReader {
        async fn list_contracts(&self) -> Result<Vec<Contract>, ContractReadError> {
            Err(ContractReadError::Unavailable("fixture file vanished".to_string()))
        }
    }

    fn app() -> Router {
        lifecycle_routes(LifecycleAppState::new(Arc::new(
            InMemoryContractReader::with_fixtures(),
        )))
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn list_filters_by_status_and_risk() {
        let (status, json) = get_json(
            app(),
            "/api/contracts?status=active,expiring_soon&risk=medium,high&as_of=2024-01-01",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = json["contracts"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Aetna Specialty", "Medicaid MCO", "United Healthcare"]);
        assert_eq!(json["contracts"][0]["daysToExpiration"], 73);
        assert!(json.get("notice").is_none());
    }

    #[tokio::test]
    async fn list_reports_empty_selection() {
        let (status, json) = get_json(app(), "/api/contracts?status=&as_of=2024-01-01").await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["contracts"].as_array().unwrap().is_empty());
        assert_eq!(json["notice"], "No contracts match the selected filters");
    }

    #[tokio::test]
    async fn list_rejects_unknown_risk() {
        let (status, json) = get_json(app(), "/api/contracts?risk=extreme").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "NOT_ALLOWED");
        assert_eq!(json["details"]["field"], "risk");
    }

    #[tokio::test]
    async fn list_rejects_non_boolean_expiring_only() {
        let (status, json) = get_json(app(), "/api/contracts?expiring_only=maybe").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_FAILED");
    }

    #[tokio::test]
    async fn summary_on_fixed_date() {
        let (status, json) = get_json(app(), "/api/contracts/summary?as_of=2024-01-01").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["totalContracts"], 6);
        assert_eq!(json["expiringWithin90Days"], 1);
        assert_eq!(json["totalMonthlyRevenue"], 126_000);
        assert_eq!(json["highRiskContracts"], 2);
    }

    #[tokio::test]
    async fn summary_rejects_bad_date() {
        let (status, json) = get_json(app(), "/api/contracts/summary?as_of=yesterday").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_FORMAT");
    }

    #[tokio::test]
    async fn renewals_sorted_by_urgency() {
        let (status, json) = get_json(app(), "/api/contracts/renewals?as_of=2024-03-01").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["entries"][0]["contractName"], "Aetna Specialty");
        assert_eq!(json["entries"][0]["urgency"], "urgent");
    }

    #[tokio::test]
    async fn action_items_on_fixed_date() {
        let (status, json) = get_json(app(), "/api/contracts/action-items?as_of=2024-04-01").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["items"][0]["severity"], "expired");
        assert_eq!(json["items"][0]["message"], "EXPIRED 18 days ago");
    }

    #[tokio::test]
    async fn portfolio_breakdown() {
        let (status, json) = get_json(app(), "/api/contracts/portfolio").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["statusDistribution"][0]["status"], "active");
        assert_eq!(json["statusDistribution"][0]["count"], 3);
        assert_eq!(json["revenueByPayer"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn unavailable_reader_is_internal_error() {
        let router = lifecycle_routes(LifecycleAppState::new(Arc::new(UnavailableReader)));
        let (status, json) = get_json(router, "/api/contracts/portfolio").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["code"], "CONTRACTS_UNAVAILABLE");
    }
}
