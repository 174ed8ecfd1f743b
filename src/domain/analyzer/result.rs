//! The constant contract analysis returned for every accepted upload.

use serde::Serialize;
use uuid::Uuid;

use crate::domain::lifecycle::RiskLevel;

use super::document::DocumentKind;

/// Key terms of the analyzed contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractSummary {
    pub contract_type: String,
    pub payer: String,
    pub term: String,
    pub auto_renewal: String,
    pub risk_level: RiskLevel,
}

/// One bar of the projected annual revenue chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueLine {
    pub category: String,
    pub annual_value: u64,
}

/// A recommended negotiation or review step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedAction {
    pub title: String,
    pub detail: String,
}

/// Analysis of an uploaded contract.
///
/// Every field except the id and the echoed file details is fixed; no part of
/// the document is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedAnalysisResult {
    pub analysis_id: Uuid,
    pub file_name: String,
    pub document_kind: DocumentKind,
    pub summary: ContractSummary,
    pub risk_factors: Vec<String>,
    pub opportunities: Vec<String>,
    pub financial_impact: Vec<RevenueLine>,
    pub action_items: Vec<RecommendedAction>,
}

impl FixedAnalysisResult {
    /// Builds the canned analysis for `file_name`.
    pub fn canned(file_name: impl Into<String>, document_kind: DocumentKind) -> Self {
        Self {
            analysis_id: Uuid::new_v4(),
            file_name: file_name.into(),
            document_kind,
            summary: ContractSummary {
                contract_type: "Managed Care Agreement".to_string(),
                payer: "BlueCross BlueShield".to_string(),
                term: "3 years".to_string(),
                auto_renewal: "Yes (90-day notice)".to_string(),
                risk_level: RiskLevel::Medium,
            },
            risk_factors: strings(&[
                "Capitation rate below market average",
                "Limited specialist referral network",
                "High patient satisfaction requirements",
            ]),
            opportunities: strings(&[
                "Quality bonus potential: $15K annually",
                "Shared savings program available",
                "Telemedicine reimbursement included",
            ]),
            financial_impact: vec![
                revenue_line("Base Payments", 180_000),
                revenue_line("Quality Bonuses", 15_000),
                revenue_line("Shared Savings", 8_000),
                revenue_line("Total Potential", 203_000),
            ],
            action_items: vec![
                action(
                    "Negotiate capitation rates",
                    "Current rates 12% below regional average",
                ),
                action("Review quality metrics", "Ensure achievable bonus targets"),
                action(
                    "Clarify termination clauses",
                    "90-day notice period may be tight",
                ),
                action(
                    "Verify credential requirements",
                    "All providers must be network-approved",
                ),
            ],
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn revenue_line(category: &str, annual_value: u64) -> RevenueLine {
    RevenueLine {
        category: category.to_string(),
        annual_value,
    }
}

fn action(title: &str, detail: &str) -> RecommendedAction {
    RecommendedAction {
        title: title.to_string(),
        detail: detail.to_string(),
    }
}
