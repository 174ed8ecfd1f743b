//! Home page overview: headline metric cards and the tool catalogue.

use serde::Serialize;

/// A headline metric with its change since the previous period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub delta: String,
}

/// One of the dashboard's tools and what it offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCard {
    pub title: String,
    /// API path backing the tool.
    pub path: String,
    pub description: String,
    pub features: Vec<String>,
}

/// The home page overview.
///
/// The figures are fixed presentation values, not computed from the
/// contract table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub title: String,
    pub welcome: String,
    pub metrics: Vec<MetricCard>,
    pub tools: Vec<ToolCard>,
}

impl DashboardOverview {
    pub fn canned() -> Self {
        Self {
            title: "Healthcare Contract Management Dashboard".to_string(),
            welcome: "Streamline your managed care contract operations with tools designed \
                      for physician practice managers."
                .to_string(),
            metrics: vec![
                metric("Active Contracts", "12", "2"),
                metric("Contracts Expiring Soon", "3", "-1"),
                metric("Monthly Revenue Impact", "$45,230", "8.2%"),
                metric("Risk Score Average", "2.3/5", "-0.5"),
            ],
            tools: vec![
                tool(
                    "Contract Analyzer",
                    "/api/contracts/analyze",
                    "Upload contracts and get instant analysis of:",
                    &[
                        "Key terms & conditions",
                        "Risk assessment",
                        "Revenue opportunities",
                        "Compliance issues",
                    ],
                ),
                tool(
                    "Revenue Impact Simulator",
                    "/api/revenue/simulations",
                    "Model financial scenarios including:",
                    &[
                        "Rate change impacts",
                        "Volume projections",
                        "Bonus calculations",
                        "Cost-benefit analysis",
                    ],
                ),
                tool(
                    "Contract Lifecycle Tracker",
                    "/api/contracts",
                    "Stay on top of all contracts with:",
                    &[
                        "Renewal reminders",
                        "Performance tracking",
                        "Deadline management",
                        "Action item lists",
                    ],
                ),
            ],
        }
    }
}

fn metric(label: &str, value: &str, delta: &str) -> MetricCard {
    MetricCard {
        label: label.to_string(),
        value: value.to_string(),
        delta: delta.to_string(),
    }
}

fn tool(title: &str, path: &str, description: &str, features: &[&str]) -> ToolCard {
    ToolCard {
        title: title.to_string(),
        path: path.to_string(),
        description: description.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
    }
}
