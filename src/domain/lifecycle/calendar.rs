//! Renewal planning calendar and expiry action items.

use chrono::NaiveDate;
use serde::Serialize;

/// Renewals within this many days are urgent.
pub const URGENT_WINDOW_DAYS: i64 = 30;

/// The renewal calendar looks this many days ahead.
pub const RENEWAL_HORIZON_DAYS: i64 = 365;

/// How soon a renewal needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyBucket {
    Urgent,
    Soon,
    Upcoming,
}

impl UrgencyBucket {
    /// Buckets a days-to-expiration count: ≤30 urgent, ≤90 soon, else upcoming.
    pub fn from_days(days: i64) -> Self {
        if days <= URGENT_WINDOW_DAYS {
            UrgencyBucket::Urgent
        } else if days <= super::filter::EXPIRING_WINDOW_DAYS {
            UrgencyBucket::Soon
        } else {
            UrgencyBucket::Upcoming
        }
    }
}

/// One contract on the renewal calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenewalEntry {
    pub contract_name: String,
    pub payer: String,
    pub expiration: NaiveDate,
    /// Month and year of expiry, e.g. "March 2024".
    pub expires_month: String,
    pub days_to_expiration: i64,
    pub urgency: UrgencyBucket,
    pub monthly_revenue_at_risk: u64,
    pub headline: String,
}

/// Severity of an expiry action item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionSeverity {
    /// Already past expiration.
    Expired,
    /// Expires within 30 days.
    Warning,
    Info,
}

/// A follow-up for a contract close to or past expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub contract_name: String,
    pub days_to_expiration: i64,
    pub severity: ActionSeverity,
    pub message: String,
}

impl ActionItem {
    pub fn for_contract(contract_name: &str, days: i64) -> Self {
        let (severity, message) = if days < 0 {
            (ActionSeverity::Expired, format!("EXPIRED {} days ago", days.abs()))
        } else if days <= URGENT_WINDOW_DAYS {
            (ActionSeverity::Warning, format!("Expires in {} days", days))
        } else {
            (ActionSeverity::Info, format!("Expires in {} days", days))
        };

        Self {
            contract_name: contract_name.to_string(),
            days_to_expiration: days,
            severity,
            message,
        }
    }
}
