//! Query parameters for the lifecycle endpoints.
//!
//! Responses reuse the application result types directly.

use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;
use crate::domain::lifecycle::{ContractFilter, ContractStatus, LifecycleError, RiskLevel};

const AS_OF_FORMAT: &str = "%Y-%m-%d";

/// `?as_of=` on its own.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AsOfParams {
    pub as_of: Option<String>,
}

impl AsOfParams {
    pub fn as_of(&self) -> Result<NaiveDate, LifecycleError> {
        Ok(parse_as_of(self.as_of.as_deref())?)
    }
}

/// Parameters of `GET /api/contracts`.
///
/// `status` and `risk` are comma-separated. An absent parameter selects
/// everything; a present but empty one selects nothing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContractListParams {
    pub status: Option<String>,
    pub risk: Option<String>,
    #[serde(default)]
    pub expiring_only: bool,
    pub as_of: Option<String>,
}

impl ContractListParams {
    pub fn filter(&self) -> Result<ContractFilter, LifecycleError> {
        let mut filter = ContractFilter::all().expiring_only(self.expiring_only);
        if let Some(raw) = &self.status {
            filter = filter.with_statuses(parse_list::<ContractStatus>(raw)?);
        }
        if let Some(raw) = &self.risk {
            filter = filter.with_risks(parse_list::<RiskLevel>(raw)?);
        }
        Ok(filter)
    }

    pub fn as_of(&self) -> Result<NaiveDate, LifecycleError> {
        Ok(parse_as_of(self.as_of.as_deref())?)
    }
}

fn parse_list<T>(raw: &str) -> Result<Vec<T>, ValidationError>
where
    T: FromStr<Err = ValidationError>,
{
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(T::from_str)
        .collect()
}

fn parse_as_of(raw: Option<&str>) -> Result<NaiveDate, ValidationError> {
    match raw {
        None => Ok(Utc::now().date_naive()),
        Some(s) => NaiveDate::parse_from_str(s.trim(), AS_OF_FORMAT)
            .map_err(|_| ValidationError::invalid_format("as_of", "expected a YYYY-MM-DD date")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_lists_select_everything() {
        let filter = ContractListParams::default().filter().unwrap();
        assert_eq!(filter, ContractFilter::all());
    }

    #[test]
    fn lists_accept_codes_and_labels() {
        let params = ContractListParams {
            status: Some("active, Expiring Soon".to_string()),
            risk: Some("HIGH".to_string()),
            ..Default::default()
        };
        let filter = params.filter().unwrap();

        assert_eq!(
            filter.statuses,
            vec![ContractStatus::Active, ContractStatus::ExpiringSoon]
        );
        assert_eq!(filter.risks, vec![RiskLevel::High]);
    }

    #[test]
    fn empty_list_selects_nothing() {
        let params = ContractListParams {
            status: Some(String::new()),
            ..Default::default()
        };
        assert!(params.filter().unwrap().statuses.is_empty());
    }

    #[test]
    fn unknown_status_rejected() {
        let params = ContractListParams {
            status: Some("pending".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            params.filter(),
            Err(LifecycleError::InvalidInput(ref err)) if err.field() == "status"
        ));
    }

    #[test]
    fn as_of_parses_iso_date() {
        let params = AsOfParams {
            as_of: Some("2024-01-01".to_string()),
        };
        assert_eq!(
            params.as_of().unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn as_of_rejects_other_formats() {
        let params = AsOfParams {
            as_of: Some("01/01/2024".to_string()),
        };
        assert!(matches!(
            params.as_of(),
            Err(LifecycleError::InvalidInput(ref err)) if err.field() == "as_of"
        ));
    }
}
