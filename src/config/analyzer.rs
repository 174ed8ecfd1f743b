//! Contract analyzer configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

const MAX_SIMULATED_LATENCY_MS: u64 = 10_000;

/// Contract analyzer configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerConfig {
    /// Pause before returning an analysis, in milliseconds
    #[serde(default)]
    pub simulated_latency_ms: u64,

    /// Largest accepted upload, in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl AnalyzerConfig {
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    /// Validate analyzer configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.simulated_latency_ms > MAX_SIMULATED_LATENCY_MS {
            return Err(ValidationError::LatencyTooLarge);
        }
        if self.max_upload_bytes == 0 {
            return Err(ValidationError::InvalidUploadLimit);
        }
        Ok(())
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 0,
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_have_no_latency() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.simulated_latency(), Duration::ZERO);
        assert_eq!(config.max_upload_bytes, 10_485_760);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_latency_limit() {
        let config = AnalyzerConfig {
            simulated_latency_ms: 2_000,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.simulated_latency(), Duration::from_secs(2));

        let config = AnalyzerConfig {
            simulated_latency_ms: 10_001,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::LatencyTooLarge));
    }

    #[test]
    fn test_zero_upload_limit_rejected() {
        let config = AnalyzerConfig {
            max_upload_bytes: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidUploadLimit));
    }
}
