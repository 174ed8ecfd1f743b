//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Enable request tracing
    #[serde(default = "default_true")]
    pub enable_tracing: bool,

    /// Compress responses with gzip
    #[serde(default = "default_true")]
    pub enable_compression: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_tracing: true,
            enable_compression: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_flags_defaults() {
        let flags = FeatureFlags::default();
        assert!(flags.enable_tracing);
        assert!(flags.enable_compression);
    }

    #[test]
    fn test_feature_flags_deserialization() {
        let json = r#"{ "enable_tracing": false }"#;

        let flags: FeatureFlags = serde_json::from_str(json).unwrap();
        assert!(!flags.enable_tracing);
        assert!(flags.enable_compression);
    }
}
