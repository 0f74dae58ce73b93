//! Advisor Configuration
//!
//! Everything is read from environment variables at startup. `Default` gives
//! the same values without touching the environment.

use serde::{Deserialize, Serialize};

/// Feature switches that replace the parallel "enhanced" tool variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// Salary, growth and ROI figures in tool results
    pub enable_market_data: bool,
    /// Follow-up suggestions attached to tool results
    pub enable_auto_chain: bool,
    /// Scholarship lookup tool and its chain rule
    pub enable_scholarships: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_market_data: true,
            enable_auto_chain: true,
            enable_scholarships: true,
        }
    }
}

/// How the session store treats transitions outside the whitelist table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Apply, but log and flag on the timeline
    #[default]
    Permissive,
    /// Reject and keep the current stage
    Strict,
}

#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub host: String,
    pub port: u16,
    /// User id used when the caller omits one
    pub default_user_id: String,
    pub features: FeatureFlags,
    pub transition_policy: TransitionPolicy,
    /// Fixed seed for the motivation generator (entropy when absent)
    pub rng_seed: Option<u64>,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            default_user_id: "default_user".to_string(),
            features: FeatureFlags::default(),
            transition_policy: TransitionPolicy::Permissive,
            rng_seed: None,
        }
    }
}

impl AdvisorConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unparsable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let flag = |key: &str, default: bool| {
            lookup(key)
                .map(|v| parse_bool(&v).unwrap_or(default))
                .unwrap_or(default)
        };

        let transition_policy = if flag("ADVISOR_STRICT_TRANSITIONS", false) {
            TransitionPolicy::Strict
        } else {
            TransitionPolicy::Permissive
        };

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            default_user_id: lookup("ADVISOR_DEFAULT_USER")
                .filter(|u| !u.trim().is_empty())
                .unwrap_or(defaults.default_user_id),
            features: FeatureFlags {
                enable_market_data: flag("ADVISOR_ENABLE_MARKET_DATA", true),
                enable_auto_chain: flag("ADVISOR_ENABLE_AUTO_CHAIN", true),
                enable_scholarships: flag("ADVISOR_ENABLE_SCHOLARSHIPS", true),
            },
            transition_policy,
            rng_seed: lookup("ADVISOR_RNG_SEED").and_then(|s| s.parse().ok()),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AdvisorConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AdvisorConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.default_user_id, "default_user");
        assert_eq!(config.features, FeatureFlags::default());
        assert_eq!(config.transition_policy, TransitionPolicy::Permissive);
        assert!(config.rng_seed.is_none());
    }

    #[test]
    fn test_environment_overrides() {
        let config = config_from(&[
            ("PORT", "9090"),
            ("ADVISOR_DEFAULT_USER", "guest"),
            ("ADVISOR_ENABLE_SCHOLARSHIPS", "off"),
            ("ADVISOR_STRICT_TRANSITIONS", "true"),
            ("ADVISOR_RNG_SEED", "42"),
        ]);
        assert_eq!(config.port, 9090);
        assert_eq!(config.default_user_id, "guest");
        assert!(!config.features.enable_scholarships);
        assert!(config.features.enable_auto_chain);
        assert_eq!(config.transition_policy, TransitionPolicy::Strict);
        assert_eq!(config.rng_seed, Some(42));
    }

    #[test]
    fn test_garbage_values_fall_back() {
        let config = config_from(&[("PORT", "eighty"), ("ADVISOR_ENABLE_AUTO_CHAIN", "maybe")]);
        assert_eq!(config.port, 8080);
        assert!(config.features.enable_auto_chain);
    }
}
