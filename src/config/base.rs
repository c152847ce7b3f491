//! Token generator configuration.

use crate::error::{Error, Result};
use crate::sas::DEFAULT_EXPIRY_SECS;

/// Defaults for the token generator, overridable per invocation.
///
/// Reads from environment variables:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `SAS_SIGNING_KEY` | (none) | Base64 signing key |
/// | `SAS_POLICY_NAME` | (none) | Shared access policy name (`skn`) |
/// | `SAS_EXPIRY_SECS` | `3600` | Token lifetime in seconds |
///
/// # Example
///
/// ```rust
/// use dps_tools::TokenConfig;
///
/// let config = TokenConfig::from_env().with_overrides(Some("c2VjcmV0".into()), None, Some(60));
/// assert_eq!(config.require_key().unwrap(), "c2VjcmV0");
/// assert_eq!(config.expiry_secs, 60);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenConfig {
    /// Base64 signing key
    pub signing_key: Option<String>,
    /// Optional policy name
    pub policy_name: Option<String>,
    /// Token lifetime (default: 3600)
    pub expiry_secs: i64,
}

impl TokenConfig {
    /// Create a new config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            signing_key: lookup("SAS_SIGNING_KEY").filter(|k| !k.trim().is_empty()),
            policy_name: lookup("SAS_POLICY_NAME").filter(|p| !p.is_empty()),
            expiry_secs: lookup("SAS_EXPIRY_SECS")
                .and_then(|e| e.trim().parse().ok())
                .unwrap_or(DEFAULT_EXPIRY_SECS),
        }
    }

    /// Apply explicit values on top of this config. `None` keeps the current value.
    pub fn with_overrides(
        mut self,
        signing_key: Option<String>,
        policy_name: Option<String>,
        expiry_secs: Option<i64>,
    ) -> Self {
        if signing_key.is_some() {
            self.signing_key = signing_key;
        }
        if policy_name.is_some() {
            self.policy_name = policy_name;
        }
        if let Some(expiry) = expiry_secs {
            self.expiry_secs = expiry;
        }
        self
    }

    /// Get the signing key or fail with [`Error::MissingKey`].
    pub fn require_key(&self) -> Result<&str> {
        self.signing_key.as_deref().ok_or(Error::MissingKey)
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            signing_key: None,
            policy_name: None,
            expiry_secs: DEFAULT_EXPIRY_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = TokenConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, TokenConfig::default());
        assert_eq!(config.expiry_secs, 3600);
        assert!(matches!(config.require_key(), Err(Error::MissingKey)));
    }

    #[test]
    fn test_reads_variables() {
        let config = TokenConfig::from_lookup(lookup_from(&[
            ("SAS_SIGNING_KEY", "c2VjcmV0"),
            ("SAS_POLICY_NAME", "registration"),
            ("SAS_EXPIRY_SECS", "7200"),
        ]));
        assert_eq!(config.require_key().unwrap(), "c2VjcmV0");
        assert_eq!(config.policy_name.as_deref(), Some("registration"));
        assert_eq!(config.expiry_secs, 7200);
    }

    #[test]
    fn test_negative_expiry_from_env() {
        let config = TokenConfig::from_lookup(lookup_from(&[("SAS_EXPIRY_SECS", "-5")]));
        assert_eq!(config.expiry_secs, -5);
    }

    #[test]
    fn test_unparseable_expiry_falls_back() {
        let config = TokenConfig::from_lookup(lookup_from(&[("SAS_EXPIRY_SECS", "soon")]));
        assert_eq!(config.expiry_secs, DEFAULT_EXPIRY_SECS);
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = TokenConfig::from_lookup(lookup_from(&[
            ("SAS_SIGNING_KEY", "  "),
            ("SAS_POLICY_NAME", ""),
        ]));
        assert!(config.signing_key.is_none());
        assert!(config.policy_name.is_none());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config = TokenConfig::from_lookup(lookup_from(&[
            ("SAS_SIGNING_KEY", "ZW52"),
            ("SAS_POLICY_NAME", "env-policy"),
        ]))
        .with_overrides(Some("ZmxhZw==".to_string()), None, Some(10));
        assert_eq!(config.require_key().unwrap(), "ZmxhZw==");
        assert_eq!(config.policy_name.as_deref(), Some("env-policy"));
        assert_eq!(config.expiry_secs, 10);
    }
}
