//! Observability configuration (filter, output format).

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

/// Env var selecting the output format (`json`, `pretty`, `compact`).
pub const FORMAT_ENV: &str = "VALUEKIT_LOG_FORMAT";

/// Env var toggling the record target (`true`/`false`, `1`/`0`).
pub const TARGET_ENV: &str = "VALUEKIT_LOG_TARGET";

/// Output format of log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

impl core::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => bail!("unknown log format '{other}' (expected json, pretty or compact)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives, e.g. `info` or `valuekit_core=trace`.
    pub filter: String,
    pub format: LogFormat,
    pub with_target: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Json,
            with_target: false,
        }
    }
}

impl ObservabilityConfig {
    /// Defaults overridden by `RUST_LOG`, `VALUEKIT_LOG_FORMAT` and `VALUEKIT_LOG_TARGET`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("invalid observability config")
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(filter) = lookup("RUST_LOG").filter(|f| !f.trim().is_empty()) {
            config.filter = filter;
        }
        if let Some(format) = lookup(FORMAT_ENV) {
            config.format = format
                .parse()
                .with_context(|| format!("invalid {FORMAT_ENV}"))?;
        }
        if let Some(target) = lookup(TARGET_ENV) {
            config.with_target = match target.trim() {
                "1" | "true" => true,
                "0" | "false" => false,
                other => bail!("invalid {TARGET_ENV}: '{other}'"),
            };
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let config = ObservabilityConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ObservabilityConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn env_overrides_defaults() {
        let config = ObservabilityConfig::from_lookup(lookup(&[
            ("RUST_LOG", "valuekit_core=trace"),
            (FORMAT_ENV, "Pretty"),
            (TARGET_ENV, "1"),
        ]))
        .unwrap();

        assert_eq!(config.filter, "valuekit_core=trace");
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.with_target);
    }

    #[test]
    fn unknown_format_is_an_error() {
        let err = ObservabilityConfig::from_lookup(lookup(&[(FORMAT_ENV, "xml")])).unwrap_err();
        assert!(format!("{err:#}").contains("unknown log format 'xml'"));
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config = ObservabilityConfig::from_json(r#"{ "format": "compact" }"#).unwrap();
        assert_eq!(config.format, LogFormat::Compact);
        assert_eq!(config.filter, "info");
        assert!(!config.with_target);

        assert!(ObservabilityConfig::from_json(r#"{ "format": "xml" }"#).is_err());
    }
}
