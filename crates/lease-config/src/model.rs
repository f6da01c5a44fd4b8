use std::path::PathBuf;

use chrono::NaiveDate;
use lease_domain::{LeaseTerm, MileageAllowance};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Keys accepted by [`Config::set`].
pub const CONFIG_KEYS: [&str; 5] = [
    "lease_start",
    "lease_end",
    "default_allowance",
    "ui_color_enabled",
    "plain_output",
];

/// Stores user-configurable lease settings and CLI preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_lease_start")]
    pub lease_start: NaiveDate,
    #[serde(default = "Config::default_lease_end")]
    pub lease_end: NaiveDate,
    #[serde(default)]
    pub default_allowance: MileageAllowance,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default)]
    pub plain_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lease_start: Self::default_lease_start(),
            lease_end: Self::default_lease_end(),
            default_allowance: MileageAllowance::default(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            plain_output: false,
        }
    }
}

impl Config {
    pub fn default_lease_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 11, 25).unwrap_or(NaiveDate::MIN)
    }

    pub fn default_lease_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 11, 25).unwrap_or(NaiveDate::MAX)
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Validates the configured dates into a [`LeaseTerm`].
    pub fn lease_term(&self) -> Result<LeaseTerm, ConfigError> {
        LeaseTerm::new(self.lease_start, self.lease_end).map_err(ConfigError::from)
    }

    /// Updates a single setting from its textual form.
    ///
    /// Date changes are checked against the other bound so an invalid term is never stored.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "lease_start" | "lease_end" => {
                let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| invalid())?;
                let (start, end) = if key == "lease_start" {
                    (date, self.lease_end)
                } else {
                    (self.lease_start, date)
                };
                LeaseTerm::new(start, end)?;
                self.lease_start = start;
                self.lease_end = end;
            }
            "default_allowance" => {
                self.default_allowance = value.parse().map_err(|_| invalid())?;
            }
            "ui_color_enabled" => self.ui_color_enabled = parse_flag(value).ok_or_else(invalid)?,
            "plain_output" => self.plain_output = parse_flag(value).ok_or_else(invalid)?,
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    /// Current value of a setting, formatted for display.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "lease_start" => self.lease_start.to_string(),
            "lease_end" => self.lease_end.to_string(),
            "default_allowance" => self.default_allowance.label(),
            "ui_color_enabled" => self.ui_color_enabled.to_string(),
            "plain_output" => self.plain_output.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Directory holding configuration, defaulting to `~/.lease_info`.
    pub fn resolve_home_dir() -> PathBuf {
        if let Some(custom) = std::env::var_os("LEASE_INFO_HOME") {
            return PathBuf::from(custom);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".lease_info")
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: Config = serde_json::from_str(r#"{"plain_output": true}"#).unwrap();
        assert!(cfg.plain_output);
        assert_eq!(cfg.lease_start, Config::default_lease_start());
        assert_eq!(cfg.default_allowance, MileageAllowance::TwelveThousand);
    }

    #[test]
    fn set_rejects_inverted_terms() {
        let mut cfg = Config::default();
        let err = cfg.set("lease_end", "2020-01-01").unwrap_err();
        assert!(matches!(err, ConfigError::LeaseTerm(_)));
        assert_eq!(cfg.lease_end, Config::default_lease_end());
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut cfg = Config::default();
        cfg.set("default_allowance", "15k").unwrap();
        cfg.set("plain_output", "on").unwrap();
        assert_eq!(cfg.get("default_allowance").as_deref(), Some("15k"));
        assert_eq!(cfg.get("plain_output").as_deref(), Some("true"));
        assert!(matches!(cfg.set("colour", "1"), Err(ConfigError::UnknownKey(_))));
        assert!(matches!(
            cfg.set("ui_color_enabled", "maybe"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
