//! Configuration loading and management.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use dur_core::EndOfMonthMode;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// End-of-month mode used when a command does not pass `--eom`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_of_month: Option<EndOfMonthMode>,

    /// Fixed anchor for `compare`. When unset the current UTC time is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<NaiveDateTime>,

    /// Emit JSON instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (DUR_*)
        figment = figment.merge(Env::prefixed("DUR_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for dur.
///
/// On Linux: `~/.config/dur`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("dur"))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_dirs_config_path_ends_with_dur() {
        let path = dirs_config_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "dur");
    }

    #[test]
    fn test_default_config_is_empty() {
        let config = Config::default();
        assert_eq!(config.end_of_month, None);
        assert_eq!(config.anchor, None);
        assert!(!config.json);
    }

    #[test]
    fn test_load_from_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "dur.toml",
                r#"
                end_of_month = "limit"
                anchor = "2024-01-31T00:00:00"
                "#,
            )?;
            let config = Config::load_from(Some(Path::new("dur.toml")))?;
            assert_eq!(config.end_of_month, Some(EndOfMonthMode::Limit));
            assert_eq!(
                config.anchor,
                NaiveDate::from_ymd_opt(2024, 1, 31).unwrap().and_hms_opt(0, 0, 0)
            );
            assert!(!config.json);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("dur.toml", r#"end_of_month = "limit""#)?;
            jail.set_env("DUR_END_OF_MONTH", "preserve");
            jail.set_env("DUR_JSON", "true");
            let config = Config::load_from(Some(Path::new("dur.toml")))?;
            assert_eq!(config.end_of_month, Some(EndOfMonthMode::Preserve));
            assert!(config.json);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_mode_is_rejected() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("dur.toml", r#"end_of_month = "clamp""#)?;
            assert!(Config::load_from(Some(Path::new("dur.toml"))).is_err());
            Ok(())
        });
    }
}
