//! Page configuration, read from an optional RON block embedded in the page.

use log::LevelFilter;
use serde::Deserialize;
use showcase_core::{ScrollSettings, ToastTimings, UploadLimits};
use showcase_logging::showcase_warn;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub upload: UploadLimits,
    pub toast: ToastTimings,
    pub scroll: ScrollSettings,
    pub log_level: LogLevel,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid showcase config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid showcase config: {0}")]
    Invalid(&'static str),
}

pub fn parse_config(text: &str) -> Result<ShowcaseConfig, ConfigError> {
    let config: ShowcaseConfig = ron::from_str(text)?;
    if config.upload.max_bytes == 0 {
        return Err(ConfigError::Invalid("upload.max_bytes must be positive"));
    }
    if config.upload.accepted_prefix.is_empty() {
        return Err(ConfigError::Invalid("upload.accepted_prefix must not be empty"));
    }
    if config.toast.visible_ms < config.toast.enter_delay_ms {
        return Err(ConfigError::Invalid(
            "toast.visible_ms must not be shorter than toast.enter_delay_ms",
        ));
    }
    let thresholds = [config.scroll.entrance_threshold, config.scroll.timeline_threshold];
    if thresholds.iter().any(|t| !(0.0..=1.0).contains(t)) {
        return Err(ConfigError::Invalid("scroll thresholds must lie between 0 and 1"));
    }
    Ok(config)
}

/// Parses `text` when present; falls back to defaults on any error.
pub fn load_or_default(text: Option<&str>) -> ShowcaseConfig {
    let Some(text) = text.map(str::trim).filter(|text| !text.is_empty()) else {
        return ShowcaseConfig::default();
    };
    match parse_config(text) {
        Ok(config) => config,
        Err(err) => {
            showcase_warn!("{}; using defaults", err);
            ShowcaseConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{load_or_default, parse_config, ConfigError, LogLevel, ShowcaseConfig};
    use pretty_assertions::assert_eq;
    use showcase_core::DEFAULT_MAX_UPLOAD_BYTES;

    #[test]
    fn empty_struct_yields_defaults() {
        let config = parse_config("()").unwrap();
        assert_eq!(config, ShowcaseConfig::default());
        assert_eq!(config.upload.max_bytes, DEFAULT_MAX_UPLOAD_BYTES);
        assert_eq!(config.toast.visible_ms, 3000);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = parse_config(
            r#"(
                upload: (max_bytes: 1048576),
                scroll: (debounce_ms: 25),
                log_level: Debug,
            )"#,
        )
        .unwrap();

        assert_eq!(config.upload.max_bytes, 1_048_576);
        assert_eq!(config.upload.accepted_prefix, "image/");
        assert_eq!(config.scroll.debounce_ms, 25);
        assert_eq!(config.scroll.header_threshold_px, 100.0);
        assert_eq!(config.log_level.to_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn zero_upload_limit_is_rejected() {
        let err = parse_config("(upload: (max_bytes: 0))").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn toast_hold_shorter_than_entrance_is_rejected() {
        let err = parse_config("(toast: (enter_delay_ms: 500, visible_ms: 100))").unwrap_err();
        assert!(err.to_string().contains("toast.visible_ms"));
    }

    #[test]
    fn timeline_settings_are_configurable_and_checked() {
        let config =
            parse_config("(scroll: (timeline_stagger_ms: 150, timeline_threshold: 0.5))").unwrap();
        assert_eq!(config.scroll.timeline_stagger_ms, 150);
        assert_eq!(config.scroll.timeline_threshold, 0.5);
        assert_eq!(config.scroll.entrance_threshold, 0.1);

        let err = parse_config("(scroll: (entrance_threshold: 1.5))").unwrap_err();
        assert!(err.to_string().contains("scroll thresholds"));
    }

    #[test]
    fn malformed_text_falls_back_to_defaults() {
        assert!(matches!(parse_config("(upload: "), Err(ConfigError::Parse(_))));
        assert_eq!(load_or_default(Some("(upload: ")), ShowcaseConfig::default());
        assert_eq!(load_or_default(Some("   ")), ShowcaseConfig::default());
        assert_eq!(load_or_default(None), ShowcaseConfig::default());
    }
}
