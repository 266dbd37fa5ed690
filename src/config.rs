use crate::error::ConfigError;
use crate::mask::format::DateFormat;
use crate::mask::render::SeparatorPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_SEPARATOR: &str = " / ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatterConfig {
    pub format: DateFormat,
    pub separator: String,
    pub separator_policy: SeparatorPolicy,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            format: DateFormat::default(),
            separator: DEFAULT_SEPARATOR.to_string(),
            separator_policy: SeparatorPolicy::default(),
        }
    }
}

impl FormatterConfig {
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Loads a `.yaml`, `.yml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let read = || {
            fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        match extension.as_deref() {
            Some("yaml" | "yml") => Self::from_yaml_str(read()?.as_str()),
            Some("json") => Self::from_json_str(read()?.as_str()),
            _ => Err(ConfigError::UnsupportedExtension(path.to_path_buf())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_SEPARATOR, FormatterConfig};
    use crate::error::ConfigError;
    use crate::mask::format::DateFormat;
    use crate::mask::render::SeparatorPolicy;

    #[test]
    fn defaults() {
        let config = FormatterConfig::default();
        assert_eq!(config.format, DateFormat::DayMonthYear);
        assert_eq!(config.separator, DEFAULT_SEPARATOR);
        assert_eq!(config.separator_policy, SeparatorPolicy::Lazy);
    }

    #[test]
    fn yaml_fills_missing_fields_with_defaults() {
        let config = FormatterConfig::from_yaml_str("format: month_year\nseparator: \"-\"\n")
            .expect("yaml config");
        assert_eq!(config.format, DateFormat::MonthYear);
        assert_eq!(config.separator, "-");
        assert_eq!(config.separator_policy, SeparatorPolicy::Lazy);
    }

    #[test]
    fn json_config() {
        let config = FormatterConfig::from_json_str(
            r#"{"format":"month_day_year","separator":"","separator_policy":"eager"}"#,
        )
        .expect("json config");
        assert_eq!(config.format, DateFormat::MonthDayYear);
        assert_eq!(config.separator, "");
        assert_eq!(config.separator_policy, SeparatorPolicy::Eager);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = FormatterConfig::from_yaml_str("format: day_month_year\nlocale: en\n")
            .expect_err("unknown field");
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn unsupported_extension() {
        let err = FormatterConfig::load("datemask.toml").expect_err("extension");
        assert!(matches!(err, ConfigError::UnsupportedExtension(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = FormatterConfig::load("/nonexistent/datemask.yaml").expect_err("missing");
        assert!(err.to_string().contains("/nonexistent/datemask.yaml"));
    }
}
