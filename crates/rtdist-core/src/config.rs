//! Distribution graph configuration

use crate::error::{ConfigError, ConfigResult};
use crate::label::LabelTemplates;
use crate::template::NumberFormat;
use crate::Thresholds;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Distribution graph configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionConfig {
    /// Upper bound (inclusive) of the satisfied bucket, in milliseconds
    #[serde(default = "default_satisfied_threshold")]
    pub satisfied_threshold: i64,
    /// Upper bound (inclusive) of the tolerated bucket, in milliseconds
    #[serde(default = "default_tolerated_threshold")]
    pub tolerated_threshold: i64,
    /// Locale of the built-in label bundle
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Custom label templates, overriding the locale bundle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates: Option<TemplateConfig>,
}

/// Custom label templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Satisfied label, `{0}` is the satisfied threshold
    pub satisfied: String,
    /// Tolerated label, `{0}` and `{1}` are the satisfied and tolerated thresholds
    pub tolerated: String,
    /// Untolerated label, `{0}` is the tolerated threshold
    pub untolerated: String,
    /// Failed label
    pub failed: String,
    /// Digit grouping separator; empty disables grouping
    #[serde(default = "default_grouping_separator")]
    pub grouping_separator: String,
}

fn default_satisfied_threshold() -> i64 {
    500
}

fn default_tolerated_threshold() -> i64 {
    1500
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_grouping_separator() -> String {
    ",".to_string()
}

impl TemplateConfig {
    /// Number format from the grouping separator
    pub fn number_format(&self) -> ConfigResult<NumberFormat> {
        let mut chars = self.grouping_separator.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(NumberFormat::plain()),
            (Some(sep), None) => Ok(NumberFormat::grouped(sep)),
            _ => Err(ConfigError::InvalidGroupingSeparator(
                self.grouping_separator.clone(),
            )),
        }
    }
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            satisfied_threshold: default_satisfied_threshold(),
            tolerated_threshold: default_tolerated_threshold(),
            locale: default_locale(),
            templates: None,
        }
    }
}

impl DistributionConfig {
    /// Parse from TOML text
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a TOML file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        tracing::debug!("Loading distribution config from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Threshold pair
    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(self.satisfied_threshold, self.tolerated_threshold)
    }

    /// Resolve label templates: custom ones if set, else the locale bundle
    pub fn label_templates(&self) -> ConfigResult<LabelTemplates> {
        match &self.templates {
            Some(custom) => {
                LabelTemplates::new(
                    &custom.satisfied,
                    &custom.tolerated,
                    &custom.untolerated,
                    &custom.failed,
                    custom.number_format()?,
                )
            }
            None => LabelTemplates::for_locale(&self.locale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bucket, LabelFormatter};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_default() {
        let config = DistributionConfig::default();
        assert_eq!(config.satisfied_threshold, 500);
        assert_eq!(config.tolerated_threshold, 1500);
        assert_eq!(config.locale, "en");
        assert!(config.templates.is_none());
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config = DistributionConfig::from_toml_str("satisfied_threshold = 100").unwrap();
        assert_eq!(config.thresholds(), Thresholds::new(100, 1500));
    }

    #[test]
    fn test_config_accepts_inverted_and_negative() {
        let config = DistributionConfig::from_toml_str(
            r#"
            satisfied_threshold = 500
            tolerated_threshold = -100
        "#,
        )
        .unwrap();
        assert_eq!(config.thresholds(), Thresholds::new(500, -100));
    }

    #[test]
    fn test_custom_templates() {
        let config = DistributionConfig::from_toml_str(
            r#"
            satisfied_threshold = 1000
            tolerated_threshold = 2000

            [templates]
            satisfied = "<= {0}"
            tolerated = "({0}, {1}]"
            untolerated = "> {0}"
            failed = "KO"
            grouping_separator = ""
        "#,
        )
        .unwrap();
        let formatter = LabelFormatter::new(config.label_templates().unwrap());
        assert_eq!(
            formatter.label_for(Bucket::Tolerated, config.thresholds()),
            "(1000, 2000]"
        );
        assert_eq!(formatter.label_for(Bucket::Failed, config.thresholds()), "KO");
    }

    #[test]
    fn test_grouping_separator() {
        let custom = |sep: &str| {
            DistributionConfig::from_toml_str(&format!(
                r#"
                satisfied_threshold = 1500

                [templates]
                satisfied = "<= {{0}}"
                tolerated = "({{0}}, {{1}}]"
                untolerated = "> {{0}}"
                failed = "KO"
                grouping_separator = "{sep}"
            "#
            ))
            .unwrap()
        };

        let config = custom(".");
        let formatter = LabelFormatter::new(config.label_templates().unwrap());
        assert_eq!(formatter.label_for(Bucket::Satisfied, config.thresholds()), "<= 1.500");

        let err = custom("::").label_templates().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidGroupingSeparator(ref sep) if sep == "::"));
    }

    #[test]
    fn test_unknown_locale() {
        let config = DistributionConfig::from_toml_str(r#"locale = "xx""#).unwrap();
        assert!(matches!(
            config.label_templates(),
            Err(ConfigError::UnknownLocale(_))
        ));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            DistributionConfig::from_toml_str("satisfied_threshold = \"fast\""),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"satisfied_threshold = 250\nlocale = \"fr\"\n")
            .unwrap();
        let config = DistributionConfig::load(file.path()).unwrap();
        assert_eq!(config.satisfied_threshold, 250);
        assert_eq!(config.label_templates().unwrap(), LabelTemplates::french());
    }

    #[test]
    fn test_load_missing_file() {
        let err = DistributionConfig::load(Path::new("/nonexistent/rtdist.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_config_serialize() {
        let toml = toml::to_string(&DistributionConfig::default()).unwrap();
        assert!(toml.contains("satisfied_threshold = 500"));
        assert!(toml.contains("tolerated_threshold = 1500"));
        assert!(!toml.contains("templates"));
    }
}
