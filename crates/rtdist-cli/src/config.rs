//! Effective configuration: file, then command-line overrides

use crate::error::CliError;
use rtdist_core::DistributionConfig;
use std::path::Path;

/// Command-line overrides applied on top of the configuration file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Satisfied threshold
    pub satisfied: Option<i64>,
    /// Tolerated threshold
    pub tolerated: Option<i64>,
    /// Locale
    pub locale: Option<String>,
}

/// Load the configuration file if given, else defaults, then apply overrides
pub fn resolve(path: Option<&Path>, overrides: Overrides) -> Result<DistributionConfig, CliError> {
    let mut config = match path {
        Some(path) => DistributionConfig::load(path)?,
        None => DistributionConfig::default(),
    };

    if let Some(satisfied) = overrides.satisfied {
        config.satisfied_threshold = satisfied;
    }
    if let Some(tolerated) = overrides.tolerated {
        config.tolerated_threshold = tolerated;
    }
    if let Some(locale) = overrides.locale {
        config.locale = locale;
    }

    tracing::debug!(
        satisfied = config.satisfied_threshold,
        tolerated = config.tolerated_threshold,
        locale = %config.locale,
        "configuration resolved"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = resolve(None, Overrides::default()).unwrap();
        assert_eq!(config, DistributionConfig::default());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"satisfied_threshold = 200\ntolerated_threshold = 800\n")
            .unwrap();
        let config = resolve(
            Some(file.path()),
            Overrides {
                tolerated: Some(900),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(config.satisfied_threshold, 200);
        assert_eq!(config.tolerated_threshold, 900);
    }

    #[test]
    fn test_missing_file() {
        let err = resolve(Some(Path::new("/nonexistent/rtdist.toml")), Overrides::default())
            .unwrap_err();
        assert!(err.to_string().starts_with("Config error"));
    }
}
