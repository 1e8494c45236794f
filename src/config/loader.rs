//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! policy and currency formatting conventions from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{FormatConventions, PolicyConstants};

/// Loads and provides access to the payroll policy configuration.
///
/// # Directory Structure
///
/// ```text
/// config/mx_lft/
/// ├── policy.yaml    # Policy constants (overtime factor, aguinaldo days, ...)
/// └── locales.yaml   # Number conventions and currency symbols per locale
/// ```
///
/// # Example
///
/// ```no_run
/// use nomina_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/mx_lft").unwrap();
/// println!("Overtime factor: {}", loader.policy().overtime_factor);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: PolicyConstants,
    conventions: FormatConventions,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ConfigLoader {
    /// Returns a loader carrying the built-in defaults without touching the filesystem.
    pub fn builtin() -> Self {
        Self {
            policy: PolicyConstants::default(),
            conventions: FormatConventions::default(),
        }
    }

    /// Builds a loader from already-constructed parts.
    pub fn from_parts(policy: PolicyConstants, conventions: FormatConventions) -> Self {
        Self {
            policy,
            conventions,
        }
    }

    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing or contains invalid YAML.
    ///
    /// ```no_run
    /// use nomina_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/mx_lft")?;
    /// # Ok::<(), nomina_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy = Self::load_yaml::<PolicyConstants>(&path.join("policy.yaml"))?;
        let conventions = Self::load_yaml::<FormatConventions>(&path.join("locales.yaml"))?;

        debug!(
            path = %path.display(),
            locales = conventions.locales.len(),
            "Loaded payroll policy configuration"
        );

        Ok(Self {
            policy,
            conventions,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the policy constants.
    pub fn policy(&self) -> &PolicyConstants {
        &self.policy
    }

    /// Returns the currency formatting conventions.
    pub fn conventions(&self) -> &FormatConventions {
        &self.conventions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::path::PathBuf;

    fn config_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/mx_lft")
    }

    /// Writes `files` into a fresh directory under the system temp dir.
    fn scratch_dir(name: &str, files: &[(&str, &str)]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "nomina-engine-{}-{}",
            name,
            uuid::Uuid::new_v4()
        ));
        fs::create_dir_all(&dir).unwrap();
        for (file, content) in files {
            fs::write(dir.join(file), content).unwrap();
        }
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.policy(), &PolicyConstants::default());
        assert!(loader.conventions().locale("es-MX").is_some());
    }

    #[test]
    fn test_shipped_locales_match_builtin() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.conventions(), &FormatConventions::default());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_locales_file_returns_error() {
        let policy = fs::read_to_string(config_path().join("policy.yaml")).unwrap();
        let dir = scratch_dir("no-locales", &[("policy.yaml", &policy)]);

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("locales.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = scratch_dir("bad-policy", &[("policy.yaml", "overtimeFactor: [unclosed")]);

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_custom_policy_overrides_defaults() {
        let locales = fs::read_to_string(config_path().join("locales.yaml")).unwrap();
        let policy = r#"
overtimeFactor: "2.0"
doubleTimeFactor: "3.0"
aguinaldoDaysDefault: "30"
vacationBonusPercentage: "0.5"
regularHoursWeekly: "48"
regularHoursDaily: "8"
daysPerMonth: "30.4"
timezone: "America/Tijuana"
"#;
        let dir = scratch_dir("custom", &[("policy.yaml", policy), ("locales.yaml", &locales)]);

        let loader = ConfigLoader::load(&dir).unwrap();
        assert_eq!(loader.policy().overtime_factor, Decimal::new(20, 1));
        assert_eq!(loader.policy().aguinaldo_days_default, Decimal::new(30, 0));
        assert_eq!(loader.policy().days_per_month, Decimal::new(304, 1));
        assert_eq!(loader.policy().timezone, "America/Tijuana");
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_builtin_requires_no_files() {
        let loader = ConfigLoader::builtin();
        assert_eq!(loader.policy().regular_hours_daily, Decimal::new(8, 0));
    }
}
