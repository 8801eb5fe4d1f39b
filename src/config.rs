use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::planner::PlannerConfig;
use crate::scoring::ScoringConfig;

/// All tunables, loadable from a JSON file. Every field has a default, so a
/// config file only needs the values it overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub scoring: ScoringConfig,
    pub planner: PlannerConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        self.scoring.validate()
    }
}

/// Load configuration from `path`, or defaults when no path is given.
pub fn load_config<P: AsRef<Path>>(path: Option<P>) -> Result<AppConfig> {
    let config = match path {
        Some(path) => {
            let path = path.as_ref();
            let content = fs::read_to_string(path)?;
            let config: AppConfig = serde_json::from_str(&content)?;
            info!(path = %path.display(), "loaded configuration");
            config
        }
        None => AppConfig::default(),
    };

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NutriError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_path() {
        let config = load_config(None::<&Path>).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_overrides() {
        let json = r#"{"planner": {"vegetable_category": "Légumes"}}"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.planner.vegetable_category, "Légumes");
        assert_eq!(config.planner.grain_category, "Grain");
        assert_eq!(config.scoring, ScoringConfig::default());
    }

    #[test]
    fn test_invalid_weights_rejected() {
        let json = r#"{"scoring": {"daily_weights": {"adherence": 0.9}}}"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, NutriError::InvalidConfig(_)));
    }
}
