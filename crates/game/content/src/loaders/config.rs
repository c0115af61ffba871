//! Game configuration loader.

use std::path::Path;

use tactics_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys left out of the file keep their [`GameConfig::default`] values;
    /// leaving out `movement_range` or `max_height_difference` means
    /// unlimited.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config: GameConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn partial_config_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "attack_range = 2\nmovement_range = 4\n").unwrap();

        let config = ConfigLoader::load(&path).unwrap();

        assert_eq!(config.attack_range, 2);
        assert_eq!(config.movement_range, Some(4));
        assert_eq!(config.max_hit_points, GameConfig::MAX_HIT_POINTS);
        assert_eq!(config.max_height_difference, None);
    }

    #[test]
    fn empty_file_is_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        assert_eq!(ConfigLoader::load(&path).unwrap(), GameConfig::default());
    }

    #[test]
    fn missing_file_names_the_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.toml");

        let error = ConfigLoader::load(&path).unwrap_err().to_string();
        assert!(error.contains("absent.toml"), "{error}");
    }

    #[test]
    fn wrong_types_are_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "attack_range = \"far\"\n").unwrap();

        assert!(ConfigLoader::load(&path).is_err());
    }
}
