//! CLI configuration: generation parameters from TOML and the default save location.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use dungeon::GenerationConfig;

pub fn parse_config(text: &str) -> Result<GenerationConfig> {
    let config: GenerationConfig = toml::from_str(text).context("invalid generation config")?;
    config.validate()?;
    Ok(config)
}

/// Reads `path` when given, otherwise returns the default 80x30 configuration.
pub fn load_config(path: Option<&Path>) -> Result<GenerationConfig> {
    let Some(path) = path else {
        return Ok(GenerationConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    parse_config(&text).with_context(|| format!("in config file {}", path.display()))
}

pub fn default_save_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "Dungeon").map(|proj_dirs| {
        let mut path = proj_dirs.data_dir().to_path_buf();
        path.push("savefile.json");
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = parse_config("width = 60\nmax_items = 5\n").unwrap();
        assert_eq!(config.width, 60);
        assert_eq!(config.max_items, 5);
        assert_eq!(config.height, GenerationConfig::default().height);
        assert_eq!(config.decoration_threshold, 0.8);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse_config("widht = 60\n").is_err());
    }

    #[test]
    fn invalid_dimensions_are_rejected() {
        let err = parse_config("width = 8\n").unwrap_err();
        assert!(err.to_string().contains("8x30"), "unexpected error: {err}");
    }

    #[test]
    fn missing_path_means_default_config() {
        assert_eq!(load_config(None).unwrap(), GenerationConfig::default());
    }

    #[test]
    fn config_file_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dungeon.toml");
        fs::write(&path, "height = 24\nmin_rooms = 10\nmax_rooms = 12\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!((config.height, config.min_rooms, config.max_rooms), (24, 10, 12));
        assert!(load_config(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn default_save_path_is_a_json_file() {
        if let Some(path) = default_save_path() {
            assert_eq!(path.extension().and_then(|ext| ext.to_str()), Some("json"));
        }
    }
}
