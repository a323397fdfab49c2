use std::path::{Path, PathBuf};

use anyhow::Context;
use fractal_input::InputConfig;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "fractal.toml";

/// Contents of fractal.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub input: InputConfig,
}

/// The resolved configuration and where it came from.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// The fractal.toml that was loaded, or None when running on defaults.
    pub config_path: Option<PathBuf>,
    pub config: ProjectConfig,
}

/// Load an explicit config file.
pub fn load_config(path: &Path) -> anyhow::Result<ProjectContext> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ProjectConfig =
        toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))?;
    Ok(ProjectContext {
        config_path: Some(path.to_path_buf()),
        config,
    })
}

/// Find fractal.toml from the current directory, walking up.
pub fn detect_project_context() -> anyhow::Result<ProjectContext> {
    detect_project_context_from(&std::env::current_dir()?)
}

/// Find fractal.toml starting from a specific directory, walking up. Falls
/// back to defaults when no file is found.
pub fn detect_project_context_from(start: &Path) -> anyhow::Result<ProjectContext> {
    let mut dir = start.to_path_buf();
    loop {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            return load_config(&config_path);
        }
        if !dir.pop() {
            log::debug!("No {CONFIG_FILE_NAME} above {}, using defaults", start.display());
            return Ok(ProjectContext {
                config_path: None,
                config: ProjectConfig::default(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_in_start_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[input]\nmove_speed = 9.0\n",
        )
        .unwrap();

        let ctx = detect_project_context_from(dir.path()).unwrap();
        assert_eq!(ctx.config_path, Some(dir.path().join(CONFIG_FILE_NAME)));
        assert_eq!(ctx.config.input.move_speed, 9.0);
        assert_eq!(ctx.config.input.keyboard_buttons, 512);
    }

    #[test]
    fn test_detect_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[input]\nwatch_keys = [\"Up\", \"Down\"]\n",
        )
        .unwrap();
        let nested = dir.path().join("a/b/c");
        std::fs::create_dir_all(&nested).unwrap();

        let ctx = detect_project_context_from(&nested).unwrap();
        assert!(ctx.config_path.is_some());
        assert_eq!(ctx.config.input.watch_keys, vec!["Up", "Down"]);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "").unwrap();
        let ctx = load_config(&path).unwrap();
        assert_eq!(ctx.config.input, InputConfig::default());
    }

    #[test]
    fn test_invalid_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[input]\nmouse_buttons = \"many\"\n").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(&dir.path().join("nope.toml")).is_err());
    }
}
