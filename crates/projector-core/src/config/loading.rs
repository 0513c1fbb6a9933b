//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.projector/config.toml`
//! 3. **Project config** - `./.projector/config.toml`
//! 4. **Explicit config** - path given on the command line
//!
//! CLI flags are merged on top by the caller with [`merge_configs`].

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::types::{ControlsConfig, DisplayConfig, ProjectorConfig, WindowConfig};
use crate::errors::ConfigError;

/// Directory name used for user and project config
const CONFIG_DIR: &str = ".projector";

/// File name inside [`CONFIG_DIR`]
const CONFIG_FILE: &str = "config.toml";

/// Load configuration from the hierarchy of config files.
///
/// Missing user and project files are skipped. An explicit path must exist.
/// Values are not validated here; [`crate::config::validation::to_request`]
/// validates the merge that includes CLI flags.
///
/// # Errors
///
/// Returns an error if a file cannot be read or parsed.
pub fn load_hierarchy(explicit: Option<&Path>) -> Result<ProjectorConfig, ConfigError> {
    let mut config = ProjectorConfig::default();

    if let Some(path) = user_config_path()
        && let Some(user_config) = load_config_file(&path)?
    {
        config = merge_configs(config, user_config);
    }

    if let Some(path) = project_config_path()
        && let Some(project_config) = load_config_file(&path)?
    {
        config = merge_configs(config, project_config);
    }

    if let Some(path) = explicit {
        let explicit_config =
            load_config_file(path)?.ok_or_else(|| ConfigError::ConfigReadError {
                path: path.display().to_string(),
                message: "file not found".to_string(),
            })?;
        config = merge_configs(config, explicit_config);
    }

    info!(event = "core.config.load_completed");
    Ok(config)
}

/// `~/.projector/config.toml`, if a home directory exists
fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// `./.projector/config.toml`, if the working directory is readable
fn project_config_path() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|cwd| cwd.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load a configuration file, returning `None` when it does not exist.
pub fn load_config_file(path: &Path) -> Result<Option<ProjectorConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(event = "core.config.file_missing", path = %path.display());
            return Ok(None);
        }
        Err(e) => {
            return Err(ConfigError::ConfigReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            });
        }
    };

    let config: ProjectorConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    debug!(event = "core.config.file_loaded", path = %path.display());
    Ok(Some(config))
}

/// Merge two configurations, with override_config taking precedence.
///
/// Override values replace base values only if present.
pub fn merge_configs(base: ProjectorConfig, override_config: ProjectorConfig) -> ProjectorConfig {
    ProjectorConfig {
        window: WindowConfig {
            title: override_config.window.title.or(base.window.title),
        },
        display: DisplayConfig {
            width: override_config.display.width.or(base.display.width),
            height: override_config.display.height.or(base.display.height),
            monitor: override_config.display.monitor.or(base.display.monitor),
        },
        controls: ControlsConfig {
            quit_key: override_config.controls.quit_key.or(base.controls.quit_key),
            poll_timeout_ms: override_config
                .controls
                .poll_timeout_ms
                .or(base.controls.poll_timeout_ms),
            frames: override_config.controls.frames.or(base.controls.frames),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_config_file_missing_is_none() {
        let dir = TempDir::new().unwrap();
        let result = load_config_file(&dir.path().join("absent.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_load_config_file_full() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[window]
title = "Unity Hub 3.9.1"

[display]
width = 1280
height = 720
monitor = 1

[controls]
quit_key = "x"
poll_timeout_ms = 5
frames = 100
"#,
        );

        let config = load_config_file(&path).unwrap().unwrap();
        assert_eq!(config.window.title.as_deref(), Some("Unity Hub 3.9.1"));
        assert_eq!(config.display.width, Some(1280));
        assert_eq!(config.display.height, Some(720));
        assert_eq!(config.display.monitor, Some(1));
        assert_eq!(config.controls.quit_key, Some('x'));
        assert_eq!(config.controls.poll_timeout_ms, Some(5));
        assert_eq!(config.controls.frames, Some(100));
    }

    #[test]
    fn test_load_config_file_partial() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[display]\nwidth = 2560\n");

        let config = load_config_file(&path).unwrap().unwrap();
        assert_eq!(config.display.width, Some(2560));
        assert_eq!(config.display.height, None);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_load_config_file_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[display\nwidth = ");

        match load_config_file(&path) {
            Err(ConfigError::ConfigParseError { path: p, .. }) => {
                assert!(p.ends_with("config.toml"))
            }
            other => panic!("expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_config_file_rejects_multi_char_quit_key() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[controls]\nquit_key = \"quit\"\n");
        assert!(matches!(
            load_config_file(&path),
            Err(ConfigError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_load_hierarchy_explicit_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        match load_hierarchy(Some(&missing)) {
            Err(ConfigError::ConfigReadError { message, .. }) => {
                assert_eq!(message, "file not found")
            }
            other => panic!("expected ConfigReadError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_hierarchy_leaves_validation_to_final_merge() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[window]\ntitle = \"Game\"\n[display]\nwidth = 0\n");

        let file_config = load_hierarchy(Some(&path)).unwrap();
        assert_eq!(file_config.display.width, Some(0));
        assert!(matches!(
            file_config.to_request(),
            Err(ConfigError::InvalidResolution { .. })
        ));

        let flags = ProjectorConfig {
            display: DisplayConfig {
                width: Some(1920),
                ..DisplayConfig::default()
            },
            ..ProjectorConfig::default()
        };
        let request = merge_configs(file_config, flags).to_request().unwrap();
        assert_eq!(request.target().to_string(), "1920x1080");
    }

    #[test]
    fn test_merge_configs_override_wins() {
        let base = ProjectorConfig {
            window: WindowConfig {
                title: Some("Base".to_string()),
            },
            display: DisplayConfig {
                width: Some(1920),
                height: Some(1080),
                monitor: Some(1),
            },
            controls: ControlsConfig {
                quit_key: Some('q'),
                poll_timeout_ms: Some(1),
                frames: None,
            },
        };
        let override_config = ProjectorConfig {
            window: WindowConfig {
                title: Some("Override".to_string()),
            },
            display: DisplayConfig {
                width: Some(1280),
                height: None,
                monitor: None,
            },
            controls: ControlsConfig {
                quit_key: None,
                poll_timeout_ms: None,
                frames: Some(10),
            },
        };

        let merged = merge_configs(base, override_config);
        assert_eq!(merged.window.title.as_deref(), Some("Override"));
        assert_eq!(merged.display.width, Some(1280));
        assert_eq!(merged.display.height, Some(1080));
        assert_eq!(merged.display.monitor, Some(1));
        assert_eq!(merged.controls.quit_key, Some('q'));
        assert_eq!(merged.controls.poll_timeout_ms, Some(1));
        assert_eq!(merged.controls.frames, Some(10));
    }

    #[test]
    fn test_merge_configs_empty_override_keeps_base() {
        let base = ProjectorConfig {
            window: WindowConfig {
                title: Some("Game".to_string()),
            },
            ..ProjectorConfig::default()
        };
        let merged = merge_configs(base.clone(), ProjectorConfig::default());
        assert_eq!(merged, base);
    }
}
