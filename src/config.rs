use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::connector::ConnectorColors;
use crate::highlight::HighlightRule;
use crate::style::Rgba;

/// Errors raised while loading or persisting [`DecorConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Overlay settings.
///
/// Missing fields fall back to [`DecorConfig::default`], so older settings files keep loading.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecorConfig {
    pub icon_strip_enabled: bool,
    /// Draw only the first script icon of a row.
    pub compact_script_icons: bool,
    pub connectors_enabled: bool,
    pub main_branch_color: Rgba,
    pub sub_branch_color: Rgba,
    pub headers_enabled: bool,
    /// Evaluated in order; the first matching rule wins.
    pub highlight_rules: Vec<HighlightRule>,
    pub tags_enabled: bool,
    pub layers_enabled: bool,
    pub text_color: Rgba,
    /// Pack labels after the widest icon strip seen so far, so label columns line up.
    pub align_icon_strips: bool,
}

impl Default for DecorConfig {
    fn default() -> Self {
        Self {
            icon_strip_enabled: true,
            compact_script_icons: true,
            connectors_enabled: true,
            main_branch_color: Rgba::GREEN,
            sub_branch_color: Rgba::BLUE,
            headers_enabled: true,
            highlight_rules: Vec::new(),
            tags_enabled: true,
            layers_enabled: true,
            text_color: Rgba::new(0.769, 0.769, 0.769, 1.0),
            align_icon_strips: false,
        }
    }
}

impl DecorConfig {
    /// Configuration with every overlay turned off; used until real settings exist.
    pub fn disabled() -> Self {
        Self {
            icon_strip_enabled: false,
            compact_script_icons: false,
            connectors_enabled: false,
            headers_enabled: false,
            tags_enabled: false,
            layers_enabled: false,
            ..Self::default()
        }
    }

    pub const fn connector_colors(&self) -> ConnectorColors {
        ConnectorColors {
            main: self.main_branch_color,
            sub: self.sub_branch_color,
        }
    }

    /// Loads settings from `path`, writing defaults there first if the file does not exist.
    pub fn load_or_create(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let config = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::debug!(path = %path.display(), "loaded overlay settings");
            return Ok(config);
        }

        let config = Self::default();
        config.save(path)?;
        tracing::info!(path = %path.display(), "no overlay settings found, created defaults");
        Ok(config)
    }

    /// Like [`DecorConfig::load_or_create`], but logs failures and falls back to
    /// [`DecorConfig::disabled`].
    pub fn load_or_disabled(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_or_create(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::error!(
                    error = %err,
                    "overlay settings unavailable, create {} manually; overlays stay off",
                    path.display()
                );
                Self::disabled()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let write_err = |source: io::Error| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let raw = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        fs::write(path, raw).map_err(write_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "tui-treedecor-{name}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn disabled_turns_every_overlay_off() {
        let config = DecorConfig::disabled();
        assert!(!config.icon_strip_enabled);
        assert!(!config.connectors_enabled);
        assert!(!config.headers_enabled);
        assert!(!config.tags_enabled);
        assert!(!config.layers_enabled);
    }

    #[test]
    fn partial_settings_use_defaults() {
        let config: DecorConfig = serde_json::from_str(
            r#"{
                "tags_enabled": false,
                "highlight_rules": [
                    { "prefix": "---", "color": { "r": 1.0, "g": 0.0, "b": 0.0, "a": 1.0 } }
                ]
            }"#,
        )
        .expect("valid settings");

        assert!(!config.tags_enabled);
        assert!(config.layers_enabled);
        assert_eq!(config.highlight_rules, [HighlightRule::new("---", Rgba::RED)]);
        assert_eq!(config.main_branch_color, Rgba::GREEN);
    }

    #[test]
    fn creates_defaults_when_missing_then_reloads() {
        let dir = scratch_dir("create");
        let path = dir.join("nested").join("decor.json");

        let created = DecorConfig::load_or_create(&path).expect("created");
        assert!(path.exists());
        assert_eq!(created, DecorConfig::default());

        let mut edited = created;
        edited.compact_script_icons = false;
        edited.highlight_rules.push(HighlightRule::new("UI", Rgba::BLUE));
        edited.save(&path).expect("saved");

        let reloaded = DecorConfig::load_or_create(&path).expect("reloaded");
        assert_eq!(reloaded, edited);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn unreadable_settings_fall_back_to_disabled() {
        let dir = scratch_dir("broken");
        fs::create_dir_all(&dir).expect("scratch dir");
        let path = dir.join("decor.json");
        fs::write(&path, "{ not json").expect("write");

        assert!(matches!(
            DecorConfig::load_or_create(&path),
            Err(ConfigError::Parse { .. })
        ));
        assert_eq!(DecorConfig::load_or_disabled(&path), DecorConfig::disabled());

        let _ = fs::remove_dir_all(dir);
    }
}
