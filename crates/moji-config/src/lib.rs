//! Configuration management for moji.
//!
//! Parses `moji.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [embeds]
//! platforms = ["instagram", "toot", "tweet"]
//!
//! [render]
//! escape_html = true
//! inject_assets = true
//! markdown = true
//! ```

use std::path::{Path, PathBuf};

use moji_embed::{EmbedRegistry, Platform};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override HTML escaping of shorthand fields.
    pub escape_html: Option<bool>,
    /// Override asset injection.
    pub inject_assets: Option<bool>,
    /// Override markdown rendering.
    pub markdown: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "moji.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Embedder selection (platform names as written in TOML).
    embeds: EmbedsConfigRaw,
    /// Rendering options.
    pub render: RenderConfig,

    /// Resolved enabled platforms (set after loading).
    #[serde(skip)]
    pub platforms: Vec<Platform>,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Raw embeds configuration as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EmbedsConfigRaw {
    platforms: Option<Vec<String>>,
}

/// Rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// HTML-escape labels, links and attribute values before interpolation.
    pub escape_html: bool,
    /// Append the embeds' required `<script>` tags once per document.
    pub inject_assets: bool,
    /// Render the surrounding markdown to HTML.
    pub markdown: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            escape_html: false,
            inject_assets: true,
            markdown: true,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `moji.toml` in current directory and parents,
    /// falling back to defaults (all platforms enabled).
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the file names an unknown platform.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::from_toml("")?
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Parse configuration from a TOML string and resolve platforms.
    ///
    /// # Errors
    ///
    /// Returns error if parsing fails or a platform name is unknown.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.resolve_platforms()?;
        Ok(config)
    }

    /// Build the embed registry for the enabled platforms.
    #[must_use]
    pub fn registry(&self) -> EmbedRegistry {
        EmbedRegistry::with_platforms(&self.platforms)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(escape_html) = settings.escape_html {
            self.render.escape_html = escape_html;
        }
        if let Some(inject_assets) = settings.inject_assets {
            self.render.inject_assets = inject_assets;
        }
        if let Some(markdown) = settings.markdown {
            self.render.markdown = markdown;
        }
    }

    fn resolve_platforms(&mut self) -> Result<(), ConfigError> {
        let Some(names) = &self.embeds.platforms else {
            self.platforms = Platform::ALL.to_vec();
            return Ok(());
        };

        let mut platforms = Vec::with_capacity(names.len());
        for name in names {
            let platform = Platform::from_name(name).ok_or_else(|| {
                ConfigError::Validation(format!(
                    "embeds.platforms: unknown platform '{name}' (expected one of: {})",
                    Platform::ALL.map(Platform::name).join(", ")
                ))
            })?;
            if platforms.contains(&platform) {
                tracing::warn!(platform = %platform, "Platform listed twice in embeds.platforms");
                continue;
            }
            platforms.push(platform);
        }

        if platforms.is_empty() {
            tracing::warn!("No platforms enabled, shorthand will be left as text");
        }

        self.platforms = platforms;
        Ok(())
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.config_path = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.platforms, Platform::ALL);
        assert!(!config.render.escape_html);
        assert!(config.render.inject_assets);
        assert!(config.render.markdown);
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_platforms() {
        let config = Config::from_toml(
            r#"
[embeds]
platforms = ["Tweet", "toot"]
"#,
        )
        .unwrap();
        assert_eq!(config.platforms, [Platform::Tweet, Platform::Toot]);
        assert_eq!(config.registry().len(), 2);
    }

    #[test]
    fn test_duplicate_platform_ignored() {
        let config = Config::from_toml("[embeds]\nplatforms = [\"tweet\", \"tweet\"]\n").unwrap();
        assert_eq!(config.platforms, [Platform::Tweet]);
    }

    #[test]
    fn test_empty_platform_list() {
        let config = Config::from_toml("[embeds]\nplatforms = []\n").unwrap();
        assert!(config.platforms.is_empty());
        assert!(config.registry().is_empty());
    }

    #[test]
    fn test_unknown_platform() {
        let err = Config::from_toml("[embeds]\nplatforms = [\"myspace\"]\n").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("unknown platform 'myspace'"), "{message}");
        assert!(message.contains("facebook, instagram"), "{message}");
    }

    #[test]
    fn test_parse_render_config() {
        let config = Config::from_toml(
            r"
[render]
escape_html = true
inject_assets = false
",
        )
        .unwrap();
        assert!(config.render.escape_html);
        assert!(!config.render.inject_assets);
        assert!(config.render.markdown);
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::from_toml("[render\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moji.toml");
        std::fs::write(&path, "[embeds]\nplatforms = [\"tumblr\"]\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.platforms, [Platform::Tumblr]);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(p) if p == path));
    }

    #[test]
    fn test_apply_cli_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moji.toml");
        std::fs::write(&path, "[render]\nescape_html = true\n").unwrap();

        let settings = CliSettings {
            escape_html: Some(false),
            markdown: Some(false),
            ..CliSettings::default()
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();
        assert!(!config.render.escape_html);
        assert!(!config.render.markdown);
        assert!(config.render.inject_assets);
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::from_toml("[render]\nmarkdown = false\n").unwrap();
        config.apply_cli_settings(&CliSettings::default());
        assert!(!config.render.markdown);
    }
}
