//! Configuration management for sitegen.
//!
//! Parses `sitegen.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. Relative paths in
//! the config file are resolved against the directory the file lives in.
//!
//! CLI settings can be applied during load via [`CliSettings`].

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the markdown content directory.
    pub content_dir: Option<PathBuf>,
    /// Override the static asset directory.
    pub static_dir: Option<PathBuf>,
    /// Override the HTML template path.
    pub template: Option<PathBuf>,
    /// Override the output directory.
    pub output_dir: Option<PathBuf>,
    /// Override the base path used for link rewriting.
    pub base_path: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sitegen.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Build configuration (paths are relative strings from TOML).
    build: BuildSectionRaw,
    /// Site-wide settings.
    pub site: SiteSection,

    /// Resolved build configuration (set after loading).
    #[serde(skip)]
    pub build_resolved: BuildSection,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw build configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct BuildSectionRaw {
    content_dir: Option<String>,
    static_dir: Option<String>,
    template: Option<String>,
    output_dir: Option<String>,
}

/// Resolved build configuration with paths anchored to the config directory.
#[derive(Debug, Clone, Default)]
pub struct BuildSection {
    /// Directory holding markdown sources.
    pub content_dir: PathBuf,
    /// Directory holding static assets.
    pub static_dir: PathBuf,
    /// HTML template with title and content placeholders.
    pub template: PathBuf,
    /// Directory the finished site is written to.
    pub output_dir: PathBuf,
}

/// Site-wide settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// URL prefix applied to root-relative links, e.g. `/` or `/docs/`.
    ///
    /// Must start with `/`; a trailing `/` is appended when missing.
    pub base_path: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            base_path: "/".to_owned(),
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

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sitegen.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing
    /// CLI arguments to take precedence over config file values. The merged
    /// configuration is validated before it is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist, parsing
    /// fails, or the merged configuration is invalid.
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
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        config.normalize_base_path();

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(content_dir) = &settings.content_dir {
            self.build_resolved.content_dir.clone_from(content_dir);
        }
        if let Some(static_dir) = &settings.static_dir {
            self.build_resolved.static_dir.clone_from(static_dir);
        }
        if let Some(template) = &settings.template {
            self.build_resolved.template.clone_from(template);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.build_resolved.output_dir.clone_from(output_dir);
        }
        if let Some(base_path) = &settings.base_path {
            self.site.base_path.clone_from(base_path);
        }
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

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            build: BuildSectionRaw::default(),
            site: SiteSection::default(),
            build_resolved: BuildSection {
                content_dir: base.join("content"),
                static_dir: base.join("static"),
                template: base.join("template.html"),
                output_dir: base.join("public"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically at the end of [`Config::load`], after CLI
    /// settings have been applied.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.base_path, "site.base_path")?;
        if !self.site.base_path.starts_with('/') {
            return Err(ConfigError::Validation(
                "site.base_path must start with '/'".to_owned(),
            ));
        }
        Ok(())
    }

    /// Link rewriting splices the base path in front of root-relative
    /// URLs, so it has to end in a slash.
    fn normalize_base_path(&mut self) {
        if !self.site.base_path.ends_with('/') {
            self.site.base_path.push('/');
        }
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.build_resolved = BuildSection {
            content_dir: resolve(self.build.content_dir.as_deref(), "content"),
            static_dir: resolve(self.build.static_dir.as_deref(), "static"),
            template: resolve(self.build.template.as_deref(), "template.html"),
            output_dir: resolve(self.build.output_dir.as_deref(), "public"),
        };
    }
}
