//! Configuration management for the DevCenter documentation engine.
//!
//! Parses `devcenter.toml` with serde and discovers the file in the current
//! directory or any parent. CLI settings are applied on top of the loaded
//! values via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `build.site_title`
//! - `session.token_cookie`
//! - `session.first_name_cookie`
//! - `session.email_cookie`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override content source directory.
    pub source_dir: Option<PathBuf>,
    /// Override static output directory.
    pub output_dir: Option<PathBuf>,
}

const CONFIG_FILENAME: &str = "devcenter.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Content source configuration (paths are relative strings from TOML).
    content: ContentConfigRaw,
    /// Build configuration (paths are relative strings from TOML).
    build: BuildConfigRaw,
    /// Session cookie configuration.
    pub session: SessionConfig,

    /// Resolved content configuration (set after loading).
    #[serde(skip)]
    pub content_resolved: ContentConfig,
    /// Resolved build configuration (set after loading).
    #[serde(skip)]
    pub build_resolved: BuildConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ContentConfigRaw {
    source_dir: Option<String>,
}

/// Resolved content configuration with absolute paths.
#[derive(Debug, Default)]
pub struct ContentConfig {
    /// Directory holding `sections/`, `authors/` and `docs/`.
    pub source_dir: PathBuf,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct BuildConfigRaw {
    output_dir: Option<String>,
    site_title: Option<String>,
}

/// Resolved build configuration.
#[derive(Debug)]
pub struct BuildConfig {
    /// Directory the static site is written to.
    pub output_dir: PathBuf,
    /// Title shown in every generated page.
    pub site_title: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("public"),
            site_title: default_site_title(),
        }
    }
}

fn default_site_title() -> String {
    "Developer Center".to_owned()
}

/// Session cookie configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Cookie holding the signed auth token.
    pub token_cookie: String,
    /// Cookie holding the user's first name.
    pub first_name_cookie: String,
    /// Cookie holding the user's email.
    pub email_cookie: String,
    /// Clock skew tolerance applied to token expiry, in seconds.
    pub clock_skew_secs: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_cookie: "DevCenter.token".to_owned(),
            first_name_cookie: "DevCenter.firstName".to_owned(),
            email_cookie: "DevCenter.email".to_owned(),
            clock_skew_secs: 2,
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
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`session.token_cookie`").
        field: String,
        /// Error message (e.g., "${`TOKEN_COOKIE`} not set").
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `devcenter.toml` in the current directory and its parents, falling
    /// back to defaults relative to the current directory.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
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

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.content_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.build_resolved.output_dir.clone_from(output_dir);
        }
    }

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

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            content: ContentConfigRaw::default(),
            build: BuildConfigRaw::default(),
            session: SessionConfig::default(),
            content_resolved: ContentConfig {
                source_dir: base.join("content"),
            },
            build_resolved: BuildConfig {
                output_dir: base.join("public"),
                site_title: default_site_title(),
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.session.token_cookie, "session.token_cookie")?;
        require_non_empty(&self.session.first_name_cookie, "session.first_name_cookie")?;
        require_non_empty(&self.session.email_cookie, "session.email_cookie")?;

        if self.session.clock_skew_secs < 0 {
            return Err(ConfigError::Validation(
                "session.clock_skew_secs cannot be negative".to_owned(),
            ));
        }

        require_non_empty(&self.build_resolved.site_title, "build.site_title")?;
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        let session = &mut self.session;
        let title = self
            .build
            .site_title
            .as_mut()
            .map(|title| ("build.site_title", title));

        expand::expand_fields(title.into_iter().chain([
            ("session.token_cookie", &mut session.token_cookie),
            ("session.first_name_cookie", &mut session.first_name_cookie),
            ("session.email_cookie", &mut session.email_cookie),
        ]))
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.content_resolved = ContentConfig {
            source_dir: resolve(self.content.source_dir.as_deref(), "content"),
        };
        self.build_resolved = BuildConfig {
            output_dir: resolve(self.build.output_dir.as_deref(), "public"),
            site_title: self
                .build
                .site_title
                .clone()
                .unwrap_or_else(default_site_title),
        };
    }
}
