//! # Configuration Management
//!
//! This module defines the configuration structures and functions to manage and
//! load configuration settings for the application.
//!
//! Configuration is "stage" dependent: development, test, production. Every
//! file is rendered through Tera before it is parsed, which makes
//! `{{ get_env(name="PORT", default=5150) }}` available in the YAML.

use std::{
    path::{Path, PathBuf},
    sync::OnceLock,
};

use fs_err as fs;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::{controller::middleware, logger, Error, Result};

static DEFAULT_FOLDER: OnceLock<PathBuf> = OnceLock::new();

fn get_default_folder() -> &'static PathBuf {
    DEFAULT_FOLDER.get_or_init(|| PathBuf::from("config"))
}

/// Main application configuration structure.
///
/// This struct encapsulates various configuration settings. The configuration
/// can be customized through YAML files for different environments.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub logger: Logger,
    pub server: Server,

    /// Custom app settings
    ///
    /// Example:
    /// ```yaml
    /// settings:
    ///   tagline: a fine landing page
    /// ```
    /// And then optionally deserialize it to your own `Settings` type by
    /// accessing `ctx.config.settings`.
    #[serde(default)]
    pub settings: Option<serde_json::Value>,
}

/// Logger configuration
///
/// The logging stack is built on `tracing`. We filter out noise and apply a
/// log level across the app.
///
/// Example (development):
/// ```yaml
/// # config/development.yaml
/// logger:
///   enable: true
///   pretty_backtrace: true
///   level: debug
///   format: compact
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Logger {
    /// Enable log write to stdout
    pub enable: bool,

    /// Enable nice display of backtraces, in development this should be on.
    /// Turn it off in performance sensitive production deployments.
    #[serde(default)]
    pub pretty_backtrace: bool,

    /// Set the logger level.
    ///
    /// * options: `trace` | `debug` | `info` | `warn` | `error`
    pub level: logger::LogLevel,

    /// Set the logger format.
    ///
    /// * options: `compact` | `pretty` | `json`
    pub format: logger::Format,

    /// Override our custom tracing filter.
    ///
    /// Set this to your own filter if you want to see traces from internal
    /// libraries. See more [here](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html#directives)
    pub override_filter: Option<String>,

    /// Set this if you want to write log to file
    pub file_appender: Option<LoggerFileAppender>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LoggerFileAppender {
    /// Enable logger file appender
    pub enable: bool,

    /// Enable write log to file non-blocking
    #[serde(default)]
    pub non_blocking: bool,

    /// Set the logger file appender level.
    ///
    /// * options: `trace` | `debug` | `info` | `warn` | `error`
    pub level: logger::LogLevel,

    /// Set the logger file appender format.
    ///
    /// * options: `compact` | `pretty` | `json`
    pub format: logger::Format,

    /// Set the logger file appender rotation.
    pub rotation: logger::Rotation,

    /// Set the logger file appender dir
    ///
    /// default is `./logs`
    pub dir: Option<String>,

    /// Set log filename prefix
    pub filename_prefix: Option<String>,

    /// Set log filename suffix
    pub filename_suffix: Option<String>,

    /// Set the logger file appender keep max log files.
    pub max_log_files: usize,
}

/// Server configuration structure.
///
/// Example (development):
/// ```yaml
/// # config/development.yaml
/// server:
///   port: {{ get_env(name="PORT", default=5150) }}
///   host: http://localhost
///   middlewares:
///     logger:
///       enable: true
///     catch_panic:
///       enable: true
///     timeout_request:
///       enable: true
///       timeout: 5000
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Server {
    /// The address on which the server should listen on for incoming
    /// connections.
    #[serde(default = "default_binding")]
    pub binding: String,
    /// The port on which the server should listen for incoming connections.
    pub port: i32,
    /// The webserver host
    pub host: String,
    /// Identify via the `x-powered-by` header. An empty value removes the
    /// header.
    pub ident: Option<String>,
    /// Middleware configurations for the server, including request ids,
    /// logging, and error handling.
    #[serde(default)]
    pub middlewares: middleware::Config,
}

fn default_binding() -> String {
    "localhost".to_string()
}

impl Server {
    #[must_use]
    pub fn full_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Creates a new configuration instance based on the specified environment.
    ///
    /// # Errors
    ///
    /// Returns error when could not convert the give path to
    /// [`Config`] struct.
    pub fn new(env: &crate::environment::Environment) -> Result<Self> {
        Self::from_folder(env, get_default_folder().as_path())
    }

    /// Loads configuration settings from a folder for the specified
    /// environment.
    ///
    /// # Errors
    /// Returns error when could not convert the give path to
    /// [`Config`] struct.
    pub fn from_folder(env: &crate::environment::Environment, path: &Path) -> Result<Self> {
        // by order of precedence
        let files = [
            path.join(format!("{env}.local.yaml")),
            path.join(format!("{env}.yaml")),
        ];

        let selected_path = files
            .iter()
            .find(|p| p.exists())
            .ok_or_else(|| Error::Message("no configuration file found".to_string()))?;

        info!(selected_path =? selected_path, "loading environment from");

        let content = fs::read_to_string(selected_path)?;
        let rendered = crate::tera::render_string(&content, &json!({}))?;

        serde_yaml::from_str(&rendered)
            .map_err(|err| Error::YAMLFile(err, selected_path.to_string_lossy().to_string()))
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let content = serde_yaml::to_string(self).unwrap_or_default();
        write!(f, "{content}")
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;
    use tree_fs::TreeBuilder;

    use super::*;
    use crate::{controller::middleware::MiddlewareLayer, environment::Environment};

    const MINIMAL: &str = r"
logger:
  enable: false
  level: info
  format: compact
server:
  port: 5150
  host: http://localhost
";

    #[test]
    fn local_file_takes_precedence() {
        let tree = TreeBuilder::default()
            .add("test.yaml", MINIMAL)
            .add(
                "test.local.yaml",
                &MINIMAL.replace("port: 5150", "port: 6160"),
            )
            .create()
            .unwrap();

        let config = Config::from_folder(&Environment::Test, &tree.root).unwrap();
        assert_eq!(config.server.port, 6160);
    }

    #[test]
    fn missing_optional_sections_use_defaults() {
        let tree = TreeBuilder::default()
            .add("test.yaml", MINIMAL)
            .create()
            .unwrap();

        let config = Config::from_folder(&Environment::Test, &tree.root).unwrap();
        assert_eq!(config.server.binding, "localhost");
        assert_eq!(config.server.full_url(), "http://localhost:5150");
        assert!(config.server.ident.is_none());
        assert!(config.settings.is_none());
        assert!(config.server.middlewares.fallback.is_none());
    }

    #[test]
    fn config_is_rendered_before_parsing() {
        let tree = TreeBuilder::default()
            .add(
                "test.yaml",
                &MINIMAL.replace(
                    "port: 5150",
                    r#"port: {{ get_env(name="LANDING_CONFIG_TEST_UNSET", default=7171) }}"#,
                ),
            )
            .create()
            .unwrap();

        let config = Config::from_folder(&Environment::Test, &tree.root).unwrap();
        assert_eq!(config.server.port, 7171);
    }

    #[test]
    fn no_config_file_is_an_error() {
        let tree = TreeBuilder::default()
            .add("production.yaml", MINIMAL)
            .create()
            .unwrap();

        let err = Config::from_folder(&Environment::Test, &tree.root).unwrap_err();
        assert_eq!(err.to_string(), "no configuration file found");
    }

    #[test]
    fn broken_yaml_names_the_file() {
        let tree = TreeBuilder::default()
            .add("test.yaml", "logger: [")
            .create()
            .unwrap();

        let err = Config::from_folder(&Environment::Test, &tree.root).unwrap_err();
        assert!(matches!(err, Error::YAMLFile(_, ref path) if path.ends_with("test.yaml")));
    }

    #[test]
    #[serial(ident_env)]
    fn production_ident_can_be_emptied_from_env() {
        let previous = std::env::var("IDENT").ok();

        std::env::set_var("IDENT", "");
        let emptied = Config::from_folder(&Environment::Production, Path::new("config"));
        std::env::remove_var("IDENT");
        let defaulted = Config::from_folder(&Environment::Production, Path::new("config"));

        if let Some(value) = previous {
            std::env::set_var("IDENT", value);
        }

        let emptied = emptied.unwrap();
        assert_eq!(emptied.server.ident.as_deref(), Some(""));
        assert!(!middleware::powered_by::new(emptied.server.ident.as_deref()).is_enabled());

        let defaulted = defaulted.unwrap();
        assert_eq!(defaulted.server.ident.as_deref(), Some("landing-core"));
        assert!(middleware::powered_by::new(defaulted.server.ident.as_deref()).is_enabled());
    }
}
