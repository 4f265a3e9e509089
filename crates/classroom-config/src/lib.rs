//! Config module.

use std::env;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// GitHub options.
    pub github: ApiGitHubConfig,
    /// Canvas options.
    pub canvas: ApiCanvasConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
    /// GitHub API personal token.
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct ApiCanvasConfig {
    /// Canvas API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// Canvas instance URL.
    pub url: String,
    /// Canvas API token.
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Tools configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API options.
    pub api: ApiConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    ///
    /// Credentials are left empty: they come from the command line arguments
    /// of each tool.
    pub fn from_env(version: String) -> Config {
        Config {
            api: ApiConfig {
                github: ApiGitHubConfig {
                    connect_timeout: env_to_u64("CLASSROOM_API_GITHUB_CONNECT_TIMEOUT", 5000),
                    root_url: env_to_str(
                        "CLASSROOM_API_GITHUB_ROOT_URL",
                        "https://api.github.com",
                    ),
                    token: String::new(),
                },
                canvas: ApiCanvasConfig {
                    connect_timeout: env_to_u64("CLASSROOM_API_CANVAS_CONNECT_TIMEOUT", 5000),
                    url: String::new(),
                    token: String::new(),
                },
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("CLASSROOM_LOGGING_USE_BUNYAN", false),
            },
            version,
        }
    }

    pub fn from_env_no_version() -> Self {
        Self::from_env("0.0.0".into())
    }
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_e| default.to_string())
}
