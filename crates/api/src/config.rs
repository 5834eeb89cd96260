use fitness_db::config::DEFAULT_PORT;
use fitness_db::DatabaseConfig;

/// Origins allowed when `CORS_ORIGINS` is unset.
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:8000";

/// An environment variable that is set but cannot be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// Built once at startup and shared read-only through
/// [`AppState`](crate::state::AppState).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    pub api_title: String,
    /// Reported by the health probe (default: `1.0.0`).
    pub api_version: String,
    /// Enables debug-level logging when no `RUST_LOG` is set.
    pub debug: bool,
    /// Emit logs as JSON lines (`LOG_FORMAT=json`) instead of plain text.
    pub log_json: bool,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Allowed CORS origins.
    pub cors_origins: Vec<String>,
    pub database: DatabaseConfig,
    /// Deployment metadata. Not used by any route.
    pub azure_subscription_id: String,
    pub azure_resource_group: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                                        |
    /// |-------------------------|------------------------------------------------|
    /// | `HOST`                  | `0.0.0.0`                                      |
    /// | `PORT`                  | `8000`                                         |
    /// | `API_TITLE`             | `Fitness API`                                  |
    /// | `API_VERSION`           | `1.0.0`                                        |
    /// | `DEBUG`                 | `false`                                        |
    /// | `LOG_FORMAT`            | `text` (`json` for JSON lines)                 |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                                           |
    /// | `CORS_ORIGINS`          | `http://localhost:3000,http://localhost:8000`  |
    /// | `DB_SERVER`             | empty                                          |
    /// | `DB_PORT`               | `5432`                                         |
    /// | `DB_NAME`               | empty                                          |
    /// | `DB_USER`               | empty                                          |
    /// | `DB_PASSWORD`           | empty                                          |
    /// | `AZURE_SUBSCRIPTION_ID` | empty                                          |
    /// | `AZURE_RESOURCE_GROUP`  | empty                                          |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = match lookup("PORT") {
            Some(raw) => parse(&raw, "PORT", "a valid port number")?,
            None => 8000,
        };

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => parse(&raw, "REQUEST_TIMEOUT_SECS", "a whole number of seconds")?,
            None => 30,
        };

        let debug = match lookup("DEBUG") {
            Some(raw) => parse_bool(&raw)?,
            None => false,
        };

        let log_json = match lookup("LOG_FORMAT") {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "json" => true,
                "text" | "" => false,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "LOG_FORMAT",
                        expected: "`text` or `json`",
                        value: raw,
                    })
                }
            },
            None => false,
        };

        let cors_origins = parse_origins(&text("CORS_ORIGINS", DEFAULT_CORS_ORIGINS))?;

        let database = DatabaseConfig {
            server: text("DB_SERVER", ""),
            port: match lookup("DB_PORT") {
                Some(raw) => parse(&raw, "DB_PORT", "a valid port number")?,
                None => DEFAULT_PORT,
            },
            name: text("DB_NAME", ""),
            user: text("DB_USER", ""),
            password: text("DB_PASSWORD", ""),
        };

        Ok(Self {
            host: text("HOST", "0.0.0.0"),
            port,
            api_title: text("API_TITLE", "Fitness API"),
            api_version: text("API_VERSION", "1.0.0"),
            debug,
            log_json,
            request_timeout_secs,
            cors_origins,
            database,
            azure_subscription_id: text("AZURE_SUBSCRIPTION_ID", ""),
            azure_resource_group: text("AZURE_RESOURCE_GROUP", ""),
        })
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "fitness_api=debug,tower_http=debug"
        } else {
            "fitness_api=info,tower_http=info"
        }
    }
}

fn parse<T: std::str::FromStr>(
    raw: &str,
    key: &'static str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        expected,
        value: raw.to_string(),
    })
}

fn parse_bool(raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key: "DEBUG",
            expected: "a boolean",
            value: raw.to_string(),
        }),
    }
}

/// Accept either a JSON array of strings or a comma-separated list.
fn parse_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
    let trimmed = raw.trim();
    let origins: Vec<String> = if trimmed.starts_with('[') {
        serde_json::from_str(trimmed).map_err(|_| ConfigError::Invalid {
            key: "CORS_ORIGINS",
            expected: "a JSON array of strings or a comma-separated list",
            value: raw.to_string(),
        })?
    } else {
        trimmed.split(',').map(str::to_string).collect()
    };

    Ok(origins
        .into_iter()
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use assert_matches::assert_matches;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.api_title, "Fitness API");
        assert_eq!(config.api_version, "1.0.0");
        assert!(!config.debug);
        assert!(!config.log_json);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:3000", "http://localhost:8000"]
        );
        assert_eq!(config.database.port, 5432);
        assert!(!config.database.is_configured());
    }

    #[test]
    fn database_settings_are_read() {
        let config = load(&[
            ("DB_SERVER", "db.internal"),
            ("DB_PORT", "6543"),
            ("DB_NAME", "fitness"),
            ("DB_USER", "app"),
            ("DB_PASSWORD", "hunter2"),
        ])
        .unwrap();
        assert!(config.database.is_configured());
        assert_eq!(config.database.port, 6543);
        assert_eq!(config.database.server, "db.internal");
    }

    #[test]
    fn cors_origins_accept_json_array() {
        let config = load(&[("CORS_ORIGINS", r#"["https://a.example", " https://b.example "]"#)])
            .unwrap();
        assert_eq!(
            config.cors_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn cors_origins_accept_comma_list() {
        let config = load(&[("CORS_ORIGINS", "https://a.example, ,https://b.example")]).unwrap();
        assert_eq!(
            config.cors_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn malformed_cors_json_is_rejected() {
        let err = load(&[("CORS_ORIGINS", "[not json")]).unwrap_err();
        assert_matches!(err, ConfigError::Invalid { key: "CORS_ORIGINS", .. });
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert_matches!(err, ConfigError::Invalid { key: "PORT", .. });
        assert_eq!(
            err.to_string(),
            r#"PORT must be a valid port number, got "eighty""#
        );
    }

    #[test]
    fn debug_flag_selects_log_filter() {
        let config = load(&[("DEBUG", "True")]).unwrap();
        assert!(config.debug);
        assert_eq!(
            config.default_log_filter(),
            "fitness_api=debug,tower_http=debug"
        );

        let config = load(&[("DEBUG", "0")]).unwrap();
        assert_eq!(config.default_log_filter(), "fitness_api=info,tower_http=info");
    }

    #[test]
    fn log_format_selects_json() {
        assert!(load(&[("LOG_FORMAT", "JSON")]).unwrap().log_json);
        assert_matches!(
            load(&[("LOG_FORMAT", "xml")]),
            Err(ConfigError::Invalid { key: "LOG_FORMAT", .. })
        );
    }

    #[test]
    fn unknown_debug_value_is_rejected() {
        assert_matches!(
            load(&[("DEBUG", "maybe")]),
            Err(ConfigError::Invalid { key: "DEBUG", .. })
        );
    }
}
