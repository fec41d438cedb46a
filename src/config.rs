/*
 * Responsibility
 * - Load settings from the environment (DATABASE_URL, SECRET_KEY, CORS, ...)
 * - Validate them up front (missing required values fail startup)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,

    /// HS256 secret shared with the token issuer.
    pub secret_key: String,

    pub app_env: AppEnv,
    pub app_version: String,
    pub cors_allowed_origins: Vec<String>,

    pub token_leeway_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let secret_key =
            std::env::var("SECRET_KEY").map_err(|_| ConfigError::Missing("SECRET_KEY"))?;
        if secret_key.trim().is_empty() {
            return Err(ConfigError::Invalid("SECRET_KEY"));
        }

        let app_env = AppEnv::from_env();

        let app_version = std::env::var("APP_VERSION")
            .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());

        let cors_allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let token_leeway_seconds = std::env::var("TOKEN_LEEWAY_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(0);

        Ok(Self {
            addr,
            database_url,
            secret_key,
            app_env,
            app_version,
            cors_allowed_origins,
            token_leeway_seconds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_requires_secret_key() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/wf")),
                ("SECRET_KEY", None::<&str>),
            ],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(matches!(err, ConfigError::Missing("SECRET_KEY")));
            },
        );
    }

    #[test]
    fn from_env_applies_defaults() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/wf")),
                ("SECRET_KEY", Some("test-secret")),
                ("PORT", None),
                ("APP_ENV", None),
                ("CORS_ALLOWED_ORIGINS", None),
                ("TOKEN_LEEWAY_SECONDS", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.addr.port(), 8000);
                assert_eq!(config.app_env, AppEnv::Development);
                assert!(config.cors_allowed_origins.is_empty());
                assert_eq!(config.token_leeway_seconds, 0);
            },
        );
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/wf")),
                ("SECRET_KEY", Some("test-secret")),
                (
                    "CORS_ALLOWED_ORIGINS",
                    Some("https://a.example.com, https://b.example.com ,"),
                ),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(
                    config.cors_allowed_origins,
                    vec![
                        "https://a.example.com".to_string(),
                        "https://b.example.com".to_string(),
                    ]
                );
            },
        );
    }
}
