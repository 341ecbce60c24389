//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub cache: CacheConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    /// Outgoing mail for the contact form; `None` disables the endpoint
    pub smtp: Option<SmtpConfig>,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Redis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    pub url: String,
    #[serde(default = "default_redis_max_connections")]
    pub max_connections: u32,
}

/// Catalog cache configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_catalog_ttl")]
    pub catalog_ttl_seconds: u64,
}

/// JWT verification configuration (Supabase project secret)
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_jwt_audience")]
    pub audience: String,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// SMTP configuration for contact-form mail
#[derive(Clone, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Envelope sender, e.g. `BookNest <no-reply@booknest.app>`
    pub from: String,
    /// Inbox receiving contact messages
    pub to: String,
}

impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("from", &self.from)
            .field("to", &self.to)
            .finish_non_exhaustive()
    }
}

// Default value functions
fn default_app_name() -> String {
    "booknest".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_redis_max_connections() -> u32 {
    10
}

fn default_catalog_ttl() -> u64 {
    300 // 5 minutes
}

fn default_jwt_audience() -> String {
    "authenticated".to_string()
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn default_smtp_port() -> u16 {
    465
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            app: AppSettings {
                name: var("APP_NAME").unwrap_or_else(default_app_name),
                env: var("APP_ENV")
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: var("API_HOST").unwrap_or_else(default_host),
                port: var("API_PORT")
                    .and_then(|s| s.parse().ok())
                    .ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            database: DatabaseConfig {
                url: var("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: var("DATABASE_MAX_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_connections),
                min_connections: var("DATABASE_MIN_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_min_connections),
            },
            redis: RedisConfig {
                url: var("REDIS_URL").ok_or(ConfigError::MissingVar("REDIS_URL"))?,
                max_connections: var("REDIS_MAX_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_redis_max_connections),
            },
            cache: CacheConfig {
                catalog_ttl_seconds: var("CATALOG_CACHE_TTL_SECONDS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_catalog_ttl),
            },
            jwt: JwtConfig {
                secret: var("SUPABASE_JWT_SECRET")
                    .ok_or(ConfigError::MissingVar("SUPABASE_JWT_SECRET"))?,
                audience: var("SUPABASE_JWT_AUDIENCE").unwrap_or_else(default_jwt_audience),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: var("RATE_LIMIT_REQUESTS_PER_SECOND")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_requests_per_second),
                burst: var("RATE_LIMIT_BURST")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: var("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            smtp: match var("SMTP_HOST").filter(|s| !s.trim().is_empty()) {
                None => None,
                Some(host) => Some(SmtpConfig {
                    host,
                    port: match var("SMTP_PORT") {
                        Some(s) => s
                            .parse()
                            .map_err(|_| ConfigError::InvalidValue("SMTP_PORT", s))?,
                        None => default_smtp_port(),
                    },
                    username: var("SMTP_USERNAME")
                        .ok_or(ConfigError::MissingVar("SMTP_USERNAME"))?,
                    password: var("SMTP_PASSWORD")
                        .ok_or(ConfigError::MissingVar("SMTP_PASSWORD"))?,
                    from: var("CONTACT_FROM").ok_or(ConfigError::MissingVar("CONTACT_FROM"))?,
                    to: var("CONTACT_TO").ok_or(ConfigError::MissingVar("CONTACT_TO"))?,
                }),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const REQUIRED: &[(&str, &str)] = &[
        ("API_PORT", "8080"),
        ("DATABASE_URL", "postgres://localhost/booknest"),
        ("REDIS_URL", "redis://localhost:6379"),
        ("SUPABASE_JWT_SECRET", "super-secret-jwt-token-with-at-least-32-characters"),
    ];

    #[test]
    fn test_environment_is_production() {
        assert!(!Environment::Development.is_production());
        assert!(!Environment::Staging.is_production());
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_environment_is_development() {
        assert!(Environment::Development.is_development());
        assert!(!Environment::Staging.is_development());
        assert!(!Environment::Production.is_development());
    }

    #[test]
    fn test_server_address() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        };
        assert_eq!(config.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = AppConfig::from_lookup(lookup(REQUIRED)).unwrap();

        assert_eq!(config.app.name, "booknest");
        assert_eq!(config.app.env, Environment::Development);
        assert_eq!(config.api.port, 8080);
        assert_eq!(config.jwt.audience, "authenticated");
        assert_eq!(config.cache.catalog_ttl_seconds, 300);
        assert!(config.cors.allowed_origins.is_empty());
        assert!(config.smtp.is_none());
    }

    #[test]
    fn test_from_lookup_missing_required() {
        let err = AppConfig::from_lookup(lookup(&REQUIRED[1..])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("API_PORT")));
    }

    #[test]
    fn test_from_lookup_smtp_and_cors() {
        let mut pairs = REQUIRED.to_vec();
        pairs.extend_from_slice(&[
            ("APP_ENV", "Production"),
            ("CORS_ALLOWED_ORIGINS", "https://booknest.app, https://admin.booknest.app,"),
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_USERNAME", "mailer"),
            ("SMTP_PASSWORD", "hunter2"),
            ("CONTACT_FROM", "BookNest <no-reply@booknest.app>"),
            ("CONTACT_TO", "team@booknest.app"),
        ]);

        let config = AppConfig::from_lookup(lookup(&pairs)).unwrap();

        assert!(config.app.env.is_production());
        assert_eq!(
            config.cors.allowed_origins,
            vec!["https://booknest.app", "https://admin.booknest.app"]
        );
        let smtp = config.smtp.unwrap();
        assert_eq!(smtp.port, 465);
        assert_eq!(smtp.to, "team@booknest.app");
        assert!(!format!("{smtp:?}").contains("hunter2"));
    }

    #[test]
    fn test_from_lookup_partial_smtp_is_an_error() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("SMTP_HOST", "smtp.example.com"));

        let err = AppConfig::from_lookup(lookup(&pairs)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("SMTP_USERNAME")));
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_app_name(), "booknest");
        assert_eq!(default_host(), "127.0.0.1");
        assert_eq!(default_max_connections(), 20);
        assert_eq!(default_redis_max_connections(), 10);
    }
}
