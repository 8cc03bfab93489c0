use config::{Config, ConfigError, Environment, File};
use derive_more::Display;
use serde::Deserialize;
use dotenv::dotenv;
use std::{env, fmt, str::FromStr};

#[derive(Debug, Deserialize, Clone, PartialEq, Display)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    #[display("development")]
    Development,
    #[display("production")]
    Production,
    #[display("testing")]
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

/// Which document store backs the repositories.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Display)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[display("mongo")]
    Mongo,
    #[display("memory")]
    Memory,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Display)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[display("pretty")]
    Pretty,
    #[display("json")]
    Json,
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    // Always taken from APP_ENV in `new`
    #[serde(default = "default_env", skip_deserializing)]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    #[serde(default = "default_storage")]
    pub storage: StorageBackend,

    #[serde(default)]
    pub database_url: String,

    #[serde(default)]
    pub database_name: String,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,

    #[serde(default)]
    pub log_format: Option<LogFormat>,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Portfolio-Catalog".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_worker_count() -> usize {
    num_cpus::get()
}
fn default_storage() -> StorageBackend {
    StorageBackend::Mongo
}
fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors_allowed_origins")
                    .ignore_empty(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        // Fall back to the bare variable names used by older deployments
        if config.database_url.trim().is_empty() {
            config.database_url = env::var("MONGO_URL").unwrap_or_default();
        }
        if config.database_name.trim().is_empty() {
            config.database_name = env::var("DB_NAME").unwrap_or_default();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.storage == StorageBackend::Mongo {
            if self.database_url.trim().is_empty() {
                errors.push("DATABASE_URL (or MONGO_URL) cannot be empty");
            }
            if self.database_name.trim().is_empty() {
                errors.push("DATABASE_NAME (or DB_NAME) cannot be empty");
            }
        }
        if self.worker_count == 0 {
            errors.push("WORKER_COUNT must be at least 1");
        }
        if self.is_production() && self.cors_origins().iter().any(|o| o == "*") {
            errors.push("Wildcard CORS (*) is not allowed in production");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .iter()
            .flat_map(|origin| origin.split(','))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Explicit setting wins; otherwise JSON in production, pretty elsewhere.
    pub fn effective_log_format(&self) -> LogFormat {
        self.log_format.unwrap_or(if self.is_production() {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

trait Redact {
    fn redact(&self) -> &str;
}

impl Redact for str {
    fn redact(&self) -> &str {
        if self.is_empty() {
            "[MISSING]"
        } else {
            "[REDACTED]"
        }
    }
}

impl Redact for String {
    fn redact(&self) -> &str {
        self.as_str().redact()
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("name", &self.name)
            .field("port", &self.port)
            .field("host", &self.host)
            .field("worker_count", &self.worker_count)
            .field("storage", &self.storage)
            .field("database_url", &self.database_url.redact())
            .field("database_name", &self.database_name)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("log_format", &self.log_format)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> AppConfig {
        AppConfig {
            env: AppEnvironment::Development,
            name: "test".into(),
            port: 0,
            host: "127.0.0.1".into(),
            worker_count: 1,
            storage: StorageBackend::Mongo,
            database_url: "mongodb://localhost:27017".into(),
            database_name: "catalog".into(),
            cors_allowed_origins: vec!["*".into()],
            log_format: None,
        }
    }

    #[test]
    fn environment_parses_case_insensitively() {
        assert_eq!(AppEnvironment::from_str("PRODUCTION").unwrap(), AppEnvironment::Production);
        assert!(AppEnvironment::from_str("staging").is_err());
    }

    #[test]
    fn mongo_storage_requires_connection_details() {
        let mut config = base_config();
        config.database_url = "  ".into();
        config.database_name = String::new();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("DATABASE_URL"));
        assert!(err.contains("DATABASE_NAME"));
    }

    #[test]
    fn memory_storage_needs_no_database() {
        let mut config = base_config();
        config.storage = StorageBackend::Memory;
        config.database_url = String::new();
        config.database_name = String::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn wildcard_cors_rejected_in_production() {
        let mut config = base_config();
        config.env = AppEnvironment::Production;
        assert!(config.validate().is_err());

        config.cors_allowed_origins = vec!["https://a.example.com, https://b.example.com".into()];
        assert!(config.validate().is_ok());
        assert_eq!(
            config.cors_origins(),
            vec!["https://a.example.com", "https://b.example.com"]
        );
    }

    #[test]
    fn log_format_defaults_by_environment() {
        let mut config = base_config();
        assert_eq!(config.effective_log_format(), LogFormat::Pretty);

        config.env = AppEnvironment::Production;
        assert_eq!(config.effective_log_format(), LogFormat::Json);

        config.log_format = Some(LogFormat::Pretty);
        assert_eq!(config.effective_log_format(), LogFormat::Pretty);
    }

    #[test]
    fn debug_output_redacts_database_url() {
        let rendered = format!("{:?}", base_config());
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("mongodb://"));
    }
}
