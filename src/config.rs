//! Configuration system
//! All settings come from environment variables with sane defaults

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Listen address, e.g. "0.0.0.0:3000"
    pub addr: String,
    /// Graceful shutdown timeout in seconds
    pub graceful_shutdown_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Log format: json, pretty
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// Trust X-Forwarded-For from the reverse proxy
    pub trust_proxy: bool,
    /// Optional IP allow-list
    pub allowed_ips: Option<Vec<String>>,
    /// Header carrying the authenticated user id, set by the auth gateway
    pub identity_user_header: String,
    /// Header carrying the authenticated user email
    pub identity_email_header: String,
    /// Header carrying the comma-separated role list
    pub identity_roles_header: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Load the demo fixtures into the in-memory store at startup
    pub seed_demo: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub security: SecurityConfig,
    pub data: DataConfig,
}

impl AppConfig {
    /// Load configuration from environment variables (prefix TALLER_)
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut settings = Config::builder();

        settings = settings
            .set_default("server.addr", "0.0.0.0:3000")?
            .set_default("server.graceful_shutdown_timeout_secs", 30)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "json")?
            .set_default("security.trust_proxy", true)?
            .set_default("security.identity_user_header", "x-auth-user")?
            .set_default("security.identity_email_header", "x-auth-email")?
            .set_default("security.identity_roles_header", "x-auth-roles")?
            .set_default("data.seed_demo", false)?;

        settings = settings.add_source(
            Environment::with_prefix("TALLER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = settings.build()?.try_deserialize()?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration consistency
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(port_str) = self.server.addr.split(':').next_back() {
            if let Ok(port) = port_str.parse::<u16>() {
                if port < 1024 {
                    return Err(ConfigError::Message("Server port should be >= 1024".to_string()));
                }
            }
        }

        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::Message(format!(
                    "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                )))
            }
        }

        match self.logging.format.to_lowercase().as_str() {
            "json" | "pretty" => {}
            _ => {
                return Err(ConfigError::Message(format!(
                    "Invalid log format: {}. Must be one of: json, pretty",
                    self.logging.format
                )))
            }
        }

        if self.security.identity_roles_header.trim().is_empty() {
            return Err(ConfigError::Message(
                "identity_roles_header must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_defaults() {
        std::env::remove_var("TALLER_SERVER__ADDR");
        std::env::remove_var("TALLER_LOGGING__LEVEL");
        std::env::remove_var("TALLER_LOGGING__FORMAT");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.server.addr, "0.0.0.0:3000");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.security.identity_roles_header, "x-auth-roles");
        assert!(!config.data.seed_demo);
    }

    #[test]
    #[serial]
    fn test_config_validation_invalid_port() {
        std::env::remove_var("TALLER_SERVER__ADDR");

        std::env::set_var("TALLER_SERVER__ADDR", "0.0.0.0:80");

        let result = AppConfig::from_env();
        assert!(result.is_err());

        std::env::remove_var("TALLER_SERVER__ADDR");
    }

    #[test]
    #[serial]
    fn test_config_validation_invalid_log_level() {
        std::env::remove_var("TALLER_LOGGING__LEVEL");

        std::env::set_var("TALLER_LOGGING__LEVEL", "invalid");

        let result = AppConfig::from_env();
        assert!(result.is_err());

        std::env::remove_var("TALLER_LOGGING__LEVEL");
    }
}
