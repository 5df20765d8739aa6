//! Application configuration loaded from environment variables.

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `OWNER_PHONE` — WhatsApp destination for order notifications
/// - `ADMIN_USERNAME` / `ADMIN_PASSWORD` — dashboard login (defaults:
///   `"admin"` / `"admin123"`)
/// - `ULTRA_INSTANCE_ID` / `ULTRA_TOKEN` — UltraMsg credentials; when either
///   is missing, notifications stay in-process
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub owner_phone: String,
    pub admin_username: String,
    pub admin_password: String,
    pub ultramsg_instance: Option<String>,
    pub ultramsg_token: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            owner_phone: std::env::var("OWNER_PHONE").unwrap_or_else(|_| "9800000000".to_string()),
            admin_username: std::env::var("ADMIN_USERNAME")
                .unwrap_or_else(|_| "admin".to_string()),
            admin_password: std::env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| "admin123".to_string()),
            ultramsg_instance: std::env::var("ULTRA_INSTANCE_ID").ok(),
            ultramsg_token: std::env::var("ULTRA_TOKEN").ok(),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            owner_phone: "9800000000".to_string(),
            admin_username: "admin".to_string(),
            admin_password: "admin123".to_string(),
            ultramsg_instance: None,
            ultramsg_token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.admin_username, "admin");
        assert!(config.ultramsg_instance.is_none());
    }

    #[test]
    fn test_addr_formatting() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..Config::default()
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_addr_default() {
        let config = Config::default();
        assert_eq!(config.addr(), "0.0.0.0:3000");
    }
}
