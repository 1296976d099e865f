use super::env::{Vars, parse_or, process_env, string_or};

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: 8080)
    pub fn from_env() -> Self {
        Self::from_vars(&process_env)
    }

    pub fn from_vars(vars: Vars) -> Self {
        Self {
            ip: string_or(vars, "SERVICE_IP", "127.0.0.1"),
            port: parse_or(vars, "SERVICE_PORT", 8080),
        }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env::vars_from;

    #[test]
    fn should_create_bind_address_from_ip_and_port() {
        // Arrange
        let config = ServerConfig {
            ip: "127.0.0.1".to_string(),
            port: 8080,
        };

        // Act
        let address = config.bind_address();

        // Assert
        assert_eq!(address, "127.0.0.1:8080");
    }

    #[test]
    fn should_read_ip_and_port_from_vars() {
        let vars = vars_from(&[("SERVICE_IP", "0.0.0.0"), ("SERVICE_PORT", "3000")]);

        let config = ServerConfig::from_vars(&vars);

        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn should_fall_back_to_default_port_when_invalid() {
        let vars = vars_from(&[("SERVICE_PORT", "http")]);

        let config = ServerConfig::from_vars(&vars);

        assert_eq!(config.port, 8080);
    }
}
