use std::{env, net::SocketAddr};

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub form_port: u16,
    pub query_port: u16,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("FORM_BIND_PORT must be a valid u16")]
    InvalidFormPort,
    #[error("QUERY_BIND_PORT must be a valid u16")]
    InvalidQueryPort,
    #[error("FORM_BIND_PORT and QUERY_BIND_PORT must differ")]
    PortConflict,
    #[error("invalid bind address or port")]
    InvalidSocket,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
        let form_port = env::var("FORM_BIND_PORT")
            .ok()
            .map(|value| {
                value
                    .parse::<u16>()
                    .map_err(|_| ConfigError::InvalidFormPort)
            })
            .transpose()?
            .unwrap_or(8080);
        let query_port = env::var("QUERY_BIND_PORT")
            .ok()
            .map(|value| {
                value
                    .parse::<u16>()
                    .map_err(|_| ConfigError::InvalidQueryPort)
            })
            .transpose()?
            .unwrap_or(8081);

        if form_port == query_port {
            return Err(ConfigError::PortConflict);
        }

        let config = Self {
            bind_addr,
            form_port,
            query_port,
        };

        let _ = config.form_socket()?;
        let _ = config.query_socket()?;
        Ok(config)
    }

    pub fn form_socket(&self) -> Result<SocketAddr, ConfigError> {
        self.socket(self.form_port)
    }

    pub fn query_socket(&self) -> Result<SocketAddr, ConfigError> {
        self.socket(self.query_port)
    }

    fn socket(&self, port: u16) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_addr, port)
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidSocket)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    // from_env reads process-wide variables; tests that touch them must not
    // interleave.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn parse_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|err| err.into_inner());
        env::remove_var("BIND_ADDR");
        env::remove_var("FORM_BIND_PORT");
        env::remove_var("QUERY_BIND_PORT");

        let config = Config::from_env().expect("config should parse");
        assert_eq!(config.bind_addr, "127.0.0.1");
        assert_eq!(config.form_port, 8080);
        assert_eq!(config.query_port, 8081);
    }

    #[test]
    fn invalid_form_port_fails() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|err| err.into_inner());
        env::remove_var("BIND_ADDR");
        env::remove_var("QUERY_BIND_PORT");
        env::set_var("FORM_BIND_PORT", "not-a-port");

        let err = Config::from_env().expect_err("expected invalid port error");
        assert!(matches!(err, ConfigError::InvalidFormPort));

        env::remove_var("FORM_BIND_PORT");
    }

    #[test]
    fn equal_ports_fail() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|err| err.into_inner());
        env::remove_var("BIND_ADDR");
        env::set_var("FORM_BIND_PORT", "9100");
        env::set_var("QUERY_BIND_PORT", "9100");

        let err = Config::from_env().expect_err("expected port conflict error");
        assert!(matches!(err, ConfigError::PortConflict));

        env::remove_var("FORM_BIND_PORT");
        env::remove_var("QUERY_BIND_PORT");
    }

    #[test]
    fn invalid_bind_addr_fails() {
        let config = Config {
            bind_addr: "not an address".to_string(),
            form_port: 8080,
            query_port: 8081,
        };

        let err = config.form_socket().expect_err("expected socket error");
        assert!(matches!(err, ConfigError::InvalidSocket));
    }
}
