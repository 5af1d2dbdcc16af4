// Copyright 2023. The polls authors all rights reserved.

use crate::env::get_env_or;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub address: String,
    pub port: u16,
}

impl Config {
    /// Reads `HOST` and `PORT` from the environment.
    ///
    /// # Panics
    ///
    /// Panics if `PORT` is set but is not a valid port number.
    pub fn new() -> Self {
        let host = get_env_or("HOST", DEFAULT_HOST);
        let port = match std::env::var("PORT") {
            Ok(port) => port.parse().unwrap_or_else(|_| panic!("PORT must be a port number")),
            Err(_) => DEFAULT_PORT,
        };
        Self::with_host(&host, port)
    }

    fn with_host(host: &str, port: u16) -> Self {
        Self { address: format!("{host}:{port}"), port }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_host("127.0.0.1", DEFAULT_PORT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_listens_on_loopback() {
        let config = Config::default();
        assert_eq!(config.address, "127.0.0.1:8000");
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn address_joins_host_and_port() {
        assert_eq!(Config::with_host("0.0.0.0", 3000).address, "0.0.0.0:3000");
    }
}
