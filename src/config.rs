use std::net::{IpAddr, SocketAddr, ToSocketAddrs};

use anyhow::Context;

pub const DEFAULT_SERVICE_NAME: &str = "rust";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub service_name: String,
    pub rng_seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            rng_seed: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {:?}", raw))?,
            None => defaults.port,
        };

        let rng_seed = match lookup("MOCK_RNG_SEED") {
            Some(raw) => Some(
                raw.parse::<u64>()
                    .with_context(|| format!("MOCK_RNG_SEED must be an unsigned integer, got {:?}", raw))?,
            ),
            None => None,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            service_name: lookup("SERVICE_NAME").unwrap_or(defaults.service_name),
            rng_seed,
        })
    }

    /// Listen address. IP literals (v4 or v6) are used as-is, anything else is resolved.
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        if let Ok(ip) = self.host.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, self.port));
        }

        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .with_context(|| format!("Invalid listen host {:?}", self.host))?
            .next()
            .with_context(|| format!("No address found for host {:?}", self.host))
    }
}
