use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::ConfigError;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub data: DataSettings,
}

/// Where the HTTP server listens.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerSettings {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// The dataset files loaded once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    pub markets_file: PathBuf,
    pub properties_file: PathBuf,
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be non-zero".to_string(),
            ));
        }
        for (name, path) in [
            ("data.markets_file", &self.data.markets_file),
            ("data.properties_file", &self.data.properties_file),
        ] {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(format!("{name} must be set")));
            }
        }
        Ok(())
    }
}
