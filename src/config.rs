use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use crate::error::{AppError, AppResult};

pub const DEFAULT_SITE_URL: &str = "https://javascriptair.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub data: DataConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Origin that episode page paths are appended to, without a trailing slash.
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub dir: PathBuf,
}

impl Config {
    pub fn new() -> AppResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("SERVER_PORT") {
            Some(port_str) => port_str.trim().parse().map_err(|_| {
                AppError::Config(format!(
                    "Invalid SERVER_PORT '{}': Must be a valid port number (e.g., 5000)",
                    port_str
                ))
            })?,
            None => 5000,
        };

        let url = lookup("SITE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_string());
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "Invalid SITE_URL '{}': Must start with http:// or https://",
                url
            )));
        }

        let dir = lookup("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./data"));

        Ok(Config {
            server: ServerConfig { host, port },
            site: SiteConfig { url },
            data: DataConfig { dir },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
