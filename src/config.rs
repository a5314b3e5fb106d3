use anyhow::Result;
use std::{env, fs, path::PathBuf};

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_API_URL: &str = "http://localhost:4000";

pub(crate) struct ServerConfig {
    pub(crate) port: u16,
}

impl ServerConfig {
    /// `--port`, then `PORT`, then the default.
    pub(crate) fn load(port: Option<u16>) -> Self {
        let port = port.or_else(|| env_port("PORT")).unwrap_or(DEFAULT_PORT);
        Self { port }
    }
}

pub(crate) struct ClientConfig {
    pub(crate) api_url: String,
}

impl ClientConfig {
    /// `--api-url`, then `MOOD_API_URL`, then the local default.
    pub(crate) fn load(api_url: Option<String>) -> Self {
        let api_url = api_url
            .filter(|value| !value.trim().is_empty())
            .or_else(|| env::var("MOOD_API_URL").ok())
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            api_url: api_url.trim().trim_end_matches('/').to_string(),
        }
    }
}

fn env_port(key: &str) -> Option<u16> {
    let value = env::var(key).ok()?;
    match value.parse() {
        Ok(port) => Some(port),
        Err(err) => {
            tracing::warn!("Invalid {key} value {value:?}: {err}, using default");
            None
        }
    }
}

pub(crate) fn data_dir() -> Result<PathBuf> {
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let dir = PathBuf::from(home).join(".moodboard");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub(crate) fn log_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("mood.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_port_wins() {
        assert_eq!(ServerConfig::load(Some(8123)).port, 8123);
    }

    #[test]
    fn explicit_api_url_is_normalized() {
        let config = ClientConfig::load(Some("http://moods.local:9000/".to_string()));
        assert_eq!(config.api_url, "http://moods.local:9000");
    }

    #[test]
    fn blank_api_url_falls_back() {
        let config = ClientConfig::load(Some("  ".to_string()));
        assert!(config.api_url.starts_with("http"));
    }
}
