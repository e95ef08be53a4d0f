use std::net::SocketAddr;

use crate::error::AppError;

const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:3000";

/// Which surface the binary serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Http,
    Mcp,
}

impl std::str::FromStr for Mode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "mcp" => Ok(Self::Mcp),
            other => Err(AppError::Config(format!(
                "FAQ_VOICE_MODE must be \"http\" or \"mcp\", got \"{other}\""
            ))),
        }
    }
}

/// Application configuration loaded explicitly from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    /// Listen address for the HTTP API.
    pub http_addr: SocketAddr,
    /// When set in MCP mode, serve MCP over TCP at this address instead of stdio.
    pub mcp_tcp_addr: Option<String>,
}

impl Config {
    /// Optional:
    /// - `FAQ_VOICE_MODE`: `http` (default) or `mcp`
    /// - `FAQ_VOICE_HTTP_ADDR` (default: "0.0.0.0:3000")
    /// - `MCP_TCP_LISTEN_ADDR`
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(
            std::env::var("FAQ_VOICE_MODE").ok(),
            std::env::var("FAQ_VOICE_HTTP_ADDR").ok(),
            std::env::var("MCP_TCP_LISTEN_ADDR").ok(),
        )
    }

    fn from_vars(
        mode: Option<String>,
        http_addr: Option<String>,
        mcp_tcp_addr: Option<String>,
    ) -> Result<Self, AppError> {
        let mode = match mode {
            Some(m) => m.parse()?,
            None => Mode::Http,
        };

        let http_addr = http_addr.unwrap_or_else(|| DEFAULT_HTTP_ADDR.to_string());
        let http_addr = http_addr.parse::<SocketAddr>().map_err(|e| {
            AppError::Config(format!(
                "FAQ_VOICE_HTTP_ADDR is not a socket address ({http_addr}): {e}"
            ))
        })?;

        Ok(Self {
            mode,
            http_addr,
            mcp_tcp_addr: mcp_tcp_addr.filter(|a| !a.trim().is_empty()),
        })
    }
}
