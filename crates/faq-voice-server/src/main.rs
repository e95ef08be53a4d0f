mod api;
mod config;
mod error;
mod http;
mod mcp;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{Config, Mode};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stderr only: stdout carries MCP JSON-RPC in stdio mode
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting faq-voice server");

    let config = Config::from_env()?;
    info!(
        mode = ?config.mode,
        http_addr = %config.http_addr,
        mcp_tcp = config.mcp_tcp_addr.is_some(),
        "configuration loaded"
    );

    match config.mode {
        Mode::Http => http::serve(config.http_addr).await?,
        Mode::Mcp => match config.mcp_tcp_addr.as_deref() {
            Some(addr) => mcp::serve_tcp(addr).await?,
            None => mcp::serve_stdio().await?,
        },
    }
    Ok(())
}
