/// MCP server exposing the answer pipeline as tools.
///
/// - `generate_answer`: answer a question from FAQ text in a brand voice
/// - `rank_faq`: show which FAQ entries match a question and why
use std::net::SocketAddr;
use std::time::Instant;

use rmcp::{
    Json, ServerHandler, ServiceExt,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
    transport::stdio,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info, warn};

use faq_voice_core::pipeline::rank_faq;

use crate::api;

#[derive(Clone)]
pub struct FaqVoiceServer {
    tool_router: ToolRouter<FaqVoiceServer>,
}

impl FaqVoiceServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for FaqVoiceServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Serve a single MCP session over stdin/stdout until the client quits.
pub async fn serve_stdio() -> anyhow::Result<()> {
    let running = FaqVoiceServer::new().serve(stdio()).await?;
    info!("MCP tools available on stdio");
    running.waiting().await?;
    info!("MCP stdio session finished");
    Ok(())
}

/// Accept MCP clients over TCP, one session task per connection.
pub async fn serve_tcp(addr: &str) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(listen_addr = %addr, "MCP tools available on TCP");

    let server = FaqVoiceServer::new();
    loop {
        let (stream, peer) = listener.accept().await?;
        tokio::spawn(run_session(server.clone(), stream, peer));
    }
}

async fn run_session(server: FaqVoiceServer, stream: TcpStream, peer: SocketAddr) {
    debug!(%peer, "MCP session opened");
    match server.serve(stream).await {
        Ok(running) => {
            if let Err(e) = running.waiting().await {
                warn!(%peer, error = %e, "MCP session task failed");
            }
        }
        Err(e) => error!(%peer, error = %e, "MCP handshake failed"),
    }
    debug!(%peer, "MCP session closed");
}

#[derive(Debug, Deserialize, JsonSchema)]
struct GenerateAnswerParams {
    /// FAQ text made of `Q:` and `A:` lines.
    faq: String,
    /// Brand voice object; `style_rules` and `signoff` are honored.
    brand_voice: serde_json::Value,
    /// The customer's question.
    question: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct RankFaqParams {
    /// FAQ text made of `Q:` and `A:` lines.
    faq: String,
    question: String,
}

#[derive(Debug, Serialize, JsonSchema)]
struct GenerateAnswerResponse {
    answer: String,
    sources: Vec<String>,
    latency_ms: u64,
}

#[derive(Debug, Serialize, JsonSchema)]
struct RankedEntry {
    id: String,
    question: String,
    answer: String,
    relevance_score: u32,
    matched_keywords: Vec<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
struct RankFaqResponse {
    items: Vec<RankedEntry>,
}

fn require(name: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{name} must not be empty"));
    }
    Ok(())
}

#[tool_router]
impl FaqVoiceServer {
    #[tool(description = "Answer a customer question from FAQ text (Q:/A: lines), rewritten in the given brand voice. Returns the answer and the ids of the FAQ entries used.")]
    async fn generate_answer(
        &self,
        Parameters(params): Parameters<GenerateAnswerParams>,
    ) -> Result<Json<GenerateAnswerResponse>, String> {
        require("faq", &params.faq)?;
        require("question", &params.question)?;

        let start = Instant::now();
        let generated = api::generate(&params.faq, params.brand_voice, &params.question)
            .map_err(|e| format!("generate_answer failed: {e}"))?;
        let latency_ms = start.elapsed().as_millis() as u64;
        info!(sources = generated.sources.len(), latency_ms, "answer generated");

        Ok(Json(GenerateAnswerResponse {
            answer: generated.answer,
            sources: generated.sources,
            latency_ms,
        }))
    }

    #[tool(description = "Rank FAQ entries (Q:/A: lines) against a question by keyword-category overlap. Returns matching entries, highest score first.")]
    async fn rank_faq(
        &self,
        Parameters(params): Parameters<RankFaqParams>,
    ) -> Result<Json<RankFaqResponse>, String> {
        require("faq", &params.faq)?;
        require("question", &params.question)?;

        let items = rank_faq(&params.faq, &params.question)
            .into_iter()
            .map(|scored| RankedEntry {
                id: scored.item.id,
                question: scored.item.question,
                answer: scored.item.answer,
                relevance_score: scored.relevance_score,
                matched_keywords: scored.matched_keywords,
            })
            .collect();

        Ok(Json(RankFaqResponse { items }))
    }
}

#[tool_handler]
impl ServerHandler for FaqVoiceServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "faq-voice".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "FAQ answering MCP server. Pass FAQ text as Q:/A: lines. Use generate_answer to \
answer a question in a brand voice (style_rules such as \"Use short sentences.\" or \"Avoid \
jargon.\", plus an optional signoff), and rank_faq to inspect which entries match."
                    .to_string(),
            ),
        }
    }
}
