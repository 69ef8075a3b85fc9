//! Blueprint Server
//!
//! HTTP front end and CLI for the workflow designer in `blueprint_core`.

mod api;
mod config;
mod error;

use anyhow::Context;
use blueprint_core::{AgentBuilder, BuilderConfig};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::api::{create_router, AppState};
use crate::config::ServerConfig;

#[derive(Parser, Clone)]
#[command(author, version, about = "Blueprint - agent workflow designer")]
struct Args {
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand, Clone)]
enum CliCommand {
    /// Start the HTTP server (default)
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Analyze a prompt and print the result
    Analyze {
        /// The request to analyze
        text: String,
    },
    /// Analyze, recommend and optimize in one pass
    Design {
        text: String,
        /// speed, cost or reliability
        #[arg(short, long, default_value = "speed")]
        goal: String,
    },
    /// List catalog tools
    Tools,
    /// List node patterns
    Patterns,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run_server(builder: AgentBuilder, config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let info = builder.server_info();
    let app = create_router(AppState::new(builder));

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(
        %addr,
        version = %info.version,
        tools = info.tools_available,
        patterns = info.patterns_available,
        "Blueprint server listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let server_config = ServerConfig::from_env();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server_config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let builder = AgentBuilder::from_config(BuilderConfig::from_env()).await?;

    match args.command {
        Some(CliCommand::Analyze { text }) => print_json(&builder.analyze(&text)),
        Some(CliCommand::Design { text, goal }) => print_json(&builder.design(&text, &goal)?),
        Some(CliCommand::Tools) => print_json(&builder.list_tools()),
        Some(CliCommand::Patterns) => print_json(&builder.list_patterns()),
        Some(CliCommand::Serve { host, port }) => {
            run_server(builder, server_config.with_overrides(host, port)).await
        }
        None => run_server(builder, server_config).await,
    }
}
