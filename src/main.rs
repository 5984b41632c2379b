// src/main.rs
// everything-mcp - MCP server for the Everything file search engine

use anyhow::Result;
use clap::{Parser, Subcommand};
use everything_mcp::es::args::SearchRequest;
use everything_mcp::{EsClient, EsConfig, EverythingServer};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "everything-mcp")]
#[command(about = "MCP server exposing the Everything file search engine (es.exe)")]
#[command(version)]
struct Cli {
    /// Path to the es.exe executable
    #[arg(long, env = "ES_PATH", global = true)]
    es_path: Option<PathBuf>,

    /// Maximum seconds to wait for one es.exe invocation (0 = no limit)
    #[arg(long, env = "ES_TIMEOUT_SECS", global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run as MCP server over stdio (default)
    Serve,

    /// Run a one-off search from the command line (debugging aid)
    Search {
        /// Search query using Everything syntax
        query: String,

        /// Maximum number of results
        #[arg(short = 'n', long, default_value_t = 50)]
        max_results: u32,
    },
}

async fn run_mcp_server(config: EsConfig) -> Result<()> {
    if config.es_path.components().count() > 1 && !config.es_path.exists() {
        warn!(
            "es executable not found at {}; tool calls will fail until ES_PATH points at it",
            config.es_path.display()
        );
    }

    let server = EverythingServer::new(Arc::new(EsClient::new(config)));

    // Run with stdio transport
    let transport = rmcp::transport::io::stdio();
    let service = rmcp::serve_server(server, transport).await?;
    info!("everything-mcp server running on stdio");
    service.waiting().await?;

    Ok(())
}

async fn run_search(config: EsConfig, query: String, max_results: u32) -> Result<()> {
    let client = EsClient::new(config);
    let mut req = SearchRequest::with_query(query);
    req.max_results = max_results;

    let out = client.run(&everything_mcp::es::args::search_args(&req)).await?;
    if out.stdout.is_empty() {
        println!("No results found");
    } else {
        print!("{}", out.stdout);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Quiet on stderr while the MCP transport owns stdout
    let log_level = match &cli.command {
        Some(Commands::Serve) | None => Level::WARN,
        Some(Commands::Search { .. }) => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = EsConfig::new(cli.es_path, cli.timeout_secs);

    match cli.command {
        None | Some(Commands::Serve) => run_mcp_server(config).await?,
        Some(Commands::Search { query, max_results }) => {
            run_search(config, query, max_results).await?
        }
    }

    Ok(())
}
