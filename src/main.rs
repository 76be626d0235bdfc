//! Chatbot Guide - backend for a chatbot history and technology site
//!
//! Serves the timeline and chatbot response APIs plus the chat demo socket.

use anyhow::Result;
use chatbot_guide::{
    config::AppConfig,
    content::{ContentStore, MemoryStore},
    server::ServerBuilder,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "chatbot-guide")]
#[command(author = "Chatbot Guide Team")]
#[command(version)]
#[command(about = "Timeline API and chat demo backend for a chatbot learning site")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "CHATBOT_GUIDE_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP and WebSocket server
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(long)]
        port: Option<u16>,

        /// Directory with the built frontend (overrides config)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Ask the chat demo a question and print the answer
    Ask {
        /// Question text
        #[arg(required = true)]
        question: Vec<String>,
    },

    /// Print the chatbot history timeline
    Timeline,

    /// Show configuration
    Config {
        /// Show default configuration
        #[arg(long)]
        default: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    let config = AppConfig::resolve(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve {
            host,
            port,
            static_dir,
        } => {
            let mut config = config;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if static_dir.is_some() {
                config.server.static_dir = static_dir;
            }
            run_server(config).await?;
        }
        Commands::Ask { question } => {
            ask(&config, &question.join(" ")).await?;
        }
        Commands::Timeline => {
            print_timeline().await?;
        }
        Commands::Config { default } => {
            show_config(if default { None } else { Some(&config) })?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, json: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("chatbot_guide={},tower_http=debug", log_level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn run_server(config: AppConfig) -> Result<()> {
    tracing::info!("Starting Chatbot Guide");

    let server = ServerBuilder::new().config(config).build();
    server.run(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}

async fn ask(config: &AppConfig, question: &str) -> Result<()> {
    let store = MemoryStore::seeded();
    let answer = match store.find_best_match(question).await? {
        Some(record) => record.response,
        None => config.chat.fallback_reply.clone(),
    };
    println!("{}", answer);
    Ok(())
}

async fn print_timeline() -> Result<()> {
    let store = MemoryStore::seeded();
    for item in store.list_timeline().await? {
        println!("{:>6}  {}", item.year, item.title);
        println!("        {}", item.description);
    }
    Ok(())
}

fn show_config(config: Option<&AppConfig>) -> Result<()> {
    let config = config.cloned().unwrap_or_default();
    println!("{}", config.to_toml()?);
    Ok(())
}
