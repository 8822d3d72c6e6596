use cadastro::client::{self, HttpGateway, render};
use cadastro::config;
use cadastro::core::record::RecordInput;
use cadastro::errors::Result;
use cadastro::gateway::RecordGateway;
use cadastro::http::{AppState, build_router};
use cadastro::store::auth::{ServiceAccountKey, TokenProvider};
use cadastro::store::sheets::SheetsStore;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cadastro", about = "Registration records over a shared spreadsheet")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the record gateway HTTP server
    Serve {
        /// Path to the configuration file
        #[arg(long, default_value = "config.toml")]
        config: PathBuf,
    },
    /// Submit one registration to a running gateway
    Submit {
        /// Patient name
        #[arg(long)]
        nome: String,
        /// Street address
        #[arg(long)]
        endereco: String,
        /// Health plan name
        #[arg(long)]
        plano: String,
        /// Plan card number
        #[arg(long)]
        carteirinha: String,
        /// Contact phone
        #[arg(long)]
        telefone: String,
        /// Base URL of the gateway
        #[arg(long, default_value = "http://localhost:3000")]
        api_url: String,
    },
    /// List every stored registration from a running gateway
    List {
        /// Base URL of the gateway
        #[arg(long, default_value = "http://localhost:3000")]
        api_url: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    let cli = Cli::parse();
    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

async fn run(command: Command) -> Result<()> {
    match command {
        Command::Serve { config } => serve(&config).await,
        Command::Submit {
            nome,
            endereco,
            plano,
            carteirinha,
            telefone,
            api_url,
        } => {
            let input = RecordInput {
                nome,
                endereco,
                plano,
                carteirinha,
                telefone,
            };
            submit(&HttpGateway::new(api_url), &input).await
        }
        Command::List { api_url } => {
            println!("{}", render::LOADING);
            println!("{}", client::render_listing(&HttpGateway::new(api_url)).await);
            Ok(())
        }
    }
}

async fn serve(config_path: &Path) -> Result<()> {
    let app_config = config::load_config(config_path)
        .inspect_err(|e| error!("failed to load configuration: {e}"))?;
    info!("configuration loaded from {}", config_path.display());

    let key = ServiceAccountKey::from_file(app_config.resolve_credentials_path()?)
        .inspect_err(|e| error!("failed to load service account key: {e}"))?;
    info!("service account key loaded for {}", key.client_email);

    let http = reqwest::Client::new();
    let auth = TokenProvider::new(key, app_config.scope.clone(), http.clone())
        .inspect_err(|e| error!("failed to prepare spreadsheet credentials: {e}"))?;
    let auth = Arc::new(auth);
    let store = Arc::new(SheetsStore::new(
        http,
        auth,
        app_config.spreadsheet_id.clone(),
        app_config.sheet_name.clone(),
    ));
    let state = AppState {
        gateway: RecordGateway::new(store),
    };

    let listener = tokio::net::TcpListener::bind(&app_config.bind_addr)
        .await
        .inspect_err(|e| error!("failed to bind {}: {e}", app_config.bind_addr))?;
    info!("record gateway listening on {}", app_config.bind_addr);

    axum::serve(listener, build_router(state)).await?;
    Ok(())
}

async fn submit(gateway: &HttpGateway, input: &RecordInput) -> Result<()> {
    match client::submit_and_relist(gateway, input).await {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", render::submit_error(&err.to_string()));
            Err(err)
        }
    }
}
