use anyhow::Result;
use axum::Router;
use clap::Parser;
use passage_core::{QueryConfig, TokenizerOptions};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};
use passage_server::{build_app, ServerSettings};
use tokio::net::TcpListener;

#[derive(Parser)]
struct Args {
    /// Directory containing .txt documents
    #[arg(long, default_value = "./corpus")]
    corpus: PathBuf,
    /// JSON file with default `file_matches` / `sentence_matches`
    #[arg(long)]
    config: Option<PathBuf>,
    /// Stem tokens with the English Snowball stemmer
    #[arg(long, default_value_t = false)]
    stem: bool,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let defaults = match &args.config {
        Some(path) => QueryConfig::from_json_file(path)?,
        None => QueryConfig::default(),
    };
    let settings = ServerSettings {
        corpus_dir: args.corpus.clone(),
        defaults,
        tokenizer: TokenizerOptions { stem: args.stem },
        admin_token: std::env::var("ADMIN_TOKEN").ok(),
    };
    let app: Router = build_app(settings)?;

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
