use anyhow::Result;
use axum::Router;
use clap::Parser;
use linkrank_core::{PageRankConfig, ScoreWeights};
use linkrank_server::{build_app, ServerConfig};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Corpus root containing Words/ and Links/
    #[arg(long, default_value = "./data")]
    corpus: String,
    /// Category sub-directories to load, in order
    #[arg(long = "category", value_delimiter = ',', default_value = "Games,Programming")]
    categories: Vec<String>,
    /// PageRank rounds
    #[arg(long, default_value_t = 20)]
    iterations: usize,
    /// PageRank damping factor
    #[arg(long, default_value_t = 0.85)]
    damping: f64,
    #[arg(long, default_value_t = 1.0)]
    content_weight: f64,
    #[arg(long, default_value_t = 0.8)]
    location_weight: f64,
    #[arg(long, default_value_t = 0.5)]
    authority_weight: f64,
    /// Comma-separated allowed origins; unset means any
    #[arg(long, env = "CORS_ALLOW_ORIGIN", value_delimiter = ',')]
    cors_allow_origin: Vec<String>,
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
    let config = ServerConfig {
        corpus_root: args.corpus.into(),
        categories: args.categories,
        pagerank: PageRankConfig { iterations: args.iterations, damping: args.damping },
        weights: ScoreWeights {
            content: args.content_weight,
            location: args.location_weight,
            authority: args.authority_weight,
        },
        cors_origins: args.cors_allow_origin,
    };
    let app: Router = build_app(&config)?;

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
