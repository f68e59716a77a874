use anyhow::Result;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::{routing::get, Json, Router};
use linkrank_core::{search, CorpusConfig, Index, PageRankConfig, ScoreWeights, SearchResult};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct SearchParams {
    pub word: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub corpus_root: PathBuf,
    pub categories: Vec<String>,
    pub pagerank: PageRankConfig,
    pub weights: ScoreWeights,
    /// Allowed origins; empty means `*`.
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    pub fn new<P: Into<PathBuf>>(corpus_root: P) -> Self {
        Self {
            corpus_root: corpus_root.into(),
            categories: linkrank_core::loader::default_categories(),
            pagerank: PageRankConfig::default(),
            weights: ScoreWeights::default(),
            cors_origins: Vec::new(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub index: Arc<Index>,
    pub weights: ScoreWeights,
}

pub fn build_app(config: &ServerConfig) -> Result<Router> {
    // Build the whole index before serving; a missing category aborts startup
    let corpus = CorpusConfig::new(&config.corpus_root)
        .with_categories(config.categories.iter().cloned());
    let index = Index::open(&corpus, &config.pagerank)?;
    tracing::info!(
        docs = index.documents().len(),
        tokens = index.dictionary().len(),
        "index ready"
    );
    let state = AppState { index: Arc::new(index), weights: config.weights };
    Ok(router(state, cors_layer(&config.cors_origins)))
}

pub fn router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_get).post(search_post))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins.iter().filter_map(|s| s.trim().parse().ok()).collect();
    let layer = CorsLayer::new()
        .allow_methods([Method::POST, Method::GET, Method::OPTIONS, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

pub async fn search_post(
    State(state): State<AppState>,
    body: Result<Json<SearchParams>, JsonRejection>,
) -> Result<Json<Vec<SearchResult>>, (StatusCode, String)> {
    let Json(params) = body.map_err(|e| (StatusCode::BAD_REQUEST, e.body_text()))?;
    run_search(state, params.word).await
}

pub async fn search_get(
    State(state): State<AppState>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<SearchResult>>, (StatusCode, String)> {
    let Query(params) = query.map_err(|e| (StatusCode::BAD_REQUEST, e.body_text()))?;
    run_search(state, params.word).await
}

async fn run_search(
    state: AppState,
    word: String,
) -> Result<Json<Vec<SearchResult>>, (StatusCode, String)> {
    let start = std::time::Instant::now();
    // scoring fans out on rayon; keep it off the async workers
    let results = tokio::task::spawn_blocking(move || search(&state.index, &word, &state.weights))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "search task failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "search failed".to_string())
        })?;
    tracing::debug!(
        hits = results.len(),
        took_s = start.elapsed().as_secs_f64(),
        "search done"
    );
    Ok(Json(results))
}
