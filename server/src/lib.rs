use anyhow::Result;
use axum::{extract::{Query, State}, http::{HeaderMap, HeaderValue, StatusCode}, routing::{get, post}, Json, Router};
use passage_core::{answer, CorpusCache, QueryConfig, TokenizerOptions};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer, AllowOrigin};
use tower_http::trace::TraceLayer;

/// Upper bound for per-request `files` / `sentences`.
pub const MAX_RESULTS: usize = 100;

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub corpus_dir: PathBuf,
    pub defaults: QueryConfig,
    pub tokenizer: TokenizerOptions,
    pub admin_token: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub files: Option<usize>,
    pub sentences: Option<usize>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub took_s: f64,
    pub has_matches: bool,
    pub top_files: Vec<FileHit>,
    pub sentences: Vec<SentenceHit>,
}

#[derive(Serialize)]
pub struct FileHit {
    pub id: String,
    pub score: f64,
}

#[derive(Serialize)]
pub struct SentenceHit {
    pub text: String,
    pub idf_sum: f64,
    pub density: f64,
}

#[derive(Clone)]
pub struct AppState {
    pub corpus_dir: PathBuf,
    pub cache: Arc<CorpusCache>,
    pub defaults: QueryConfig,
    pub admin_token: Option<String>,
}

pub fn build_app(settings: ServerSettings) -> Result<Router> {
    // Load the corpus at startup so a bad directory fails fast
    let cache = Arc::new(CorpusCache::new(1, settings.tokenizer));
    let corpus = cache.get_or_load(&settings.corpus_dir)?;
    tracing::info!(documents = corpus.corpus.len(), "corpus ready");
    let app_state = AppState {
        corpus_dir: settings.corpus_dir,
        cache,
        defaults: settings.defaults,
        admin_token: settings.admin_token,
    };

    let cors = cors_layer(std::env::var("CORS_ALLOW_ORIGIN").ok().as_deref());

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/corpus/reload", post(reload_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());
    Ok(app)
}

/// Header carrying the admin token for `/corpus/reload`.
pub const ADMIN_HEADER: &str = "x-admin-token";

type ApiError = (StatusCode, String);

/// Allow any origin unless `allowed` lists comma-separated origins.
fn cors_layer(allowed: Option<&str>) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed
        .unwrap_or_default()
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }
    tracing::info!(origins = origins.len(), "restricting CORS origins");
    layer.allow_origin(AllowOrigin::list(origins))
}

fn engine_error(err: passage_core::Error) -> ApiError {
    let status = match err {
        passage_core::Error::EmptyCorpus => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    tracing::warn!(error = %err, "query failed");
    (status, err.to_string())
}

fn join_error(err: tokio::task::JoinError) -> ApiError {
    tracing::error!(error = %err, "blocking task failed");
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

pub async fn search_handler(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Result<Json<SearchResponse>, ApiError> {
    let start = std::time::Instant::now();
    let config = QueryConfig {
        file_matches: params.files.unwrap_or(state.defaults.file_matches).min(MAX_RESULTS),
        sentence_matches: params.sentences.unwrap_or(state.defaults.sentence_matches).min(MAX_RESULTS),
    };
    // Loading on a cache miss and ranking are blocking work
    let query = params.q.clone();
    let result = tokio::task::spawn_blocking(move || {
        let corpus = state.cache.get_or_load(&state.corpus_dir)?;
        answer(&query, &corpus, &config)
    })
    .await
    .map_err(join_error)?
    .map_err(engine_error)?;

    let has_matches = result.has_matches();
    let top_files = result.documents.into_iter().map(|d| FileHit { id: d.id, score: d.score }).collect();
    let sentences = result
        .sentences
        .into_iter()
        .map(|s| SentenceHit { text: s.sentence, idf_sum: s.idf_sum, density: s.density })
        .collect();

    let elapsed = start.elapsed();
    Ok(Json(SearchResponse { query: params.q, took_s: elapsed.as_secs_f64(), has_matches, top_files, sentences }))
}

/// Re-read the corpus directory. The previous corpus keeps serving if the load fails.
async fn reload_handler(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<serde_json::Value>, ApiError> {
    require_admin(state.admin_token.as_deref(), &headers)?;
    let corpus = tokio::task::spawn_blocking(move || state.cache.reload(&state.corpus_dir))
        .await
        .map_err(join_error)?
        .map_err(engine_error)?;
    Ok(Json(serde_json::json!({ "documents": corpus.corpus.len() })))
}

fn require_admin(expected: Option<&str>, headers: &HeaderMap) -> Result<(), ApiError> {
    let Some(expected) = expected else {
        return Err((StatusCode::UNAUTHORIZED, "reload disabled: ADMIN_TOKEN not set".into()));
    };
    match headers.get(ADMIN_HEADER) {
        Some(given) if given.as_bytes() == expected.as_bytes() => Ok(()),
        _ => {
            tracing::warn!("rejected reload with a missing or wrong admin token");
            Err((StatusCode::UNAUTHORIZED, "invalid admin token".into()))
        }
    }
}
