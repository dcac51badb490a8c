//! API routes for the lingraph server

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use lingraph_kg::{
    candidates_after, AuthorTemplate, EntryCatalog, EntrySuperType, QueryMode, SchemaRegistry,
};

use crate::config::AppConfig;
use crate::links::browser_url;
use crate::session::SessionStore;

/// Application state shared by all handlers
pub struct AppState {
    pub registry: SchemaRegistry,
    pub catalog: Arc<EntryCatalog>,
    pub sessions: Arc<RwLock<SessionStore>>,
    pub config: AppConfig,
}

/// Errors surfaced to API clients
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Session not found")]
    SessionNotFound,
    #[error("Unknown query mode: {0}")]
    UnknownMode(String),
    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::SessionNotFound => StatusCode::NOT_FOUND,
            ApiError::UnknownMode(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub entries: usize,
    pub edges: usize,
}

/// Session creation / state response
#[derive(Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub chain: Vec<String>,
}

/// Chain append request
#[derive(Deserialize)]
pub struct AppendTokenRequest {
    pub token: String,
}

/// Chain state plus candidates after the last token
#[derive(Serialize)]
pub struct ChainResponse {
    pub chain: Vec<String>,
    pub candidate_types: Vec<String>,
    pub candidate_relations: Vec<String>,
}

/// Stateless candidate query parameters
#[derive(Deserialize)]
pub struct CandidatesQuery {
    pub token: String,
}

/// Candidate lookup response
#[derive(Serialize)]
pub struct CandidatesResponse {
    pub candidate_types: Vec<String>,
    pub candidate_relations: Vec<String>,
}

/// Compose request; fields are read per mode
#[derive(Deserialize, Default)]
pub struct ComposeRequest {
    /// Fan-out: key entity names
    pub keys: Option<Vec<String>>,
    /// Fan-out: target super type
    pub target: Option<String>,
    /// Fan-out / path: maximum path length
    pub length: Option<u32>,
    /// Author: author identifier
    pub author_id: Option<String>,
    /// Author: template name
    pub template: Option<String>,
    /// Path: endpoint labels
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Compose / query-text response
#[derive(Serialize)]
pub struct QueryResponse {
    pub mode: String,
    /// The query composed by this request, absent on plain reads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Union-joined editable history, newest first
    pub joined: String,
    /// Browser link executing the joined query
    pub browser_url: String,
}

/// Entry listing query parameters
#[derive(Deserialize)]
pub struct EntriesQuery {
    pub super_type: Option<String>,
    #[serde(default)]
    pub authors: bool,
}

/// Entry listing response
#[derive(Serialize)]
pub struct EntriesResponse {
    pub names: Vec<String>,
}

/// Entry info response
#[derive(Serialize)]
pub struct EntryInfoResponse {
    pub name: String,
    /// Type label, empty for names absent from the catalog
    pub entry_type: String,
    pub outgoing: usize,
    pub incoming: usize,
}

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        entries: state.catalog.len(),
        edges: state.catalog.edge_count(),
    })
}

/// Create a new composition session
pub async fn create_session(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut sessions = state.sessions.write().await;
    let id = sessions.create();
    (
        StatusCode::CREATED,
        Json(SessionResponse {
            session_id: id,
            chain: Vec::new(),
        }),
    )
}

/// Fetch session state
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, ApiError> {
    let sessions = state.sessions.read().await;
    let session = sessions.get(&id).ok_or(ApiError::SessionNotFound)?;
    Ok(Json(SessionResponse {
        session_id: session.id,
        chain: session.chain().iter().map(|t| t.as_str().to_string()).collect(),
    }))
}

/// Delete a session
pub async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut sessions = state.sessions.write().await;
    if sessions.remove(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::SessionNotFound)
    }
}

/// Append a token to the session chain and report candidates after it
pub async fn append_token(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<AppendTokenRequest>,
) -> Result<Json<ChainResponse>, ApiError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(ApiError::SessionNotFound)?;
    let token = session.push_raw(&state.registry, &request.token);
    let candidates = candidates_after(&token, &state.catalog);
    Ok(Json(ChainResponse {
        chain: session.chain().iter().map(|t| t.as_str().to_string()).collect(),
        candidate_types: candidates
            .type_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        candidate_relations: candidates
            .relation_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
    }))
}

/// Remove the most recently appended token
pub async fn pop_token(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(ApiError::SessionNotFound)?;
    session.pop_token();
    Ok(StatusCode::NO_CONTENT)
}

/// Clear the session chain
pub async fn clear_chain(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(ApiError::SessionNotFound)?;
    session.clear_chain();
    Ok(StatusCode::NO_CONTENT)
}

/// Stateless candidate lookup after a single token
pub async fn candidates(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CandidatesQuery>,
) -> impl IntoResponse {
    let token = state.registry.classify(&query.token);
    let candidates = candidates_after(&token, &state.catalog);
    Json(CandidatesResponse {
        candidate_types: candidates
            .type_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        candidate_relations: candidates
            .relation_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}

/// Compose a query in the given mode and retain it in the session history
pub async fn compose(
    State(state): State<Arc<AppState>>,
    Path((id, mode)): Path<(Uuid, String)>,
    Json(request): Json<ComposeRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
    let mode = QueryMode::from_str(&mode).ok_or_else(|| ApiError::UnknownMode(mode.clone()))?;
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(ApiError::SessionNotFound)?;

    let query = match mode {
        QueryMode::Chain => session.compose_chain(),
        QueryMode::FanOut => {
            let keys = request.keys.unwrap_or_default();
            let target = request
                .target
                .as_deref()
                .and_then(EntrySuperType::from_str)
                .ok_or_else(|| {
                    ApiError::BadRequest("fan_out requires a 'target' super type".to_string())
                })?;
            session.compose_fanout(&keys, target, request.length.unwrap_or(3))
        }
        QueryMode::Author => {
            let author_id = request.author_id.as_deref().ok_or_else(|| {
                ApiError::BadRequest("author requires an 'author_id'".to_string())
            })?;
            let template = request
                .template
                .as_deref()
                .map(|t| {
                    AuthorTemplate::from_str(t)
                        .ok_or_else(|| ApiError::BadRequest(format!("Unknown template: {t}")))
                })
                .transpose()?
                .unwrap_or(AuthorTemplate::Disagreement);
            session.compose_author(template, author_id)
        }
        QueryMode::Path => {
            let from = state
                .registry
                .classify(request.from.as_deref().unwrap_or("ANY"));
            let to = state
                .registry
                .classify(request.to.as_deref().unwrap_or("ANY"));
            session.compose_path(&from, &to, request.length.unwrap_or(1))
        }
    };

    let joined = session.query_text(mode);
    let browser_url = link_for(&state.config, &joined)?;
    Ok(Json(QueryResponse {
        mode: mode.as_str().to_string(),
        query: Some(query),
        joined,
        browser_url,
    }))
}

/// Fetch the union-joined editable query text for a mode
pub async fn query_text(
    State(state): State<Arc<AppState>>,
    Path((id, mode)): Path<(Uuid, String)>,
) -> Result<Json<QueryResponse>, ApiError> {
    let mode = QueryMode::from_str(&mode).ok_or_else(|| ApiError::UnknownMode(mode.clone()))?;
    let sessions = state.sessions.read().await;
    let session = sessions.get(&id).ok_or(ApiError::SessionNotFound)?;
    let joined = session.query_text(mode);
    let browser_url = link_for(&state.config, &joined)?;
    Ok(Json(QueryResponse {
        mode: mode.as_str().to_string(),
        query: None,
        joined,
        browser_url,
    }))
}

/// Clear a mode's history
pub async fn clear_history(
    State(state): State<Arc<AppState>>,
    Path((id, mode)): Path<(Uuid, String)>,
) -> Result<StatusCode, ApiError> {
    let mode = QueryMode::from_str(&mode).ok_or_else(|| ApiError::UnknownMode(mode.clone()))?;
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(ApiError::SessionNotFound)?;
    session.clear_history(mode);
    Ok(StatusCode::NO_CONTENT)
}

/// List known entry names for pickers
pub async fn entries(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EntriesQuery>,
) -> Result<Json<EntriesResponse>, ApiError> {
    let names: Vec<String> = if query.authors {
        state
            .catalog
            .author_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    } else if let Some(label) = query.super_type.as_deref() {
        let super_type = EntrySuperType::from_str(label)
            .ok_or_else(|| ApiError::BadRequest(format!("Unknown super type: {label}")))?;
        state
            .catalog
            .names_of_super_type(super_type)
            .into_iter()
            .map(str::to_string)
            .collect()
    } else {
        let mut names: Vec<String> = state.catalog.names().map(str::to_string).collect();
        names.sort_unstable();
        names
    };
    Ok(Json(EntriesResponse { names }))
}

/// Entry info: type label and one-hop degree
pub async fn entry_info(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Json<EntryInfoResponse> {
    // Names absent from the catalog degrade to an empty type label rather
    // than failing the interaction
    let entry_type = state
        .catalog
        .type_of(&name)
        .map(|kind| kind.as_str().to_string())
        .unwrap_or_default();
    Json(EntryInfoResponse {
        entry_type,
        outgoing: state.catalog.outgoing(&name).len(),
        incoming: state.catalog.incoming(&name).len(),
        name,
    })
}

fn link_for(config: &AppConfig, query: &str) -> Result<String, ApiError> {
    browser_url(&config.browser_url, query)
        .map(|url| url.to_string())
        .map_err(|e| ApiError::BadRequest(e.to_string()))
}
