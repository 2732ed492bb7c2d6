use crate::output;
use crate::page;
use crate::search::ImageSearch;
use crate::session::{NoticeLevel, SearchSession, SearchState};
use axum::{
    extract::{Query, State},
    response::{Html, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },
    #[error("Failed to read local address: {0}")]
    LocalAddr(#[source] std::io::Error),
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ImagesResponse {
    pub query: String,
    pub state: &'static str,
    pub level: NoticeLevel,
    pub message: String,
    pub images: Vec<String>,
}

#[derive(Clone)]
struct AppState {
    search: ImageSearch,
}

pub struct WebServer {
    addr: String,
    search: ImageSearch,
}

impl WebServer {
    pub fn new(addr: String, search: ImageSearch) -> Self {
        Self { addr, search }
    }

    pub fn router(&self) -> Router {
        router(self.search.clone())
    }

    /// Bind and serve on a background task, returning the bound address.
    pub async fn start(&self) -> Result<SocketAddr, ServerError> {
        let listener = tokio::net::TcpListener::bind(&self.addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: self.addr.clone(),
                source,
            })?;
        let local = listener.local_addr().map_err(ServerError::LocalAddr)?;
        output::status(&format!("Web server listening on {}", local));

        let app = self.router();
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                output::error(&format!("Web server stopped: {}", e));
            }
        });

        Ok(local)
    }
}

pub fn router(search: ImageSearch) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/images", get(images_handler))
        .route("/health", get(|| async { "ok" }))
        .with_state(AppState { search })
}

async fn run_session(search: &ImageSearch, query: String) -> SearchSession {
    let mut session = SearchSession::new(query);
    if !session.is_blank() {
        output::search_started(session.query());
    }
    session.run(search).await;

    match session.state() {
        SearchState::BlankQuery => output::warn("Blank query, search skipped"),
        SearchState::Results(images) => output::success(&format!(
            "Found {} images for {:?}",
            images.len(),
            session.query()
        )),
        SearchState::Empty => output::warn(&format!("No images found for {:?}", session.query())),
        SearchState::Error(cause) => {
            output::error(&format!("Search for {:?} failed: {}", session.query(), cause))
        }
        SearchState::Idle | SearchState::Searching => {}
    }
    session
}

async fn index_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let session = match params.q {
        Some(query) => run_session(&state.search, query).await,
        None => SearchSession::new(""),
    };
    Html(page::render(&session))
}

async fn images_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<ImagesResponse> {
    let session = run_session(&state.search, params.q.unwrap_or_default()).await;
    Json(images_response(&session))
}

pub fn images_response(session: &SearchSession) -> ImagesResponse {
    let state = match session.state() {
        SearchState::Idle => "idle",
        SearchState::Searching => "searching",
        SearchState::BlankQuery => "blank_query",
        SearchState::Results(_) => "results",
        SearchState::Empty => "empty",
        SearchState::Error(_) => "error",
    };
    let notice = session.outcome();
    ImagesResponse {
        query: session.query().to_string(),
        state,
        level: notice.level,
        message: notice.message,
        images: session.images().to_vec(),
    }
}
