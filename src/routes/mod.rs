//! API route handlers - maps HTTP endpoints to session events.
//!
//! Each submodule defines routes for one user action:
//! - `session`: Current view (GET /api/v1/session)
//! - `search`: Repository search (POST /api/v1/search)
//! - `repository`: Repository selection and tree rendering
//! - `file`: File selection and analysis
//!
//! Every handler locks the shared session for the whole call chain, so
//! actions run one at a time, and answers with the updated `SessionView`.
//! A body that does not deserialize gets a 400 with a JSON `error` field.

pub mod file;
pub mod repository;
pub mod search;
pub mod session;

use axum::{extract::rejection::JsonRejection, Json, Router};

use crate::models::SessionView;
use crate::session::{Controller, Event, SharedSession};

/// Request body whose rejection is reported as `AppError::InvalidInput`.
pub(crate) type JsonBody<T> = std::result::Result<Json<T>, JsonRejection>;

#[derive(Clone)]
pub struct AppState {
    pub controller: Controller,
    pub session: SharedSession,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(session::routes(state.clone()))
        .merge(search::routes(state.clone()))
        .merge(repository::routes(state.clone()))
        .merge(file::routes(state))
}

/// Runs one event against the shared session and snapshots the result.
pub(crate) async fn apply(state: &AppState, event: Event) -> Json<SessionView> {
    let mut session = state.session.lock().await;
    state.controller.dispatch(&mut session, event).await;
    Json(session.clone())
}
