//! Repository selection endpoint.
//!
//! POST /api/v1/repository/select { repository: "<selector label>" }
//!
//! Fetches the repository tree, filters it to source and notebook files
//! and returns the rendered structure in `structure_html`.

use axum::{extract::State, routing::post, Json, Router};

use crate::error::Result;
use crate::models::{SelectRepositoryRequest, SessionView};
use crate::routes::{apply, AppState, JsonBody};
use crate::session::Event;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/repository/select", post(select_repository))
        .with_state(state)
}

async fn select_repository(
    State(state): State<AppState>,
    payload: JsonBody<SelectRepositoryRequest>,
) -> Result<Json<SessionView>> {
    let Json(request) = payload?;
    Ok(apply(
        &state,
        Event::SelectRepository {
            label: request.repository,
        },
    )
    .await)
}
