//! Repository search endpoint.
//!
//! POST /api/v1/search { mode: "Topic" | "Username" | "Repository Name" | "Direct Path", query }
//!
//! Replaces the candidate list shown in the repository selector.

use axum::{extract::State, routing::post, Json, Router};

use crate::error::Result;
use crate::models::{SearchRequest, SessionView};
use crate::routes::{apply, AppState, JsonBody};
use crate::session::Event;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/search", post(search))
        .with_state(state)
}

async fn search(
    State(state): State<AppState>,
    payload: JsonBody<SearchRequest>,
) -> Result<Json<SessionView>> {
    let Json(request) = payload?;
    Ok(apply(
        &state,
        Event::Search {
            mode: request.mode,
            query: request.query,
        },
    )
    .await)
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{send, state_for};
    use axum::http::StatusCode;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn search_updates_candidates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{"full_name": "a/b", "stargazers_count": 7, "description": "d", "language": "Python"}]
            })))
            .mount(&server)
            .await;
        let state = state_for(&server);

        let (status, body) = send(
            &state,
            "POST",
            "/api/v1/search",
            Some(json!({"mode": "Repository Name", "query": "b"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["phase"], "repositories_listed");
        assert_eq!(body["search_mode"], "Repository Name");
        assert_eq!(body["repositories"], json!(["a/b (⭐ 7) - Python"]));
    }

    #[tokio::test]
    async fn malformed_body_is_rejected_with_json_error() {
        let server = MockServer::start().await;
        let state = state_for(&server);
        let (status, body) = send(
            &state,
            "POST",
            "/api/v1/search",
            Some(json!({"mode": "Stars", "query": "x"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error = body["error"].as_str().unwrap();
        assert!(error.starts_with("Invalid input: "));

        let (_, session) = send(&state, "GET", "/api/v1/session", None).await;
        assert_eq!(session["phase"], "idle");
    }
}
