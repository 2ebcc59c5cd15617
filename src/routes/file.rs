//! File selection and analysis endpoints.
//!
//! - POST /api/v1/file/select { path }
//!   Records the selected browsable URL and picks the visible output panel
//!   (`notebook` for `.ipynb`, `code` otherwise).
//!
//! - POST /api/v1/file/analyze { path }
//!   Fetches the file, annotates it and fills exactly one output panel.

use axum::{extract::State, routing::post, Json, Router};

use crate::error::Result;
use crate::models::{FileRequest, SessionView};
use crate::routes::{apply, AppState, JsonBody};
use crate::session::Event;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/file/select", post(select_file))
        .route("/api/v1/file/analyze", post(analyze_file))
        .with_state(state)
}

async fn select_file(
    State(state): State<AppState>,
    payload: JsonBody<FileRequest>,
) -> Result<Json<SessionView>> {
    let Json(request) = payload?;
    Ok(apply(&state, Event::SelectFile { path: request.path }).await)
}

async fn analyze_file(
    State(state): State<AppState>,
    payload: JsonBody<FileRequest>,
) -> Result<Json<SessionView>> {
    let Json(request) = payload?;
    Ok(apply(&state, Event::Analyze { path: request.path }).await)
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{send, state_for};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn select_then_analyze_source_file() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/o/r/main/x.py"))
            .respond_with(ResponseTemplate::new(200).set_body_string("x = 1"))
            .mount(&server)
            .await;
        let state = state_for(&server);
        let url = "https://github.com/o/r/blob/main/x.py";

        let (_, selected) =
            send(&state, "POST", "/api/v1/file/select", Some(json!({"path": url}))).await;
        assert_eq!(selected["phase"], "file_selected");
        assert_eq!(selected["visible_panel"], "code");

        let (_, analyzed) =
            send(&state, "POST", "/api/v1/file/analyze", Some(json!({"path": url}))).await;
        assert_eq!(analyzed["phase"], "analyzed");
        assert_eq!(analyzed["code_output"], "# commented\nx = 1");
        assert_eq!(analyzed["notebook_output"], serde_json::Value::Null);
        assert_eq!(analyzed["selected_file"], url);
    }

    #[tokio::test]
    async fn selecting_notebook_shows_html_panel() {
        let server = MockServer::start().await;
        let (_, body) = send(
            &state_for(&server),
            "POST",
            "/api/v1/file/select",
            Some(json!({"path": "https://github.com/o/r/blob/main/a.ipynb"})),
        )
        .await;

        assert_eq!(body["visible_panel"], "notebook");
    }

    #[tokio::test]
    async fn analyze_without_path_returns_guidance() {
        let server = MockServer::start().await;
        let (_, body) = send(&state_for(&server), "POST", "/api/v1/file/analyze", Some(json!({}))).await;

        assert_eq!(body["code_output"], "Please select a file to analyze");
    }
}
