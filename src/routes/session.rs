use axum::{extract::State, routing::get, Json, Router};

use crate::models::SessionView;
use crate::routes::AppState;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/session", get(get_session))
        .with_state(state)
}

async fn get_session(State(state): State<AppState>) -> Json<SessionView> {
    let session = state.session.lock().await;
    Json(session.clone())
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{send, state_for};
    use axum::http::StatusCode;
    use wiremock::MockServer;

    #[tokio::test]
    async fn fresh_session_is_idle() {
        let server = MockServer::start().await;
        let (status, body) = send(&state_for(&server), "GET", "/api/v1/session", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["phase"], "idle");
        assert_eq!(body["visible_panel"], "code");
        assert_eq!(body["repositories"], serde_json::json!([]));
    }
}
