//! Repo Explainer - browse GitHub repositories and get code explained
//!
//! # Usage
//! ```bash
//! repo-explainer                       # Start server on 127.0.0.1:7860
//! repo-explainer --open                # Start and open browser
//! GITHUB_TOKEN=... GROQ_API_KEY=... repo-explainer --port 8080
//! ```

mod annotate;
mod config;
mod error;
mod github;
mod models;
mod render;
mod routes;
mod session;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use clap::Parser;
use rust_embed::Embed;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use annotate::{Annotator, ChatCompletionClient};
use config::{Config, InferenceConfig};
use github::GitHubClient;
use routes::AppState;
use session::{Controller, Session};

/// Embedded frontend static files
#[derive(Embed)]
#[folder = "static"]
struct Assets;

/// Repo Explainer - search GitHub, browse Python/notebook files, explain code
#[derive(Parser)]
#[command(name = "repo-explainer")]
#[command(about = "Browse GitHub repositories and annotate their code with an LLM", long_about = None)]
struct Cli {
    /// Open browser automatically after starting
    #[arg(short, long)]
    open: bool,

    /// Port to run the server on
    #[arg(short, long, default_value = "7860")]
    port: u16,

    /// Address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// GitHub token; raises API rate limits
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    github_token: Option<String>,

    /// API key for the inference service
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    groq_api_key: Option<String>,

    /// Model used for annotation
    #[arg(long, env = "REPO_EXPLAINER_MODEL", default_value = config::DEFAULT_MODEL)]
    model: String,

    /// OpenAI-compatible inference endpoint
    #[arg(long, default_value = config::DEFAULT_INFERENCE_URL)]
    inference_url: String,

    /// GitHub REST API base URL
    #[arg(long, default_value = config::DEFAULT_GITHUB_API)]
    github_api_url: String,

    /// Timeout for each outgoing HTTP request, in seconds
    #[arg(long, default_value = "120")]
    timeout_secs: u64,
}

impl Cli {
    fn to_config(&self) -> Config {
        Config {
            github_token: config::non_empty(self.github_token.clone()),
            github_api_base: self.github_api_url.clone(),
            inference: InferenceConfig {
                api_key: config::non_empty(self.groq_api_key.clone()),
                base_url: self.inference_url.clone(),
                model: self.model.clone(),
            },
            timeout: Duration::from_secs(self.timeout_secs),
            ..Config::default()
        }
    }
}

/// Serve embedded static files
async fn serve_static(req: Request<Body>) -> Response {
    let path = req.uri().path().trim_start_matches('/');

    // Default to index.html for root or non-file paths (SPA routing)
    let path = if path.is_empty() || !path.contains('.') {
        "index.html"
    } else {
        path
    };

    match Assets::get(path).map(|content| (path, content)).or_else(|| {
        Assets::get("index.html").map(|content| ("index.html", content))
    }) {
        Some((served, content)) => {
            let mime = mime_guess::from_path(served).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.as_ref().to_string())],
                content.data.into_owned(),
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing (quieter for production)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(cli.to_config());
    if config.inference.api_key.is_none() {
        eprintln!("  Warning: GROQ_API_KEY is not set; analysis requests will fail");
    }

    let github = GitHubClient::new(config.clone())?;
    let annotator = Annotator::new(Arc::new(ChatCompletionClient::new(config.clone())?));
    let state = AppState {
        controller: Controller::new(github, annotator),
        session: Arc::new(Mutex::new(Session::default())),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router with API routes and static file serving
    let app = Router::new()
        .merge(routes::create_router(state))
        .fallback(get(serve_static))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Bind to the port
    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("✗ Failed to bind to {}: {}", addr, e);
            eprintln!("  Try a different port with --port <PORT>");
            std::process::exit(1);
        }
    };

    let url = format!("http://{}", addr);
    println!();
    println!("  ┌─────────────────────────────────────────────┐");
    println!("  │          GitHub Repository Explorer         │");
    println!("  └─────────────────────────────────────────────┘");
    println!();
    println!("  Server:     {}", url);
    println!("  GitHub:     {}", if config.github_token.is_some() { "authenticated" } else { "anonymous" });
    println!("  Model:      {}", config.inference.model);
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    if cli.open {
        if let Err(e) = open::that(&url) {
            eprintln!("  Warning: Could not open browser: {}", e);
        }
    }

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
        println!("\n  Shutting down...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_build_config() {
        let cli = Cli::parse_from(["repo-explainer", "--github-token", "", "--groq-api-key", "k"]);
        let config = cli.to_config();

        assert_eq!(config.github_token, None);
        assert_eq!(config.inference.api_key.as_deref(), Some("k"));
        assert_eq!(config.inference.model, config::DEFAULT_MODEL);
        assert_eq!(config.github_web_base, config::DEFAULT_GITHUB_WEB);
        assert_eq!(config.timeout, Duration::from_secs(120));
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_index() {
        let response = serve_static(Request::builder().uri("/anything").body(Body::empty()).unwrap()).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html");
    }
}
