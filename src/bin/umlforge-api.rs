/// umlforge API - HTTP endpoint that turns a class-model request into a project archive
///
/// Accepts a JSON `ProjectRequest` and streams back the generated Spring Boot
/// project as a zip file. Every request builds in its own temporary workspace.

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio_util::io::ReaderStream;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use umlforge::{DatabaseType, GenerationError, Generator, GeneratorConfig, ProjectRequest, ARCHIVE_CONTENT_TYPE};

#[derive(Parser)]
#[command(name = "umlforge-api")]
#[command(version, about = "HTTP endpoint for Spring Boot project generation", long_about = None)]
struct Args {
    /// Bind address - overrides HOST
    #[arg(long)]
    host: Option<IpAddr>,

    /// Listen port - overrides PORT
    #[arg(short, long)]
    port: Option<u16>,

    /// Database type (postgresql, mysql) - overrides UMLFORGE_DATABASE
    #[arg(short, long)]
    database: Option<DatabaseType>,
}

#[derive(Clone)]
struct AppState {
    generator: Generator,
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = GeneratorConfig::default();
    if let Some(database) = args.database {
        config.database = database;
    }

    let host = args.host.unwrap_or_else(|| {
        std::env::var("HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string())
            .parse()
            .expect("Invalid HOST")
    });
    let port = args.port.unwrap_or_else(|| {
        std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .expect("Invalid PORT")
    });

    tracing::info!("Workspaces under {}", config.temp_root.display());
    tracing::info!("Generating for database: {}", config.database);

    // Create application state
    let state = Arc::new(AppState {
        generator: Generator::new(config),
    });

    // Build router
    let app = Router::new()
        .route("/generator", post(generate_project))
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Run server
    let addr = SocketAddr::new(host, port);
    tracing::info!("umlforge API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.expect("Failed to bind");
    axum::serve(listener, app).await.expect("Server error");
}

/// Generate a project and stream the archive
async fn generate_project(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ProjectRequest>,
) -> Result<Response, AppError> {
    let archive = state.generator.generate(&request).await?;

    tracing::info!(
        "Streaming {} ({} bytes)",
        archive.file_name(),
        archive.len()
    );

    let headers = [
        (header::CONTENT_TYPE, ARCHIVE_CONTENT_TYPE.to_string()),
        (header::CONTENT_DISPOSITION, archive.content_disposition()),
        (header::CONTENT_LENGTH, archive.len().to_string()),
    ];

    // The stream owns the workspace; it is removed once the body is sent or dropped
    let body = Body::from_stream(ReaderStream::new(archive));

    Ok((headers, body).into_response())
}

/// Health check endpoint (liveness)
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "umlforge-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// Error handling

#[derive(Debug)]
enum AppError {
    GenerationFailed(GenerationError),
}

impl From<GenerationError> for AppError {
    fn from(e: GenerationError) -> Self {
        AppError::GenerationFailed(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::GenerationFailed(e) => {
                tracing::error!("{}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        (status, Json(serde_json::json!({
            "error": message
        }))).into_response()
    }
}
