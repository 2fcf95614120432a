use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use profashion_api::config::ServerConfig;
use profashion_api::{routes, state};
use profashion_gemini::{GeminiClient, GeminiConfig, VisionCapability};
use profashion_pipeline::{AssetResolver, BatchCoordinator, Orchestrator};

use state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Server configuration loaded");

    // Fail startup on an unreachable or unmigrated database.
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = profashion_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    profashion_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    profashion_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database ready, migrations applied");

    // The Gemini client and the asset resolver share one reqwest client.
    let gemini_config = GeminiConfig::from_env().expect("Gemini configuration invalid");
    let http_client = reqwest::Client::new();
    let gemini = Arc::new(GeminiClient::with_client(http_client.clone(), gemini_config));
    tracing::info!("Gemini client created");

    let orchestrator = Arc::new(Orchestrator::new(
        gemini as Arc<dyn VisionCapability>,
        AssetResolver::with_client(http_client),
        config.generation.clone(),
    ));

    let event_bus = Arc::new(profashion_events::EventBus::default());
    let store = Arc::new(profashion_db::store::PgGalleryStore::new(pool.clone()));
    let coordinator = Arc::new(BatchCoordinator::new(
        orchestrator,
        store,
        Arc::clone(&event_bus),
    ));
    tracing::info!("Batch coordinator ready");

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        coordinator,
        event_bus,
    };

    let request_id_header = HeaderName::from_static("x-request-id");

    // Middleware layers apply bottom-up: the request id is set before the
    // trace span opens, and panics anywhere below surface as a 500.
    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors_layer(&config))
        .with_state(state);

    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Shutdown complete");
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "profashion_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Resolves when either SIGINT or SIGTERM arrives, so the server drains
/// in-flight requests whether stopped from a terminal or a process manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("SIGINT received, shutting down"),
        () = terminate => tracing::info!("SIGTERM received, shutting down"),
    }
}

/// A malformed origin in `CORS_ORIGINS` aborts startup.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}
