use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trivia_api::{
    api::{AppState, create_router},
    config::{Settings, StoreBackend},
    db::DbClient,
    repositories::{CategoryRepository, CategoryStore, MemoryStore, QuestionRepository, QuestionStore},
    services::{QuestionService, QuizService},
};

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trivia_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let settings = Settings::from_env().map_err(|e| format!("Failed to load settings: {}", e))?;

    tracing::info!("Starting Trivia API service");

    // Select the storage backend
    let (question_store, category_store): (Arc<dyn QuestionStore>, Arc<dyn CategoryStore>) =
        match settings.store_backend {
            StoreBackend::Scylla => {
                tracing::info!("Connecting to ScyllaDB at: {:?}", settings.scylla.nodes);

                let db_client = DbClient::new(&settings.scylla)
                    .await
                    .map_err(|e| format!("Failed to connect to ScyllaDB: {}", e))?;

                tracing::info!("Successfully connected to ScyllaDB");

                (
                    Arc::new(QuestionRepository::new(db_client.clone())),
                    Arc::new(CategoryRepository::new(db_client)),
                )
            }
            StoreBackend::Memory => {
                tracing::warn!("Using the in-memory store; data will not survive a restart");

                let store = Arc::new(MemoryStore::new());
                (store.clone(), store)
            }
        };

    // Initialize services
    let question_service = Arc::new(QuestionService::new(
        question_store.clone(),
        category_store.clone(),
    ));
    let quiz_service = Arc::new(QuizService::new(question_store));

    // Create application state
    let app_state = AppState {
        question_service,
        quiz_service,
    };

    // Build router; the front-end is served from another origin
    let app = create_router(app_state)
        .layer(CorsLayer::permissive())
        .layer(tower_http::catch_panic::CatchPanicLayer::new());

    // Start server
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check available at: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut terminate_signal =
            signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");

        tokio::select! {
            res = tokio::signal::ctrl_c() => {
                if let Err(err) = res {
                    tracing::error!("Failed to listen for Ctrl+C: {}", err);
                }
            },
            _ = terminate_signal.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", err);
        }
    }

    tracing::info!("Shutdown signal received, commencing graceful shutdown");
}
