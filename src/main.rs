use std::sync::Arc;

use blog_categories_api::api::{self, AppState};
use blog_categories_api::config::AppConfig;
use blog_categories_api::infrastructure::database;
use blog_categories_api::infrastructure::repositories::PostgresCategoryRepository;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = database::connect(&config)
        .await
        .expect("Failed to connect to database");

    database::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    tracing::info!("Database connected successfully");

    let state = AppState::new(
        Arc::new(PostgresCategoryRepository::new(pool)),
        config.jwt_secret.clone(),
    );

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = api::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    tracing::info!("Server listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
