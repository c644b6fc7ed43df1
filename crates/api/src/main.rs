use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use storefront_activity::{ActivityLogger, LowStockScanner};
use storefront_api::config::ServerConfig;
use storefront_api::router::build_app_router;
use storefront_api::state::AppState;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Configuration loaded");

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = storefront_db::create_pool(&database_url)
        .await
        .expect("Could not open the database pool");
    storefront_db::health_check(&pool)
        .await
        .expect("Database did not answer the startup ping");
    storefront_db::run_migrations(&pool)
        .await
        .expect("Could not apply migrations");
    tracing::info!("Database ready, migrations applied");

    let logger = Arc::new(ActivityLogger::new(pool.clone()));
    let scanner = Arc::new(LowStockScanner::new(pool.clone(), Arc::clone(&logger)));

    // Resolve the bind address before config moves into shared state.
    let addr = SocketAddr::new(
        config.host.parse().expect("HOST must be an IP address"),
        config.port,
    );

    let app = build_app_router(AppState {
        pool,
        config: Arc::new(config),
        logger: Arc::clone(&logger),
        scanner,
    });

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Could not bind the listen address");
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // Dropped activity writes were each logged as they happened; the exit
    // line gives operators one number to check after a drain.
    let dropped = logger.dropped_count();
    if dropped > 0 {
        tracing::warn!(dropped, "Activity events were dropped during this run");
    }
    tracing::info!("Shutdown complete");
}

/// Resolves when the process is told to stop: Ctrl-C anywhere, SIGTERM
/// under a process manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Could not install the Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Could not install the SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("SIGINT received, draining"),
        () = terminate => tracing::info!("SIGTERM received, draining"),
    }
}
