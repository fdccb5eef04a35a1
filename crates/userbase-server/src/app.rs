//! Server wiring and serve loop.

use crate::startup::print_startup_info;
use axum::Router;
use std::{future::Future, sync::Arc};
use tokio::{net::TcpListener, signal};
use tracing::{error, info};
use userbase_config::AppConfig;
use userbase_core::{DatabaseAdapter, User, UserbaseError, UserbaseResult};
use userbase_repository::{create_pool, PgAdapter};
use userbase_rest::{create_router, AppState};

/// Connects to PostgreSQL, bootstraps the schema, and serves until a
/// shutdown signal arrives.
pub async fn run(config: AppConfig) -> UserbaseResult<()> {
    info!("Environment: {}", config.app.environment);

    let pool = create_pool(&config.database).await?;
    pool.ensure_schema::<User>().await?;

    let users: Arc<dyn DatabaseAdapter<User>> = Arc::new(PgAdapter::new(Arc::clone(&pool)));
    let router = create_router(AppState::new(users), &config.server);

    let addr = config.server.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| UserbaseError::internal(format!("Failed to bind {addr}: {e}")))?;
    print_startup_info(&addr);

    let result = serve(listener, router, shutdown_signal()).await;

    pool.close().await;
    info!("Server shutdown complete");
    result
}

/// Serves `router` on `listener` until `shutdown` completes.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> UserbaseResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| UserbaseError::internal(format!("REST server error: {e}")))
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
