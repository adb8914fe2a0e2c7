use std::net::SocketAddr;
use std::sync::Arc;

use setupforme_api::config::{LogFormat, ServerConfig};
use setupforme_api::registry::AppRegistry;
use setupforme_api::router::build_app_router;
use setupforme_api::state::AppState;
use setupforme_core::resolver::{NoopResolver, PackageResolver};
use setupforme_db::store::{AppStore, MemoryStore, PgStore, UserStore};
use setupforme_winget::WingetClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Configuration ---
    let config = ServerConfig::from_env();

    // --- Tracing ---
    init_tracing(config.log_format);
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Storage ---
    let (apps, users): (Arc<dyn AppStore>, Arc<dyn UserStore>) = match &config.database_url {
        Some(database_url) => {
            let pool = setupforme_db::create_pool(database_url)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            setupforme_db::health_check(&pool)
                .await
                .expect("Database health check failed");

            setupforme_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            let store = Arc::new(PgStore::new(pool));
            (store.clone() as Arc<dyn AppStore>, store as Arc<dyn UserStore>)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory storage");
            let store = Arc::new(MemoryStore::new());
            (store.clone() as Arc<dyn AppStore>, store as Arc<dyn UserStore>)
        }
    };

    // --- Package lookup ---
    let winget = WingetClient::new(&config.resolver.base_url, config.resolver.timeout)
        .expect("Failed to build winget.run HTTP client");

    let resolver: Arc<dyn PackageResolver> = if config.resolver.enabled {
        tracing::info!(base_url = %config.resolver.base_url, "Package id auto-resolution enabled");
        Arc::new(winget.clone())
    } else {
        tracing::info!("Package id auto-resolution disabled");
        Arc::new(NoopResolver)
    };

    // --- App state ---
    let registry = AppRegistry::new(apps.clone(), resolver, config.resolver.timeout);
    let state = AppState {
        config: Arc::new(config.clone()),
        apps,
        users,
        registry,
        winget,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "setupforme_api=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
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
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
