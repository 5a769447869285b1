//! contact-server – entry point.
//!
//! Startup order:
//! 1. Parse configuration from environment variables.
//! 2. Initialise structured tracing (JSON or human-readable).
//! 3. Connect to the store and create `contact_messages` if absent.
//! 4. Build the Axum router and start the HTTP server with graceful shutdown.
//!
//! Any failure before the listener is bound, including table creation, is
//! fatal.

mod config;
mod db;
mod entities;
mod error;
mod middleware;
mod routes;
mod schemas;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::db::{Dialect, redact_url};
use crate::entities::{AnyStore, ContactStore};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Configuration ───────────────────────────────────────────────────────
    let cfg = Config::from_env();

    // ── 2. Tracing ─────────────────────────────────────────────────────────────
    init_tracing(&cfg);

    info!(version = env!("CARGO_PKG_VERSION"), "contact-server starting");

    // ── 3. Database ────────────────────────────────────────────────────────────
    let dialect = Dialect::from_url(&cfg.database_url)?;
    let store = AnyStore::connect(dialect, &cfg.database_url, cfg.max_connections).await?;
    store.ensure_schema().await?;
    info!(
        database_url = %redact_url(&cfg.database_url),
        dialect = ?store.dialect(),
        "database ready"
    );

    // ── 4. HTTP server with graceful shutdown ──────────────────────────────────
    let addr: SocketAddr = cfg.bind_address.parse()?;
    let state = Arc::new(AppState {
        config: Arc::new(cfg),
        store: Arc::new(store),
    });

    let app = routes::build(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("contact-server stopped");
    Ok(())
}

/// Install the global subscriber. `RUST_LOG` wins over `CONTACT_LOG`.
fn init_tracing(cfg: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| log_filter(&cfg.log_level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true);

    if cfg.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

/// Parse the configured filter, falling back to `info` when it is invalid.
fn log_filter(level: &str) -> EnvFilter {
    level.parse().unwrap_or_else(|e| {
        eprintln!("WARN: CONTACT_LOG='{level}' is not a valid tracing filter ({e}); using 'info'");
        EnvFilter::new("info")
    })
}

/// Resolves on SIGINT (Ctrl-C) or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal = tokio::select! {
        () = ctrl_c => "SIGINT",
        () = terminate => "SIGTERM",
    };
    info!(signal, "draining in-flight requests before exit");
}
