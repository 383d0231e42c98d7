pub mod router;
pub mod server;
pub mod state;
pub mod tracing;

use crate::config::Config;
use crate::error::DashboardError;
use tokio_util::sync::CancellationToken;

pub use router::build_router;
pub use state::{AppState, ViewSettings};

/// Application entry point. Initializes tracing, configuration, the first
/// snapshot, and starts the server.
pub async fn run() -> Result<(), DashboardError> {
    // Handle healthcheck subcommand (for Docker healthcheck in distroless image)
    if std::env::args().nth(1).as_deref() == Some("healthcheck") {
        match crate::healthcheck().await {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1)
            }
        }
    }

    let config = Config::from_args_and_file(std::env::args_os())?;
    tracing::init_tracing(config.log_level.into());
    ::tracing::info!(
        log_path = %config.log_path.display(),
        http_port = config.http_port,
        "Loaded settings"
    );

    let app_state = AppState::from_config(&config);
    let snapshot = app_state.loader.load().await;
    ::tracing::info!(
        records = snapshot.records.len(),
        sample = snapshot.using_sample_data(),
        "Initial snapshot ready"
    );

    let app = build_router(app_state);
    server::serve(app, config.http_port, CancellationToken::new()).await
}
