pub mod router;
pub mod server;
pub mod state;
pub mod tracing;

use crate::config;
use crate::error::AppError;

/// Application entry point. Initializes tracing, configuration, and starts the server.
pub async fn run() -> Result<(), AppError> {
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

    tracing::init_tracing();

    let settings = config::get_configuration()?;
    ::tracing::info!(
        port = settings.port,
        user_id = %settings.identity.user_id,
        "Loaded settings"
    );

    let app_state = state::AppState::from_settings(&settings);
    let app = router::main_router(app_state);

    server::serve(app, settings.port).await
}
