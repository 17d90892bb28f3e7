mod model;
mod server;

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    middleware::auth::AuthGate,
    router::{self, RouterConfig},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session_store = startup::connect_to_session_store(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    let auth_gate = AuthGate::new(config.auth_enabled());
    if auth_gate.is_enabled() {
        tracing::info!("Auth gate enabled, guarded routes require a Google login");
    } else {
        tracing::warn!("Auth gate disabled, guarded routes are open");
    }

    let app = router::router(
        AppState::new(db, http_client, oauth_client, auth_gate),
        session_store,
        RouterConfig::from_config(&config)?,
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
