//! Event Hub - Binary Entry Point

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use event_hub::{
    create_router, AppConfig, AppState, CredentialService, LogMailer, Mailer, PasswordHasher,
    SendGridMailer, TokenCodec,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = AppConfig::from_env()?;

    let credentials = CredentialService::new(
        PasswordHasher::new(config.bcrypt_cost),
        TokenCodec::new(&config.jwt_secret, config.token_ttl_seconds),
    );

    let mailer: Arc<dyn Mailer> = match &config.sendgrid_api_key {
        Some(key) => Arc::new(SendGridMailer::new(key.clone())?),
        None => {
            warn!("SENDGRID_API_KEY not set, notification mail will only be logged");
            Arc::new(LogMailer)
        }
    };

    let state = Arc::new(AppState::new(credentials, mailer, config.mail_from.clone()));
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, version = event_hub::VERSION, "Event hub listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal()?)
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false))
        .init();
}

/// Resolves on Ctrl+C or SIGTERM
fn shutdown_signal() -> Result<impl Future<Output = ()>, ctrlc::Error> {
    let (tx, mut rx) = mpsc::unbounded_channel::<()>();
    ctrlc::set_handler(move || {
        let _ = tx.send(());
    })?;

    Ok(async move {
        rx.recv().await;
        info!("Shutdown signal received");
    })
}
