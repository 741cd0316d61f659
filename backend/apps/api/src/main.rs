//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use anyhow::Context;
use axum::{
    http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use registration::config::SameSite;
use registration::{RegistrationConfig, registration_router};
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,registration=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = registration_config()?;
    tracing::info!(
        admin_email = %config.admin_email,
        cookie_secure = config.cookie_secure,
        same_site = config.cookie_same_site.as_str(),
        "Registration flow configured"
    );

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:40922,http://127.0.0.1:40922".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .allow_credentials(true);

    // Build router
    let app = registration_router(config)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .context("BIND_ADDR must be a socket address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Registration settings from the environment
fn registration_config() -> anyhow::Result<RegistrationConfig> {
    let mut config = match env::var("SESSION_SECRET") {
        Ok(secret_b64) => RegistrationConfig {
            session_secret: decode_secret(&secret_b64)?,
            ..RegistrationConfig::default()
        },
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("SESSION_SECRET not set, sessions will not survive a restart");
            RegistrationConfig::development()
        }
        Err(_) => anyhow::bail!("SESSION_SECRET must be set in production"),
    };

    if let Ok(secure) = env::var("COOKIE_SECURE") {
        config.cookie_secure = secure
            .parse()
            .context("COOKIE_SECURE must be true or false")?;
    }

    if let Ok(same_site) = env::var("COOKIE_SAME_SITE") {
        config.cookie_same_site = same_site
            .parse::<SameSite>()
            .map_err(anyhow::Error::msg)?;
    }

    if let Ok(admin_email) = env::var("ADMIN_EMAIL") {
        config.admin_email = admin_email;
    }

    Ok(config)
}

fn decode_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let secret_bytes = Engine::decode(&general_purpose::STANDARD, secret_b64.trim())
        .context("SESSION_SECRET is not valid base64")?;
    let secret: [u8; 32] = secret_bytes
        .try_into()
        .map_err(|bytes: Vec<u8>| anyhow::anyhow!("SESSION_SECRET must be 32 bytes, got {}", bytes.len()))?;
    Ok(secret)
}
