/*
 * Responsibility
 * - tracing/panic-hook init → Config load → service build → Router assembly
 * - Transport middleware application (request-id, limits, security headers)
 * - axum::serve() startup
 */
use std::{panic, process};

use anyhow::Result;
use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{api, config::Config, middleware, services::auth::SessionService, state::AppState};

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex: RUST_LOG=info,gridiron_api=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    // Keep the default hook as a fallback (prints to stderr with location/payload).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // Surface panics via tracing so they don't get lost when stderr is hidden.
        tracing::error!(?info, "panic");

        // In development, fail fast so we notice immediately.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;
    init_panic_hook(!config.app_env.is_production());

    if config.session_secret.is_none() {
        // Fail closed at request time: the server starts, but no request
        // will ever authenticate until a secret is configured.
        tracing::warn!("SESSION_SECRET is not set; all authenticated routes will return 401");
    }

    tracing::info!(
        "starting API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_state(config: &Config) -> AppState {
    // The secret is injected here, once, at construction time. Nothing below
    // this point reads the environment.
    let sessions = SessionService::new(
        config.session_secret.as_deref(),
        config.session_token_leeway_seconds,
    );
    AppState::new(sessions)
}

pub fn build_router(state: AppState) -> Router {
    let router = Router::new().nest("/api/v1", api::v1::routes(state));
    middleware::security_headers::apply(middleware::http::apply(router))
}
