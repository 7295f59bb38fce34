/*
 * Responsibility
 * - v1 URL structure
 * - decide which routes go through the authenticated pipeline
 */
use std::sync::Arc;

use axum::{Router, routing::get};

use crate::api::v1::handlers::{health::health, league, session};
use crate::middleware::{ErrorBoundary, Handler, RequestLog, RequireAuth, Wrap, compose};
use crate::state::AppState;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/session",
            get(authenticated(&state, Handler::new(session::whoami)).into_axum()),
        )
        .route(
            "/league/standings",
            get(authenticated(&state, Handler::new(league::standings)).into_axum()),
        )
}

/// Standard pipeline for authenticated routes.
///
/// Order matters: the error boundary is outermost so it observes failures
/// from logging and auth as well; logging sits above auth so timing covers
/// rejected requests; auth gates only the business handler.
fn authenticated(state: &AppState, terminal: Handler) -> Handler {
    compose(
        vec![
            Arc::new(ErrorBoundary) as Arc<dyn Wrap>,
            Arc::new(RequestLog),
            Arc::new(RequireAuth::new(state.sessions.clone())),
        ],
        terminal,
    )
}
