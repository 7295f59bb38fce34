/*
 * Responsibility
 * - GET /session: echo the resolved identity back to the client
 * - Terminal pipeline handler; RequireAuth guarantees the session extension
 */
use axum::{Json, body::Body, http::Request, response::IntoResponse};

use crate::api::v1::dto::session::SessionResponse;
use crate::middleware::HandlerResult;
use crate::services::auth::AuthSession;

pub async fn whoami(req: Request<Body>) -> HandlerResult {
    // RequireAuth inserts the session before delegating; a missing extension
    // means the route was wired without auth, which the error boundary turns
    // into a 500.
    let session = req
        .extensions()
        .get::<AuthSession>()
        .cloned()
        .ok_or("whoami invoked without a resolved session")?;

    Ok(Json(SessionResponse {
        user_id: session.user_id,
        email: session.email,
        username: session.username,
    })
    .into_response())
}
