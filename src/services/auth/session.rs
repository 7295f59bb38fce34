//! Authorization header → verified identity.
//!
//! `SessionService::resolve` is the single trust boundary for inbound
//! requests. It never fails loudly: every failure mode collapses to `None`
//! so downstream middleware only tests for presence of identity. The
//! granular cause (bad signature vs. expired vs. malformed) is logged here
//! and goes no further: a uniform outcome prevents probing which part of a
//! token was wrong.

use axum::http::{HeaderMap, header};

use crate::services::auth::jwt::TokenVerifier;

const BEARER_PREFIX: &str = "Bearer ";

/// Identity attached to an authenticated request for the lifetime of one
/// invocation. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub user_id: String,
    pub email: String,
    pub username: String,
}

/// Resolves an optional identity from request headers.
///
/// Holds `None` for the verifier when no signing secret was configured:
/// the service then fails closed (nobody authenticates) instead of treating
/// a missing secret as "everyone trusted".
#[derive(Debug, Clone)]
pub struct SessionService {
    verifier: Option<TokenVerifier>,
}

impl SessionService {
    pub fn new(secret: Option<&str>, leeway_seconds: u64) -> Self {
        Self {
            verifier: secret.map(|s| TokenVerifier::new(s, leeway_seconds)),
        }
    }

    /// Resolve the request's identity, if any. Never errors.
    ///
    /// Steps:
    /// 1. No `Authorization` header, or no `Bearer ` prefix → `None`
    ///    without attempting verification.
    /// 2. No configured secret → config-level error log, `None`.
    /// 3. Verification failure → warn log with the cause, `None`.
    pub fn resolve(&self, headers: &HeaderMap) -> Option<AuthSession> {
        let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
        let token = value.strip_prefix(BEARER_PREFIX)?;

        let Some(verifier) = &self.verifier else {
            tracing::error!("SESSION_SECRET is not configured; refusing to authenticate");
            return None;
        };

        match verifier.verify(token) {
            Ok(claims) => Some(AuthSession {
                user_id: claims.sub,
                email: claims.email,
                username: claims.username,
            }),
            Err(err) => {
                tracing::warn!(error = %err, "session token verification failed");
                None
            }
        }
    }
}
