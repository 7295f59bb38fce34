//! Auth enforcement for pipeline routes.
//!
//! Runs the session resolver against the request headers. No identity →
//! uniform 401, inner handler never called. Identity resolved → it is
//! inserted into the request extensions and the request delegated inward;
//! handlers read it back from there.

use axum::response::IntoResponse;

use crate::error::AppError;
use crate::middleware::pipeline::{Handler, Wrap};
use crate::services::auth::SessionService;

pub struct RequireAuth {
    sessions: SessionService,
}

impl RequireAuth {
    pub fn new(sessions: SessionService) -> Self {
        Self { sessions }
    }
}

impl Wrap for RequireAuth {
    fn wrap(&self, inner: Handler) -> Handler {
        let sessions = self.sessions.clone();
        Handler::new(move |mut req| {
            let sessions = sessions.clone();
            let inner = inner.clone();
            async move {
                match sessions.resolve(req.headers()) {
                    Some(session) => {
                        req.extensions_mut().insert(session);
                        inner.call(req).await
                    }
                    None => Ok(AppError::Unauthorized.into_response()),
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use jsonwebtoken::{Algorithm, EncodingKey, Header};

    use crate::services::auth::{AuthSession, SessionClaims};

    const SECRET: &str = "test-secret";

    fn now_ts() -> u64 {
        chrono::Utc::now().timestamp() as u64
    }

    fn token_for(sub: &str) -> String {
        let claims = SessionClaims {
            sub: sub.to_string(),
            email: format!("{sub}@example.com"),
            username: format!("user{sub}"),
            exp: now_ts() + 600,
            iat: None,
        };
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    fn counting_handler() -> (Handler, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let handler = Handler::new(move |req: Request<Body>| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                let session = req.extensions().get::<AuthSession>().cloned();
                Ok(format!("{session:?}").into_response())
            }
        });
        (handler, calls)
    }

    fn wrap(handler: Handler) -> Handler {
        RequireAuth::new(SessionService::new(Some(SECRET), 0)).wrap(handler)
    }

    #[tokio::test]
    async fn missing_credentials_short_circuit_with_401() {
        let (handler, calls) = counting_handler();
        let pipeline = wrap(handler);

        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let res = pipeline.call(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn garbage_token_short_circuits_with_401() {
        let (handler, calls) = counting_handler();
        let pipeline = wrap(handler);

        let req = Request::builder()
            .uri("/")
            .header("authorization", "Bearer garbage")
            .body(Body::empty())
            .unwrap();
        let res = pipeline.call(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn valid_token_attaches_identity_and_delegates() {
        let (handler, calls) = counting_handler();
        let pipeline = wrap(handler);

        let req = Request::builder()
            .uri("/")
            .header("authorization", format!("Bearer {}", token_for("42")))
            .body(Body::empty())
            .unwrap();
        let res = pipeline.call(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
