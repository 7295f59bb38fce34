//! Handler/Wrap/compose: the composable request pipeline.
//!
//! Every API route is a terminal [`Handler`] wrapped by an ordered list of
//! [`Wrap`] implementations. A handler either produces a response or fails
//! with an error; failures travel outward through the wrappers until the
//! error boundary converts them into a normalized 500.
//!
//! Ordering is fixed at composition time and significant: the FIRST wrapper
//! in the list is the OUTERMOST layer, the last one sits directly around the
//! terminal handler. `compose(vec![a, b], h)` is `a.wrap(b.wrap(h))`, so a
//! request flows a → b → h inward and the response h → b → a outward.
//! (Wrappers apply right to left; stated here once so nobody has to rederive
//! it from the fold.)

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use tower::BoxError;

use crate::error::AppError;

/// What a handler produces: a response, or a failure for the error boundary.
pub type HandlerResult = Result<Response, BoxError>;

type HandlerFuture = Pin<Box<dyn Future<Output = HandlerResult> + Send>>;

/// A boxed async request handler. Cheap to clone; one instance is built per
/// route at startup and shared across concurrent requests.
#[derive(Clone)]
pub struct Handler(Arc<dyn Fn(Request<Body>) -> HandlerFuture + Send + Sync>);

impl Handler {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        Self(Arc::new(move |req| Box::pin(f(req))))
    }

    pub async fn call(&self, req: Request<Body>) -> HandlerResult {
        (self.0)(req).await
    }

    /// Adapt a composed pipeline into an axum route handler.
    ///
    /// A pipeline assembled per convention has [`ErrorBoundary`] outermost
    /// and never returns `Err` here; if a route was wired without it, the
    /// failure still degrades to a logged 500 instead of escaping.
    ///
    /// [`ErrorBoundary`]: crate::middleware::ErrorBoundary
    pub fn into_axum(
        self,
    ) -> impl Fn(Request<Body>) -> Pin<Box<dyn Future<Output = Response> + Send>>
    + Clone
    + Send
    + Sync
    + 'static {
        move |req| {
            let pipeline = self.clone();
            Box::pin(async move {
                match pipeline.call(req).await {
                    Ok(res) => res,
                    Err(err) => {
                        tracing::error!(error = %err, "failure escaped the pipeline");
                        AppError::Internal.into_response()
                    }
                }
            })
        }
    }
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handler").finish_non_exhaustive()
    }
}

/// One pipeline layer: transforms a handler into a handler with added
/// behavior. Implementations hold no per-request state.
pub trait Wrap: Send + Sync {
    fn wrap(&self, inner: Handler) -> Handler;
}

/// Combine wrappers around a terminal handler, first wrapper outermost.
///
/// Pure construction: no I/O happens until the returned handler is called.
pub fn compose(wrappers: Vec<Arc<dyn Wrap>>, terminal: Handler) -> Handler {
    wrappers
        .into_iter()
        .rev()
        .fold(terminal, |inner, wrapper| wrapper.wrap(inner))
}
