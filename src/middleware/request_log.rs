//! Per-request access logging for pipeline routes.
//!
//! Records method, path and elapsed time around the inner handler and
//! forwards its result untouched (failures included, so the error boundary
//! above still sees them). Sits between the error boundary and auth so that
//! timing covers auth rejections too.

use std::time::Instant;

use crate::middleware::pipeline::{Handler, Wrap};

pub struct RequestLog;

impl Wrap for RequestLog {
    fn wrap(&self, inner: Handler) -> Handler {
        Handler::new(move |req| {
            let inner = inner.clone();
            async move {
                let method = req.method().clone();
                let path = req.uri().path().to_owned();
                let start = Instant::now();

                let result = inner.call(req).await;

                let elapsed_ms = start.elapsed().as_millis() as u64;
                match &result {
                    Ok(res) => tracing::info!(
                        %method,
                        %path,
                        status = %res.status(),
                        elapsed_ms,
                        "request completed"
                    ),
                    Err(err) => tracing::error!(
                        %method,
                        %path,
                        elapsed_ms,
                        error = %err,
                        "request failed"
                    ),
                }

                result
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::IntoResponse;

    fn request() -> Request<Body> {
        Request::builder().uri("/").body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn response_passes_through_unchanged() {
        let inner = Handler::new(|_req| async {
            Ok((StatusCode::IM_A_TEAPOT, "short and stout").into_response())
        });
        let pipeline = RequestLog.wrap(inner);

        let res = pipeline.call(request()).await.unwrap();
        assert_eq!(res.status(), StatusCode::IM_A_TEAPOT);
    }

    #[tokio::test]
    async fn failure_is_reraised_not_swallowed() {
        let inner = Handler::new(|_req| async { Err("boom".into()) });
        let pipeline = RequestLog.wrap(inner);

        assert!(pipeline.call(request()).await.is_err());
    }
}
