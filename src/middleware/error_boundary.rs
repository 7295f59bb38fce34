//! Outermost pipeline layer: converts handler failures into normalized
//! 500 responses.
//!
//! Placed first in the composition so it observes failures raised anywhere
//! below it, auth and logging included. The failure detail is logged here
//! and replaced by a generic body; clients never see internals.

use axum::response::IntoResponse;

use crate::error::AppError;
use crate::middleware::pipeline::{Handler, Wrap};

pub struct ErrorBoundary;

impl Wrap for ErrorBoundary {
    fn wrap(&self, inner: Handler) -> Handler {
        Handler::new(move |req| {
            let inner = inner.clone();
            async move {
                match inner.call(req).await {
                    Ok(res) => Ok(res),
                    Err(err) => {
                        tracing::error!(error = %err, "unhandled handler failure");
                        Ok(AppError::Internal.into_response())
                    }
                }
            }
        })
    }
}
