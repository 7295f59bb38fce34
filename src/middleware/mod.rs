/*
 * Responsibility
 * - Public interface of the middleware layer
 * - pipeline: the Handler/Wrap/compose core every API route is built on
 * - http/security_headers: transport-level concerns applied Router-wide
 */
pub mod auth;
pub mod error_boundary;
pub mod http;
pub mod pipeline;
pub mod request_log;
pub mod security_headers;

pub use auth::RequireAuth;
pub use error_boundary::ErrorBoundary;
pub use pipeline::{Handler, HandlerResult, Wrap, compose};
pub use request_log::RequestLog;
