/*
 * Responsibility
 * - Session-token verification (jwt) and header-to-identity resolution (session)
 * - Token issuance is out of scope here; this side only verifies
 */
pub mod jwt;
pub mod session;

pub use jwt::{SessionClaims, TokenVerifier, VerificationError};
pub use session::{AuthSession, SessionService};
