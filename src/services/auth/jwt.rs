//! Session token (JWT, HS256) verification.
//!
//! The verifier checks signature + `exp` (with leeway) and then applies
//! strict claim validation: the identity claims must be present and
//! non-empty. It keeps a granular failure reason for logging; callers
//! collapse every failure to "no identity" before anything reaches a client.
//!
//! "No token supplied" is not a verifier concern; the session resolver
//! detects that before calling in here.

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by session-token verification + strict claim validation.
///
/// Internal only: the client-visible outcome is always a uniform 401, so a
/// caller can log the variant but must never serialize it into a response.
#[derive(Debug, Error)]
pub enum VerificationError {
    #[error("jwt verification failed: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("empty '{0}' claim")]
    EmptyClaim(&'static str),
}

/// Claims encoded in a session token.
///
/// `exp` is validated by `jsonwebtoken`; `iat` is informational and tokens
/// minted before it was added are still accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User id (project convention: opaque string, not necessarily a UUID).
    pub sub: String,
    pub email: String,
    pub username: String,

    pub exp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
}

/// HS256 session-token verifier over a shared secret.
///
/// - Deterministic given (token, secret, clock); no side effects.
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("TokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenVerifier {
    pub fn new(secret: &str, leeway_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp"]);
        validation.leeway = leeway_seconds;

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Verify signature/expiry and decode the claims.
    ///
    /// `jsonwebtoken::Validation` already checks:
    /// - signature
    /// - `exp` (required, with leeway)
    ///
    /// This method additionally rejects tokens whose identity claims
    /// (`sub`, `email`, `username`) are present but empty.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, VerificationError> {
        let data =
            jsonwebtoken::decode::<SessionClaims>(token, &self.decoding_key, &self.validation)?;
        let claims = data.claims;

        if claims.sub.trim().is_empty() {
            return Err(VerificationError::EmptyClaim("sub"));
        }
        if claims.email.trim().is_empty() {
            return Err(VerificationError::EmptyClaim("email"));
        }
        if claims.username.trim().is_empty() {
            return Err(VerificationError::EmptyClaim("username"));
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header};

    const SECRET: &str = "test-secret";

    fn now_ts() -> u64 {
        chrono::Utc::now().timestamp() as u64
    }

    fn sign(claims: &SessionClaims, secret: &str) -> String {
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn claims_for(sub: &str) -> SessionClaims {
        SessionClaims {
            sub: sub.to_string(),
            email: format!("{sub}@example.com"),
            username: format!("user{sub}"),
            exp: now_ts() + 600,
            iat: Some(now_ts()),
        }
    }

    #[test]
    fn valid_token_decodes_to_matching_claims() {
        let verifier = TokenVerifier::new(SECRET, 0);
        let token = sign(&claims_for("42"), SECRET);

        let claims = verifier.verify(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.email, "42@example.com");
        assert_eq!(claims.username, "user42");
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let verifier = TokenVerifier::new(SECRET, 0);
        let token = sign(&claims_for("42"), "some-other-secret");

        assert!(matches!(
            verifier.verify(&token),
            Err(VerificationError::Jwt(_))
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let verifier = TokenVerifier::new(SECRET, 0);
        let mut claims = claims_for("42");
        claims.exp = now_ts() - 600;
        let token = sign(&claims, SECRET);

        assert!(matches!(
            verifier.verify(&token),
            Err(VerificationError::Jwt(_))
        ));
    }

    #[test]
    fn leeway_tolerates_a_just_expired_token() {
        let verifier = TokenVerifier::new(SECRET, 120);
        let mut claims = claims_for("42");
        claims.exp = now_ts() - 30;
        let token = sign(&claims, SECRET);

        assert!(verifier.verify(&token).is_ok());
    }

    #[test]
    fn empty_identity_claim_is_rejected() {
        let verifier = TokenVerifier::new(SECRET, 0);
        let mut claims = claims_for("42");
        claims.username = "  ".to_string();
        let token = sign(&claims, SECRET);

        assert!(matches!(
            verifier.verify(&token),
            Err(VerificationError::EmptyClaim("username"))
        ));
    }

    #[test]
    fn malformed_token_is_rejected() {
        let verifier = TokenVerifier::new(SECRET, 0);
        assert!(verifier.verify("garbage").is_err());
    }
}
