//! Access token (JWT) verification.
//!
//! HS256 with a shared secret; the issuing side lives in a separate service
//! and is not part of this API. The middleware only ever needs the subject,
//! so the recommended entry point is [`AuthService::verify_subject`].

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::{error::Error as StdError, fmt};

// Errors returned by access-token verification + subject extraction.
#[derive(Debug)]
pub enum AccessJwtError {
    Jwt(jsonwebtoken::errors::Error),
    MissingSub,
    InvalidSub,
}

impl fmt::Display for AccessJwtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jwt(e) => write!(f, "jwt verification failed: {}", e),
            Self::MissingSub => write!(f, "missing 'sub' claim"),
            Self::InvalidSub => write!(f, "invalid 'sub' (expected integer employee id)"),
        }
    }
}

impl StdError for AccessJwtError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Jwt(e) => Some(e),
            _ => None,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AccessJwtError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        Self::Jwt(e)
    }
}

/// Access token (JWT) claims.
///
/// NOTE:
/// - `sub` is kept as a Value because issuers in the wild put either a JSON
///   number or a string there. Missing claim ends up as Null via
///   `#[serde(default)]`.
/// - `exp` presence and validity are enforced by `jsonwebtoken::Validation`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenClaims {
    #[serde(default)]
    pub sub: serde_json::Value,
    pub exp: u64,
}

/// HS256 access-token verifier.
///
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct AuthService {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for AuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("AuthService")
            .field("validation", &self.validation)
            .finish()
    }
}

impl AuthService {
    pub fn new(secret: &str, leeway_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = leeway_seconds;

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    // Verify signature / exp and decode the claims.
    pub fn verify(&self, token: &str) -> Result<AccessTokenClaims, jsonwebtoken::errors::Error> {
        let data =
            jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)?;

        Ok(data.claims)
    }

    /// Verify the token and extract the subject as an employee id.
    ///
    /// `jsonwebtoken::Validation` already checks signature and `exp`; this
    /// additionally requires a present, integer-shaped `sub`.
    pub fn verify_subject(&self, token: &str) -> Result<i64, AccessJwtError> {
        let claims = self.verify(token)?;
        Self::subject_id(&claims)
    }

    /// Normalize `sub` (number or numeric string) into an employee id.
    pub fn subject_id(claims: &AccessTokenClaims) -> Result<i64, AccessJwtError> {
        match &claims.sub {
            serde_json::Value::Null => Err(AccessJwtError::MissingSub),
            serde_json::Value::Number(n) => n.as_i64().ok_or(AccessJwtError::InvalidSub),
            serde_json::Value::String(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return Err(AccessJwtError::MissingSub);
                }
                s.parse::<i64>().map_err(|_| AccessJwtError::InvalidSub)
            }
            _ => Err(AccessJwtError::InvalidSub),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode, get_current_timestamp};
    use serde_json::json;

    const SECRET: &str = "unit-test-secret";

    fn mint(claims: serde_json::Value, secret: &str) -> String {
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn future_exp() -> u64 {
        get_current_timestamp() + 3600
    }

    fn service() -> AuthService {
        AuthService::new(SECRET, 0)
    }

    #[test]
    fn numeric_sub_is_accepted() {
        let token = mint(json!({"sub": 42, "exp": future_exp()}), SECRET);
        assert_eq!(service().verify_subject(&token).unwrap(), 42);
    }

    #[test]
    fn string_sub_is_accepted() {
        let token = mint(json!({"sub": "7", "exp": future_exp()}), SECRET);
        assert_eq!(service().verify_subject(&token).unwrap(), 7);
    }

    #[test]
    fn missing_sub_is_rejected() {
        let token = mint(json!({"exp": future_exp()}), SECRET);
        let err = service().verify_subject(&token).unwrap_err();
        assert!(matches!(err, AccessJwtError::MissingSub));
    }

    #[test]
    fn non_numeric_sub_is_rejected() {
        let token = mint(json!({"sub": "alice", "exp": future_exp()}), SECRET);
        let err = service().verify_subject(&token).unwrap_err();
        assert!(matches!(err, AccessJwtError::InvalidSub));
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = mint(
            json!({"sub": 1, "exp": get_current_timestamp() - 3600}),
            SECRET,
        );
        let err = service().verify_subject(&token).unwrap_err();
        assert!(matches!(err, AccessJwtError::Jwt(_)));
    }

    #[test]
    fn wrong_signature_is_rejected() {
        let token = mint(json!({"sub": 1, "exp": future_exp()}), "wrong-secret");
        let err = service().verify_subject(&token).unwrap_err();
        assert!(matches!(err, AccessJwtError::Jwt(_)));
    }

    #[test]
    fn malformed_token_is_rejected() {
        let err = service().verify_subject("not-a-jwt").unwrap_err();
        assert!(matches!(err, AccessJwtError::Jwt(_)));
    }
}
