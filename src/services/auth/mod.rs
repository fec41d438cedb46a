/*
 * Responsibility
 * - Token verification services (re-export)
 */
pub mod access_jwt;

pub use access_jwt::{AccessJwtError, AccessTokenClaims, AuthService};
