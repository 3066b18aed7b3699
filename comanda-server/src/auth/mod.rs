//! Authentication Module
//!
//! Per-request identity for the mutating order routes. There is no login or
//! session surface here: callers present a JWT bearer token and handlers
//! receive a [`CurrentUser`] extractor argument. Identity is threaded
//! through the call chain per request - never a process-wide flag.

pub mod extractor;
pub mod jwt;

pub use jwt::{Claims, JwtConfig, JwtError, JwtService};

use serde::{Deserialize, Serialize};

/// Authenticated caller identity, extracted per request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub name: String,
    pub role: String,
}

impl TryFrom<Claims> for CurrentUser {
    type Error = String;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        if claims.sub.is_empty() {
            return Err("Token subject is empty".to_string());
        }
        Ok(Self {
            id: claims.sub,
            name: claims.name,
            role: claims.role,
        })
    }
}
