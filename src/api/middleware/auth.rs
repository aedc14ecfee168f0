//! Bearer token resolution.
//!
//! A missing or invalid token is not an error here, only an anonymous
//! request; handlers decide what access they require.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::AuthUser;
use crate::services::AuthService;

static BEARER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i){}\s+(.*)$", crate::config::BEARER_SCHEME))
        .unwrap_or_else(|e| panic!("invalid bearer pattern: {}", e))
});

/// Extract the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = BEARER.captures(value)?.get(1)?.as_str().trim();
    (!token.is_empty()).then_some(token)
}

/// Identity of the caller, or `None` when no valid token was presented.
pub fn get_auth_user(headers: &HeaderMap, auth: &dyn AuthService) -> Option<AuthUser> {
    let token = bearer_token(headers)?;
    match auth.verify_token(token) {
        Ok(claims) => Some(claims.auth_user()),
        Err(e) => {
            tracing::debug!("Ignoring invalid bearer token: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_prefix_is_case_insensitive() {
        assert_eq!(bearer_token(&headers("Bearer abc.def.ghi")), Some("abc.def.ghi"));
        assert_eq!(bearer_token(&headers("bearer   abc")), Some("abc"));
        assert_eq!(bearer_token(&headers("BEARER abc")), Some("abc"));
    }

    #[test]
    fn test_missing_or_foreign_scheme_yields_none() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
        assert_eq!(bearer_token(&headers("Basic dXNlcjpwdw==")), None);
        assert_eq!(bearer_token(&headers("Bearer ")), None);
    }
}
