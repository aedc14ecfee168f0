//! Per-request context handed to every handler.
//!
//! Carries the method, the normalized path, the original URI, the raw body
//! and the resolved caller, so handlers never reach into the HTTP request.

use axum::{
    body::{to_bytes, Bytes},
    extract::{Query, Request},
    http::{Method, Uri},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::middleware::get_auth_user;
use super::AppState;
use crate::config::MAX_BODY_BYTES;
use crate::domain::AuthUser;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct RequestContext {
    pub method: Method,
    /// Path after base-prefix stripping and slash trimming
    pub path: String,
    pub uri: Uri,
    pub body: Bytes,
    pub auth: Option<AuthUser>,
}

impl RequestContext {
    /// Consume the request: buffer its body and resolve the bearer token.
    pub async fn from_request(request: Request, state: &AppState, path: String) -> AppResult<Self> {
        let auth = get_auth_user(request.headers(), state.auth_service.as_ref());
        let (parts, body) = request.into_parts();
        let body = to_bytes(body, MAX_BODY_BYTES)
            .await
            .map_err(|e| AppError::bad_request(format!("Invalid request body: {}", e)))?;

        Ok(Self {
            method: parts.method,
            path,
            uri: parts.uri,
            body,
            auth,
        })
    }

    /// Original request URI as received, including any base prefix and query.
    pub fn request_uri(&self) -> String {
        self.uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| self.uri.path().to_string())
    }

    /// Parse the body as JSON. An empty body is read as `{}`.
    pub fn json<T: DeserializeOwned>(&self) -> AppResult<T> {
        let raw: &[u8] = if self.body.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            &self.body
        };
        serde_json::from_slice(raw)
            .map_err(|e| AppError::bad_request(format!("Invalid JSON data: {}", e)))
    }

    /// Parse the body as JSON and run its validation rules.
    pub fn validated_json<T: DeserializeOwned + Validate>(&self) -> AppResult<T> {
        let value: T = self.json()?;
        value.validate().map_err(|errors| {
            let mut messages: Vec<String> = errors
                .field_errors()
                .values()
                .flat_map(|errs| errs.iter())
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .collect();
            messages.sort();
            messages.dedup();
            AppError::validation(messages.join(", "))
        })?;
        Ok(value)
    }

    /// Deserialize the query string.
    pub fn query<T: DeserializeOwned>(&self) -> AppResult<T> {
        Query::<T>::try_from_uri(&self.uri)
            .map(|Query(value)| value)
            .map_err(|e| AppError::bad_request(format!("Invalid query string: {}", e)))
    }

    /// Caller identity if it holds the ADMIN role. Anonymous callers get the
    /// same 403 as authenticated non-admins.
    pub fn require_admin(&self) -> AppResult<AuthUser> {
        match &self.auth {
            Some(user) if user.is_admin() => Ok(user.clone()),
            _ => Err(AppError::Forbidden),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserRole;
    use serde::Deserialize;

    fn context(method: Method, uri: &str, body: &str, auth: Option<AuthUser>) -> RequestContext {
        RequestContext {
            method,
            path: String::new(),
            uri: uri.parse().unwrap(),
            body: Bytes::from(body.to_string()),
            auth,
        }
    }

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default)]
        name: Option<String>,
    }

    #[test]
    fn test_empty_body_reads_as_empty_object() {
        let ctx = context(Method::POST, "/lawyers", "  ", None);
        let probe: Probe = ctx.json().unwrap();
        assert!(probe.name.is_none());
    }

    #[test]
    fn test_malformed_body_is_bad_request() {
        let ctx = context(Method::POST, "/lawyers", "{not json", None);
        match ctx.json::<Probe>() {
            Err(AppError::BadRequest(msg)) => assert!(msg.starts_with("Invalid JSON data:")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_require_admin() {
        let lawyer = AuthUser {
            user_id: 2,
            role: UserRole::Lawyer,
        };
        let admin = AuthUser {
            user_id: 1,
            role: UserRole::Admin,
        };

        assert!(matches!(
            context(Method::GET, "/staff", "", None).require_admin(),
            Err(AppError::Forbidden)
        ));
        assert!(matches!(
            context(Method::GET, "/staff", "", Some(lawyer)).require_admin(),
            Err(AppError::Forbidden)
        ));
        assert_eq!(
            context(Method::GET, "/staff", "", Some(admin.clone()))
                .require_admin()
                .unwrap(),
            admin
        );
    }

    #[test]
    fn test_request_uri_keeps_query() {
        let ctx = context(Method::GET, "/api/lawyers?page=2", "", None);
        assert_eq!(ctx.request_uri(), "/api/lawyers?page=2");
    }
}
