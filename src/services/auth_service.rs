//! Authentication service - Handles login and bearer token handling.
//!
//! Tokens are HS256 JWTs carrying the user id, role and expiry. Expiry is
//! the only invalidation mechanism.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::config::Config;
use crate::domain::{AuthUser, Password, User, UserResponse, UserRole};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn auth_user(&self) -> AuthUser {
        AuthUser {
            user_id: self.sub,
            role: UserRole::from(self.role.as_str()),
        }
    }
}

/// Response returned after a successful login
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Login successful")]
    pub message: String,
    /// Signed bearer token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    pub user: UserResponse,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check credentials and issue a token
    async fn login(&self, username: String, password: String) -> AppResult<LoginResponse>;

    /// Verify a token's signature and expiry and return its claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Hash compared against when the username is unknown, so both failure
/// paths pay for one argon2 verification.
static DUMMY_HASH: Lazy<Option<Password>> =
    Lazy::new(|| Password::new("legal-aid-directory-dummy-password").ok());

/// Sign a token for `user`, valid for the configured number of hours.
pub fn issue_token(user: &User, config: &Config) -> AppResult<String> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.jwt_expiration_hours);

    let claims = Claims {
        sub: user.id,
        role: user.role.to_string(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(token)
}

/// Decode and validate a token. A past `exp` is rejected with no leeway.
pub fn decode_token(token: &str, config: &Config) -> AppResult<Claims> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    config: Config,
}

impl<U: UnitOfWork> Authenticator<U> {
    pub fn new(uow: Arc<U>, config: Config) -> Self {
        Self { uow, config }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn login(&self, username: String, password: String) -> AppResult<LoginResponse> {
        let user = self.uow.users().find_by_username(&username).await?;

        let verified = match (&user, DUMMY_HASH.as_ref()) {
            (Some(user), _) => Password::from_hash(user.password_hash.clone()).verify(&password),
            (None, Some(dummy)) => {
                dummy.verify(&password);
                false
            }
            (None, None) => false,
        };

        let user = match user {
            Some(user) if verified => user,
            _ => {
                tracing::info!(username = %username, "Rejected login attempt");
                return Err(AppError::InvalidCredentials);
            }
        };

        let token = issue_token(&user, &self.config)?;
        tracing::info!(user_id = user.id, role = %user.role, "User logged in");

        Ok(LoginResponse {
            message: "Login successful".to_string(),
            token,
            user: user.into(),
        })
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        decode_token(token, &self.config)
    }
}
