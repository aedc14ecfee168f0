//! API middleware.

mod auth;
mod cors;

pub use auth::{bearer_token, get_auth_user};
pub use cors::cors_middleware;
