//! API layer - HTTP handlers and middleware
//!
//! This module contains all HTTP-related concerns:
//! - Path router and per-request context
//! - Request handlers
//! - Middleware (CORS, bearer token resolution)
//! - Route definitions and OpenAPI document

pub mod context;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod router;
pub mod routes;
pub mod state;

pub use context::RequestContext;
pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
