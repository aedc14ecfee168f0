//! Legal Aid Directory - REST API over a directory of legal aid providers
//!
//! Profiles carry their locations, areas of law, services and target client
//! groups; staff, funding and compliance reports hang off each profile.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and rules
//! - **services**: Application use cases
//! - **infra**: Database, migrations, repositories, unit of work
//! - **api**: Path router, handlers, middleware
//! - **types**: Shared types (pagination, responses, lenient parsing)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Apply migrations and load reference data
//! cargo run -- migrate up
//! cargo run -- seed lookups
//! cargo run -- seed admin --password admin123
//!
//! # Start the server
//! cargo run -- serve
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, User, UserRole};
pub use errors::{AppError, AppResult};
