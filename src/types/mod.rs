//! Shared types for DRY compliance.

pub mod lenient;
mod pagination;
mod response;

pub use pagination::{Paginated, PaginationParams};
pub use response::{Created, DataResponse, MessageResponse};
