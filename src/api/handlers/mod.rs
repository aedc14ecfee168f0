//! HTTP request handlers, one module per routed resource.

pub mod auth_handler;
pub mod export_handler;
pub mod funding_handler;
pub mod lawyer_handler;
pub mod lookup_handler;
pub mod report_handler;
pub mod staff_handler;
