//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on the Unit of Work abstraction
//! for repository access and transaction management.

mod auth_service;
pub mod container;
mod export_service;
mod lookup_service;
mod profile_service;
mod record_service;
mod report_service;

#[cfg(test)]
pub(crate) mod test_support;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{decode_token, issue_token, AuthService, Authenticator, Claims, LoginResponse};
pub use export_service::{CsvExport, ExportFormat, ExportKind, ExportService, Exporter, PDF_UNAVAILABLE};
pub use lookup_service::{LookupCatalog, LookupService};
pub use profile_service::{ProfileManager, ProfileService};
pub use record_service::{RecordKeeper, RecordService};
pub use report_service::{ReportData, ReportService, Reporter, SubmissionStatus};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
