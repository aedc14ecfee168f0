//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
mod funding_repository;
mod lawyer_repository;
mod lookup_repository;
mod report_repository;
mod staff_repository;
mod user_repository;

pub use funding_repository::{FundingRepository, FundingStore};
pub use lawyer_repository::{LawyerRepository, LawyerStore};
pub use lookup_repository::{LookupRepository, LookupStore};
pub use report_repository::{
    AreaCoverage, ComplianceCount, FundingShare, LicenseCount, Overview, RegionCount,
    ReportRepository, ReportStore, StaffRetention, SubmissionRow,
};
pub use staff_repository::{StaffRepository, StaffStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use funding_repository::MockFundingRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use lawyer_repository::MockLawyerRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use lookup_repository::MockLookupRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use report_repository::MockReportRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use staff_repository::MockStaffRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
