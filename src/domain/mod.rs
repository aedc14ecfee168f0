//! Domain layer - Core business entities and logic
//!
//! This module contains the directory's domain models: accounts and roles,
//! lawyer profiles with their owned collections, independently managed
//! records (staff, funding, reports) and the lookup reference data.
//!
//! The domain layer has no database dependencies.

pub mod lawyer;
pub mod lookup;
pub mod password;
pub mod records;
pub mod report;
pub mod user;

pub use lawyer::{
    AreaShare, AreaShareInput, ChildSets, LawyerFilter, LawyerProfile, LawyerView, Location,
    LocationInput, NewAccount, ProfileCollections, ProfileFields, ProfileParts, ProfilePayload,
};
pub use lookup::{AreaOfLaw, LookupTables, ServiceEntry, TargetClient};
pub use password::Password;
pub use records::{Funding, FundingPayload, Report, Staff, StaffPayload};
pub use report::{reporting_status, ReportKind};
pub use user::{AuthUser, LoginRequest, User, UserResponse, UserRole};
