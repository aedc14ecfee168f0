//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod area_of_law;
pub mod compliance_issue;
pub mod funding;
pub mod lawyer_area_of_law;
pub mod lawyer_profile;
pub mod lawyer_service;
pub mod lawyer_target_client;
pub mod location;
pub mod profile_update_history;
pub mod report;
pub mod service;
pub mod staff;
pub mod target_client;
pub mod user;
