//! Infrastructure layer - External systems integration
//!
//! - Database connection, migrations and seed data
//! - Repositories over the SeaORM entities
//! - Unit of Work for transaction management

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    FundingRepository, FundingStore, LawyerRepository, LawyerStore, LookupRepository, LookupStore,
    ReportRepository, ReportStore, StaffRepository, StaffStore, UserRepository, UserStore,
};
pub use unit_of_work::{
    Persistence, TransactionContext, TxFuture, TxLawyerRepository, TxUserRepository, UnitOfWork,
};
