//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users_and_lookups;
mod m20240101_000002_create_lawyer_profiles;
mod m20240101_000003_create_profile_records;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users_and_lookups::Migration),
            Box::new(m20240101_000002_create_lawyer_profiles::Migration),
            Box::new(m20240101_000003_create_profile_records::Migration),
        ]
    }
}

/// Identifiers shared across migrations.
#[derive(Iden)]
pub(crate) enum Users {
    Table,
    UserId,
    Username,
    PasswordHash,
    Role,
    CreatedAt,
}

#[derive(Iden)]
pub(crate) enum LawyerProfiles {
    Table,
    LawyerId,
    UserId,
    Name,
    ProviderType,
    RegistrationStatus,
    RegistrationYear,
    RegistrationNumber,
    RegistrationStage,
    #[iden = "process_more_than_21_days"]
    ProcessMoreThan21Days,
    ProcessDays,
    #[iden = "registrar_responded_in_21_days"]
    RegistrarRespondedIn21Days,
    RespondToRegistrarDays,
    LicenseStatus,
    Phone,
    Email,
    Website,
    ModeOfOperation,
    Verified,
    CreatedAt,
    UpdatedAt,
}
