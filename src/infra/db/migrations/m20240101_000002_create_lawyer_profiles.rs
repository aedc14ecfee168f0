//! Migration: lawyer profiles and the collections they own outright.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users_and_lookups::{AreasOfLaw, Services, TargetClients};
use super::{LawyerProfiles, Users};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LawyerProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LawyerProfiles::LawyerId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LawyerProfiles::UserId).integer())
                    .col(ColumnDef::new(LawyerProfiles::Name).string().not_null())
                    .col(ColumnDef::new(LawyerProfiles::ProviderType).string().not_null())
                    .col(ColumnDef::new(LawyerProfiles::RegistrationStatus).string())
                    .col(ColumnDef::new(LawyerProfiles::RegistrationYear).integer())
                    .col(ColumnDef::new(LawyerProfiles::RegistrationNumber).string())
                    .col(ColumnDef::new(LawyerProfiles::RegistrationStage).string())
                    .col(ColumnDef::new(LawyerProfiles::ProcessMoreThan21Days).boolean())
                    .col(ColumnDef::new(LawyerProfiles::ProcessDays).integer())
                    .col(ColumnDef::new(LawyerProfiles::RegistrarRespondedIn21Days).boolean())
                    .col(ColumnDef::new(LawyerProfiles::RespondToRegistrarDays).integer())
                    .col(ColumnDef::new(LawyerProfiles::LicenseStatus).string())
                    .col(ColumnDef::new(LawyerProfiles::Phone).string())
                    .col(ColumnDef::new(LawyerProfiles::Email).string())
                    .col(ColumnDef::new(LawyerProfiles::Website).string())
                    .col(ColumnDef::new(LawyerProfiles::ModeOfOperation).string())
                    .col(
                        ColumnDef::new(LawyerProfiles::Verified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(LawyerProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(LawyerProfiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lawyer_profiles_user_id")
                            .from(LawyerProfiles::Table, LawyerProfiles::UserId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lawyer_profiles_name")
                    .table(LawyerProfiles::Table)
                    .col(LawyerProfiles::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Locations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Locations::LocationId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Locations::LawyerId).integer().not_null())
                    .col(ColumnDef::new(Locations::Region).string().not_null())
                    .col(ColumnDef::new(Locations::District).string())
                    .col(ColumnDef::new(Locations::Ward).string())
                    .col(ColumnDef::new(Locations::Village).string())
                    .col(ColumnDef::new(Locations::Street).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_locations_lawyer_id")
                            .from(Locations::Table, Locations::LawyerId)
                            .to(LawyerProfiles::Table, LawyerProfiles::LawyerId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_locations_region")
                    .table(Locations::Table)
                    .col(Locations::Region)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LawyerAreaOfLaw::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(LawyerAreaOfLaw::LawyerId).integer().not_null())
                    .col(ColumnDef::new(LawyerAreaOfLaw::AreaId).integer().not_null())
                    .col(
                        ColumnDef::new(LawyerAreaOfLaw::CasePercentage)
                            .integer()
                            .check(
                                Expr::col(LawyerAreaOfLaw::CasePercentage)
                                    .gte(0)
                                    .and(Expr::col(LawyerAreaOfLaw::CasePercentage).lte(100)),
                            ),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_lawyer_area_of_law")
                            .col(LawyerAreaOfLaw::LawyerId)
                            .col(LawyerAreaOfLaw::AreaId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lawyer_area_of_law_lawyer_id")
                            .from(LawyerAreaOfLaw::Table, LawyerAreaOfLaw::LawyerId)
                            .to(LawyerProfiles::Table, LawyerProfiles::LawyerId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lawyer_area_of_law_area_id")
                            .from(LawyerAreaOfLaw::Table, LawyerAreaOfLaw::AreaId)
                            .to(AreasOfLaw::Table, AreasOfLaw::AreaId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LawyerServices::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(LawyerServices::LawyerId).integer().not_null())
                    .col(ColumnDef::new(LawyerServices::ServiceId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_lawyer_services")
                            .col(LawyerServices::LawyerId)
                            .col(LawyerServices::ServiceId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lawyer_services_lawyer_id")
                            .from(LawyerServices::Table, LawyerServices::LawyerId)
                            .to(LawyerProfiles::Table, LawyerProfiles::LawyerId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lawyer_services_service_id")
                            .from(LawyerServices::Table, LawyerServices::ServiceId)
                            .to(Services::Table, Services::ServiceId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LawyerTargetClients::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(LawyerTargetClients::LawyerId).integer().not_null())
                    .col(ColumnDef::new(LawyerTargetClients::ClientId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_lawyer_target_clients")
                            .col(LawyerTargetClients::LawyerId)
                            .col(LawyerTargetClients::ClientId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lawyer_target_clients_lawyer_id")
                            .from(LawyerTargetClients::Table, LawyerTargetClients::LawyerId)
                            .to(LawyerProfiles::Table, LawyerProfiles::LawyerId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lawyer_target_clients_client_id")
                            .from(LawyerTargetClients::Table, LawyerTargetClients::ClientId)
                            .to(TargetClients::Table, TargetClients::ClientId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LawyerTargetClients::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LawyerServices::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LawyerAreaOfLaw::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Locations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LawyerProfiles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Locations {
    Table,
    LocationId,
    LawyerId,
    Region,
    District,
    Ward,
    Village,
    Street,
}

#[derive(Iden)]
enum LawyerAreaOfLaw {
    #[iden = "lawyer_area_of_law"]
    Table,
    LawyerId,
    AreaId,
    CasePercentage,
}

#[derive(Iden)]
enum LawyerServices {
    Table,
    LawyerId,
    ServiceId,
}

#[derive(Iden)]
enum LawyerTargetClients {
    Table,
    LawyerId,
    ClientId,
}
