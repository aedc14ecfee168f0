//! Migration: staff, funding, reports, compliance issues and the
//! profile update history.

use sea_orm_migration::prelude::*;

use super::{LawyerProfiles, Users};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Cascading foreign key from a record table to its owning profile.
fn lawyer_fk<T: IntoIden + 'static>(name: &str, table: T, column: T) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(name)
        .from(table, column)
        .to(LawyerProfiles::Table, LawyerProfiles::LawyerId)
        .on_delete(ForeignKeyAction::Cascade)
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Staff::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Staff::StaffId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Staff::LawyerId).integer().not_null())
                    .col(ColumnDef::new(Staff::Name).string().not_null())
                    .col(ColumnDef::new(Staff::Role).string())
                    .col(ColumnDef::new(Staff::Gender).string())
                    .col(ColumnDef::new(Staff::Age).integer())
                    .col(ColumnDef::new(Staff::EducationLevel).string())
                    .col(ColumnDef::new(Staff::Specialization).string())
                    .col(ColumnDef::new(Staff::YearsOfPractice).integer())
                    .col(ColumnDef::new(Staff::PracticingCertificateStatus).string())
                    .foreign_key(&mut lawyer_fk("fk_staff_lawyer_id", Staff::Table, Staff::LawyerId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Funding::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Funding::FundingId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Funding::LawyerId).integer().not_null())
                    .col(ColumnDef::new(Funding::FundingSource).string())
                    .col(ColumnDef::new(Funding::Amount).double())
                    .col(ColumnDef::new(Funding::Adequacy).string())
                    .col(ColumnDef::new(Funding::Year).integer())
                    .foreign_key(&mut lawyer_fk(
                        "fk_funding_lawyer_id",
                        Funding::Table,
                        Funding::LawyerId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Reports::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reports::ReportId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reports::LawyerId).integer().not_null())
                    .col(ColumnDef::new(Reports::ReportingFrequency).string())
                    .col(ColumnDef::new(Reports::Authority).string())
                    .col(ColumnDef::new(Reports::LastSubmitted).date())
                    .foreign_key(&mut lawyer_fk(
                        "fk_reports_lawyer_id",
                        Reports::Table,
                        Reports::LawyerId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ComplianceIssues::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ComplianceIssues::IssueId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ComplianceIssues::LawyerId).integer().not_null())
                    .col(ColumnDef::new(ComplianceIssues::IssueType).string().not_null())
                    .col(ColumnDef::new(ComplianceIssues::Description).text())
                    .col(
                        ColumnDef::new(ComplianceIssues::ReportedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(&mut lawyer_fk(
                        "fk_compliance_issues_lawyer_id",
                        ComplianceIssues::Table,
                        ComplianceIssues::LawyerId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProfileUpdateHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProfileUpdateHistory::HistoryId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProfileUpdateHistory::LawyerId).integer().not_null())
                    .col(ColumnDef::new(ProfileUpdateHistory::UpdatedBy).integer())
                    .col(
                        ColumnDef::new(ProfileUpdateHistory::UpdateDescription)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProfileUpdateHistory::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(&mut lawyer_fk(
                        "fk_profile_update_history_lawyer_id",
                        ProfileUpdateHistory::Table,
                        ProfileUpdateHistory::LawyerId,
                    ))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profile_update_history_updated_by")
                            .from(ProfileUpdateHistory::Table, ProfileUpdateHistory::UpdatedBy)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_staff_lawyer_id")
                    .table(Staff::Table)
                    .col(Staff::LawyerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_funding_lawyer_id")
                    .table(Funding::Table)
                    .col(Funding::LawyerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProfileUpdateHistory::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ComplianceIssues::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reports::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Funding::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Staff::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Staff {
    Table,
    StaffId,
    LawyerId,
    Name,
    Role,
    Gender,
    Age,
    EducationLevel,
    Specialization,
    YearsOfPractice,
    PracticingCertificateStatus,
}

#[derive(Iden)]
enum Funding {
    Table,
    FundingId,
    LawyerId,
    FundingSource,
    Amount,
    Adequacy,
    Year,
}

#[derive(Iden)]
enum Reports {
    Table,
    ReportId,
    LawyerId,
    ReportingFrequency,
    Authority,
    LastSubmitted,
}

#[derive(Iden)]
enum ComplianceIssues {
    Table,
    IssueId,
    LawyerId,
    IssueType,
    Description,
    ReportedAt,
}

#[derive(Iden)]
enum ProfileUpdateHistory {
    #[iden = "profile_update_history"]
    Table,
    HistoryId,
    LawyerId,
    UpdatedBy,
    UpdateDescription,
    UpdatedAt,
}
