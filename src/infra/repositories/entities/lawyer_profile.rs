//! Lawyer profile database entity: the aggregate root.

use sea_orm::entity::prelude::*;

use crate::domain::LawyerProfile;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "lawyer_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub lawyer_id: i32,
    /// Linked LAWYER account, cleared when the account is removed
    pub user_id: Option<i32>,
    pub name: String,
    pub provider_type: String,
    pub registration_status: Option<String>,
    pub registration_year: Option<i32>,
    pub registration_number: Option<String>,
    pub registration_stage: Option<String>,
    #[sea_orm(column_name = "process_more_than_21_days")]
    pub process_more_than_21_days: Option<bool>,
    pub process_days: Option<i32>,
    #[sea_orm(column_name = "registrar_responded_in_21_days")]
    pub registrar_responded_in_21_days: Option<bool>,
    pub respond_to_registrar_days: Option<i32>,
    pub license_status: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub mode_of_operation: Option<String>,
    pub verified: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::UserId",
        on_delete = "SetNull"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for LawyerProfile {
    fn from(model: Model) -> Self {
        LawyerProfile {
            lawyer_id: model.lawyer_id,
            user_id: model.user_id,
            name: model.name,
            provider_type: model.provider_type,
            registration_status: model.registration_status,
            registration_year: model.registration_year,
            registration_number: model.registration_number,
            registration_stage: model.registration_stage,
            process_more_than_21_days: model.process_more_than_21_days,
            process_days: model.process_days,
            registrar_responded_in_21_days: model.registrar_responded_in_21_days,
            respond_to_registrar_days: model.respond_to_registrar_days,
            license_status: model.license_status,
            phone: model.phone,
            email: model.email,
            website: model.website,
            mode_of_operation: model.mode_of_operation,
            verified: model.verified,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
