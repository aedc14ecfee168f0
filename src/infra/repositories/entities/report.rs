use sea_orm::entity::prelude::*;

use crate::domain::Report;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub report_id: i32,
    pub lawyer_id: i32,
    pub reporting_frequency: Option<String>,
    pub authority: Option<String>,
    pub last_submitted: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lawyer_profile::Entity",
        from = "Column::LawyerId",
        to = "super::lawyer_profile::Column::LawyerId",
        on_delete = "Cascade"
    )]
    Lawyer,
}

impl Related<super::lawyer_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lawyer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Report {
    fn from(model: Model) -> Self {
        Report {
            report_id: model.report_id,
            lawyer_id: model.lawyer_id,
            reporting_frequency: model.reporting_frequency,
            authority: model.authority,
            last_submitted: model.last_submitted,
        }
    }
}
