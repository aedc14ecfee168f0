use sea_orm::entity::prelude::*;

use crate::domain::Funding;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "funding")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub funding_id: i32,
    pub lawyer_id: i32,
    pub funding_source: Option<String>,
    pub amount: Option<f64>,
    pub adequacy: Option<String>,
    pub year: Option<i32>,
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

impl From<Model> for Funding {
    fn from(model: Model) -> Self {
        Funding {
            funding_id: model.funding_id,
            lawyer_id: model.lawyer_id,
            funding_source: model.funding_source,
            amount: model.amount,
            adequacy: model.adequacy,
            year: model.year,
            lawyer_name: None,
        }
    }
}
