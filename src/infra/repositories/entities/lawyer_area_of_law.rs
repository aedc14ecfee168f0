//! Join between profiles and areas of law, carrying the caseload share.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "lawyer_area_of_law")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub lawyer_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub area_id: i32,
    /// 0..=100, enforced by a CHECK constraint
    pub case_percentage: Option<i32>,
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
    #[sea_orm(
        belongs_to = "super::area_of_law::Entity",
        from = "Column::AreaId",
        to = "super::area_of_law::Column::AreaId",
        on_delete = "Cascade"
    )]
    AreaOfLaw,
}

impl Related<super::area_of_law::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AreaOfLaw.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
