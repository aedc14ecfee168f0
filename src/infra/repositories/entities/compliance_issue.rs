use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "compliance_issues")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub issue_id: i32,
    pub lawyer_id: i32,
    pub issue_type: String,
    pub description: Option<String>,
    pub reported_at: DateTimeUtc,
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

impl ActiveModelBehavior for ActiveModel {}
