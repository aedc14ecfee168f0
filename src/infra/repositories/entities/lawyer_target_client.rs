use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "lawyer_target_clients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub lawyer_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub client_id: i32,
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
        belongs_to = "super::target_client::Entity",
        from = "Column::ClientId",
        to = "super::target_client::Column::ClientId",
        on_delete = "Cascade"
    )]
    TargetClient,
}

impl Related<super::target_client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TargetClient.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
