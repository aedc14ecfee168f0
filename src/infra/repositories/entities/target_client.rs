use sea_orm::entity::prelude::*;

use crate::domain::TargetClient;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "target_clients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub client_id: i32,
    #[sea_orm(unique)]
    pub client_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for TargetClient {
    fn from(model: Model) -> Self {
        TargetClient {
            client_id: model.client_id,
            client_type: model.client_type,
        }
    }
}
