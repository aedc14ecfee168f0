use sea_orm::entity::prelude::*;

use crate::domain::ServiceEntry;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub service_id: i32,
    #[sea_orm(unique)]
    pub service_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ServiceEntry {
    fn from(model: Model) -> Self {
        ServiceEntry {
            service_id: model.service_id,
            service_name: model.service_name,
        }
    }
}
