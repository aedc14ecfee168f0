use sea_orm::entity::prelude::*;

use crate::domain::AreaOfLaw;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "areas_of_law")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub area_id: i32,
    #[sea_orm(unique)]
    pub area_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for AreaOfLaw {
    fn from(model: Model) -> Self {
        AreaOfLaw {
            area_id: model.area_id,
            area_name: model.area_name,
        }
    }
}
