use sea_orm::entity::prelude::*;

use crate::domain::Location;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub location_id: i32,
    pub lawyer_id: i32,
    pub region: String,
    pub district: Option<String>,
    pub ward: Option<String>,
    pub village: Option<String>,
    pub street: Option<String>,
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

impl From<Model> for Location {
    fn from(model: Model) -> Self {
        Location {
            location_id: model.location_id,
            lawyer_id: model.lawyer_id,
            region: model.region,
            district: model.district,
            ward: model.ward,
            village: model.village,
            street: model.street,
        }
    }
}
