use sea_orm::entity::prelude::*;

use crate::domain::Staff;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "staff")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub staff_id: i32,
    pub lawyer_id: i32,
    pub name: String,
    pub role: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub education_level: Option<String>,
    pub specialization: Option<String>,
    pub years_of_practice: Option<i32>,
    pub practicing_certificate_status: Option<String>,
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

impl From<Model> for Staff {
    fn from(model: Model) -> Self {
        Staff {
            staff_id: model.staff_id,
            lawyer_id: model.lawyer_id,
            name: model.name,
            role: model.role,
            gender: model.gender,
            age: model.age,
            education_level: model.education_level,
            specialization: model.specialization,
            years_of_practice: model.years_of_practice,
            practicing_certificate_status: model.practicing_certificate_status,
        }
    }
}
