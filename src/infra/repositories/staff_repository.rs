//! Staff members, managed one record at a time.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::staff::{self, ActiveModel, Entity as StaffEntity};
use crate::domain::{Staff, StaffPayload};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StaffRepository: Send + Sync {
    /// Staff ordered by name, optionally restricted to one profile
    async fn list(&self, lawyer_id: Option<i32>) -> AppResult<Vec<Staff>>;

    /// Insert a staff member. The payload's name must already be checked.
    async fn create(&self, lawyer_id: i32, payload: StaffPayload) -> AppResult<Staff>;

    /// Overwrite every editable column of an existing record.
    async fn update(&self, staff_id: i32, payload: StaffPayload) -> AppResult<Staff>;

    async fn delete(&self, staff_id: i32) -> AppResult<()>;
}

pub struct StaffStore {
    db: DatabaseConnection,
}

impl StaffStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn apply(active: &mut ActiveModel, payload: StaffPayload) {
    active.name = Set(payload.name.unwrap_or_default());
    active.role = Set(payload.role);
    active.gender = Set(payload.gender);
    active.age = Set(payload.age);
    active.education_level = Set(payload.education_level);
    active.specialization = Set(payload.specialization);
    active.years_of_practice = Set(payload.years_of_practice);
    active.practicing_certificate_status = Set(payload.practicing_certificate_status);
}

#[async_trait]
impl StaffRepository for StaffStore {
    async fn list(&self, lawyer_id: Option<i32>) -> AppResult<Vec<Staff>> {
        let mut query = StaffEntity::find();
        if let Some(id) = lawyer_id {
            query = query.filter(staff::Column::LawyerId.eq(id));
        }

        let models = query
            .order_by_asc(staff::Column::Name)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Staff::from).collect())
    }

    async fn create(&self, lawyer_id: i32, payload: StaffPayload) -> AppResult<Staff> {
        let mut active = ActiveModel {
            lawyer_id: Set(lawyer_id),
            ..Default::default()
        };
        apply(&mut active, payload);

        let model = active.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Staff::from(model))
    }

    async fn update(&self, staff_id: i32, payload: StaffPayload) -> AppResult<Staff> {
        let existing = StaffEntity::find_by_id(staff_id)
            .one(&self.db)
            .await?
            .ok_or_not_found("Staff member")?;

        let mut active: ActiveModel = existing.into();
        apply(&mut active, payload);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Staff::from(model))
    }

    async fn delete(&self, staff_id: i32) -> AppResult<()> {
        let result = StaffEntity::delete_by_id(staff_id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Staff member"));
        }
        Ok(())
    }
}
