//! Funding records, managed one record at a time.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::funding::{self, ActiveModel, Entity as FundingEntity};
use super::entities::lawyer_profile;
use crate::domain::{Funding, FundingPayload};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait FundingRepository: Send + Sync {
    /// With a profile id: that profile's records, newest year first.
    /// Without: every record with its profile name, by year then amount, descending.
    async fn list(&self, lawyer_id: Option<i32>) -> AppResult<Vec<Funding>>;

    async fn create(&self, lawyer_id: i32, payload: FundingPayload) -> AppResult<Funding>;

    async fn update(&self, funding_id: i32, payload: FundingPayload) -> AppResult<Funding>;

    async fn delete(&self, funding_id: i32) -> AppResult<()>;
}

pub struct FundingStore {
    db: DatabaseConnection,
}

impl FundingStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn apply(active: &mut ActiveModel, payload: FundingPayload) {
    active.funding_source = Set(payload.funding_source);
    active.amount = Set(payload.amount);
    active.adequacy = Set(payload.adequacy);
    active.year = Set(payload.year);
}

#[async_trait]
impl FundingRepository for FundingStore {
    async fn list(&self, lawyer_id: Option<i32>) -> AppResult<Vec<Funding>> {
        if let Some(id) = lawyer_id {
            let models = FundingEntity::find()
                .filter(funding::Column::LawyerId.eq(id))
                .order_by_desc(funding::Column::Year)
                .all(&self.db)
                .await?;
            return Ok(models.into_iter().map(Funding::from).collect());
        }

        let rows = FundingEntity::find()
            .find_also_related(lawyer_profile::Entity)
            .order_by_desc(funding::Column::Year)
            .order_by_desc(funding::Column::Amount)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(model, lawyer)| Funding {
                lawyer_name: lawyer.map(|l| l.name),
                ..Funding::from(model)
            })
            .collect())
    }

    async fn create(&self, lawyer_id: i32, payload: FundingPayload) -> AppResult<Funding> {
        let mut active = ActiveModel {
            lawyer_id: Set(lawyer_id),
            ..Default::default()
        };
        apply(&mut active, payload);

        let model = active.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Funding::from(model))
    }

    async fn update(&self, funding_id: i32, payload: FundingPayload) -> AppResult<Funding> {
        let existing = FundingEntity::find_by_id(funding_id)
            .one(&self.db)
            .await?
            .ok_or_not_found("Funding record")?;

        let mut active: ActiveModel = existing.into();
        apply(&mut active, payload);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Funding::from(model))
    }

    async fn delete(&self, funding_id: i32) -> AppResult<()> {
        let result = FundingEntity::delete_by_id(funding_id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Funding record"));
        }
        Ok(())
    }
}
