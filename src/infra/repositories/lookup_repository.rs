//! Read-only access to the lookup tables.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use super::entities::{area_of_law, service, target_client};
use crate::domain::{AreaOfLaw, ServiceEntry, TargetClient};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Each list is ordered by its display name.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait LookupRepository: Send + Sync {
    async fn areas_of_law(&self) -> AppResult<Vec<AreaOfLaw>>;
    async fn services(&self) -> AppResult<Vec<ServiceEntry>>;
    async fn target_clients(&self) -> AppResult<Vec<TargetClient>>;
}

pub struct LookupStore {
    db: DatabaseConnection,
}

impl LookupStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LookupRepository for LookupStore {
    async fn areas_of_law(&self) -> AppResult<Vec<AreaOfLaw>> {
        let models = area_of_law::Entity::find()
            .order_by_asc(area_of_law::Column::AreaName)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(AreaOfLaw::from).collect())
    }

    async fn services(&self) -> AppResult<Vec<ServiceEntry>> {
        let models = service::Entity::find()
            .order_by_asc(service::Column::ServiceName)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(ServiceEntry::from).collect())
    }

    async fn target_clients(&self) -> AppResult<Vec<TargetClient>> {
        let models = target_client::Entity::find()
            .order_by_asc(target_client::Column::ClientType)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(TargetClient::from).collect())
    }
}
