//! Lookup service - Reference lists used to populate selectors.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::LookupTables;
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

#[async_trait]
pub trait LookupService: Send + Sync {
    /// All three lookup tables, each ordered by display name
    async fn tables(&self) -> AppResult<LookupTables>;
}

pub struct LookupCatalog<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> LookupCatalog<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> LookupService for LookupCatalog<U> {
    async fn tables(&self) -> AppResult<LookupTables> {
        let lookups = self.uow.lookups();
        let (areas_of_law, services, target_clients) = tokio::try_join!(
            lookups.areas_of_law(),
            lookups.services(),
            lookups.target_clients(),
        )?;

        Ok(LookupTables {
            areas_of_law,
            services,
            target_clients,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AreaOfLaw, ServiceEntry, TargetClient};
    use crate::infra::repositories::MockLookupRepository;
    use crate::services::test_support::TestUnitOfWork;

    #[tokio::test]
    async fn test_tables_serialize_with_frontend_keys() {
        let mut lookups = MockLookupRepository::new();
        lookups.expect_areas_of_law().returning(|| {
            Ok(vec![AreaOfLaw {
                area_id: 1,
                area_name: "Civil Law".into(),
            }])
        });
        lookups.expect_services().returning(|| {
            Ok(vec![ServiceEntry {
                service_id: 2,
                service_name: "Legal Education".into(),
            }])
        });
        lookups.expect_target_clients().returning(|| {
            Ok(vec![TargetClient {
                client_id: 3,
                client_type: "Women".into(),
            }])
        });

        let uow = TestUnitOfWork::default().with_lookups(lookups);
        let tables = LookupCatalog::new(Arc::new(uow)).tables().await.unwrap();
        let json = serde_json::to_value(&tables).unwrap();

        assert_eq!(json["areasOfLaw"][0]["area_name"], "Civil Law");
        assert_eq!(json["services"][0]["service_id"], 2);
        assert_eq!(json["targetClients"][0]["client_type"], "Women");
    }
}
