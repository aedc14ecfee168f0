//! Read and delete access to lawyer profiles.
//!
//! Writes go through the unit of work so that a profile and its owned
//! collections change atomically.

use async_trait::async_trait;
use sea_orm::{
    sea_query::{Condition, Expr, Func, Query},
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use super::entities::{
    area_of_law, lawyer_area_of_law, lawyer_profile, lawyer_service, lawyer_target_client,
    location, service, target_client,
};
use crate::domain::{AreaShare, LawyerFilter, LawyerProfile, Location, ProfileCollections};
use crate::errors::{AppError, AppResult};
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait LawyerRepository: Send + Sync {
    /// One page of profiles matching `filter`, ordered by name, plus the
    /// total number of matches.
    async fn list(
        &self,
        filter: &LawyerFilter,
        params: PaginationParams,
    ) -> AppResult<(Vec<LawyerProfile>, u64)>;

    /// Every profile, ordered by name
    async fn list_all(&self) -> AppResult<Vec<LawyerProfile>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<LawyerProfile>>;

    /// Locations, areas of law, services and target clients of a profile
    async fn collections(&self, id: i32) -> AppResult<ProfileCollections>;

    async fn exists(&self, id: i32) -> AppResult<bool>;

    /// Delete a profile; owned rows go with it through cascading keys.
    async fn delete(&self, id: i32) -> AppResult<()>;
}

pub struct LawyerStore {
    db: DatabaseConnection,
}

impl LawyerStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn locations(&self, id: i32) -> AppResult<Vec<Location>> {
        let models = location::Entity::find()
            .filter(location::Column::LawyerId.eq(id))
            .order_by_asc(location::Column::LocationId)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Location::from).collect())
    }

    async fn areas_of_law(&self, id: i32) -> AppResult<Vec<AreaShare>> {
        let rows = lawyer_area_of_law::Entity::find()
            .filter(lawyer_area_of_law::Column::LawyerId.eq(id))
            .find_also_related(area_of_law::Entity)
            .order_by_asc(area_of_law::Column::AreaName)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(link, area)| {
                area.map(|area| AreaShare {
                    area_name: area.area_name,
                    case_percentage: link.case_percentage,
                })
            })
            .collect())
    }

    async fn services(&self, id: i32) -> AppResult<Vec<String>> {
        let rows = lawyer_service::Entity::find()
            .filter(lawyer_service::Column::LawyerId.eq(id))
            .find_also_related(service::Entity)
            .order_by_asc(service::Column::ServiceName)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, s)| s.map(|s| s.service_name))
            .collect())
    }

    async fn target_clients(&self, id: i32) -> AppResult<Vec<String>> {
        let rows = lawyer_target_client::Entity::find()
            .filter(lawyer_target_client::Column::LawyerId.eq(id))
            .find_also_related(target_client::Entity)
            .order_by_asc(target_client::Column::ClientType)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, c)| c.map(|c| c.client_type))
            .collect())
    }
}

/// Apply the list filters. Joined criteria are expressed as `IN (subquery)`
/// so a profile appears once however many child rows match.
fn filtered(filter: &LawyerFilter) -> Select<lawyer_profile::Entity> {
    let mut query = lawyer_profile::Entity::find();

    if let Some(search) = &filter.search {
        let pattern = format!("%{}%", search.to_lowercase());
        query = query.filter(
            Condition::any()
                .add(Expr::expr(Func::lower(Expr::col(lawyer_profile::Column::Name))).like(pattern.clone()))
                .add(Expr::expr(Func::lower(Expr::col(lawyer_profile::Column::Email))).like(pattern)),
        );
    }

    if let Some(region) = &filter.region {
        query = query.filter(
            lawyer_profile::Column::LawyerId.in_subquery(
                Query::select()
                    .column(location::Column::LawyerId)
                    .from(location::Entity)
                    .and_where(location::Column::Region.eq(region.as_str()))
                    .to_owned(),
            ),
        );
    }

    if let Some(area) = &filter.area_of_law {
        query = query.filter(
            lawyer_profile::Column::LawyerId.in_subquery(
                Query::select()
                    .column((lawyer_area_of_law::Entity, lawyer_area_of_law::Column::LawyerId))
                    .from(lawyer_area_of_law::Entity)
                    .inner_join(
                        area_of_law::Entity,
                        Expr::col((lawyer_area_of_law::Entity, lawyer_area_of_law::Column::AreaId))
                            .equals((area_of_law::Entity, area_of_law::Column::AreaId)),
                    )
                    .and_where(area_of_law::Column::AreaName.eq(area.as_str()))
                    .to_owned(),
            ),
        );
    }

    if let Some(name) = &filter.service {
        query = query.filter(
            lawyer_profile::Column::LawyerId.in_subquery(
                Query::select()
                    .column((lawyer_service::Entity, lawyer_service::Column::LawyerId))
                    .from(lawyer_service::Entity)
                    .inner_join(
                        service::Entity,
                        Expr::col((lawyer_service::Entity, lawyer_service::Column::ServiceId))
                            .equals((service::Entity, service::Column::ServiceId)),
                    )
                    .and_where(service::Column::ServiceName.eq(name.as_str()))
                    .to_owned(),
            ),
        );
    }

    if let Some(status) = &filter.license_status {
        query = query.filter(lawyer_profile::Column::LicenseStatus.eq(status.as_str()));
    }

    query
}

#[async_trait]
impl LawyerRepository for LawyerStore {
    async fn list(
        &self,
        filter: &LawyerFilter,
        params: PaginationParams,
    ) -> AppResult<(Vec<LawyerProfile>, u64)> {
        let paginator = filtered(filter)
            .order_by_asc(lawyer_profile::Column::Name)
            .order_by_asc(lawyer_profile::Column::LawyerId)
            .paginate(&self.db, params.limit);

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(params.page_index()).await?;

        Ok((models.into_iter().map(LawyerProfile::from).collect(), total))
    }

    async fn list_all(&self) -> AppResult<Vec<LawyerProfile>> {
        let models = lawyer_profile::Entity::find()
            .order_by_asc(lawyer_profile::Column::Name)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(LawyerProfile::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<LawyerProfile>> {
        let result = lawyer_profile::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;
        Ok(result.map(LawyerProfile::from))
    }

    async fn collections(&self, id: i32) -> AppResult<ProfileCollections> {
        let (locations, areas_of_law, services, target_clients) = futures::try_join!(
            self.locations(id),
            self.areas_of_law(id),
            self.services(id),
            self.target_clients(id),
        )?;

        Ok(ProfileCollections {
            locations,
            areas_of_law,
            services,
            target_clients,
        })
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        let count = lawyer_profile::Entity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = lawyer_profile::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Lawyer"));
        }

        Ok(())
    }
}
