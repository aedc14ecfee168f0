//! Unit of Work pattern implementation.
//!
//! Centralizes repository access and runs multi-table profile writes inside
//! one database transaction: committed when the closure returns `Ok`, rolled
//! back on any error.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    AccessMode, ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, IsolationLevel, QueryFilter, Set, TransactionTrait,
};

use super::repositories::entities::{
    area_of_law, lawyer_area_of_law, lawyer_profile, lawyer_service, lawyer_target_client,
    location, profile_update_history, service, target_client, user,
};
use super::repositories::{
    FundingRepository, FundingStore, LawyerRepository, LawyerStore, LookupRepository, LookupStore,
    ReportRepository, ReportStore, StaffRepository, StaffStore, UserRepository, UserStore,
};
use crate::domain::{AreaShareInput, ChildSets, LocationInput, ProfileFields, User, UserRole};
use crate::errors::{AppError, AppResult, OptionExt};

/// Boxed future returned by a transaction closure.
pub type TxFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Unit of Work trait for dependency injection.
///
/// Not mockable directly because of the generic `transaction` method;
/// tests provide their own implementation.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    fn users(&self) -> Arc<dyn UserRepository>;
    fn lawyers(&self) -> Arc<dyn LawyerRepository>;
    fn lookups(&self) -> Arc<dyn LookupRepository>;
    fn staff(&self) -> Arc<dyn StaffRepository>;
    fn funding(&self) -> Arc<dyn FundingRepository>;
    fn reports(&self) -> Arc<dyn ReportRepository>;

    /// Execute a closure within a transaction.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send;
}

/// Repository access scoped to one open transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    pub fn users(&self) -> TxUserRepository<'_> {
        TxUserRepository { txn: self.txn }
    }

    pub fn lawyers(&self) -> TxLawyerRepository<'_> {
        TxLawyerRepository { txn: self.txn }
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    user_repo: Arc<UserStore>,
    lawyer_repo: Arc<LawyerStore>,
    lookup_repo: Arc<LookupStore>,
    staff_repo: Arc<StaffStore>,
    funding_repo: Arc<FundingStore>,
    report_repo: Arc<ReportStore>,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            lawyer_repo: Arc::new(LawyerStore::new(db.clone())),
            lookup_repo: Arc::new(LookupStore::new(db.clone())),
            staff_repo: Arc::new(StaffStore::new(db.clone())),
            funding_repo: Arc::new(FundingStore::new(db.clone())),
            report_repo: Arc::new(ReportStore::new(db.clone())),
            db,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn lawyers(&self) -> Arc<dyn LawyerRepository> {
        self.lawyer_repo.clone()
    }

    fn lookups(&self) -> Arc<dyn LookupRepository> {
        self.lookup_repo.clone()
    }

    fn staff(&self) -> Arc<dyn StaffRepository> {
        self.staff_repo.clone()
    }

    fn funding(&self) -> Arc<dyn FundingRepository> {
        self.funding_repo.clone()
    }

    fn reports(&self) -> Arc<dyn ReportRepository> {
        self.report_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(Some(IsolationLevel::ReadCommitted), Some(AccessMode::ReadWrite))
            .await
            .map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                tracing::warn!("Rolling back transaction: {}", e);
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-aware user repository.
pub struct TxUserRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxUserRepository<'a> {
    /// Create an account with an already hashed password.
    pub async fn create(
        &self,
        username: String,
        password_hash: String,
        role: UserRole,
    ) -> AppResult<User> {
        let model = user::ActiveModel {
            username: Set(username),
            password_hash: Set(password_hash),
            role: Set(role.to_string()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.txn)
        .await
        .map_err(AppError::from)?;

        Ok(User::from(model))
    }
}

/// Transaction-aware profile writes.
pub struct TxLawyerRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxLawyerRepository<'a> {
    /// Insert the profile row and return its id.
    ///
    /// Callers check that name and provider type are present.
    pub async fn insert(&self, user_id: Option<i32>, fields: ProfileFields) -> AppResult<i32> {
        let now = Utc::now();
        let model = lawyer_profile::ActiveModel {
            user_id: Set(user_id),
            name: Set(fields.name.unwrap_or_default()),
            provider_type: Set(fields.provider_type.unwrap_or_default()),
            registration_status: Set(fields.registration_status),
            registration_year: Set(fields.registration_year),
            registration_number: Set(fields.registration_number),
            registration_stage: Set(fields.registration_stage),
            process_more_than_21_days: Set(fields.process_more_than_21_days),
            process_days: Set(fields.process_days),
            registrar_responded_in_21_days: Set(fields.registrar_responded_in_21_days),
            respond_to_registrar_days: Set(fields.respond_to_registrar_days),
            license_status: Set(fields.license_status),
            phone: Set(fields.phone),
            email: Set(fields.email),
            website: Set(fields.website),
            mode_of_operation: Set(fields.mode_of_operation),
            verified: Set(fields.verified),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(self.txn)
        .await
        .map_err(AppError::from)?;

        Ok(model.lawyer_id)
    }

    /// Overwrite the scalar columns of an existing profile.
    ///
    /// Absent name and provider type keep their stored values; every other
    /// absent field is cleared.
    pub async fn update(&self, lawyer_id: i32, fields: ProfileFields) -> AppResult<()> {
        let existing = lawyer_profile::Entity::find_by_id(lawyer_id)
            .one(self.txn)
            .await?
            .ok_or_not_found("Lawyer")?;

        let mut active: lawyer_profile::ActiveModel = existing.into();
        if let Some(name) = fields.name {
            active.name = Set(name);
        }
        if let Some(provider_type) = fields.provider_type {
            active.provider_type = Set(provider_type);
        }
        active.registration_status = Set(fields.registration_status);
        active.registration_year = Set(fields.registration_year);
        active.registration_number = Set(fields.registration_number);
        active.registration_stage = Set(fields.registration_stage);
        active.process_more_than_21_days = Set(fields.process_more_than_21_days);
        active.process_days = Set(fields.process_days);
        active.registrar_responded_in_21_days = Set(fields.registrar_responded_in_21_days);
        active.respond_to_registrar_days = Set(fields.respond_to_registrar_days);
        active.license_status = Set(fields.license_status);
        active.phone = Set(fields.phone);
        active.email = Set(fields.email);
        active.website = Set(fields.website);
        active.mode_of_operation = Set(fields.mode_of_operation);
        active.verified = Set(fields.verified);
        active.updated_at = Set(Utc::now());

        active.update(self.txn).await.map_err(AppError::from)?;
        Ok(())
    }

    /// Delete every owned collection row of a profile.
    pub async fn clear_collections(&self, lawyer_id: i32) -> AppResult<()> {
        location::Entity::delete_many()
            .filter(location::Column::LawyerId.eq(lawyer_id))
            .exec(self.txn)
            .await?;
        lawyer_area_of_law::Entity::delete_many()
            .filter(lawyer_area_of_law::Column::LawyerId.eq(lawyer_id))
            .exec(self.txn)
            .await?;
        lawyer_service::Entity::delete_many()
            .filter(lawyer_service::Column::LawyerId.eq(lawyer_id))
            .exec(self.txn)
            .await?;
        lawyer_target_client::Entity::delete_many()
            .filter(lawyer_target_client::Column::LawyerId.eq(lawyer_id))
            .exec(self.txn)
            .await?;
        Ok(())
    }

    /// Insert the owned collections. Names missing from the lookup tables
    /// are skipped.
    pub async fn insert_collections(&self, lawyer_id: i32, children: ChildSets) -> AppResult<()> {
        self.insert_locations(lawyer_id, children.locations).await?;
        self.insert_areas(lawyer_id, children.areas_of_law).await?;
        self.insert_services(lawyer_id, children.services).await?;
        self.insert_target_clients(lawyer_id, children.target_clients).await?;
        Ok(())
    }

    /// Append an entry to the profile's update history.
    pub async fn record_history(
        &self,
        lawyer_id: i32,
        updated_by: i32,
        description: String,
    ) -> AppResult<()> {
        profile_update_history::ActiveModel {
            lawyer_id: Set(lawyer_id),
            updated_by: Set(Some(updated_by)),
            update_description: Set(description),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.txn)
        .await
        .map_err(AppError::from)?;
        Ok(())
    }

    async fn insert_locations(&self, lawyer_id: i32, locations: Vec<LocationInput>) -> AppResult<()> {
        let rows: Vec<location::ActiveModel> = locations
            .into_iter()
            .filter_map(|loc| {
                let region = loc.region?;
                Some(location::ActiveModel {
                    lawyer_id: Set(lawyer_id),
                    region: Set(region),
                    district: Set(loc.district),
                    ward: Set(loc.ward),
                    village: Set(loc.village),
                    street: Set(loc.street),
                    ..Default::default()
                })
            })
            .collect();

        if !rows.is_empty() {
            location::Entity::insert_many(rows)
                .exec_without_returning(self.txn)
                .await?;
        }
        Ok(())
    }

    async fn insert_areas(&self, lawyer_id: i32, areas: Vec<AreaShareInput>) -> AppResult<()> {
        let names: Vec<String> = areas.iter().filter_map(|a| a.area_name.clone()).collect();
        if names.is_empty() {
            return Ok(());
        }

        let known: HashMap<String, i32> = area_of_law::Entity::find()
            .filter(area_of_law::Column::AreaName.is_in(names))
            .all(self.txn)
            .await?
            .into_iter()
            .map(|m| (m.area_name, m.area_id))
            .collect();

        let rows: Vec<lawyer_area_of_law::ActiveModel> = areas
            .into_iter()
            .filter_map(|area| {
                let area_id = *known.get(area.area_name.as_deref()?)?;
                Some(lawyer_area_of_law::ActiveModel {
                    lawyer_id: Set(lawyer_id),
                    area_id: Set(area_id),
                    case_percentage: Set(Some(area.case_percentage.unwrap_or(0))),
                })
            })
            .collect();

        if !rows.is_empty() {
            lawyer_area_of_law::Entity::insert_many(rows)
                .exec_without_returning(self.txn)
                .await?;
        }
        Ok(())
    }

    async fn insert_services(&self, lawyer_id: i32, names: Vec<String>) -> AppResult<()> {
        if names.is_empty() {
            return Ok(());
        }

        let rows: Vec<lawyer_service::ActiveModel> = service::Entity::find()
            .filter(service::Column::ServiceName.is_in(names))
            .all(self.txn)
            .await?
            .into_iter()
            .map(|s| lawyer_service::ActiveModel {
                lawyer_id: Set(lawyer_id),
                service_id: Set(s.service_id),
            })
            .collect();

        if !rows.is_empty() {
            lawyer_service::Entity::insert_many(rows)
                .exec_without_returning(self.txn)
                .await?;
        }
        Ok(())
    }

    async fn insert_target_clients(&self, lawyer_id: i32, names: Vec<String>) -> AppResult<()> {
        if names.is_empty() {
            return Ok(());
        }

        let rows: Vec<lawyer_target_client::ActiveModel> = target_client::Entity::find()
            .filter(target_client::Column::ClientType.is_in(names))
            .all(self.txn)
            .await?
            .into_iter()
            .map(|c| lawyer_target_client::ActiveModel {
                lawyer_id: Set(lawyer_id),
                client_id: Set(c.client_id),
            })
            .collect();

        if !rows.is_empty() {
            lawyer_target_client::Entity::insert_many(rows)
                .exec_without_returning(self.txn)
                .await?;
        }
        Ok(())
    }
}
