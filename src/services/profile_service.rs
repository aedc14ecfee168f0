//! Profile service - Lawyer profile listing, detail and composite writes.
//!
//! Create and update touch the profile row, its four owned collections and
//! the history log; each runs as one transaction through the Unit of Work.

use async_trait::async_trait;
use futures::future::try_join_all;
use std::sync::Arc;

use crate::config::{HISTORY_PROFILE_CREATED, HISTORY_PROFILE_UPDATED};
use crate::domain::{AuthUser, LawyerFilter, LawyerView, Password, ProfilePayload, UserRole};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::types::{Paginated, PaginationParams};

#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Filtered page of profiles, each expanded with its owned collections
    async fn list(
        &self,
        filter: LawyerFilter,
        params: PaginationParams,
    ) -> AppResult<Paginated<LawyerView>>;

    /// One profile with its collections, staff, funding and reports
    async fn get(&self, id: i32) -> AppResult<LawyerView>;

    /// Create a profile and return its id
    async fn create(&self, payload: ProfilePayload, acting: &AuthUser) -> AppResult<i32>;

    /// Overwrite a profile's fields and replace its owned collections
    async fn update(&self, id: i32, payload: ProfilePayload, acting: &AuthUser) -> AppResult<()>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of ProfileService using Unit of Work.
pub struct ProfileManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ProfileManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ProfileService for ProfileManager<U> {
    async fn list(
        &self,
        filter: LawyerFilter,
        params: PaginationParams,
    ) -> AppResult<Paginated<LawyerView>> {
        let lawyers = self.uow.lawyers();
        let (profiles, total) = lawyers.list(&filter, params).await?;

        let views = try_join_all(profiles.into_iter().map(|profile| {
            let lawyers = lawyers.clone();
            async move {
                let collections = lawyers.collections(profile.lawyer_id).await?;
                Ok::<_, AppError>(LawyerView::new(profile, collections))
            }
        }))
        .await?;

        Ok(Paginated::new(views, total, params))
    }

    async fn get(&self, id: i32) -> AppResult<LawyerView> {
        let profile = self
            .uow
            .lawyers()
            .find_by_id(id)
            .await?
            .ok_or_not_found("Lawyer")?;

        let lawyers = self.uow.lawyers();
        let staff = self.uow.staff();
        let funding = self.uow.funding();
        let reports = self.uow.reports();
        let (collections, staff, funding, reports) = tokio::try_join!(
            lawyers.collections(id),
            staff.list(Some(id)),
            funding.list(Some(id)),
            reports.for_lawyer(id),
        )?;

        Ok(LawyerView::new(profile, collections).with_records(staff, funding, reports))
    }

    async fn create(&self, payload: ProfilePayload, acting: &AuthUser) -> AppResult<i32> {
        let parts = payload.into_parts();
        if !parts.fields.has_required() {
            return Err(AppError::bad_request("Name and provider type are required"));
        }

        let account = match parts.account {
            Some(account) => {
                if self.uow.users().find_by_username(&account.username).await?.is_some() {
                    return Err(AppError::bad_request("Username already exists"));
                }
                let hash = Password::new(&account.password)?.into_string();
                Some((account.username, hash))
            }
            None => None,
        };

        let fields = parts.fields;
        let children = parts.children;
        let description = parts
            .description
            .unwrap_or_else(|| HISTORY_PROFILE_CREATED.to_string());
        let acting_id = acting.user_id;

        let lawyer_id = self
            .uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    let user_id = match account {
                        Some((username, hash)) => {
                            Some(ctx.users().create(username, hash, UserRole::Lawyer).await?.id)
                        }
                        None => None,
                    };

                    let lawyers = ctx.lawyers();
                    let lawyer_id = lawyers.insert(user_id, fields).await?;
                    lawyers.insert_collections(lawyer_id, children).await?;
                    lawyers.record_history(lawyer_id, acting_id, description).await?;
                    Ok(lawyer_id)
                })
            })
            .await?;

        tracing::info!(lawyer_id, acting_user = acting_id, "Lawyer profile created");
        Ok(lawyer_id)
    }

    async fn update(&self, id: i32, payload: ProfilePayload, acting: &AuthUser) -> AppResult<()> {
        let parts = payload.into_parts();
        let fields = parts.fields;
        let children = parts.children;
        let description = parts
            .description
            .unwrap_or_else(|| HISTORY_PROFILE_UPDATED.to_string());
        let acting_id = acting.user_id;

        self.uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    let lawyers = ctx.lawyers();
                    lawyers.update(id, fields).await?;
                    lawyers.clear_collections(id).await?;
                    lawyers.insert_collections(id, children).await?;
                    lawyers.record_history(id, acting_id, description).await?;
                    Ok(())
                })
            })
            .await?;

        tracing::info!(lawyer_id = id, acting_user = acting_id, "Lawyer profile updated");
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.uow.lawyers().delete(id).await?;
        tracing::info!(lawyer_id = id, "Lawyer profile deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LawyerProfile, Location, ProfileCollections, Report};
    use crate::infra::repositories::{
        MockFundingRepository, MockLawyerRepository, MockReportRepository, MockStaffRepository,
        MockUserRepository,
    };
    use crate::services::test_support::TestUnitOfWork;
    use chrono::Utc;

    fn profile(id: i32, name: &str) -> LawyerProfile {
        let now = Utc::now();
        LawyerProfile {
            lawyer_id: id,
            user_id: None,
            name: name.into(),
            provider_type: "NGO".into(),
            registration_status: None,
            registration_year: None,
            registration_number: None,
            registration_stage: None,
            process_more_than_21_days: None,
            process_days: None,
            registrar_responded_in_21_days: None,
            respond_to_registrar_days: None,
            license_status: Some("ACTIVE".into()),
            phone: None,
            email: None,
            website: None,
            mode_of_operation: None,
            verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    fn admin() -> AuthUser {
        AuthUser {
            user_id: 1,
            role: UserRole::Admin,
        }
    }

    fn payload(json: serde_json::Value) -> ProfilePayload {
        serde_json::from_value(json).unwrap()
    }

    #[tokio::test]
    async fn test_list_expands_collections() {
        let mut lawyers = MockLawyerRepository::new();
        lawyers
            .expect_list()
            .returning(|_, _| Ok((vec![profile(1, "Alpha"), profile(2, "Beta")], 12)));
        lawyers.expect_collections().returning(|id| {
            Ok(ProfileCollections {
                locations: vec![Location {
                    location_id: id * 10,
                    lawyer_id: id,
                    region: "Arusha".into(),
                    district: None,
                    ward: None,
                    village: None,
                    street: None,
                }],
                services: vec!["Mediation/ADR".into()],
                ..Default::default()
            })
        });

        let uow = TestUnitOfWork::default().with_lawyers(lawyers);
        let service = ProfileManager::new(Arc::new(uow));
        let page = service
            .list(LawyerFilter::default(), PaginationParams::from_query(Some("2"), Some("10")))
            .await
            .unwrap();

        assert_eq!(page.total, 12);
        assert_eq!(page.page, 2);
        assert_eq!(page.limit, 10);
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[1].locations[0].lawyer_id, 2);
        assert!(page.data[0].staff.is_none());
    }

    #[tokio::test]
    async fn test_get_unknown_profile_is_not_found() {
        let mut lawyers = MockLawyerRepository::new();
        lawyers.expect_find_by_id().returning(|_| Ok(None));

        let uow = TestUnitOfWork::default().with_lawyers(lawyers);
        let result = ProfileManager::new(Arc::new(uow)).get(404).await;

        assert!(matches!(result, Err(AppError::NotFound("Lawyer"))));
    }

    #[tokio::test]
    async fn test_get_attaches_records() {
        let mut lawyers = MockLawyerRepository::new();
        lawyers
            .expect_find_by_id()
            .returning(|id| Ok(Some(profile(id, "Alpha"))));
        lawyers
            .expect_collections()
            .returning(|_| Ok(ProfileCollections::default()));
        let mut staff = MockStaffRepository::new();
        staff
            .expect_list()
            .withf(|filter| *filter == Some(3))
            .returning(|_| Ok(vec![]));
        let mut funding = MockFundingRepository::new();
        funding.expect_list().returning(|_| Ok(vec![]));
        let mut reports = MockReportRepository::new();
        reports.expect_for_lawyer().returning(|id| {
            Ok(vec![Report {
                report_id: 1,
                lawyer_id: id,
                reporting_frequency: Some("Monthly".into()),
                authority: None,
                last_submitted: None,
            }])
        });

        let uow = TestUnitOfWork::default()
            .with_lawyers(lawyers)
            .with_staff(staff)
            .with_funding(funding)
            .with_reports(reports);
        let view = ProfileManager::new(Arc::new(uow)).get(3).await.unwrap();

        assert_eq!(view.staff, Some(vec![]));
        assert_eq!(view.reports.map(|r| r.len()), Some(1));
    }

    #[tokio::test]
    async fn test_create_requires_name_and_provider_type() {
        let service = ProfileManager::new(Arc::new(TestUnitOfWork::default()));
        let result = service
            .create(payload(serde_json::json!({"name": "Only a name"})), &admin())
            .await;

        match result {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Name and provider type are required"),
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_taken_username() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(|name| {
            Ok(Some(crate::domain::User {
                id: 5,
                username: name.to_string(),
                password_hash: String::new(),
                role: UserRole::Lawyer,
            }))
        });

        let uow = TestUnitOfWork::default().with_users(users);
        let result = ProfileManager::new(Arc::new(uow))
            .create(
                payload(serde_json::json!({
                    "name": "Haki",
                    "provider_type": "NGO",
                    "username": "haki",
                    "password": "secret"
                })),
                &admin(),
            )
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_delete_propagates_not_found() {
        let mut lawyers = MockLawyerRepository::new();
        lawyers
            .expect_delete()
            .returning(|_| Err(AppError::NotFound("Lawyer")));

        let uow = TestUnitOfWork::default().with_lawyers(lawyers);
        let result = ProfileManager::new(Arc::new(uow)).delete(9).await;

        assert!(matches!(result, Err(AppError::NotFound("Lawyer"))));
    }
}
