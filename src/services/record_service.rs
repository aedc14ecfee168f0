//! Record service - Staff and funding records attached to a profile.
//!
//! Unlike the owned collections these are created, updated and deleted one
//! record at a time.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Funding, FundingPayload, Staff, StaffPayload};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

#[async_trait]
pub trait RecordService: Send + Sync {
    async fn list_staff(&self, lawyer_id: Option<i32>) -> AppResult<Vec<Staff>>;
    async fn create_staff(&self, payload: StaffPayload) -> AppResult<Staff>;
    async fn update_staff(&self, payload: StaffPayload) -> AppResult<Staff>;
    async fn delete_staff(&self, staff_id: i32) -> AppResult<()>;

    async fn list_funding(&self, lawyer_id: Option<i32>) -> AppResult<Vec<Funding>>;
    async fn create_funding(&self, payload: FundingPayload) -> AppResult<Funding>;
    async fn update_funding(&self, payload: FundingPayload) -> AppResult<Funding>;
    async fn delete_funding(&self, funding_id: i32) -> AppResult<()>;
}

pub struct RecordKeeper<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> RecordKeeper<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Resolve the owning profile of a new record.
    async fn owning_lawyer(&self, lawyer_id: Option<i32>) -> AppResult<i32> {
        let lawyer_id = lawyer_id.ok_or_else(|| AppError::bad_request("Lawyer ID is required"))?;
        if !self.uow.lawyers().exists(lawyer_id).await? {
            return Err(AppError::NotFound("Lawyer"));
        }
        Ok(lawyer_id)
    }
}

fn require_staff_name(payload: &StaffPayload) -> AppResult<()> {
    match payload.name {
        Some(_) => Ok(()),
        None => Err(AppError::bad_request("Staff name is required")),
    }
}

#[async_trait]
impl<U: UnitOfWork> RecordService for RecordKeeper<U> {
    async fn list_staff(&self, lawyer_id: Option<i32>) -> AppResult<Vec<Staff>> {
        self.uow.staff().list(lawyer_id).await
    }

    async fn create_staff(&self, payload: StaffPayload) -> AppResult<Staff> {
        let lawyer_id = self.owning_lawyer(payload.lawyer_id).await?;
        require_staff_name(&payload)?;

        let staff = self.uow.staff().create(lawyer_id, payload).await?;
        tracing::info!(staff_id = staff.staff_id, lawyer_id, "Staff member created");
        Ok(staff)
    }

    async fn update_staff(&self, payload: StaffPayload) -> AppResult<Staff> {
        let staff_id = payload
            .staff_id
            .ok_or_else(|| AppError::bad_request("Staff ID is required"))?;
        require_staff_name(&payload)?;

        self.uow.staff().update(staff_id, payload).await
    }

    async fn delete_staff(&self, staff_id: i32) -> AppResult<()> {
        self.uow.staff().delete(staff_id).await?;
        tracing::info!(staff_id, "Staff member deleted");
        Ok(())
    }

    async fn list_funding(&self, lawyer_id: Option<i32>) -> AppResult<Vec<Funding>> {
        self.uow.funding().list(lawyer_id).await
    }

    async fn create_funding(&self, payload: FundingPayload) -> AppResult<Funding> {
        let lawyer_id = self.owning_lawyer(payload.lawyer_id).await?;

        let funding = self.uow.funding().create(lawyer_id, payload).await?;
        tracing::info!(funding_id = funding.funding_id, lawyer_id, "Funding record created");
        Ok(funding)
    }

    async fn update_funding(&self, payload: FundingPayload) -> AppResult<Funding> {
        let funding_id = payload
            .funding_id
            .ok_or_else(|| AppError::bad_request("Funding ID is required"))?;

        self.uow.funding().update(funding_id, payload).await
    }

    async fn delete_funding(&self, funding_id: i32) -> AppResult<()> {
        self.uow.funding().delete(funding_id).await?;
        tracing::info!(funding_id, "Funding record deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::{
        MockFundingRepository, MockLawyerRepository, MockStaffRepository,
    };
    use crate::services::test_support::TestUnitOfWork;

    fn staff_payload(json: serde_json::Value) -> StaffPayload {
        serde_json::from_value(json).unwrap()
    }

    #[tokio::test]
    async fn test_create_staff_requires_lawyer_id() {
        let keeper = RecordKeeper::new(Arc::new(TestUnitOfWork::default()));
        let result = keeper
            .create_staff(staff_payload(serde_json::json!({"name": "Asha"})))
            .await;

        match result {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Lawyer ID is required"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_staff_for_unknown_lawyer_is_not_found() {
        let mut lawyers = MockLawyerRepository::new();
        lawyers.expect_exists().returning(|_| Ok(false));

        let uow = TestUnitOfWork::default().with_lawyers(lawyers);
        let result = RecordKeeper::new(Arc::new(uow))
            .create_staff(staff_payload(serde_json::json!({"lawyer_id": "8", "name": "Asha"})))
            .await;

        assert!(matches!(result, Err(AppError::NotFound("Lawyer"))));
    }

    #[tokio::test]
    async fn test_create_staff_passes_lawyer_id_through() {
        let mut lawyers = MockLawyerRepository::new();
        lawyers.expect_exists().returning(|_| Ok(true));
        let mut staff = MockStaffRepository::new();
        staff
            .expect_create()
            .withf(|lawyer_id, payload| *lawyer_id == 4 && payload.name.as_deref() == Some("Asha"))
            .returning(|lawyer_id, payload| {
                Ok(Staff {
                    staff_id: 11,
                    lawyer_id,
                    name: payload.name.unwrap_or_default(),
                    role: payload.role,
                    gender: None,
                    age: None,
                    education_level: None,
                    specialization: None,
                    years_of_practice: None,
                    practicing_certificate_status: None,
                })
            });

        let uow = TestUnitOfWork::default().with_lawyers(lawyers).with_staff(staff);
        let created = RecordKeeper::new(Arc::new(uow))
            .create_staff(staff_payload(
                serde_json::json!({"lawyer_id": 4, "name": "Asha", "role": "Advocate"}),
            ))
            .await
            .unwrap();

        assert_eq!(created.staff_id, 11);
        assert_eq!(created.role.as_deref(), Some("Advocate"));
    }

    #[tokio::test]
    async fn test_update_funding_requires_id() {
        let keeper = RecordKeeper::new(Arc::new(TestUnitOfWork::default()));
        let result = keeper.update_funding(FundingPayload::default()).await;

        match result {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Funding ID is required"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_unknown_funding_is_not_found() {
        let mut funding = MockFundingRepository::new();
        funding
            .expect_delete()
            .returning(|_| Err(AppError::NotFound("Funding record")));

        let uow = TestUnitOfWork::default().with_funding(funding);
        let result = RecordKeeper::new(Arc::new(uow)).delete_funding(3).await;

        assert!(matches!(result, Err(AppError::NotFound("Funding record"))));
    }
}
