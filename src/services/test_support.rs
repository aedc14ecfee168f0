//! Mock-backed unit of work shared by the service tests.

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::{AppError, AppResult};
use crate::infra::repositories::{
    FundingRepository, LawyerRepository, LookupRepository, MockFundingRepository,
    MockLawyerRepository, MockLookupRepository, MockReportRepository, MockStaffRepository,
    MockUserRepository, ReportRepository, StaffRepository, UserRepository,
};
use crate::infra::{TransactionContext, TxFuture, UnitOfWork};

/// Unit of work over mockall repositories. Transactions need a real
/// database and are exercised by the integration tests instead.
pub struct TestUnitOfWork {
    users: Arc<MockUserRepository>,
    lawyers: Arc<MockLawyerRepository>,
    lookups: Arc<MockLookupRepository>,
    staff: Arc<MockStaffRepository>,
    funding: Arc<MockFundingRepository>,
    reports: Arc<MockReportRepository>,
}

impl Default for TestUnitOfWork {
    fn default() -> Self {
        Self {
            users: Arc::new(MockUserRepository::new()),
            lawyers: Arc::new(MockLawyerRepository::new()),
            lookups: Arc::new(MockLookupRepository::new()),
            staff: Arc::new(MockStaffRepository::new()),
            funding: Arc::new(MockFundingRepository::new()),
            reports: Arc::new(MockReportRepository::new()),
        }
    }
}

impl TestUnitOfWork {
    pub fn with_users(mut self, repo: MockUserRepository) -> Self {
        self.users = Arc::new(repo);
        self
    }

    pub fn with_lawyers(mut self, repo: MockLawyerRepository) -> Self {
        self.lawyers = Arc::new(repo);
        self
    }

    pub fn with_lookups(mut self, repo: MockLookupRepository) -> Self {
        self.lookups = Arc::new(repo);
        self
    }

    pub fn with_staff(mut self, repo: MockStaffRepository) -> Self {
        self.staff = Arc::new(repo);
        self
    }

    pub fn with_funding(mut self, repo: MockFundingRepository) -> Self {
        self.funding = Arc::new(repo);
        self
    }

    pub fn with_reports(mut self, repo: MockReportRepository) -> Self {
        self.reports = Arc::new(repo);
        self
    }
}

#[async_trait]
impl UnitOfWork for TestUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn lawyers(&self) -> Arc<dyn LawyerRepository> {
        self.lawyers.clone()
    }

    fn lookups(&self) -> Arc<dyn LookupRepository> {
        self.lookups.clone()
    }

    fn staff(&self) -> Arc<dyn StaffRepository> {
        self.staff.clone()
    }

    fn funding(&self) -> Arc<dyn FundingRepository> {
        self.funding.clone()
    }

    fn reports(&self) -> Arc<dyn ReportRepository> {
        self.reports.clone()
    }

    async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        Err(AppError::internal("Transactions not supported in test mock"))
    }
}
