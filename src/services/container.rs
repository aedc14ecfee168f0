//! Service Container - Centralized service access.
//!
//! Handlers reach every use case through this container; all services
//! share one Unit of Work over the same connection pool.

use std::sync::Arc;

use super::{
    AuthService, Authenticator, ExportService, Exporter, LookupCatalog, LookupService,
    ProfileManager, ProfileService, RecordKeeper, RecordService, ReportService, Reporter,
};
use crate::config::Config;
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;
    fn profiles(&self) -> Arc<dyn ProfileService>;
    fn lookups(&self) -> Arc<dyn LookupService>;
    fn records(&self) -> Arc<dyn RecordService>;
    fn reports(&self) -> Arc<dyn ReportService>;
    fn exports(&self) -> Arc<dyn ExportService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    profile_service: Arc<dyn ProfileService>,
    lookup_service: Arc<dyn LookupService>,
    record_service: Arc<dyn RecordService>,
    report_service: Arc<dyn ReportService>,
    export_service: Arc<dyn ExportService>,
}

impl Services {
    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self {
            auth_service: Arc::new(Authenticator::new(uow.clone(), config)),
            profile_service: Arc::new(ProfileManager::new(uow.clone())),
            lookup_service: Arc::new(LookupCatalog::new(uow.clone())),
            record_service: Arc::new(RecordKeeper::new(uow.clone())),
            report_service: Arc::new(Reporter::new(uow.clone())),
            export_service: Arc::new(Exporter::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn profiles(&self) -> Arc<dyn ProfileService> {
        self.profile_service.clone()
    }

    fn lookups(&self) -> Arc<dyn LookupService> {
        self.lookup_service.clone()
    }

    fn records(&self) -> Arc<dyn RecordService> {
        self.record_service.clone()
    }

    fn reports(&self) -> Arc<dyn ReportService> {
        self.report_service.clone()
    }

    fn exports(&self) -> Arc<dyn ExportService> {
        self.export_service.clone()
    }
}
