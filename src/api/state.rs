//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{
    AuthService, ExportService, LookupService, ProfileService, RecordService, ReportService,
    ServiceContainer, Services,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub profile_service: Arc<dyn ProfileService>,
    pub lookup_service: Arc<dyn LookupService>,
    pub record_service: Arc<dyn RecordService>,
    pub report_service: Arc<dyn ReportService>,
    pub export_service: Arc<dyn ExportService>,
    pub database: Arc<Database>,
    /// Prefixes stripped from request paths before routing
    pub base_paths: Arc<Vec<String>>,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let base_paths = Arc::new(config.base_paths.clone());
        let container = Services::from_connection(database.get_connection(), config);
        Self::from_container(&container, database, base_paths)
    }

    /// Create application state from any service container.
    pub fn from_container(
        container: &dyn ServiceContainer,
        database: Arc<Database>,
        base_paths: Arc<Vec<String>>,
    ) -> Self {
        Self {
            auth_service: container.auth(),
            profile_service: container.profiles(),
            lookup_service: container.lookups(),
            record_service: container.records(),
            report_service: container.reports(),
            export_service: container.exports(),
            database,
            base_paths,
        }
    }
}
