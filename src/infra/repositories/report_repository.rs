//! Compliance reports and the dashboard aggregate queries.
//!
//! Aggregates are written as portable SQL so they run unchanged on
//! PostgreSQL and SQLite.

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    PaginatorTrait, QueryFilter, QueryOrder, Statement,
};
use serde::Serialize;
use utoipa::ToSchema;

use super::entities::{lawyer_profile, report, staff};
use crate::domain::Report;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromQueryResult, ToSchema)]
pub struct RegionCount {
    pub region: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromQueryResult, ToSchema)]
pub struct AreaCoverage {
    pub area_name: String,
    pub lawyer_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromQueryResult, ToSchema)]
pub struct LicenseCount {
    pub license_status: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult, ToSchema)]
pub struct FundingShare {
    pub name: String,
    pub total_funding: Option<f64>,
    pub adequate_count: i64,
    pub inadequate_count: i64,
}

/// A report row before its status is computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRow {
    pub name: String,
    pub reporting_frequency: Option<String>,
    pub last_submitted: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromQueryResult, ToSchema)]
pub struct ComplianceCount {
    pub issue_type: String,
    pub count: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromQueryResult, ToSchema)]
pub struct StaffRetention {
    pub name: String,
    pub total_staff: i64,
    pub advocates: i64,
    pub lawyers: i64,
    pub paralegals: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct Overview {
    pub total_lawyers: u64,
    pub active_licenses: u64,
    pub verified_profiles: u64,
    pub total_staff: u64,
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Compliance reports filed for one profile
    async fn for_lawyer(&self, lawyer_id: i32) -> AppResult<Vec<Report>>;

    async fn lawyers_by_region(&self) -> AppResult<Vec<RegionCount>>;
    async fn areas_of_law_coverage(&self) -> AppResult<Vec<AreaCoverage>>;
    async fn license_status(&self) -> AppResult<Vec<LicenseCount>>;
    async fn funding_distribution(&self) -> AppResult<Vec<FundingShare>>;
    /// Every report with its profile name, most recent submission first
    async fn submissions(&self) -> AppResult<Vec<SubmissionRow>>;
    async fn compliance_issues(&self) -> AppResult<Vec<ComplianceCount>>;
    async fn staff_retention(&self) -> AppResult<Vec<StaffRetention>>;
    async fn overview(&self) -> AppResult<Overview>;
}

const LAWYERS_BY_REGION: &str = "\
    SELECT loc.region AS region, COUNT(DISTINCT lp.lawyer_id) AS count \
    FROM locations loc \
    JOIN lawyer_profiles lp ON loc.lawyer_id = lp.lawyer_id \
    GROUP BY loc.region \
    ORDER BY count DESC, loc.region";

const AREAS_OF_LAW_COVERAGE: &str = "\
    SELECT aol.area_name AS area_name, COUNT(DISTINCT laol.lawyer_id) AS lawyer_count \
    FROM areas_of_law aol \
    LEFT JOIN lawyer_area_of_law laol ON aol.area_id = laol.area_id \
    GROUP BY aol.area_name \
    ORDER BY lawyer_count DESC, aol.area_name";

const LICENSE_STATUS: &str = "\
    SELECT license_status, COUNT(*) AS count \
    FROM lawyer_profiles \
    WHERE license_status IS NOT NULL \
    GROUP BY license_status";

const FUNDING_DISTRIBUTION: &str = "\
    SELECT lp.name AS name, \
           SUM(f.amount) AS total_funding, \
           COUNT(CASE WHEN f.adequacy = 'Adequate' THEN 1 END) AS adequate_count, \
           COUNT(CASE WHEN f.adequacy = 'Inadequate' THEN 1 END) AS inadequate_count \
    FROM funding f \
    JOIN lawyer_profiles lp ON f.lawyer_id = lp.lawyer_id \
    GROUP BY lp.lawyer_id, lp.name \
    ORDER BY total_funding DESC";

const COMPLIANCE_ISSUES: &str = "\
    SELECT ci.issue_type AS issue_type, COUNT(*) AS count, lp.name AS name \
    FROM compliance_issues ci \
    JOIN lawyer_profiles lp ON ci.lawyer_id = lp.lawyer_id \
    GROUP BY ci.issue_type, lp.name \
    ORDER BY count DESC";

const STAFF_RETENTION: &str = "\
    SELECT lp.name AS name, \
           COUNT(s.staff_id) AS total_staff, \
           COUNT(CASE WHEN s.role = 'Advocate' THEN 1 END) AS advocates, \
           COUNT(CASE WHEN s.role = 'Lawyer' THEN 1 END) AS lawyers, \
           COUNT(CASE WHEN s.role = 'Paralegal' THEN 1 END) AS paralegals \
    FROM lawyer_profiles lp \
    LEFT JOIN staff s ON lp.lawyer_id = s.lawyer_id \
    GROUP BY lp.lawyer_id, lp.name \
    ORDER BY total_staff DESC";

pub struct ReportStore {
    db: DatabaseConnection,
}

impl ReportStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn aggregate<T: FromQueryResult + Send>(&self, sql: &str) -> AppResult<Vec<T>> {
        let statement = Statement::from_string(self.db.get_database_backend(), sql.to_string());
        Ok(T::find_by_statement(statement).all(&self.db).await?)
    }
}

#[async_trait]
impl ReportRepository for ReportStore {
    async fn for_lawyer(&self, lawyer_id: i32) -> AppResult<Vec<Report>> {
        let models = report::Entity::find()
            .filter(report::Column::LawyerId.eq(lawyer_id))
            .order_by_desc(report::Column::LastSubmitted)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Report::from).collect())
    }

    async fn lawyers_by_region(&self) -> AppResult<Vec<RegionCount>> {
        self.aggregate(LAWYERS_BY_REGION).await
    }

    async fn areas_of_law_coverage(&self) -> AppResult<Vec<AreaCoverage>> {
        self.aggregate(AREAS_OF_LAW_COVERAGE).await
    }

    async fn license_status(&self) -> AppResult<Vec<LicenseCount>> {
        self.aggregate(LICENSE_STATUS).await
    }

    async fn funding_distribution(&self) -> AppResult<Vec<FundingShare>> {
        self.aggregate(FUNDING_DISTRIBUTION).await
    }

    async fn submissions(&self) -> AppResult<Vec<SubmissionRow>> {
        let rows = report::Entity::find()
            .find_also_related(lawyer_profile::Entity)
            .order_by_desc(report::Column::LastSubmitted)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(report, lawyer)| {
                lawyer.map(|lawyer| SubmissionRow {
                    name: lawyer.name,
                    reporting_frequency: report.reporting_frequency,
                    last_submitted: report.last_submitted,
                })
            })
            .collect())
    }

    async fn compliance_issues(&self) -> AppResult<Vec<ComplianceCount>> {
        self.aggregate(COMPLIANCE_ISSUES).await
    }

    async fn staff_retention(&self) -> AppResult<Vec<StaffRetention>> {
        self.aggregate(STAFF_RETENTION).await
    }

    async fn overview(&self) -> AppResult<Overview> {
        let (total_lawyers, active_licenses, verified_profiles, total_staff) = futures::try_join!(
            lawyer_profile::Entity::find().count(&self.db),
            lawyer_profile::Entity::find()
                .filter(lawyer_profile::Column::LicenseStatus.eq("ACTIVE"))
                .count(&self.db),
            lawyer_profile::Entity::find()
                .filter(lawyer_profile::Column::Verified.eq(true))
                .count(&self.db),
            staff::Entity::find().count(&self.db),
        )?;

        Ok(Overview {
            total_lawyers,
            active_licenses,
            verified_profiles,
            total_staff,
        })
    }
}
