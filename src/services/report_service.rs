//! Report service - Named dashboard aggregates.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::domain::{reporting_status, ReportKind};
use crate::errors::AppResult;
use crate::infra::repositories::{
    AreaCoverage, ComplianceCount, FundingShare, LicenseCount, Overview, RegionCount,
    StaffRetention, SubmissionRow,
};
use crate::infra::UnitOfWork;

/// A report row with its computed `Overdue`/`Current` status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SubmissionStatus {
    pub name: String,
    pub reporting_frequency: Option<String>,
    pub last_submitted: Option<NaiveDate>,
    #[schema(example = "Overdue")]
    pub status: String,
}

impl SubmissionStatus {
    fn from_row(row: SubmissionRow, today: NaiveDate) -> Self {
        let status = reporting_status(row.reporting_frequency.as_deref(), row.last_submitted, today);
        Self {
            name: row.name,
            reporting_frequency: row.reporting_frequency,
            last_submitted: row.last_submitted,
            status: status.to_string(),
        }
    }
}

/// Payload of one dashboard report, serialized without a tag.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ReportData {
    LawyersByRegion(Vec<RegionCount>),
    AreasOfLawCoverage(Vec<AreaCoverage>),
    LicenseStatus(Vec<LicenseCount>),
    FundingDistribution(Vec<FundingShare>),
    ReportingStatus(Vec<SubmissionStatus>),
    ComplianceIssues(Vec<ComplianceCount>),
    StaffRetention(Vec<StaffRetention>),
    Overview(Overview),
}

#[async_trait]
pub trait ReportService: Send + Sync {
    async fn report(&self, kind: ReportKind) -> AppResult<ReportData>;
}

pub struct Reporter<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> Reporter<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Build a report as of `today`.
    pub async fn report_on(&self, kind: ReportKind, today: NaiveDate) -> AppResult<ReportData> {
        let reports = self.uow.reports();
        let data = match kind {
            ReportKind::LawyersByRegion => ReportData::LawyersByRegion(reports.lawyers_by_region().await?),
            ReportKind::AreasOfLawCoverage => {
                ReportData::AreasOfLawCoverage(reports.areas_of_law_coverage().await?)
            }
            ReportKind::LicenseStatus => ReportData::LicenseStatus(reports.license_status().await?),
            ReportKind::FundingDistribution => {
                ReportData::FundingDistribution(reports.funding_distribution().await?)
            }
            ReportKind::ReportingStatus => ReportData::ReportingStatus(
                reports
                    .submissions()
                    .await?
                    .into_iter()
                    .map(|row| SubmissionStatus::from_row(row, today))
                    .collect(),
            ),
            ReportKind::ComplianceIssues => {
                ReportData::ComplianceIssues(reports.compliance_issues().await?)
            }
            ReportKind::StaffRetention => ReportData::StaffRetention(reports.staff_retention().await?),
            ReportKind::Overview => ReportData::Overview(reports.overview().await?),
        };

        tracing::debug!(report = kind.as_str(), "Dashboard report built");
        Ok(data)
    }
}

#[async_trait]
impl<U: UnitOfWork> ReportService for Reporter<U> {
    async fn report(&self, kind: ReportKind) -> AppResult<ReportData> {
        self.report_on(kind, Utc::now().date_naive()).await
    }
}
