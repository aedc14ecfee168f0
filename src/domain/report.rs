//! Dashboard report kinds and the reporting-status rule.

use chrono::{Duration, NaiveDate};

/// Named dashboard aggregates. Unknown names fall back to `Overview`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    LawyersByRegion,
    AreasOfLawCoverage,
    LicenseStatus,
    FundingDistribution,
    ReportingStatus,
    ComplianceIssues,
    StaffRetention,
    Overview,
}

impl ReportKind {
    pub fn parse(value: Option<&str>) -> Self {
        match value.unwrap_or_default() {
            "lawyers_by_region" => Self::LawyersByRegion,
            "areas_of_law_coverage" => Self::AreasOfLawCoverage,
            "license_status" => Self::LicenseStatus,
            "funding_distribution" => Self::FundingDistribution,
            "reporting_status" => Self::ReportingStatus,
            "compliance_issues" => Self::ComplianceIssues,
            "staff_retention" => Self::StaffRetention,
            _ => Self::Overview,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LawyersByRegion => "lawyers_by_region",
            Self::AreasOfLawCoverage => "areas_of_law_coverage",
            Self::LicenseStatus => "license_status",
            Self::FundingDistribution => "funding_distribution",
            Self::ReportingStatus => "reporting_status",
            Self::ComplianceIssues => "compliance_issues",
            Self::StaffRetention => "staff_retention",
            Self::Overview => "overview",
        }
    }
}

pub const STATUS_OVERDUE: &str = "Overdue";
pub const STATUS_CURRENT: &str = "Current";

/// `Overdue` when the last submission is older than the frequency's window
/// (Weekly 7, Monthly 30, Quarterly 90 days). Anything else is `Current`,
/// including a missing submission date or an unknown frequency.
pub fn reporting_status(
    frequency: Option<&str>,
    last_submitted: Option<NaiveDate>,
    today: NaiveDate,
) -> &'static str {
    let window = match frequency {
        Some("Weekly") => 7,
        Some("Monthly") => 30,
        Some("Quarterly") => 90,
        _ => return STATUS_CURRENT,
    };

    match last_submitted {
        Some(date) if date < today - Duration::days(window) => STATUS_OVERDUE,
        _ => STATUS_CURRENT,
    }
}
