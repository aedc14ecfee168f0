//! Export service - CSV downloads of profiles, staff and funding.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::domain::{Funding, LawyerProfile, Staff};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

pub const PDF_UNAVAILABLE: &str = "PDF export requires additional library setup";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Pdf,
}

impl ExportFormat {
    /// `csv` when absent.
    pub fn parse(value: Option<&str>) -> AppResult<Self> {
        match value.unwrap_or("csv") {
            "csv" => Ok(Self::Csv),
            "pdf" => Ok(Self::Pdf),
            other => Err(AppError::bad_request(format!("Unsupported export format: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Lawyers,
    Staff,
    Funding,
}

impl ExportKind {
    /// `lawyers` when absent.
    pub fn parse(value: Option<&str>) -> AppResult<Self> {
        match value.unwrap_or("lawyers") {
            "lawyers" => Ok(Self::Lawyers),
            "staff" => Ok(Self::Staff),
            "funding" => Ok(Self::Funding),
            other => Err(AppError::bad_request(format!("Unsupported export type: {}", other))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lawyers => "lawyers",
            Self::Staff => "staff",
            Self::Funding => "funding",
        }
    }
}

/// A rendered CSV file.
#[derive(Debug, Clone)]
pub struct CsvExport {
    pub filename: String,
    pub body: Vec<u8>,
}

impl CsvExport {
    fn new(kind: ExportKind, on: NaiveDate, body: Vec<u8>) -> Self {
        Self {
            filename: format!("{}_{}.csv", kind.as_str(), on.format("%Y-%m-%d")),
            body,
        }
    }
}

#[derive(Serialize)]
struct LawyerRow<'a> {
    id: i32,
    name: &'a str,
    provider_type: &'a str,
    registration_status: Option<&'a str>,
    license_status: Option<&'a str>,
    phone: Option<&'a str>,
    email: Option<&'a str>,
    website: Option<&'a str>,
    mode_of_operation: Option<&'a str>,
    verified: u8,
}

impl<'a> From<&'a LawyerProfile> for LawyerRow<'a> {
    fn from(p: &'a LawyerProfile) -> Self {
        Self {
            id: p.lawyer_id,
            name: &p.name,
            provider_type: &p.provider_type,
            registration_status: p.registration_status.as_deref(),
            license_status: p.license_status.as_deref(),
            phone: p.phone.as_deref(),
            email: p.email.as_deref(),
            website: p.website.as_deref(),
            mode_of_operation: p.mode_of_operation.as_deref(),
            verified: u8::from(p.verified),
        }
    }
}

#[derive(Serialize)]
struct StaffRow<'a> {
    id: i32,
    lawyer_id: i32,
    name: &'a str,
    role: Option<&'a str>,
    gender: Option<&'a str>,
    age: Option<i32>,
    education_level: Option<&'a str>,
    specialization: Option<&'a str>,
    years_of_practice: Option<i32>,
    practicing_certificate_status: Option<&'a str>,
}

impl<'a> From<&'a Staff> for StaffRow<'a> {
    fn from(s: &'a Staff) -> Self {
        Self {
            id: s.staff_id,
            lawyer_id: s.lawyer_id,
            name: &s.name,
            role: s.role.as_deref(),
            gender: s.gender.as_deref(),
            age: s.age,
            education_level: s.education_level.as_deref(),
            specialization: s.specialization.as_deref(),
            years_of_practice: s.years_of_practice,
            practicing_certificate_status: s.practicing_certificate_status.as_deref(),
        }
    }
}

#[derive(Serialize)]
struct FundingRow<'a> {
    id: i32,
    lawyer: Option<&'a str>,
    funding_source: Option<&'a str>,
    amount: Option<f64>,
    adequacy: Option<&'a str>,
    year: Option<i32>,
}

impl<'a> From<&'a Funding> for FundingRow<'a> {
    fn from(f: &'a Funding) -> Self {
        Self {
            id: f.funding_id,
            lawyer: f.lawyer_name.as_deref(),
            funding_source: f.funding_source.as_deref(),
            amount: f.amount,
            adequacy: f.adequacy.as_deref(),
            year: f.year,
        }
    }
}

/// Write `headers` then one record per row. Row field order must match the
/// headers; the header line is written even when there are no rows.
fn render<T: Serialize>(headers: &[&str], rows: impl IntoIterator<Item = T>) -> AppResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(headers).map_err(csv_error)?;
    for row in rows {
        writer.serialize(row).map_err(csv_error)?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::internal(format!("CSV flush failed: {}", e)))
}

fn csv_error(err: csv::Error) -> AppError {
    AppError::internal(format!("CSV write failed: {}", err))
}

const LAWYER_HEADERS: &[&str] = &[
    "ID",
    "Name",
    "Provider Type",
    "Registration Status",
    "License Status",
    "Phone",
    "Email",
    "Website",
    "Mode of Operation",
    "Verified",
];

const STAFF_HEADERS: &[&str] = &[
    "ID",
    "Lawyer ID",
    "Name",
    "Role",
    "Gender",
    "Age",
    "Education Level",
    "Specialization",
    "Years of Practice",
    "Certificate Status",
];

const FUNDING_HEADERS: &[&str] = &["ID", "Lawyer", "Source", "Amount", "Adequacy", "Year"];

#[async_trait]
pub trait ExportService: Send + Sync {
    async fn export_csv(&self, kind: ExportKind) -> AppResult<CsvExport>;
}

pub struct Exporter<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> Exporter<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ExportService for Exporter<U> {
    async fn export_csv(&self, kind: ExportKind) -> AppResult<CsvExport> {
        let body = match kind {
            ExportKind::Lawyers => {
                let profiles = self.uow.lawyers().list_all().await?;
                render(LAWYER_HEADERS, profiles.iter().map(LawyerRow::from))?
            }
            ExportKind::Staff => {
                let staff = self.uow.staff().list(None).await?;
                render(STAFF_HEADERS, staff.iter().map(StaffRow::from))?
            }
            ExportKind::Funding => {
                let funding = self.uow.funding().list(None).await?;
                render(FUNDING_HEADERS, funding.iter().map(FundingRow::from))?
            }
        };

        tracing::info!(export = kind.as_str(), bytes = body.len(), "CSV export rendered");
        Ok(CsvExport::new(kind, Utc::now().date_naive(), body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::MockStaffRepository;
    use crate::services::test_support::TestUnitOfWork;

    #[test]
    fn test_parse_defaults() {
        assert_eq!(ExportFormat::parse(None).unwrap(), ExportFormat::Csv);
        assert_eq!(ExportFormat::parse(Some("pdf")).unwrap(), ExportFormat::Pdf);
        assert!(ExportFormat::parse(Some("xlsx")).is_err());
        assert_eq!(ExportKind::parse(None).unwrap(), ExportKind::Lawyers);
        assert!(ExportKind::parse(Some("users")).is_err());
    }

    #[test]
    fn test_filename_uses_kind_and_date() {
        let on = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let export = CsvExport::new(ExportKind::Funding, on, Vec::new());
        assert_eq!(export.filename, "funding_2024-03-09.csv");
    }

    #[test]
    fn test_render_quotes_and_blanks() {
        let funding = vec![Funding {
            funding_id: 1,
            lawyer_id: 2,
            funding_source: Some("Donor, Inc".into()),
            amount: Some(1500.5),
            adequacy: None,
            year: Some(2023),
            lawyer_name: Some("Haki".into()),
        }];

        let body = render(FUNDING_HEADERS, funding.iter().map(FundingRow::from)).unwrap();
        let text = String::from_utf8(body).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "ID,Lawyer,Source,Amount,Adequacy,Year");
        assert_eq!(lines[1], "1,Haki,\"Donor, Inc\",1500.5,,2023");
    }

    #[tokio::test]
    async fn test_empty_staff_export_still_has_header() {
        let mut staff = MockStaffRepository::new();
        staff
            .expect_list()
            .withf(|filter| filter.is_none())
            .returning(|_| Ok(vec![]));

        let uow = TestUnitOfWork::default().with_staff(staff);
        let export = Exporter::new(Arc::new(uow))
            .export_csv(ExportKind::Staff)
            .await
            .unwrap();

        let text = String::from_utf8(export.body).unwrap();
        assert!(text.starts_with("ID,Lawyer ID,Name,Role"));
        assert_eq!(text.lines().count(), 1);
        assert!(export.filename.starts_with("staff_"));
    }
}
