//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing. Paths are listed
//! without a base prefix; any configured prefix is accepted in front.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    auth_handler, export_handler, funding_handler, lawyer_handler, lookup_handler,
    report_handler, staff_handler,
};
use crate::domain::{
    AreaOfLaw, AreaShare, AreaShareInput, Funding, FundingPayload, LawyerProfile, LawyerView,
    Location, LocationInput, LoginRequest, LookupTables, ProfilePayload, Report, ServiceEntry,
    Staff, StaffPayload, TargetClient, UserResponse, UserRole,
};
use crate::infra::repositories::{
    AreaCoverage, ComplianceCount, FundingShare, LicenseCount, Overview, RegionCount,
    StaffRetention,
};
use crate::services::{LoginResponse, SubmissionStatus};
use crate::types::MessageResponse;

/// OpenAPI documentation for the legal aid directory
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Legal Aid Directory API",
        version = "0.1.0",
        description = "Directory of legal aid providers with their locations, services, staff, funding and compliance reports",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000/api", description = "Local development server")
    ),
    paths(
        auth_handler::login,
        lookup_handler::get_lookups,
        lawyer_handler::list_lawyers,
        lawyer_handler::create_lawyer,
        lawyer_handler::get_lawyer,
        lawyer_handler::update_lawyer,
        lawyer_handler::delete_lawyer,
        report_handler::get_report,
        export_handler::export,
        staff_handler::list_staff,
        staff_handler::create_staff,
        staff_handler::update_staff,
        staff_handler::delete_staff,
        funding_handler::list_funding,
        funding_handler::create_funding,
        funding_handler::update_funding,
        funding_handler::delete_funding,
    ),
    components(
        schemas(
            // Accounts
            UserRole,
            UserResponse,
            LoginRequest,
            LoginResponse,
            // Profiles
            LawyerProfile,
            LawyerView,
            Location,
            AreaShare,
            ProfilePayload,
            LocationInput,
            AreaShareInput,
            lawyer_handler::LawyerCreated,
            // Lookups
            LookupTables,
            AreaOfLaw,
            ServiceEntry,
            TargetClient,
            // Records
            Staff,
            StaffPayload,
            staff_handler::StaffCreated,
            Funding,
            FundingPayload,
            funding_handler::FundingCreated,
            Report,
            // Dashboard
            Overview,
            RegionCount,
            AreaCoverage,
            LicenseCount,
            FundingShare,
            SubmissionStatus,
            ComplianceCount,
            StaffRetention,
            MessageResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login"),
        (name = "Lookup", description = "Reference lists"),
        (name = "Lawyers", description = "Provider profiles"),
        (name = "Staff", description = "Staff records"),
        (name = "Funding", description = "Funding records"),
        (name = "Dashboard", description = "Aggregate reports"),
        (name = "Export", description = "CSV export")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token obtained from /auth/login"))
                        .build(),
                ),
            );
        }
    }
}
