//! Dashboard report handler.

use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::api::{AppState, RequestContext};
use crate::domain::ReportKind;
use crate::errors::AppResult;
use crate::infra::repositories::Overview;
use crate::types::DataResponse;

#[derive(Debug, Default, Deserialize)]
struct ReportQuery {
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// `dashboard/reports`
pub async fn handle(state: &AppState, ctx: RequestContext) -> AppResult<Response> {
    ctx.require_admin()?;
    get_report(state, &ctx).await
}

/// Named dashboard aggregate; unknown types return the overview counts
#[utoipa::path(
    get,
    path = "/dashboard/reports",
    tag = "Dashboard",
    params(
        ("type" = Option<String>, Query, description = "lawyers_by_region, areas_of_law_coverage, license_status, funding_distribution, reporting_status, compliance_issues, staff_retention or overview")
    ),
    responses(
        (status = 200, description = "`{data}` with the report rows, or the overview object", body = Overview),
        (status = 403, description = "Admin access required")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_report(state: &AppState, ctx: &RequestContext) -> AppResult<Response> {
    let query: ReportQuery = ctx.query()?;
    let kind = ReportKind::parse(query.kind.as_deref());

    let data = state.report_service.report(kind).await?;
    Ok(DataResponse::new(data).into_response())
}
