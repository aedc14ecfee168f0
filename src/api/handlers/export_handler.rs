//! Export handler: CSV downloads.

use axum::{
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::api::{AppState, RequestContext};
use crate::errors::AppResult;
use crate::services::{ExportFormat, ExportKind, PDF_UNAVAILABLE};
use crate::types::MessageResponse;

#[derive(Debug, Default, Deserialize)]
struct ExportQuery {
    format: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// `export/export`
pub async fn handle(state: &AppState, ctx: RequestContext) -> AppResult<Response> {
    ctx.require_admin()?;
    export(state, &ctx).await
}

/// Download profiles, staff or funding as CSV
#[utoipa::path(
    get,
    path = "/export/export",
    tag = "Export",
    params(
        ("format" = Option<String>, Query, description = "csv (default) or pdf"),
        ("type" = Option<String>, Query, description = "lawyers (default), staff or funding")
    ),
    responses(
        (status = 200, description = "CSV attachment", content_type = "text/csv"),
        (status = 400, description = "Unsupported format or type"),
        (status = 403, description = "Admin access required")
    ),
    security(("bearer_auth" = []))
)]
pub async fn export(state: &AppState, ctx: &RequestContext) -> AppResult<Response> {
    let query: ExportQuery = ctx.query()?;

    match ExportFormat::parse(query.format.as_deref())? {
        ExportFormat::Pdf => Ok(MessageResponse::new(PDF_UNAVAILABLE).into_response()),
        ExportFormat::Csv => {
            let kind = ExportKind::parse(query.kind.as_deref())?;
            let export = state.export_service.export_csv(kind).await?;
            let disposition = format!("attachment; filename=\"{}\"", export.filename);

            Ok((
                [
                    (CONTENT_TYPE, "text/csv".to_string()),
                    (CONTENT_DISPOSITION, disposition),
                ],
                export.body,
            )
                .into_response())
        }
    }
}
