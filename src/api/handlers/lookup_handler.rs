//! Lookup table handler.

use axum::{
    http::Method,
    response::{IntoResponse, Json, Response},
};

use crate::api::{AppState, RequestContext};
use crate::domain::LookupTables;
use crate::errors::{AppError, AppResult};

pub async fn handle(state: &AppState, ctx: RequestContext) -> AppResult<Response> {
    match ctx.method {
        Method::GET => get_lookups(state).await,
        _ => Err(AppError::method_not_allowed("Method not allowed")),
    }
}

/// Areas of law, services and target client types
#[utoipa::path(
    get,
    path = "/lookup",
    tag = "Lookup",
    responses(
        (status = 200, description = "All lookup tables", body = LookupTables)
    )
)]
pub async fn get_lookups(state: &AppState) -> AppResult<Response> {
    let tables = state.lookup_service.tables().await?;
    Ok(Json(tables).into_response())
}
