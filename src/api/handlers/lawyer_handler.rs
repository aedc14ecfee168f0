//! Lawyer profile handlers.
//!
//! Listing and detail are public; writes require an ADMIN token.

use axum::{
    http::Method,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::{AppState, RequestContext};
use crate::domain::{LawyerFilter, LawyerView, ProfilePayload};
use crate::errors::{AppError, AppResult};
use crate::types::{Created, MessageResponse, PaginationParams};

/// Body returned after a profile is created
#[derive(Debug, Serialize, ToSchema)]
pub struct LawyerCreated {
    #[schema(example = "Lawyer profile created successfully")]
    pub message: String,
    #[schema(example = 1)]
    pub lawyer_id: i32,
}

#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    page: Option<String>,
    limit: Option<String>,
}

/// `lawyers`
pub async fn handle_collection(state: &AppState, ctx: RequestContext) -> AppResult<Response> {
    match ctx.method {
        Method::GET => list_lawyers(state, &ctx).await,
        Method::POST => create_lawyer(state, &ctx).await,
        _ => Err(AppError::method_not_allowed("Method not allowed")),
    }
}

/// `lawyers/{id}`
pub async fn handle_item(state: &AppState, ctx: RequestContext, raw_id: i64) -> AppResult<Response> {
    let id = i32::try_from(raw_id).map_err(|_| AppError::NotFound("Lawyer"))?;
    match ctx.method {
        Method::GET => get_lawyer(state, id).await,
        Method::PUT => update_lawyer(state, &ctx, id).await,
        Method::DELETE => delete_lawyer(state, &ctx, id).await,
        _ => Err(AppError::method_not_allowed("Method not allowed")),
    }
}

/// List profiles with optional filters
#[utoipa::path(
    get,
    path = "/lawyers",
    tag = "Lawyers",
    params(
        ("search" = Option<String>, Query, description = "Substring of name or email"),
        ("region" = Option<String>, Query, description = "Exact location region"),
        ("area_of_law" = Option<String>, Query, description = "Exact area of law name"),
        ("service" = Option<String>, Query, description = "Exact service name"),
        ("license_status" = Option<String>, Query, description = "Exact license status"),
        ("page" = Option<u64>, Query, description = "Page number (default 1)"),
        ("limit" = Option<u64>, Query, description = "Page size (default 20, max 100)")
    ),
    responses(
        (status = 200, description = "One page of profiles with total", body = [LawyerView])
    )
)]
pub async fn list_lawyers(state: &AppState, ctx: &RequestContext) -> AppResult<Response> {
    let filter: LawyerFilter = ctx.query()?;
    let page: PageQuery = ctx.query()?;
    let params = PaginationParams::from_query(page.page.as_deref(), page.limit.as_deref());

    let result = state.profile_service.list(filter, params).await?;
    Ok(Json(result).into_response())
}

/// Create a profile with its locations, areas of law, services and target clients
#[utoipa::path(
    post,
    path = "/lawyers",
    tag = "Lawyers",
    request_body = ProfilePayload,
    responses(
        (status = 201, description = "Profile created", body = LawyerCreated),
        (status = 400, description = "Name and provider type are required"),
        (status = 403, description = "Admin access required")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_lawyer(state: &AppState, ctx: &RequestContext) -> AppResult<Response> {
    let admin = ctx.require_admin()?;
    let payload: ProfilePayload = ctx.json()?;

    let lawyer_id = state.profile_service.create(payload, &admin).await?;
    Ok(Created(LawyerCreated {
        message: "Lawyer profile created successfully".to_string(),
        lawyer_id,
    })
    .into_response())
}

/// Profile detail with staff, funding and reports
#[utoipa::path(
    get,
    path = "/lawyers/{id}",
    tag = "Lawyers",
    params(("id" = i32, Path, description = "Lawyer profile id")),
    responses(
        (status = 200, description = "Profile detail", body = LawyerView),
        (status = 404, description = "Lawyer not found")
    )
)]
pub async fn get_lawyer(state: &AppState, id: i32) -> AppResult<Response> {
    let view = state.profile_service.get(id).await?;
    Ok(Json(view).into_response())
}

/// Overwrite a profile and replace its owned collections
#[utoipa::path(
    put,
    path = "/lawyers/{id}",
    tag = "Lawyers",
    params(("id" = i32, Path, description = "Lawyer profile id")),
    request_body = ProfilePayload,
    responses(
        (status = 200, description = "Profile updated", body = MessageResponse),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Lawyer not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_lawyer(state: &AppState, ctx: &RequestContext, id: i32) -> AppResult<Response> {
    let admin = ctx.require_admin()?;
    let payload: ProfilePayload = ctx.json()?;

    state.profile_service.update(id, payload, &admin).await?;
    Ok(MessageResponse::new("Lawyer profile updated successfully").into_response())
}

/// Delete a profile and everything it owns
#[utoipa::path(
    delete,
    path = "/lawyers/{id}",
    tag = "Lawyers",
    params(("id" = i32, Path, description = "Lawyer profile id")),
    responses(
        (status = 200, description = "Profile deleted", body = MessageResponse),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Lawyer not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_lawyer(state: &AppState, ctx: &RequestContext, id: i32) -> AppResult<Response> {
    ctx.require_admin()?;

    state.profile_service.delete(id).await?;
    Ok(MessageResponse::new("Lawyer profile deleted successfully").into_response())
}
