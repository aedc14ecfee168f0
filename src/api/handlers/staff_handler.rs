//! Staff record handlers. Every method requires an ADMIN token.

use axum::{
    http::Method,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::{AppState, RequestContext};
use crate::domain::{Staff, StaffPayload};
use crate::errors::{AppError, AppResult};
use crate::types::{lenient, Created, DataResponse, MessageResponse};

#[derive(Debug, Serialize, ToSchema)]
pub struct StaffCreated {
    #[schema(example = "Staff member created successfully")]
    pub message: String,
    pub staff_id: i32,
}

#[derive(Debug, Default, Deserialize)]
struct StaffQuery {
    #[serde(default, deserialize_with = "lenient::opt_i32")]
    lawyer_id: Option<i32>,
    #[serde(default, deserialize_with = "lenient::opt_i32")]
    staff_id: Option<i32>,
}

/// `staff`
pub async fn handle(state: &AppState, ctx: RequestContext) -> AppResult<Response> {
    ctx.require_admin()?;
    match ctx.method {
        Method::GET => list_staff(state, &ctx).await,
        Method::POST => create_staff(state, &ctx).await,
        Method::PUT => update_staff(state, &ctx).await,
        Method::DELETE => delete_staff(state, &ctx).await,
        _ => Err(AppError::method_not_allowed("Method not allowed")),
    }
}

/// Staff members, optionally for one profile, ordered by name
#[utoipa::path(
    get,
    path = "/staff",
    tag = "Staff",
    params(("lawyer_id" = Option<i32>, Query, description = "Owning profile")),
    responses(
        (status = 200, description = "`{data}` with the staff rows", body = [Staff]),
        (status = 403, description = "Admin access required")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_staff(state: &AppState, ctx: &RequestContext) -> AppResult<Response> {
    let query: StaffQuery = ctx.query()?;
    let staff = state.record_service.list_staff(query.lawyer_id).await?;
    Ok(DataResponse::new(staff).into_response())
}

/// Add a staff member to a profile
#[utoipa::path(
    post,
    path = "/staff",
    tag = "Staff",
    request_body = StaffPayload,
    responses(
        (status = 201, description = "Staff member created", body = StaffCreated),
        (status = 400, description = "Lawyer ID or name missing"),
        (status = 404, description = "Lawyer not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_staff(state: &AppState, ctx: &RequestContext) -> AppResult<Response> {
    let payload: StaffPayload = ctx.json()?;
    let staff = state.record_service.create_staff(payload).await?;

    Ok(Created(StaffCreated {
        message: "Staff member created successfully".to_string(),
        staff_id: staff.staff_id,
    })
    .into_response())
}

/// Update a staff member identified by `staff_id` in the body
#[utoipa::path(
    put,
    path = "/staff",
    tag = "Staff",
    request_body = StaffPayload,
    responses(
        (status = 200, description = "Staff member updated", body = MessageResponse),
        (status = 400, description = "Staff ID is required"),
        (status = 404, description = "Staff member not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_staff(state: &AppState, ctx: &RequestContext) -> AppResult<Response> {
    let payload: StaffPayload = ctx.json()?;
    state.record_service.update_staff(payload).await?;
    Ok(MessageResponse::new("Staff member updated successfully").into_response())
}

/// Delete the staff member given by `?staff_id=`
#[utoipa::path(
    delete,
    path = "/staff",
    tag = "Staff",
    params(("staff_id" = i32, Query, description = "Staff member to delete")),
    responses(
        (status = 200, description = "Staff member deleted", body = MessageResponse),
        (status = 400, description = "Staff ID is required"),
        (status = 404, description = "Staff member not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_staff(state: &AppState, ctx: &RequestContext) -> AppResult<Response> {
    let query: StaffQuery = ctx.query()?;
    let staff_id = query
        .staff_id
        .ok_or_else(|| AppError::bad_request("Staff ID is required"))?;

    state.record_service.delete_staff(staff_id).await?;
    Ok(MessageResponse::new("Staff member deleted successfully").into_response())
}
