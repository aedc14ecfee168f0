//! Funding record handlers. Every method requires an ADMIN token.

use axum::{
    http::Method,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::{AppState, RequestContext};
use crate::domain::{Funding, FundingPayload};
use crate::errors::{AppError, AppResult};
use crate::types::{lenient, Created, DataResponse, MessageResponse};

#[derive(Debug, Serialize, ToSchema)]
pub struct FundingCreated {
    #[schema(example = "Funding record created successfully")]
    pub message: String,
    pub funding_id: i32,
}

#[derive(Debug, Default, Deserialize)]
struct FundingQuery {
    #[serde(default, deserialize_with = "lenient::opt_i32")]
    lawyer_id: Option<i32>,
    #[serde(default, deserialize_with = "lenient::opt_i32")]
    funding_id: Option<i32>,
}

/// `funding`
pub async fn handle(state: &AppState, ctx: RequestContext) -> AppResult<Response> {
    ctx.require_admin()?;
    match ctx.method {
        Method::GET => list_funding(state, &ctx).await,
        Method::POST => create_funding(state, &ctx).await,
        Method::PUT => update_funding(state, &ctx).await,
        Method::DELETE => delete_funding(state, &ctx).await,
        _ => Err(AppError::method_not_allowed("Method not allowed")),
    }
}

/// Funding records, optionally for one profile, newest year first
#[utoipa::path(
    get,
    path = "/funding",
    tag = "Funding",
    params(("lawyer_id" = Option<i32>, Query, description = "Owning profile")),
    responses(
        (status = 200, description = "`{data}` with the funding rows", body = [Funding]),
        (status = 403, description = "Admin access required")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_funding(state: &AppState, ctx: &RequestContext) -> AppResult<Response> {
    let query: FundingQuery = ctx.query()?;
    let funding = state.record_service.list_funding(query.lawyer_id).await?;
    Ok(DataResponse::new(funding).into_response())
}

/// Add a funding record to a profile
#[utoipa::path(
    post,
    path = "/funding",
    tag = "Funding",
    request_body = FundingPayload,
    responses(
        (status = 201, description = "Funding record created", body = FundingCreated),
        (status = 400, description = "Lawyer ID is required"),
        (status = 404, description = "Lawyer not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_funding(state: &AppState, ctx: &RequestContext) -> AppResult<Response> {
    let payload: FundingPayload = ctx.json()?;
    let funding = state.record_service.create_funding(payload).await?;

    Ok(Created(FundingCreated {
        message: "Funding record created successfully".to_string(),
        funding_id: funding.funding_id,
    })
    .into_response())
}

/// Update a funding record identified by `funding_id` in the body
#[utoipa::path(
    put,
    path = "/funding",
    tag = "Funding",
    request_body = FundingPayload,
    responses(
        (status = 200, description = "Funding record updated", body = MessageResponse),
        (status = 400, description = "Funding ID is required"),
        (status = 404, description = "Funding record not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_funding(state: &AppState, ctx: &RequestContext) -> AppResult<Response> {
    let payload: FundingPayload = ctx.json()?;
    state.record_service.update_funding(payload).await?;
    Ok(MessageResponse::new("Funding record updated successfully").into_response())
}

/// Delete the funding record given by `?funding_id=`
#[utoipa::path(
    delete,
    path = "/funding",
    tag = "Funding",
    params(("funding_id" = i32, Query, description = "Funding record to delete")),
    responses(
        (status = 200, description = "Funding record deleted", body = MessageResponse),
        (status = 400, description = "Funding ID is required"),
        (status = 404, description = "Funding record not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_funding(state: &AppState, ctx: &RequestContext) -> AppResult<Response> {
    let query: FundingQuery = ctx.query()?;
    let funding_id = query
        .funding_id
        .ok_or_else(|| AppError::bad_request("Funding ID is required"))?;

    state.record_service.delete_funding(funding_id).await?;
    Ok(MessageResponse::new("Funding record deleted successfully").into_response())
}
