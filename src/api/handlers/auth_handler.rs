//! Authentication handlers.

use axum::{
    http::Method,
    response::{IntoResponse, Json, Response},
};

use crate::api::{AppState, RequestContext};
use crate::domain::LoginRequest;
use crate::errors::{AppError, AppResult};
use crate::services::LoginResponse;

/// `auth/login`: POST only.
pub async fn handle(state: &AppState, ctx: RequestContext) -> AppResult<Response> {
    if ctx.method != Method::POST {
        return Err(AppError::method_not_allowed("Method not allowed for login"));
    }
    login(state, &ctx).await
}

/// Login and get a bearer token
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Username and password are required"),
        (status = 401, description = "Invalid credentials"),
        (status = 405, description = "Method not allowed for login")
    )
)]
pub async fn login(state: &AppState, ctx: &RequestContext) -> AppResult<Response> {
    let request: LoginRequest = ctx.validated_json()?;
    let response = state
        .auth_service
        .login(request.username, request.password)
        .await?;

    Ok(Json(response).into_response())
}
