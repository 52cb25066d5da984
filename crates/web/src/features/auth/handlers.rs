use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use storage::Database;
use storage::dto::auth::{LoginRequest, RegisterRequest, UserResponse};
use tower_sessions::Session;
use validator::Validate;

use crate::error::WebError;
use crate::session::{SessionUserId, require_user};

use super::services;

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = UserResponse),
        (status = 400, description = "Invalid username or password"),
        (status = 409, description = "Username already taken")
    ),
    tag = "auth"
)]
pub async fn register(
    State(db): State<Database>,
    Json(request): Json<RegisterRequest>,
) -> Result<Response, WebError> {
    request.validate()?;

    let user = services::register(db.pool(), &request.username, &request.password).await?;
    tracing::info!(username = %user.username, "Registered new user");

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))).into_response())
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in, session cookie set", body = UserResponse),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(db): State<Database>,
    session: Session,
    Json(request): Json<LoginRequest>,
) -> Result<Response, WebError> {
    let user = services::authenticate(db.pool(), &request.username, &request.password).await?;

    SessionUserId::insert(&session, user.user_id).await?;

    Ok(Json(UserResponse::from(user)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Session cleared")
    ),
    tag = "auth"
)]
pub async fn logout(session: Session) -> Result<Response, WebError> {
    SessionUserId::clear(&session).await?;

    Ok(Json(json!({ "message": "Logged out" })).into_response())
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Currently authenticated user", body = UserResponse),
        (status = 401, description = "Not logged in")
    ),
    tag = "auth"
)]
pub async fn me(State(db): State<Database>, session: Session) -> Result<Response, WebError> {
    let user_id = require_user(&session).await?;

    let user = services::current_user(db.pool(), user_id).await?;

    Ok(Json(UserResponse::from(user)).into_response())
}
