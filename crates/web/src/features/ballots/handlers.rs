use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::Database;
use storage::dto::ballot::{BallotResponse, SubmitBallotRequest, UserBallotsResponse};
use tower_sessions::Session;
use validator::Validate;

use crate::error::WebError;
use crate::session::require_user;

use super::services;

#[utoipa::path(
    post,
    path = "/api/ballots",
    request_body = SubmitBallotRequest,
    responses(
        (status = 200, description = "Ballot stored; body is the ballot as persisted after normalization", body = BallotResponse),
        (status = 400, description = "Invalid week"),
        (status = 401, description = "Not logged in")
    ),
    tag = "ballots"
)]
pub async fn submit_ballot(
    State(db): State<Database>,
    session: Session,
    Json(request): Json<SubmitBallotRequest>,
) -> Result<Response, WebError> {
    let user_id = require_user(&session).await?;
    request.validate()?;

    let rankings =
        services::submit_ballot(db.pool(), user_id, request.week, &request.rankings).await?;
    tracing::info!(
        %user_id,
        week = request.week,
        entries = rankings.len(),
        "Ballot replaced"
    );

    Ok(Json(BallotResponse {
        week: request.week,
        rankings,
    })
    .into_response())
}

#[utoipa::path(
    get,
    path = "/api/ballots/{week}",
    params(
        ("week" = i32, Path, description = "Poll week, starting at 1")
    ),
    responses(
        (status = 200, description = "The user's ballot for the week; empty rankings if none submitted", body = BallotResponse),
        (status = 400, description = "Invalid week"),
        (status = 401, description = "Not logged in")
    ),
    tag = "ballots"
)]
pub async fn get_ballot(
    State(db): State<Database>,
    session: Session,
    Path(week): Path<i32>,
) -> Result<Response, WebError> {
    let user_id = require_user(&session).await?;
    validate_week(week)?;

    let rankings = services::get_ballot(db.pool(), user_id, week).await?;

    Ok(Json(BallotResponse { week, rankings }).into_response())
}

#[utoipa::path(
    get,
    path = "/api/ballots",
    responses(
        (status = 200, description = "All of the user's ballots keyed by week", body = UserBallotsResponse),
        (status = 401, description = "Not logged in")
    ),
    tag = "ballots"
)]
pub async fn get_my_ballots(
    State(db): State<Database>,
    session: Session,
) -> Result<Response, WebError> {
    let user_id = require_user(&session).await?;

    let ballots = services::get_user_ballots(db.pool(), user_id).await?;

    Ok(Json(UserBallotsResponse { ballots }).into_response())
}

pub(crate) fn validate_week(week: i32) -> Result<(), WebError> {
    if week < 1 {
        return Err(WebError::BadRequest(
            "Week must be a positive integer".to_string(),
        ));
    }
    Ok(())
}
