use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::Database;
use storage::dto::consensus::{ConsensusEntry, WeekBallotsResponse};
use storage::dto::stats::VoteStatisticsResponse;

use crate::error::WebError;
use crate::features::ballots::handlers::validate_week;

use super::services;

#[utoipa::path(
    get,
    path = "/api/consensus/{week}",
    params(
        ("week" = i32, Path, description = "Poll week, starting at 1")
    ),
    responses(
        (status = 200, description = "Aggregate ranking for the week, points descending; unmentioned teams omitted", body = Vec<ConsensusEntry>),
        (status = 400, description = "Invalid week")
    ),
    tag = "consensus"
)]
pub async fn get_week_consensus(
    State(db): State<Database>,
    Path(week): Path<i32>,
) -> Result<Response, WebError> {
    validate_week(week)?;

    let ranking = services::week_consensus(db.pool(), week).await?;

    Ok(Json(ranking).into_response())
}

#[utoipa::path(
    get,
    path = "/api/consensus/overall",
    responses(
        (status = 200, description = "Aggregate ranking across all weeks", body = Vec<ConsensusEntry>)
    ),
    tag = "consensus"
)]
pub async fn get_overall_consensus(State(db): State<Database>) -> Result<Response, WebError> {
    let ranking = services::overall_consensus(db.pool()).await?;

    Ok(Json(ranking).into_response())
}

#[utoipa::path(
    get,
    path = "/api/consensus/{week}/ballots",
    params(
        ("week" = i32, Path, description = "Poll week, starting at 1")
    ),
    responses(
        (status = 200, description = "Every ballot cast for the week, per voter", body = WeekBallotsResponse),
        (status = 400, description = "Invalid week")
    ),
    tag = "consensus"
)]
pub async fn get_week_ballots(
    State(db): State<Database>,
    Path(week): Path<i32>,
) -> Result<Response, WebError> {
    validate_week(week)?;

    let ballots = services::week_ballots(db.pool(), week).await?;

    Ok(Json(ballots).into_response())
}

#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Total users and per-week participation", body = VoteStatisticsResponse)
    ),
    tag = "consensus"
)]
pub async fn get_vote_statistics(State(db): State<Database>) -> Result<Response, WebError> {
    let stats = services::vote_statistics(db.pool()).await?;

    Ok(Json(stats).into_response())
}
