use axum::{Json, extract::State};
use storage::Database;
use storage::models::Team;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/teams",
    responses(
        (status = 200, description = "Full team roster, alphabetical", body = Vec<Team>)
    ),
    tag = "teams"
)]
pub async fn list_teams(State(db): State<Database>) -> Result<Json<Vec<Team>>, WebError> {
    let teams = services::list_teams(db.pool()).await?;

    Ok(Json(teams))
}
