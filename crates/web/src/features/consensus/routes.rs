use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_overall_consensus, get_week_ballots, get_week_consensus};

pub fn routes() -> Router<Database> {
    // "/overall" is static and wins over the ":week" capture.
    Router::new()
        .route("/overall", get(get_overall_consensus))
        .route("/:week", get(get_week_consensus))
        .route("/:week/ballots", get(get_week_ballots))
}
