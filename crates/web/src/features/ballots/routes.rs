use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{get_ballot, get_my_ballots, submit_ballot};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", post(submit_ballot).get(get_my_ballots))
        .route("/:week", get(get_ballot))
}
