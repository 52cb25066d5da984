use axum::{Router, routing::get};
use storage::Database;

use super::handlers::list_teams;

pub fn routes() -> Router<Database> {
    Router::new().route("/", get(list_teams))
}
