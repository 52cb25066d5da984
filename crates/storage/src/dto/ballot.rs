use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for submitting (or resubmitting) a weekly ballot.
/// Position in `rankings` determines rank: index 0 is rank 1.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SubmitBallotRequest {
    #[validate(range(min = 1, message = "Week must be a positive integer"))]
    pub week: i32,

    pub rankings: Vec<String>,
}

/// A single stored ballot, team names ascending by rank
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BallotResponse {
    pub week: i32,
    pub rankings: Vec<String>,
}

/// All of a user's ballots keyed by week
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserBallotsResponse {
    pub ballots: BTreeMap<i32, Vec<String>>,
}
