use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::Specialty;

/// Request to find matches for a mentee
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "mentee_id", rename = "menteeId")]
    pub mentee_id: String,
}

/// One retained match the client wants persisted
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchSelection {
    #[validate(length(min = 1))]
    #[serde(alias = "mentor_id", rename = "mentorId")]
    pub mentor_id: String,
    pub score: u32,
}

/// Request to persist selected matches
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SaveMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "mentee_id", rename = "menteeId")]
    pub mentee_id: String,
    #[validate(nested)]
    #[serde(default)]
    pub matches: Vec<MatchSelection>,
}

/// Query parameters for the mentor directory feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorFeedQuery {
    #[serde(default)]
    pub specialty: Option<Specialty>,
    #[serde(default)]
    pub search: Option<String>,
}
