use serde::{Deserialize, Serialize};

use crate::models::domain::{MatchScore, MentorProfile};

/// Response for the find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    pub matches: Vec<MatchScore>,
    pub total_candidates: usize,
}

/// Response for the save matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveMatchesResponse {
    pub success: bool,
    pub saved: usize,
}

/// Response for the mentor directory feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorListResponse {
    pub mentors: Vec<MentorProfile>,
    pub total: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
