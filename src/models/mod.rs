// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ApplicationTarget, Background, CareerStage, CommunicationFrequency, CommunicationMode, Degree,
    DegreeTrack, FactorBreakdown, HelpArea, MatchRecord, MatchScore, MatchStatus, MenteeProfile,
    MentorProfile, MentorshipStyle, ScoringWeights, Specialty,
};
pub use requests::{FindMatchesRequest, MatchSelection, MentorFeedQuery, SaveMatchesRequest};
pub use responses::{
    ErrorResponse, FindMatchesResponse, HealthResponse, MentorListResponse, SaveMatchesResponse,
};
