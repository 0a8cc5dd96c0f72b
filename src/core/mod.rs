// Core algorithm exports
pub mod matcher;
pub mod scoring;

pub use matcher::{MatchOutcome, Matcher, MAX_RESULTS};
pub use scoring::calculate_match_score;
