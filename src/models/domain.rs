use serde::{Deserialize, Serialize};

/// Medical specialty, shared domain for a mentor's practice and a mentee's
/// primary interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Specialty {
    InternalMedicine,
    Pediatrics,
    Surgery,
    Psychiatry,
    EmergencyMedicine,
    FamilyMedicine,
    Radiology,
    Anesthesiology,
    Dermatology,
    Neurology,
    Orthopedics,
    Cardiology,
    Other,
}

/// Assistance topics, shared domain for mentee help areas and mentor
/// expertise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HelpArea {
    McatPreparation,
    PersonalEssays,
    InterviewSkills,
    MedicalCourseworkExams,
    ResearchOpportunities,
    WorkLifeBalance,
    NavigatingMedicalSchoolResidency,
}

/// When the mentee plans to apply to medical school
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationTarget {
    #[serde(rename = "next-6-months")]
    Next6Months,
    #[serde(rename = "in-1-2-years")]
    In1To2Years,
    #[serde(rename = "in-3-plus-years")]
    In3PlusYears,
    #[serde(rename = "not-sure")]
    NotSure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MentorshipStyle {
    Structured,
    Flexible,
    Mix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommunicationFrequency {
    Weekly,
    BiWeekly,
    Monthly,
    AsNeeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommunicationMode {
    Email,
    VideoCalls,
    PhoneCalls,
    TextMessages,
    InPerson,
}

/// Degree track a mentee wants guidance toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DegreeTrack {
    Md,
    Do,
    Both,
}

/// Degree a mentor holds or is pursuing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Degree {
    Md,
    Do,
    MdPhd,
    CurrentMedicalStudent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CareerStage {
    MedicalStudentM1M2,
    MedicalStudentM3M4,
    ResidentFellow,
    AttendingPhysician,
    PhysicianScientist,
}

/// Applicant background tags, shared by mentees and mentors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Background {
    Traditional,
    NonTraditional,
    FirstGen,
    Urm,
}

/// Mentee profile, the canonical shape at the scoring boundary.
///
/// Both the in-flight questionnaire shape (camelCase) and the persisted
/// record shape (snake_case) deserialize into this one type; scoring only
/// ever sees the canonical form. Absent categorical fields are not errors,
/// they simply contribute nothing to the relevant factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenteeProfile {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(alias = "first_name", rename = "firstName", default)]
    pub first_name: Option<String>,
    #[serde(alias = "last_name", rename = "lastName", default)]
    pub last_name: Option<String>,
    #[serde(
        alias = "primary_specialty_interest",
        rename = "primarySpecialtyInterest",
        default
    )]
    pub primary_specialty_interest: Option<Specialty>,
    #[serde(alias = "help_areas", rename = "helpAreas", default)]
    pub help_areas: Vec<HelpArea>,
    #[serde(alias = "application_target", rename = "applicationTarget", default)]
    pub application_target: Option<ApplicationTarget>,
    #[serde(
        alias = "preferred_mentorship_style",
        rename = "preferredMentorshipStyle",
        default
    )]
    pub preferred_mentorship_style: Option<MentorshipStyle>,
    #[serde(
        alias = "communication_frequency",
        rename = "communicationFrequency",
        default
    )]
    pub communication_frequency: Option<CommunicationFrequency>,
    #[serde(alias = "communication_modes", rename = "communicationModes", default)]
    pub communication_modes: Vec<CommunicationMode>,
    #[serde(
        alias = "degree_track_preference",
        rename = "degreeTrackPreference",
        default
    )]
    pub degree_track_preference: Option<DegreeTrack>,
    #[serde(alias = "applicant_background", rename = "applicantBackground", default)]
    pub applicant_background: Vec<Background>,
    #[serde(
        alias = "prefer_mentor_same_gender",
        rename = "preferMentorSameGender",
        default
    )]
    pub prefer_mentor_same_gender: bool,
    #[serde(alias = "preferred_gender", rename = "preferredGender", default)]
    pub preferred_gender: Option<String>,
    #[serde(alias = "prefer_alumni_mentor", rename = "preferAlumniMentor", default)]
    pub prefer_alumni_mentor: bool,
    #[serde(alias = "preferred_university", rename = "preferredUniversity", default)]
    pub preferred_university: Option<String>,
}

/// Mentor profile as stored in the mentors table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub medical_specialty: Option<Specialty>,
    #[serde(default)]
    pub career_stage: Option<CareerStage>,
    #[serde(default)]
    pub degree: Option<Degree>,
    #[serde(default)]
    pub areas_of_expertise: Vec<HelpArea>,
    #[serde(default)]
    pub mentorship_style: Option<MentorshipStyle>,
    #[serde(default)]
    pub communication_frequency: Option<CommunicationFrequency>,
    #[serde(default)]
    pub communication_modes: Vec<CommunicationMode>,
    #[serde(default)]
    pub applicant_background: Vec<Background>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub alma_mater: Option<String>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Per-factor breakdown of a match score, kept for explainability
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorBreakdown {
    pub specialty: f64,
    pub help_areas: f64,
    pub communication: f64,
    pub background: f64,
    pub degree_track: f64,
    pub mentorship_style: f64,
    pub timeline: f64,
}

/// One scored mentor candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    #[serde(rename = "mentorId")]
    pub mentor_id: String,
    pub mentor: MentorProfile,
    pub score: u32,
    pub factors: FactorBreakdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Pending,
    Accepted,
    Declined,
}

/// Persisted match record, the hand-off shape for the matches table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: String,
    pub mentee_id: String,
    pub mentor_id: String,
    pub match_score: u32,
    pub status: MatchStatus,
}

impl MatchRecord {
    /// Build a new pending record for one retained match
    pub fn pending(mentee_id: &str, mentor_id: &str, score: u32) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            mentee_id: mentee_id.to_string(),
            mentor_id: mentor_id.to_string(),
            match_score: score,
            status: MatchStatus::Pending,
        }
    }
}

/// Scoring weights
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub specialty: f64,
    pub help_areas: f64,
    pub timeline: f64,
    pub mentorship_style: f64,
    pub communication: f64,
    pub degree_track: f64,
    pub background: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            specialty: 9.0,
            help_areas: 9.0,
            timeline: 7.0,
            mentorship_style: 7.0,
            communication: 7.0,
            degree_track: 6.0,
            background: 6.0,
        }
    }
}
