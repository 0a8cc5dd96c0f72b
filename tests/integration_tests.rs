// Integration tests for MedBridge Algo

use medbridge_algo::core::{Matcher, MAX_RESULTS};
use medbridge_algo::models::{
    ApplicationTarget, Background, CareerStage, CommunicationFrequency, CommunicationMode, Degree,
    DegreeTrack, HelpArea, MatchRecord, MenteeProfile, MentorProfile, MentorshipStyle, Specialty,
};
use medbridge_algo::services::{SupabaseClient, SupabaseError, SupabaseTables};

fn create_mentee() -> MenteeProfile {
    MenteeProfile {
        id: Some("mentee_1".to_string()),
        first_name: Some("Ada".to_string()),
        last_name: Some("Nguyen".to_string()),
        primary_specialty_interest: Some(Specialty::Cardiology),
        help_areas: vec![HelpArea::McatPreparation, HelpArea::InterviewSkills],
        application_target: Some(ApplicationTarget::Next6Months),
        preferred_mentorship_style: Some(MentorshipStyle::Structured),
        communication_frequency: Some(CommunicationFrequency::Weekly),
        communication_modes: vec![CommunicationMode::Email],
        degree_track_preference: Some(DegreeTrack::Md),
        applicant_background: vec![Background::FirstGen],
        prefer_mentor_same_gender: false,
        preferred_gender: None,
        prefer_alumni_mentor: false,
        preferred_university: None,
    }
}

fn create_mentor(
    id: &str,
    specialty: Specialty,
    stage: CareerStage,
    style: MentorshipStyle,
) -> MentorProfile {
    MentorProfile {
        id: id.to_string(),
        first_name: format!("Mentor {}", id),
        last_name: "Test".to_string(),
        medical_specialty: Some(specialty),
        career_stage: Some(stage),
        degree: Some(Degree::Md),
        areas_of_expertise: vec![HelpArea::McatPreparation],
        mentorship_style: Some(style),
        communication_frequency: Some(CommunicationFrequency::Weekly),
        communication_modes: vec![CommunicationMode::Email],
        applicant_background: vec![Background::FirstGen],
        gender: None,
        alma_mater: None,
        created_at: None,
    }
}

fn create_unrelated_mentor(id: &str) -> MentorProfile {
    MentorProfile {
        id: id.to_string(),
        first_name: format!("Mentor {}", id),
        last_name: "Test".to_string(),
        medical_specialty: Some(Specialty::Dermatology),
        career_stage: Some(CareerStage::MedicalStudentM1M2),
        degree: Some(Degree::CurrentMedicalStudent),
        areas_of_expertise: vec![HelpArea::WorkLifeBalance],
        mentorship_style: Some(MentorshipStyle::Flexible),
        communication_frequency: Some(CommunicationFrequency::AsNeeded),
        communication_modes: vec![CommunicationMode::InPerson],
        applicant_background: vec![Background::Traditional],
        gender: None,
        alma_mater: None,
        created_at: None,
    }
}

fn test_tables() -> SupabaseTables {
    SupabaseTables {
        mentees: "mentees".to_string(),
        mentors: "mentors".to_string(),
        matches: "matches".to_string(),
    }
}

#[test]
fn test_integration_end_to_end_matching() {
    let matcher = Matcher::with_default_weights();
    let mentee = create_mentee();

    let mentors = vec![
        create_mentor(
            "1",
            Specialty::Cardiology,
            CareerStage::AttendingPhysician,
            MentorshipStyle::Structured,
        ),
        create_mentor(
            "2",
            Specialty::Cardiology,
            CareerStage::ResidentFellow,
            MentorshipStyle::Mix,
        ),
        create_mentor(
            "3",
            Specialty::Neurology,
            CareerStage::AttendingPhysician,
            MentorshipStyle::Structured,
        ),
        create_unrelated_mentor("4"),
        create_unrelated_mentor("5"),
    ];

    let result = matcher.find_matches(&mentee, mentors);

    // The two unrelated mentors score zero and are excluded
    assert_eq!(result.matches.len(), 3);
    assert_eq!(result.total_candidates, 5);

    // Best alignment first
    assert_eq!(result.matches[0].mentor_id, "1");

    for m in &result.matches {
        assert!(m.score > 0);
    }

    for pair in result.matches.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "Matches not sorted by score"
        );
    }
}

#[test]
fn test_result_cap_enforcement() {
    let matcher = Matcher::with_default_weights();
    let mentee = create_mentee();

    let mentors: Vec<MentorProfile> = (0..50)
        .map(|i| {
            create_mentor(
                &i.to_string(),
                Specialty::Cardiology,
                CareerStage::AttendingPhysician,
                MentorshipStyle::Structured,
            )
        })
        .collect();

    let result = matcher.find_matches(&mentee, mentors);

    assert_eq!(result.matches.len(), MAX_RESULTS);
    assert_eq!(result.total_candidates, 50);
}

#[test]
fn test_empty_pool_returns_empty_list() {
    let matcher = Matcher::with_default_weights();
    let mentee = create_mentee();

    let result = matcher.find_matches(&mentee, vec![]);

    assert!(result.matches.is_empty());
}

#[test]
fn test_mentee_accepts_both_wire_shapes() {
    let camel = serde_json::json!({
        "id": "mentee_1",
        "firstName": "Ada",
        "lastName": "Nguyen",
        "primarySpecialtyInterest": "cardiology",
        "helpAreas": ["mcat-preparation", "interview-skills"],
        "applicationTarget": "next-6-months",
        "preferredMentorshipStyle": "structured",
        "communicationFrequency": "weekly",
        "communicationModes": ["email"],
        "degreeTrackPreference": "md",
        "applicantBackground": ["first-gen"],
        "preferMentorSameGender": false,
        "preferAlumniMentor": false
    });

    let snake = serde_json::json!({
        "id": "mentee_1",
        "first_name": "Ada",
        "last_name": "Nguyen",
        "primary_specialty_interest": "cardiology",
        "help_areas": ["mcat-preparation", "interview-skills"],
        "application_target": "next-6-months",
        "preferred_mentorship_style": "structured",
        "communication_frequency": "weekly",
        "communication_modes": ["email"],
        "degree_track_preference": "md",
        "applicant_background": ["first-gen"],
        "prefer_mentor_same_gender": false,
        "prefer_alumni_mentor": false
    });

    let from_camel: MenteeProfile = serde_json::from_value(camel).expect("camelCase shape");
    let from_snake: MenteeProfile = serde_json::from_value(snake).expect("snake_case shape");

    assert_eq!(from_camel, from_snake);
    assert_eq!(from_camel, create_mentee());
}

#[test]
fn test_partial_mentee_record_still_parses() {
    let sparse = serde_json::json!({
        "id": "mentee_2",
        "helpAreas": ["personal-essays"]
    });

    let mentee: MenteeProfile = serde_json::from_value(sparse).expect("sparse shape");

    assert_eq!(mentee.help_areas, vec![HelpArea::PersonalEssays]);
    assert!(mentee.primary_specialty_interest.is_none());
    assert!(!mentee.prefer_alumni_mentor);
}

#[test]
fn test_match_serialization_shape() {
    let matcher = Matcher::with_default_weights();
    let mentee = create_mentee();
    let mentors = vec![create_mentor(
        "1",
        Specialty::Cardiology,
        CareerStage::AttendingPhysician,
        MentorshipStyle::Structured,
    )];

    let result = matcher.find_matches(&mentee, mentors);
    let value = serde_json::to_value(&result.matches[0]).expect("serializable match");

    assert_eq!(value["mentorId"], "1");
    assert_eq!(value["mentor"]["medical_specialty"], "cardiology");
    assert!(value["factors"]["helpAreas"].is_number());
    assert!(value["factors"]["degreeTrack"].is_number());
    assert!(value["score"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn test_list_mentors_skips_invalid_rows() {
    let mut server = mockito::Server::new_async().await;

    let body = serde_json::json!([
        {
            "id": "mentor_1",
            "first_name": "Grace",
            "last_name": "Okafor",
            "medical_specialty": "cardiology",
            "career_stage": "attending-physician",
            "degree": "md",
            "areas_of_expertise": ["mcat-preparation"],
            "mentorship_style": "structured",
            "communication_frequency": "weekly",
            "communication_modes": ["email"],
            "applicant_background": ["first-gen"]
        },
        {
            // Missing required id, dropped at parse time
            "first_name": "Broken",
            "last_name": "Row"
        }
    ]);

    let _mock = server
        .mock("GET", "/rest/v1/mentors")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let client = SupabaseClient::new(server.url(), "test-key".to_string(), test_tables());

    let mentors = client.list_mentors().await.expect("mentor pool");

    assert_eq!(mentors.len(), 1);
    assert_eq!(mentors[0].id, "mentor_1");
    assert_eq!(mentors[0].medical_specialty, Some(Specialty::Cardiology));
}

#[tokio::test]
async fn test_get_mentee_not_found() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("GET", "/rest/v1/mentees")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let client = SupabaseClient::new(server.url(), "test-key".to_string(), test_tables());

    let result = client.get_mentee("missing").await;

    assert!(matches!(result, Err(SupabaseError::NotFound(_))));
}

#[tokio::test]
async fn test_get_mentee_parses_stored_shape() {
    let mut server = mockito::Server::new_async().await;

    let body = serde_json::json!([{
        "id": "mentee_1",
        "first_name": "Ada",
        "last_name": "Nguyen",
        "primary_specialty_interest": "cardiology",
        "help_areas": ["mcat-preparation", "interview-skills"],
        "application_target": "next-6-months",
        "preferred_mentorship_style": "structured",
        "communication_frequency": "weekly",
        "communication_modes": ["email"],
        "degree_track_preference": "md",
        "applicant_background": ["first-gen"],
        "prefer_mentor_same_gender": false,
        "prefer_alumni_mentor": false,
        "created_at": "2025-05-12T09:30:00Z"
    }]);

    let _mock = server
        .mock("GET", "/rest/v1/mentees")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let client = SupabaseClient::new(server.url(), "test-key".to_string(), test_tables());

    let mentee = client.get_mentee("mentee_1").await.expect("stored mentee");

    assert_eq!(mentee, create_mentee());
}

#[tokio::test]
async fn test_insert_matches_success_counts_records() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/rest/v1/matches")
        .with_status(201)
        .create_async()
        .await;

    let client = SupabaseClient::new(server.url(), "test-key".to_string(), test_tables());

    let records = vec![
        MatchRecord::pending("mentee_1", "mentor_1", 47),
        MatchRecord::pending("mentee_1", "mentor_2", 31),
    ];

    let saved = client.insert_matches(&records).await.expect("insert");

    assert_eq!(saved, 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_insert_matches_propagates_failure() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/rest/v1/matches")
        .with_status(500)
        .create_async()
        .await;

    let client = SupabaseClient::new(server.url(), "test-key".to_string(), test_tables());

    let records = vec![MatchRecord::pending("mentee_1", "mentor_1", 47)];

    let result = client.insert_matches(&records).await;

    assert!(matches!(result, Err(SupabaseError::ApiError(_))));
    // The computed records remain usable even though persistence failed
    assert_eq!(records[0].match_score, 47);
}

#[tokio::test]
async fn test_unauthorized_is_distinguished() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("GET", "/rest/v1/mentors")
        .match_query(mockito::Matcher::Any)
        .with_status(401)
        .create_async()
        .await;

    let client = SupabaseClient::new(server.url(), "bad-key".to_string(), test_tables());

    let result = client.list_mentors().await;

    assert!(matches!(result, Err(SupabaseError::Unauthorized)));
}

#[tokio::test]
async fn test_health_check_reflects_store_state() {
    let mut up = mockito::Server::new_async().await;
    let mock = up
        .mock("GET", "/rest/v1/")
        .with_status(200)
        .create_async()
        .await;

    let client = SupabaseClient::new(up.url(), "test-key".to_string(), test_tables());
    assert!(client.health_check().await);
    mock.assert_async().await;

    let mut down = mockito::Server::new_async().await;
    let _mock = down
        .mock("GET", "/rest/v1/")
        .with_status(503)
        .create_async()
        .await;

    let client = SupabaseClient::new(down.url(), "test-key".to_string(), test_tables());
    assert!(!client.health_check().await);
}
