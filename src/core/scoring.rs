use crate::models::{
    ApplicationTarget, Background, CareerStage, CommunicationFrequency, Degree, DegreeTrack,
    FactorBreakdown, HelpArea, MatchScore, MenteeProfile, MentorProfile, MentorshipStyle,
    ScoringWeights, Specialty,
};

/// Points awarded per shared help area, capped at the factor weight
const POINTS_PER_SHARED_AREA: f64 = 3.0;

/// Flat bonus for a satisfied same-gender preference
const GENDER_BONUS: u32 = 2;

/// Flat bonus for a satisfied alumni preference
const ALUMNI_BONUS: u32 = 2;

/// Background tags that award the full background weight on any overlap
const HIGH_VALUE_BACKGROUNDS: [Background; 3] = [
    Background::FirstGen,
    Background::Urm,
    Background::NonTraditional,
];

/// Frequency pairs close enough to still work, checked symmetrically
const COMPATIBLE_FREQUENCIES: [(CommunicationFrequency, CommunicationFrequency); 3] = [
    (
        CommunicationFrequency::Weekly,
        CommunicationFrequency::BiWeekly,
    ),
    (
        CommunicationFrequency::BiWeekly,
        CommunicationFrequency::Monthly,
    ),
    (
        CommunicationFrequency::Monthly,
        CommunicationFrequency::AsNeeded,
    ),
];

/// Score one mentee against one mentor
///
/// Seven weighted factors are computed independently and summed; the sum is
/// rounded and the flat gender/alumni bonuses are added after rounding.
/// Deterministic and total: absent fields contribute zero rather than
/// erroring.
pub fn calculate_match_score(
    mentee: &MenteeProfile,
    mentor: &MentorProfile,
    weights: &ScoringWeights,
) -> MatchScore {
    let factors = FactorBreakdown {
        specialty: specialty_score(
            mentee.primary_specialty_interest,
            mentor.medical_specialty,
            weights.specialty,
        ),
        help_areas: help_area_score(
            &mentee.help_areas,
            &mentor.areas_of_expertise,
            weights.help_areas,
        ),
        communication: communication_score(mentee, mentor, weights.communication),
        background: background_score(
            &mentee.applicant_background,
            &mentor.applicant_background,
            weights.background,
        ),
        degree_track: degree_score(
            mentee.degree_track_preference,
            mentor.degree,
            weights.degree_track,
        ),
        mentorship_style: style_score(
            mentee.preferred_mentorship_style,
            mentor.mentorship_style,
            weights.mentorship_style,
        ),
        timeline: timeline_score(
            mentee.application_target,
            mentor.career_stage,
            weights.timeline,
        ),
    };

    let weighted_sum = factors.specialty
        + factors.help_areas
        + factors.communication
        + factors.background
        + factors.degree_track
        + factors.mentorship_style
        + factors.timeline;

    // Bonuses are integral and land after the weighted sum is rounded
    let mut score = weighted_sum.round() as u32;
    if gender_preference_met(mentee, mentor) {
        score += GENDER_BONUS;
    }
    if alumni_preference_met(mentee, mentor) {
        score += ALUMNI_BONUS;
    }

    MatchScore {
        mentor_id: mentor.id.clone(),
        mentor: mentor.clone(),
        score,
        factors,
    }
}

/// Exact specialty match gets the full weight, anything else gets nothing
#[inline]
fn specialty_score(interest: Option<Specialty>, specialty: Option<Specialty>, weight: f64) -> f64 {
    match (interest, specialty) {
        (Some(a), Some(b)) if a == b => weight,
        _ => 0.0,
    }
}

/// Each shared help area is worth a fixed number of points, capped at the
/// factor weight
#[inline]
fn help_area_score(help_areas: &[HelpArea], expertise: &[HelpArea], weight: f64) -> f64 {
    let overlap = help_areas.iter().filter(|a| expertise.contains(a)).count();
    if overlap == 0 {
        return 0.0;
    }
    (overlap as f64 * POINTS_PER_SHARED_AREA).min(weight)
}

/// Application timeline against mentor career stage
///
/// Urgent mentees pair best with experienced mentors; medium-term mentees
/// with residents and senior students. Long-horizon and undecided mentees
/// take flat partial credit with any stage.
#[inline]
fn timeline_score(
    target: Option<ApplicationTarget>,
    stage: Option<CareerStage>,
    weight: f64,
) -> f64 {
    match target {
        Some(ApplicationTarget::Next6Months) => match stage {
            Some(CareerStage::AttendingPhysician) | Some(CareerStage::ResidentFellow) => weight,
            Some(CareerStage::MedicalStudentM3M4) => weight * 0.7,
            _ => 0.0,
        },
        Some(ApplicationTarget::In1To2Years) => match stage {
            Some(CareerStage::ResidentFellow) | Some(CareerStage::MedicalStudentM3M4) => weight,
            Some(CareerStage::AttendingPhysician) => weight * 0.8,
            _ => 0.0,
        },
        Some(ApplicationTarget::In3PlusYears) | Some(ApplicationTarget::NotSure) => weight * 0.6,
        None => 0.0,
    }
}

/// Exact style match first; mix-style mentors accommodate any preference at
/// reduced credit
#[inline]
fn style_score(
    preferred: Option<MentorshipStyle>,
    style: Option<MentorshipStyle>,
    weight: f64,
) -> f64 {
    match (preferred, style) {
        (Some(a), Some(b)) if a == b => weight,
        (_, Some(MentorshipStyle::Mix)) => weight * 0.7,
        _ => 0.0,
    }
}

/// Frequency and mode alignment, summed and rounded as one factor
///
/// Mode overlap is normalized by the mentee's own mode count; a mentee with
/// no modes selected contributes nothing from that sub-part.
#[inline]
fn communication_score(mentee: &MenteeProfile, mentor: &MentorProfile, weight: f64) -> f64 {
    let mut score = 0.0;

    match (
        mentee.communication_frequency,
        mentor.communication_frequency,
    ) {
        (Some(a), Some(b)) if a == b => score += weight * 0.6,
        (Some(a), Some(b)) => {
            let compatible = COMPATIBLE_FREQUENCIES
                .iter()
                .any(|&(x, y)| (a == x && b == y) || (a == y && b == x));
            if compatible {
                score += weight * 0.3;
            }
        }
        _ => {}
    }

    if !mentee.communication_modes.is_empty() {
        let overlap = mentee
            .communication_modes
            .iter()
            .filter(|m| mentor.communication_modes.contains(m))
            .count();
        if overlap > 0 {
            score += weight * 0.4 * (overlap as f64 / mentee.communication_modes.len() as f64);
        }
    }

    score.round()
}

/// Degree track alignment
///
/// Track-specific rules are checked first; the MD/PhD fallback only applies
/// when none of them matched.
#[inline]
fn degree_score(track: Option<DegreeTrack>, degree: Option<Degree>, weight: f64) -> f64 {
    match (track, degree) {
        (Some(DegreeTrack::Md), Some(Degree::Md)) | (Some(DegreeTrack::Do), Some(Degree::Do)) => {
            return weight;
        }
        (Some(DegreeTrack::Both), Some(Degree::Md))
        | (Some(DegreeTrack::Both), Some(Degree::Do)) => {
            return weight * 0.8;
        }
        _ => {}
    }

    if degree == Some(Degree::MdPhd) {
        return weight * 0.7;
    }

    0.0
}

/// Shared background experience
///
/// Any shared high-value tag earns the full weight regardless of overlap
/// size; otherwise credit is proportional to the mentee's tag count.
#[inline]
fn background_score(mentee_bg: &[Background], mentor_bg: &[Background], weight: f64) -> f64 {
    let overlap = mentee_bg.iter().filter(|b| mentor_bg.contains(b)).count();
    if overlap == 0 {
        return 0.0;
    }

    let high_value = mentee_bg
        .iter()
        .any(|b| HIGH_VALUE_BACKGROUNDS.contains(b) && mentor_bg.contains(b));
    if high_value {
        return weight;
    }

    (weight * overlap as f64 / mentee_bg.len() as f64).round()
}

/// Both sides must state a gender for the preference to count
#[inline]
fn gender_preference_met(mentee: &MenteeProfile, mentor: &MentorProfile) -> bool {
    mentee.prefer_mentor_same_gender
        && matches!(
            (&mentee.preferred_gender, &mentor.gender),
            (Some(a), Some(b)) if a == b
        )
}

#[inline]
fn alumni_preference_met(mentee: &MenteeProfile, mentor: &MentorProfile) -> bool {
    mentee.prefer_alumni_mentor
        && matches!(
            (&mentee.preferred_university, &mentor.alma_mater),
            (Some(a), Some(b)) if a == b
        )
}
