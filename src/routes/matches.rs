use crate::core::Matcher;
use crate::models::{
    ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse, MatchRecord,
    MentorFeedQuery, MentorListResponse, SaveMatchesRequest, SaveMatchesResponse,
};
use crate::services::{SupabaseClient, SupabaseError};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub supabase: Arc<SupabaseClient>,
    pub matcher: Matcher,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/matches/save", web::post().to(save_matches))
        .route("/mentors", web::get().to(list_mentors));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.supabase.health_check().await;

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn store_error_response(context: &str, err: SupabaseError) -> HttpResponse {
    match err {
        SupabaseError::NotFound(message) => HttpResponse::NotFound().json(ErrorResponse {
            error: context.to_string(),
            message,
            status_code: 404,
        }),
        other => HttpResponse::InternalServerError().json(ErrorResponse {
            error: context.to_string(),
            message: other.to_string(),
            status_code: 500,
        }),
    }
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "menteeId": "string"
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let mentee_id = &req.mentee_id;

    tracing::info!("Finding matches for mentee: {}", mentee_id);

    let mentee = match state.supabase.get_mentee(mentee_id).await {
        Ok(mentee) => mentee,
        Err(e) => {
            tracing::error!("Failed to fetch mentee {}: {}", mentee_id, e);
            return store_error_response("Failed to fetch mentee", e);
        }
    };

    let mentors = match state.supabase.list_mentors().await {
        Ok(mentors) => mentors,
        Err(e) => {
            tracing::error!("Failed to fetch mentor pool for {}: {}", mentee_id, e);
            return store_error_response("Failed to fetch mentor pool", e);
        }
    };

    tracing::debug!("Scoring {} mentors for {}", mentors.len(), mentee_id);

    let result = state.matcher.find_matches(&mentee, mentors);

    tracing::info!(
        "Returning {} matches for mentee {} (from {} candidates)",
        result.matches.len(),
        mentee_id,
        result.total_candidates
    );

    HttpResponse::Ok().json(FindMatchesResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
    })
}

/// Save matches endpoint
///
/// POST /api/v1/matches/save
///
/// Request body:
/// ```json
/// {
///   "menteeId": "string",
///   "matches": [{ "mentorId": "string", "score": 47 }]
/// }
/// ```
///
/// Persistence failures propagate as errors; the client's in-memory match
/// list remains displayable regardless.
async fn save_matches(
    state: web::Data<AppState>,
    req: web::Json<SaveMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let records: Vec<MatchRecord> = req
        .matches
        .iter()
        .map(|m| MatchRecord::pending(&req.mentee_id, &m.mentor_id, m.score))
        .collect();

    match state.supabase.insert_matches(&records).await {
        Ok(saved) => {
            tracing::info!("Saved {} matches for mentee {}", saved, req.mentee_id);
            HttpResponse::Ok().json(SaveMatchesResponse {
                success: true,
                saved,
            })
        }
        Err(e) => {
            tracing::error!("Failed to save matches for {}: {}", req.mentee_id, e);
            store_error_response("Failed to save matches", e)
        }
    }
}

/// Mentor directory feed
///
/// GET /api/v1/mentors?specialty={specialty}&search={term}
///
/// Backs the client's browse screen: optional specialty and name filters
/// applied over the fetched pool.
async fn list_mentors(
    state: web::Data<AppState>,
    query: web::Query<MentorFeedQuery>,
) -> impl Responder {
    let mut mentors = match state.supabase.list_mentors().await {
        Ok(mentors) => mentors,
        Err(e) => {
            tracing::error!("Failed to fetch mentor directory: {}", e);
            return store_error_response("Failed to fetch mentors", e);
        }
    };

    if let Some(specialty) = query.specialty {
        mentors.retain(|m| m.medical_specialty == Some(specialty));
    }

    if let Some(search) = &query.search {
        let needle = search.to_lowercase();
        mentors.retain(|m| {
            m.first_name.to_lowercase().contains(&needle)
                || m.last_name.to_lowercase().contains(&needle)
        });
    }

    let total = mentors.len();

    HttpResponse::Ok().json(MentorListResponse { mentors, total })
}
