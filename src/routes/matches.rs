use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::config::MatchingSettings;
use crate::core::{apply_candidate_filters, MatchError, Matcher};
use crate::models::{
    ErrorResponse, HealthResponse, MatchDetailRequest, MatchDetailResponse, Pagination,
    RankMatchesRequest, RankMatchesResponse, UserProfile,
};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/rank", web::post().to(rank_matches))
        .route("/matches/detail", web::post().to(match_detail));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank matches endpoint
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "currentUser": { "id": "string", "skillsOffered": [], "skillsWanted": [] },
///   "candidates": [],
///   "page": 1,
///   "limit": 20,
///   "filters": { "availability": "weekends", "location": "string", "skill": "string" },
///   "evaluatedAt": "2024-06-01T12:00:00Z"
/// }
/// ```
async fn rank_matches(
    state: web::Data<AppState>,
    req: web::Json<RankMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank_matches request: {}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let req = req.into_inner();

    let current_user = match req.current_user {
        Some(user) => user,
        None => return invalid_input(MatchError::missing_profile("current user")),
    };
    if let Err(response) = validate_profiles(&current_user, &req.candidates) {
        return response;
    }

    let limit = req
        .limit
        .unwrap_or(state.matching.default_limit)
        .clamp(1, state.matching.max_limit.max(1));
    let now = req.evaluated_at.unwrap_or_else(chrono::Utc::now);

    tracing::info!(
        "Ranking matches for user: {}, page: {}, limit: {}",
        current_user.id,
        req.page,
        limit
    );

    let received = req.candidates.len();
    let mut candidates = apply_candidate_filters(&current_user.id, req.candidates, &req.filters);

    tracing::debug!(
        "{} of {} candidates passed filters for {}",
        candidates.len(),
        received,
        current_user.id
    );

    if candidates.len() > state.matching.max_candidates {
        tracing::warn!(
            "Truncating {} candidates to {} for user {}",
            candidates.len(),
            state.matching.max_candidates,
            current_user.id
        );
        candidates.truncate(state.matching.max_candidates);
    }

    let ranked = match state.matcher.rank(&current_user, candidates, now) {
        Ok(ranked) => ranked,
        Err(e) => return invalid_input(e),
    };

    let pagination = Pagination::new(req.page, limit, ranked.len());
    let page = pagination.bounds();
    let matches: Vec<_> = ranked
        .into_iter()
        .skip(page.start)
        .take(page.len())
        .collect();

    tracing::info!(
        "Returning {} matches for user {} (page {} of {}, {} ranked)",
        matches.len(),
        current_user.id,
        pagination.page,
        pagination.total_pages,
        pagination.total
    );

    HttpResponse::Ok().json(RankMatchesResponse { matches, pagination })
}

/// Match detail endpoint
///
/// POST /api/v1/matches/detail
///
/// Request body:
/// ```json
/// {
///   "currentUser": { "id": "string" },
///   "candidate": { "id": "string" },
///   "evaluatedAt": "2024-06-01T12:00:00Z"
/// }
/// ```
async fn match_detail(
    state: web::Data<AppState>,
    req: web::Json<MatchDetailRequest>,
) -> impl Responder {
    let req = req.into_inner();

    let (current_user, candidate) = match (req.current_user, req.candidate) {
        (Some(current_user), Some(candidate)) => (current_user, candidate),
        (None, _) => return invalid_input(MatchError::missing_profile("current user")),
        (_, None) => return invalid_input(MatchError::missing_profile("candidate")),
    };
    if let Err(response) = validate_profiles(&current_user, std::slice::from_ref(&candidate)) {
        return response;
    }

    let now = req.evaluated_at.unwrap_or_else(chrono::Utc::now);

    match state.matcher.explain(&current_user, candidate, now) {
        Ok((result, trace)) => {
            tracing::info!(
                "Match detail {} -> {}: {:.2}",
                current_user.id,
                result.candidate.id,
                result.total_score
            );
            HttpResponse::Ok().json(MatchDetailResponse { result, trace })
        }
        Err(e) => invalid_input(e),
    }
}

fn validate_profiles(current: &UserProfile, candidates: &[UserProfile]) -> Result<(), HttpResponse> {
    if let Err(errors) = current.validate() {
        tracing::info!("Invalid current user profile {:?}: {}", current.id, errors);
        return Err(bad_request("Invalid current user profile", errors.to_string()));
    }

    for candidate in candidates {
        if let Err(errors) = candidate.validate() {
            tracing::info!("Invalid candidate profile {:?}: {}", candidate.id, errors);
            return Err(bad_request(
                "Invalid candidate profile",
                format!("candidate {:?}: {}", candidate.id, errors),
            ));
        }
    }

    Ok(())
}

fn invalid_input(err: MatchError) -> HttpResponse {
    tracing::info!("Rejected match request: {}", err);
    bad_request("Invalid input", err.to_string())
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}
