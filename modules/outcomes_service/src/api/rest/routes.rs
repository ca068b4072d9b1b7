//! Route registration

use super::{dto::*, error::ApiError, handlers};
use crate::domain::Service;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query,
    },
    http::StatusCode,
    routing::{get, post, put},
    Extension, Json, Router,
};
use std::sync::Arc;

/// Register all REST routes under `/api`
pub fn register_routes(router: Router, service: Arc<Service>) -> anyhow::Result<Router> {
    let router = router
        // Reference data endpoints
        .route("/api/faculties", get(list_faculties_handler))
        .route("/api/tracks/{faculty_id}", get(list_tracks_handler))
        .route("/api/curriculums", get(list_curriculums_handler))
        .route("/api/curriculums/{track_id}", get(list_track_curriculums_handler))
        .route("/api/add-curriculum", post(add_curriculum_handler))
        .route("/api/bloom-levels", get(list_bloom_levels_handler))
        .route("/api/add-bloom", post(add_bloom_level_handler))
        .route("/api/verbs", get(list_verbs_handler))
        .route("/api/verbs/{bloom_level_id}", get(list_level_verbs_handler))
        .route("/api/add-verb", post(add_verb_handler))
        // Account endpoints
        .route("/api/users", get(list_users_handler))
        .route("/api/professors", get(list_professors_handler))
        .route("/api/signup", post(signup_handler))
        .route("/api/login", post(login_handler))
        // Submission endpoints
        .route(
            "/api/submissions",
            get(list_submissions_handler).post(create_submission_handler),
        )
        .route(
            "/api/submissions/{id}",
            put(update_submission_handler).delete(delete_submission_handler),
        )
        // Add service as extension for handlers
        .layer(Extension(service));

    Ok(router)
}

// ===== Handler wrappers that extract service from Extension =====

async fn list_faculties_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<Vec<FacultyDto>>, ApiError> {
    handlers::list_faculties(service).await
}

async fn list_tracks_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Vec<TrackDto>>, ApiError> {
    handlers::list_tracks(service, path).await
}

async fn list_curriculums_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<Vec<CurriculumDto>>, ApiError> {
    handlers::list_curriculums(service, None).await
}

async fn list_track_curriculums_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Vec<CurriculumDto>>, ApiError> {
    let Path(track_id) = path?;
    handlers::list_curriculums(service, Some(track_id)).await
}

async fn add_curriculum_handler(
    Extension(service): Extension<Arc<Service>>,
    body: Result<Json<AddCurriculumRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CurriculumCreatedResponse>), ApiError> {
    handlers::add_curriculum(service, body).await
}

async fn list_bloom_levels_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<Vec<BloomLevelDto>>, ApiError> {
    handlers::list_bloom_levels(service).await
}

async fn add_bloom_level_handler(
    Extension(service): Extension<Arc<Service>>,
    body: Result<Json<AddBloomLevelRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BloomLevelCreatedResponse>), ApiError> {
    handlers::add_bloom_level(service, body).await
}

async fn list_verbs_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<Vec<VerbDto>>, ApiError> {
    handlers::list_verbs(service).await
}

async fn list_level_verbs_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Vec<LevelVerbDto>>, ApiError> {
    handlers::list_verbs_for_level(service, path).await
}

async fn add_verb_handler(
    Extension(service): Extension<Arc<Service>>,
    body: Result<Json<AddVerbRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<VerbCreatedResponse>), ApiError> {
    handlers::add_verb(service, body).await
}

async fn list_users_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<Vec<UserDto>>, ApiError> {
    handlers::list_users(service).await
}

async fn list_professors_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<Vec<ProfessorDto>>, ApiError> {
    handlers::list_professors(service).await
}

async fn signup_handler(
    Extension(service): Extension<Arc<Service>>,
    body: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    handlers::signup(service, body).await
}

async fn login_handler(
    Extension(service): Extension<Arc<Service>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    handlers::login(service, body).await
}

async fn list_submissions_handler(
    Extension(service): Extension<Arc<Service>>,
    query: Result<Query<ListSubmissionsQuery>, QueryRejection>,
) -> Result<Json<Vec<SubmissionDocumentDto>>, ApiError> {
    handlers::list_submissions(service, query).await
}

async fn create_submission_handler(
    Extension(service): Extension<Arc<Service>>,
    body: Result<Json<SubmissionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmissionCreatedResponse>), ApiError> {
    handlers::create_submission(service, body).await
}

async fn update_submission_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<SubmissionRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    handlers::update_submission(service, path, body).await
}

async fn delete_submission_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    handlers::delete_submission(service, path).await
}
