//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, ApiError},
};
use crate::contract::{NewAccount, NewCurriculum, NewSubmission};
use crate::domain::Service;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;

type Body<T> = Result<Json<T>, JsonRejection>;
type PathId = Result<Path<i32>, PathRejection>;
type Params<T> = Result<Query<T>, QueryRejection>;

// ===== Reference Data Handlers =====

pub async fn list_faculties(service: Arc<Service>) -> Result<Json<Vec<FacultyDto>>, ApiError> {
    let faculties = service.list_faculties().await.map_err(map_domain_error)?;
    Ok(Json(faculties.into_iter().map(Into::into).collect()))
}

pub async fn list_tracks(
    service: Arc<Service>,
    path: PathId,
) -> Result<Json<Vec<TrackDto>>, ApiError> {
    let Path(faculty_id) = path?;
    let tracks = service
        .list_tracks(faculty_id)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(tracks.into_iter().map(Into::into).collect()))
}

/// List curriculums, all of them or those of one track
pub async fn list_curriculums(
    service: Arc<Service>,
    track_id: Option<i32>,
) -> Result<Json<Vec<CurriculumDto>>, ApiError> {
    let curriculums = service
        .list_curriculums(track_id)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(curriculums.into_iter().map(Into::into).collect()))
}

pub async fn add_curriculum(
    service: Arc<Service>,
    body: Body<AddCurriculumRequest>,
) -> Result<(StatusCode, Json<CurriculumCreatedResponse>), ApiError> {
    let Json(req) = body?;
    let curriculum = NewCurriculum::try_from(req).map_err(map_domain_error)?;
    let curriculum_id = service
        .add_curriculum(curriculum)
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(CurriculumCreatedResponse {
            message: "Curriculum added successfully".to_string(),
            curriculum_id,
        }),
    ))
}

pub async fn list_bloom_levels(
    service: Arc<Service>,
) -> Result<Json<Vec<BloomLevelDto>>, ApiError> {
    let levels = service.list_bloom_levels().await.map_err(map_domain_error)?;
    Ok(Json(levels.into_iter().map(Into::into).collect()))
}

pub async fn add_bloom_level(
    service: Arc<Service>,
    body: Body<AddBloomLevelRequest>,
) -> Result<(StatusCode, Json<BloomLevelCreatedResponse>), ApiError> {
    let Json(req) = body?;
    let name = req.into_name().map_err(map_domain_error)?;
    let level_id = service
        .add_bloom_level(&name)
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(BloomLevelCreatedResponse {
            message: "Bloom level added".to_string(),
            level_id,
        }),
    ))
}

pub async fn list_verbs(service: Arc<Service>) -> Result<Json<Vec<VerbDto>>, ApiError> {
    let verbs = service.list_verbs().await.map_err(map_domain_error)?;
    Ok(Json(verbs.into_iter().map(Into::into).collect()))
}

pub async fn list_verbs_for_level(
    service: Arc<Service>,
    path: PathId,
) -> Result<Json<Vec<LevelVerbDto>>, ApiError> {
    let Path(bloom_level_id) = path?;
    let verbs = service
        .list_verbs_for_level(bloom_level_id)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(verbs.into_iter().map(Into::into).collect()))
}

pub async fn add_verb(
    service: Arc<Service>,
    body: Body<AddVerbRequest>,
) -> Result<(StatusCode, Json<VerbCreatedResponse>), ApiError> {
    let Json(req) = body?;
    let (bloom_level_id, name) = req.into_parts().map_err(map_domain_error)?;
    let verb_id = service
        .add_verb(bloom_level_id, &name)
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(VerbCreatedResponse {
            message: "Verb added".to_string(),
            verb_id,
        }),
    ))
}

// ===== Account Handlers =====

pub async fn list_users(service: Arc<Service>) -> Result<Json<Vec<UserDto>>, ApiError> {
    let users = service.list_users().await.map_err(map_domain_error)?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

pub async fn list_professors(service: Arc<Service>) -> Result<Json<Vec<ProfessorDto>>, ApiError> {
    let professors = service.list_professors().await.map_err(map_domain_error)?;
    Ok(Json(professors.into_iter().map(Into::into).collect()))
}

pub async fn signup(
    service: Arc<Service>,
    body: Body<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    let Json(req) = body?;
    let account = NewAccount::try_from(req).map_err(map_domain_error)?;
    let registered = service.signup(account).await.map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User and professor registered".to_string(),
            user_id: registered.user_id,
            professor_id: registered.professor_id,
        }),
    ))
}

pub async fn login(
    service: Arc<Service>,
    body: Body<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(req) = body?;
    let (email, password) = req.into_credentials().map_err(map_domain_error)?;
    let user = service
        .login(&email, &password)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(user.into()))
}

// ===== Submission Handlers =====

/// Aggregated submissions, optionally filtered by `professorId`
pub async fn list_submissions(
    service: Arc<Service>,
    query: Params<ListSubmissionsQuery>,
) -> Result<Json<Vec<SubmissionDocumentDto>>, ApiError> {
    let Query(query) = query?;
    let professor_id = query.professor_filter().map_err(map_domain_error)?;
    let documents = service
        .list_submissions(professor_id)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(documents.into_iter().map(Into::into).collect()))
}

pub async fn create_submission(
    service: Arc<Service>,
    body: Body<SubmissionRequest>,
) -> Result<(StatusCode, Json<SubmissionCreatedResponse>), ApiError> {
    let Json(req) = body?;
    let submission = NewSubmission::try_from(req).map_err(map_domain_error)?;
    let id = service
        .create_submission(submission)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(SubmissionCreatedResponse { id })))
}

pub async fn update_submission(
    service: Arc<Service>,
    path: PathId,
    body: Body<SubmissionRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let Path(id) = path?;
    let Json(req) = body?;
    let submission = NewSubmission::try_from(req).map_err(map_domain_error)?;
    service
        .update_submission(id, submission)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(SuccessResponse { success: true }))
}

pub async fn delete_submission(
    service: Arc<Service>,
    path: PathId,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = path?;
    service.delete_submission(id).await.map_err(map_domain_error)?;

    Ok(Json(MessageResponse {
        message: "Submission deleted successfully".to_string(),
    }))
}
