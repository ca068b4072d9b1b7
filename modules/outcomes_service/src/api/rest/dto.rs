//! REST DTOs with serde derives for HTTP API
//!
//! Field names follow the JSON the web client already speaks, which mixes
//! snake_case and camelCase.

use serde::{Deserialize, Serialize};

// ===== Reference Data DTOs =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultyDto {
    pub faculty_id: i32,
    pub faculty_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackDto {
    pub track_id: i32,
    pub faculty_id: i32,
    pub track_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurriculumDto {
    pub curriculum_id: i32,
    pub track_id: i32,
    pub name: String,
    pub curriculum_code: String,
    pub curr_period: String,
    pub total_hours: i32,
    pub lecture_hours: i32,
    pub lab_hours: i32,
    pub prerequisites: String,
}

/// Curriculum creation request. Presence is checked in the mapper.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddCurriculumRequest {
    pub track_id: Option<i32>,
    pub name: Option<String>,
    pub curriculum_code: Option<String>,
    pub curr_period: Option<String>,
    pub total_hours: Option<i32>,
    pub lecture_hours: Option<i32>,
    pub lab_hours: Option<i32>,
    pub prerequisites: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurriculumCreatedResponse {
    pub message: String,
    #[serde(rename = "curriculumId")]
    pub curriculum_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BloomLevelDto {
    pub bloom_level_id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddBloomLevelRequest {
    pub level_en: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BloomLevelCreatedResponse {
    pub message: String,
    #[serde(rename = "levelId")]
    pub level_id: i32,
}

/// Verb as listed without a level filter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerbDto {
    pub verb_id: i32,
    pub verb_name: String,
    pub bloom_level_id: i32,
}

/// Verb as listed under one bloom level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelVerbDto {
    pub verb_id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddVerbRequest {
    pub bloom_level_id: Option<i32>,
    pub verb_en: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerbCreatedResponse {
    pub message: String,
    #[serde(rename = "verbId")]
    pub verb_id: i32,
}

// ===== Account DTOs =====

/// User listing entry; the password hash is never serialized
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfessorDto {
    pub id: i32,
    pub name: String,
    pub users_id: Option<i32>,
    pub users_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "professorName")]
    pub professor_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: i32,
    #[serde(rename = "professorId")]
    pub professor_id: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: i32,
    #[serde(rename = "professorId")]
    pub professor_id: Option<i32>,
    pub name: String,
    pub role: String,
}

// ===== Submission DTOs =====

/// Query parameters for listing submissions
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListSubmissionsQuery {
    /// Only this professor's submissions; empty means no filter
    #[serde(rename = "professorId")]
    pub professor_id: Option<String>,
}

/// Year arrives as either a string or a number
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum YearValue {
    Text(String),
    Number(i64),
}

/// Outcome entry inside a create/update request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutcomeRequest {
    /// Present only when updating an existing outcome
    pub id: Option<i32>,
    pub bloom_level_id: Option<i32>,
    pub verb_id: Option<i32>,
    pub object: Option<String>,
    pub qualifier: Option<String>,
}

/// Body of POST /api/submissions and PUT /api/submissions/{id}
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionRequest {
    pub professor_id: Option<i32>,
    pub curriculum_id: Option<i32>,
    pub level: Option<i32>,
    pub year: Option<YearValue>,
    pub outcomes: Option<Vec<OutcomeRequest>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionCreatedResponse {
    pub id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Aggregated submission document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionDocumentDto {
    pub id: i32,
    pub professor: Option<String>,
    pub year: Option<String>,
    pub level: Option<i32>,
    pub curriculum_id: Option<i32>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub curriculum: CurriculumDocumentDto,
    pub outcomes: Vec<OutcomeDocumentDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurriculumDocumentDto {
    pub name: Option<String>,
    pub code: Option<String>,
    pub period: Option<String>,
    pub total_hours: Option<i32>,
    pub lecture_hours: Option<i32>,
    pub lab_hours: Option<i32>,
    pub prerequisites: Option<String>,
    pub faculty: Option<String>,
    pub track: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeDocumentDto {
    pub id: Option<i32>,
    pub bloom_level_id: i32,
    pub verb_id: Option<i32>,
    pub bloom_level: Option<String>,
    pub verb: Option<String>,
    pub object: Option<String>,
    pub qualifier: Option<String>,
}
