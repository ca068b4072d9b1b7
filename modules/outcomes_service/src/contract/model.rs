//! Contract models for outcomes service
//!
//! These models are transport-agnostic and shared by the domain, storage
//! and REST layers. NO serde derives - these are pure domain models.

use chrono::{DateTime, Utc};

// ===== Reference data =====

/// Top-level academic unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faculty {
    pub id: i32,
    pub name: String,
}

/// Specialization path within a faculty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: i32,
    pub faculty_id: i32,
    pub name: String,
}

/// Course definition under a track
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curriculum {
    pub id: i32,
    pub track_id: i32,
    pub name: String,
    pub code: String,
    pub period: String,
    pub total_hours: i32,
    pub lecture_hours: i32,
    pub lab_hours: i32,
    pub prerequisites: String,
}

/// Curriculum to be created. Hour counts and prerequisites are already
/// defaulted by the time this reaches the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCurriculum {
    pub track_id: i32,
    pub name: String,
    pub code: String,
    pub period: String,
    pub total_hours: i32,
    pub lecture_hours: i32,
    pub lab_hours: i32,
    pub prerequisites: String,
}

/// One tier of Bloom's taxonomy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloomLevel {
    pub id: i32,
    pub name: String,
}

/// Action verb conventionally associated with one Bloom level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verb {
    pub id: i32,
    pub name: String,
    pub bloom_level_id: i32,
}

// ===== Accounts =====

/// Account role stored on the user row
pub const PROFESSOR_ROLE: &str = "professor";

/// User account. `password_hash` never leaves the service layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

/// Professor linked to a user account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Professor {
    pub id: i32,
    pub name: String,
    pub user_id: Option<i32>,
    pub username: Option<String>,
}

/// Signup request after presence validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
    pub professor_name: String,
    pub email: String,
}

/// Result of a successful signup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisteredAccount {
    pub user_id: i32,
    pub professor_id: i32,
}

/// Result of a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i32,
    pub professor_id: Option<i32>,
    pub name: String,
    pub role: String,
}

// ===== Submissions =====

/// Submission row as stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: i32,
    pub professor_id: i32,
    pub curriculum_id: i32,
    pub level: i32,
    pub year: String,
    pub created_at: DateTime<Utc>,
}

/// Outcome entry as received from a client.
///
/// `id` is only meaningful on update: entries carrying one are updated in
/// place, entries without one are inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeInput {
    pub id: Option<i32>,
    pub bloom_level_id: Option<i32>,
    pub verb_id: Option<i32>,
    pub object: Option<String>,
    pub qualifier: Option<String>,
}

/// Submission metadata plus its outcome list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubmission {
    pub professor_id: i32,
    pub curriculum_id: i32,
    pub level: i32,
    pub year: String,
    pub outcomes: Vec<OutcomeInput>,
}

/// Fully resolved outcome ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeRecord {
    pub bloom_level_id: i32,
    pub verb_id: i32,
    pub object: String,
    pub qualifier: Option<String>,
}

/// One row of the submission listing join.
///
/// Submission and curriculum fields repeat on every row of a submission.
/// Outcome fields are all `None` when the submission has no outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionRow {
    pub submission_id: i32,
    pub professor_name: Option<String>,
    pub year: Option<String>,
    pub level: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub curriculum_id: Option<i32>,
    pub curriculum_name: Option<String>,
    pub curriculum_code: Option<String>,
    pub curr_period: Option<String>,
    pub total_hours: Option<i32>,
    pub lecture_hours: Option<i32>,
    pub lab_hours: Option<i32>,
    pub prerequisites: Option<String>,
    pub faculty_name: Option<String>,
    pub track_name: Option<String>,
    pub outcome_id: Option<i32>,
    pub bloom_level_id: Option<i32>,
    pub bloom_level_name: Option<String>,
    pub verb_id: Option<i32>,
    pub verb_name: Option<String>,
    pub object: Option<String>,
    pub qualifier: Option<String>,
}

/// Curriculum block embedded in a submission document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurriculumDocument {
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

/// Outcome entry embedded in a submission document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeDocument {
    pub id: Option<i32>,
    pub bloom_level_id: i32,
    pub verb_id: Option<i32>,
    pub bloom_level: Option<String>,
    pub verb: Option<String>,
    pub object: Option<String>,
    pub qualifier: Option<String>,
}

/// Nested submission document produced by the aggregator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionDocument {
    pub id: i32,
    pub professor: Option<String>,
    pub year: Option<String>,
    pub level: Option<i32>,
    pub curriculum_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub curriculum: CurriculumDocument,
    pub outcomes: Vec<OutcomeDocument>,
}
