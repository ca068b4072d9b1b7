//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{
    BloomLevel, Curriculum, Faculty, NewCurriculum, OutcomeRecord, Professor, Submission,
    SubmissionRow, Track, User, Verb,
};
use anyhow::Result;
use async_trait::async_trait;

/// Repository for faculties, tracks, curriculums, bloom levels and verbs
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list_faculties(&self) -> Result<Vec<Faculty>>;

    async fn list_tracks(&self, faculty_id: i32) -> Result<Vec<Track>>;

    /// List curriculums, optionally restricted to one track
    async fn list_curriculums(&self, track_id: Option<i32>) -> Result<Vec<Curriculum>>;

    /// Insert a curriculum and return its id
    async fn insert_curriculum(&self, curriculum: &NewCurriculum) -> Result<i32>;

    async fn list_bloom_levels(&self) -> Result<Vec<BloomLevel>>;

    /// Insert a bloom level and return its id
    async fn insert_bloom_level(&self, name: &str) -> Result<i32>;

    /// List verbs, optionally restricted to one bloom level
    async fn list_verbs(&self, bloom_level_id: Option<i32>) -> Result<Vec<Verb>>;

    /// Insert a verb and return its id
    async fn insert_verb(&self, bloom_level_id: i32, name: &str) -> Result<i32>;
}

/// Repository for users and their professor records
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>>;

    async fn list_professors(&self) -> Result<Vec<Professor>>;

    /// Find a user whose username or email matches either value
    async fn find_by_username_or_email(&self, username: &str, email: &str) -> Result<Option<User>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Insert a user row and return its id
    async fn insert_user(
        &self,
        username: &str,
        name: &str,
        email: &str,
        password_hash: &str,
        role: &str,
    ) -> Result<i32>;

    /// Insert a professor linked to a user and return its id
    async fn insert_professor(&self, name: &str, user_id: i32, username: &str) -> Result<i32>;

    async fn find_professor_by_user(&self, user_id: i32) -> Result<Option<Professor>>;
}

/// Repository for submissions and their outcomes.
///
/// Every method is a single statement; callers sequence them and no
/// transaction spans multiple calls.
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Joined listing rows ordered by submission id, then outcome id
    async fn list_rows(&self, professor_id: Option<i32>) -> Result<Vec<SubmissionRow>>;

    async fn find(&self, id: i32) -> Result<Option<Submission>>;

    /// Insert submission metadata and return the new id
    async fn insert(
        &self,
        professor_id: i32,
        curriculum_id: i32,
        level: i32,
        year: &str,
    ) -> Result<i32>;

    async fn update(
        &self,
        id: i32,
        professor_id: i32,
        curriculum_id: i32,
        level: i32,
        year: &str,
    ) -> Result<()>;

    /// Delete the submission row only
    async fn delete(&self, id: i32) -> Result<()>;

    /// Insert one outcome and return its id
    async fn insert_outcome(&self, submission_id: i32, outcome: &OutcomeRecord) -> Result<i32>;

    /// Update one outcome, scoped to its submission. Returns rows affected.
    async fn update_outcome(
        &self,
        submission_id: i32,
        outcome_id: i32,
        outcome: &OutcomeRecord,
    ) -> Result<u64>;

    /// Delete all outcomes of a submission. Returns rows affected.
    async fn delete_outcomes(&self, submission_id: i32) -> Result<u64>;
}
