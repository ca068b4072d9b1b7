//! Domain service - business logic orchestration

use super::aggregation::aggregate_submissions;
use super::password::{hash_password, verify_password};
use super::repository::{AccountRepository, CatalogRepository, SubmissionRepository};
use super::validation::outcome_record;
use crate::contract::{
    AuthenticatedUser, BloomLevel, Curriculum, Faculty, NewAccount, NewCurriculum,
    NewSubmission, OutcomeInput, OutcomesError, Professor, RegisteredAccount,
    SubmissionDocument, Track, User, Verb, PROFESSOR_ROLE,
};
use std::sync::Arc;

/// Domain service for curriculum reference data, accounts and submissions
pub struct Service {
    catalog_repo: Arc<dyn CatalogRepository>,
    account_repo: Arc<dyn AccountRepository>,
    submission_repo: Arc<dyn SubmissionRepository>,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        catalog_repo: Arc<dyn CatalogRepository>,
        account_repo: Arc<dyn AccountRepository>,
        submission_repo: Arc<dyn SubmissionRepository>,
    ) -> Self {
        Self {
            catalog_repo,
            account_repo,
            submission_repo,
        }
    }

    // ===== Reference Data =====

    pub async fn list_faculties(&self) -> Result<Vec<Faculty>, OutcomesError> {
        self.catalog_repo
            .list_faculties()
            .await
            .map_err(OutcomesError::storage)
    }

    pub async fn list_tracks(&self, faculty_id: i32) -> Result<Vec<Track>, OutcomesError> {
        self.catalog_repo
            .list_tracks(faculty_id)
            .await
            .map_err(OutcomesError::storage)
    }

    pub async fn list_curriculums(
        &self,
        track_id: Option<i32>,
    ) -> Result<Vec<Curriculum>, OutcomesError> {
        self.catalog_repo
            .list_curriculums(track_id)
            .await
            .map_err(OutcomesError::storage)
    }

    /// Create a curriculum and return its id
    pub async fn add_curriculum(&self, curriculum: NewCurriculum) -> Result<i32, OutcomesError> {
        let id = self
            .catalog_repo
            .insert_curriculum(&curriculum)
            .await
            .map_err(OutcomesError::storage)?;

        tracing::info!(curriculum_id = id, code = %curriculum.code, "Curriculum added");
        Ok(id)
    }

    pub async fn list_bloom_levels(&self) -> Result<Vec<BloomLevel>, OutcomesError> {
        self.catalog_repo
            .list_bloom_levels()
            .await
            .map_err(OutcomesError::storage)
    }

    pub async fn add_bloom_level(&self, name: &str) -> Result<i32, OutcomesError> {
        let id = self
            .catalog_repo
            .insert_bloom_level(name)
            .await
            .map_err(OutcomesError::storage)?;

        tracing::info!(bloom_level_id = id, name, "Bloom level added");
        Ok(id)
    }

    pub async fn list_verbs(&self) -> Result<Vec<Verb>, OutcomesError> {
        self.catalog_repo
            .list_verbs(None)
            .await
            .map_err(OutcomesError::storage)
    }

    pub async fn list_verbs_for_level(
        &self,
        bloom_level_id: i32,
    ) -> Result<Vec<Verb>, OutcomesError> {
        self.catalog_repo
            .list_verbs(Some(bloom_level_id))
            .await
            .map_err(OutcomesError::storage)
    }

    pub async fn add_verb(&self, bloom_level_id: i32, name: &str) -> Result<i32, OutcomesError> {
        let id = self
            .catalog_repo
            .insert_verb(bloom_level_id, name)
            .await
            .map_err(OutcomesError::storage)?;

        tracing::info!(verb_id = id, bloom_level_id, name, "Verb added");
        Ok(id)
    }

    // ===== Accounts =====

    /// List users. Callers must not expose `password_hash`.
    pub async fn list_users(&self) -> Result<Vec<User>, OutcomesError> {
        self.account_repo
            .list_users()
            .await
            .map_err(OutcomesError::storage)
    }

    pub async fn list_professors(&self) -> Result<Vec<Professor>, OutcomesError> {
        self.account_repo
            .list_professors()
            .await
            .map_err(OutcomesError::storage)
    }

    /// Register a user account with a linked professor record
    pub async fn signup(&self, account: NewAccount) -> Result<RegisteredAccount, OutcomesError> {
        let existing = self
            .account_repo
            .find_by_username_or_email(&account.username, &account.email)
            .await
            .map_err(OutcomesError::storage)?;
        if existing.is_some() {
            return Err(OutcomesError::validation("Username or email exists"));
        }

        let password_hash = hash_password(&account.password);
        let user_id = self
            .account_repo
            .insert_user(
                &account.username,
                &account.professor_name,
                &account.email,
                &password_hash,
                PROFESSOR_ROLE,
            )
            .await
            .map_err(OutcomesError::storage)?;

        let professor_id = self
            .account_repo
            .insert_professor(&account.professor_name, user_id, &account.username)
            .await
            .map_err(OutcomesError::storage)?;

        tracing::info!(user_id, professor_id, username = %account.username, "User and professor registered");
        Ok(RegisteredAccount {
            user_id,
            professor_id,
        })
    }

    /// Authenticate by email and password
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthenticatedUser, OutcomesError> {
        let user = self
            .account_repo
            .find_by_email(email)
            .await
            .map_err(OutcomesError::storage)?
            .ok_or(OutcomesError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash) {
            tracing::debug!(user_id = user.id, "Login rejected");
            return Err(OutcomesError::InvalidCredentials);
        }

        let professor_id = self
            .account_repo
            .find_professor_by_user(user.id)
            .await
            .map_err(OutcomesError::storage)?
            .map(|p| p.id);

        Ok(AuthenticatedUser {
            user_id: user.id,
            professor_id,
            name: user.name,
            role: user.role,
        })
    }

    // ===== Submissions =====

    /// Aggregated submission documents, optionally for one professor
    pub async fn list_submissions(
        &self,
        professor_id: Option<i32>,
    ) -> Result<Vec<SubmissionDocument>, OutcomesError> {
        let rows = self
            .submission_repo
            .list_rows(professor_id)
            .await
            .map_err(OutcomesError::storage)?;

        tracing::debug!(rows = rows.len(), ?professor_id, "Aggregating submission rows");
        Ok(aggregate_submissions(rows))
    }

    /// Insert a submission, then each of its outcomes.
    ///
    /// Outcome writes are not atomic with the submission: a failed outcome is
    /// logged and skipped, and the submission stays committed.
    pub async fn create_submission(&self, submission: NewSubmission) -> Result<i32, OutcomesError> {
        let submission_id = self
            .submission_repo
            .insert(
                submission.professor_id,
                submission.curriculum_id,
                submission.level,
                &submission.year,
            )
            .await
            .map_err(OutcomesError::storage)?;

        for outcome in &submission.outcomes {
            self.insert_outcome(submission_id, outcome).await;
        }

        tracing::info!(
            submission_id,
            professor_id = submission.professor_id,
            outcomes = submission.outcomes.len(),
            "Submission created"
        );
        Ok(submission_id)
    }

    /// Update submission metadata and upsert the given outcomes.
    ///
    /// Entries with an id are updated in place (only if they belong to this
    /// submission); entries without one are inserted. Existing outcomes that
    /// are not mentioned are left as they are.
    pub async fn update_submission(
        &self,
        submission_id: i32,
        submission: NewSubmission,
    ) -> Result<(), OutcomesError> {
        self.require_submission(submission_id).await?;

        self.submission_repo
            .update(
                submission_id,
                submission.professor_id,
                submission.curriculum_id,
                submission.level,
                &submission.year,
            )
            .await
            .map_err(OutcomesError::storage)?;

        for outcome in &submission.outcomes {
            match outcome.id {
                Some(outcome_id) => self.update_outcome(submission_id, outcome_id, outcome).await,
                None => self.insert_outcome(submission_id, outcome).await,
            }
        }

        tracing::info!(submission_id, outcomes = submission.outcomes.len(), "Submission updated");
        Ok(())
    }

    /// Delete a submission's outcomes, then the submission itself
    pub async fn delete_submission(&self, submission_id: i32) -> Result<(), OutcomesError> {
        self.require_submission(submission_id).await?;

        let removed = self
            .submission_repo
            .delete_outcomes(submission_id)
            .await
            .map_err(OutcomesError::storage)?;
        self.submission_repo
            .delete(submission_id)
            .await
            .map_err(OutcomesError::storage)?;

        tracing::info!(submission_id, outcomes = removed, "Submission and outcomes deleted");
        Ok(())
    }

    // ===== Helper Methods =====

    async fn require_submission(&self, submission_id: i32) -> Result<(), OutcomesError> {
        self.submission_repo
            .find(submission_id)
            .await
            .map_err(OutcomesError::storage)?
            .ok_or_else(|| OutcomesError::not_found("submission", submission_id))?;
        Ok(())
    }

    async fn insert_outcome(&self, submission_id: i32, outcome: &OutcomeInput) {
        let record = match outcome_record(outcome) {
            Ok(record) => record,
            Err(e) => {
                tracing::error!(submission_id, error = %e, "Outcome insert error");
                return;
            }
        };

        if let Err(e) = self.submission_repo.insert_outcome(submission_id, &record).await {
            tracing::error!(submission_id, error = %e, "Outcome insert error");
        }
    }

    async fn update_outcome(&self, submission_id: i32, outcome_id: i32, outcome: &OutcomeInput) {
        let record = match outcome_record(outcome) {
            Ok(record) => record,
            Err(e) => {
                tracing::error!(submission_id, outcome_id, error = %e, "Outcome update error");
                return;
            }
        };

        match self
            .submission_repo
            .update_outcome(submission_id, outcome_id, &record)
            .await
        {
            Ok(0) => tracing::warn!(
                submission_id,
                outcome_id,
                "Outcome not updated: it does not belong to this submission"
            ),
            Ok(_) => {}
            Err(e) => tracing::error!(submission_id, outcome_id, error = %e, "Outcome update error"),
        }
    }
}
