//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity::{
    bloom_level, curriculum, faculty, professor, submission, submission_row::SubmissionRowModel,
    track, user, verb,
};
use crate::contract::{
    BloomLevel, Curriculum, Faculty, NewCurriculum, OutcomeRecord, Professor, Submission,
    SubmissionRow, Track, User, Verb,
};

// ===== Reference Data Conversions =====

impl From<faculty::Model> for Faculty {
    fn from(entity: faculty::Model) -> Self {
        Self {
            id: entity.faculty_id,
            name: entity.faculty_name,
        }
    }
}

impl From<track::Model> for Track {
    fn from(entity: track::Model) -> Self {
        Self {
            id: entity.track_id,
            faculty_id: entity.faculty_id,
            name: entity.track_name,
        }
    }
}

impl From<curriculum::Model> for Curriculum {
    fn from(entity: curriculum::Model) -> Self {
        Self {
            id: entity.curriculum_id,
            track_id: entity.track_id,
            name: entity.name,
            code: entity.curriculum_code,
            period: entity.curr_period,
            total_hours: entity.total_hours,
            lecture_hours: entity.lecture_hours,
            lab_hours: entity.lab_hours,
            prerequisites: entity.prerequisites,
        }
    }
}

impl From<&NewCurriculum> for curriculum::ActiveModel {
    fn from(model: &NewCurriculum) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            curriculum_id: NotSet,
            track_id: Set(model.track_id),
            name: Set(model.name.clone()),
            curriculum_code: Set(model.code.clone()),
            curr_period: Set(model.period.clone()),
            total_hours: Set(model.total_hours),
            lecture_hours: Set(model.lecture_hours),
            lab_hours: Set(model.lab_hours),
            prerequisites: Set(model.prerequisites.clone()),
        }
    }
}

impl From<bloom_level::Model> for BloomLevel {
    fn from(entity: bloom_level::Model) -> Self {
        Self {
            id: entity.bloom_level_id,
            name: entity.bloom_level_name,
        }
    }
}

impl From<verb::Model> for Verb {
    fn from(entity: verb::Model) -> Self {
        Self {
            id: entity.verb_id,
            name: entity.verb_name,
            bloom_level_id: entity.bloom_level_id,
        }
    }
}

// ===== Account Conversions =====

impl From<user::Model> for User {
    fn from(entity: user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password,
            role: entity.role,
        }
    }
}

impl From<professor::Model> for Professor {
    fn from(entity: professor::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            user_id: entity.users_id,
            username: entity.users_name,
        }
    }
}

// ===== Submission Conversions =====

impl From<submission::Model> for Submission {
    fn from(entity: submission::Model) -> Self {
        Self {
            id: entity.id,
            professor_id: entity.professor_id,
            curriculum_id: entity.curriculum_id,
            level: entity.level,
            year: entity.year,
            created_at: entity.created_at,
        }
    }
}

/// Active model for a new outcome row
pub fn outcome_active_model(
    submission_id: i32,
    outcome: &OutcomeRecord,
) -> super::entity::outcome::ActiveModel {
    use sea_orm::ActiveValue::*;

    super::entity::outcome::ActiveModel {
        id: NotSet,
        submission_id: Set(submission_id),
        bloom_level_id: Set(outcome.bloom_level_id),
        verb_id: Set(outcome.verb_id),
        object: Set(outcome.object.clone()),
        qualifier: Set(outcome.qualifier.clone()),
    }
}

impl From<SubmissionRowModel> for SubmissionRow {
    fn from(row: SubmissionRowModel) -> Self {
        Self {
            submission_id: row.submission_id,
            professor_name: row.professor_name,
            year: row.year,
            level: row.level,
            created_at: row.created_at,
            curriculum_id: row.curriculum_id,
            curriculum_name: row.curriculum_name,
            curriculum_code: row.curriculum_code,
            curr_period: row.curr_period,
            total_hours: row.total_hours,
            lecture_hours: row.lecture_hours,
            lab_hours: row.lab_hours,
            prerequisites: row.prerequisites,
            faculty_name: row.faculty_name,
            track_name: row.track_name,
            outcome_id: row.outcome_id,
            bloom_level_id: row.bloom_level_id,
            bloom_level_name: row.bloom_level_name,
            verb_id: row.verb_id,
            verb_name: row.verb_name,
            object: row.object,
            qualifier: row.qualifier,
        }
    }
}
