//! SeaORM repository implementations

use crate::contract::{
    BloomLevel, Curriculum, Faculty, NewCurriculum, OutcomeRecord, Professor, Submission,
    SubmissionRow, Track, User, Verb,
};
use crate::domain::repository::{AccountRepository, CatalogRepository, SubmissionRepository};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    prelude::Expr, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use std::sync::Arc;

use super::entity::{
    bloom_level, curriculum, faculty, outcome, professor, submission,
    submission_row::SubmissionRowModel, track, user, verb,
};
use super::mapper::outcome_active_model;

// ===== Catalog Repository =====

pub struct SeaOrmCatalogRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmCatalogRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogRepository for SeaOrmCatalogRepository {
    async fn list_faculties(&self) -> Result<Vec<Faculty>> {
        let results = faculty::Entity::find()
            .order_by_asc(faculty::Column::FacultyId)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn list_tracks(&self, faculty_id: i32) -> Result<Vec<Track>> {
        let results = track::Entity::find()
            .filter(track::Column::FacultyId.eq(faculty_id))
            .order_by_asc(track::Column::TrackId)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn list_curriculums(&self, track_id: Option<i32>) -> Result<Vec<Curriculum>> {
        let mut query = curriculum::Entity::find();

        if let Some(tid) = track_id {
            query = query.filter(curriculum::Column::TrackId.eq(tid));
        }

        let results = query
            .order_by_asc(curriculum::Column::CurriculumId)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn insert_curriculum(&self, new_curriculum: &NewCurriculum) -> Result<i32> {
        let active: curriculum::ActiveModel = new_curriculum.into();
        let result = curriculum::Entity::insert(active).exec(&*self.db).await?;

        Ok(result.last_insert_id)
    }

    async fn list_bloom_levels(&self) -> Result<Vec<BloomLevel>> {
        let results = bloom_level::Entity::find()
            .order_by_asc(bloom_level::Column::BloomLevelId)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn insert_bloom_level(&self, name: &str) -> Result<i32> {
        let active = bloom_level::ActiveModel {
            bloom_level_name: Set(name.to_string()),
            ..Default::default()
        };
        let result = bloom_level::Entity::insert(active).exec(&*self.db).await?;

        Ok(result.last_insert_id)
    }

    async fn list_verbs(&self, bloom_level_id: Option<i32>) -> Result<Vec<Verb>> {
        let mut query = verb::Entity::find();

        if let Some(level) = bloom_level_id {
            query = query.filter(verb::Column::BloomLevelId.eq(level));
        }

        let results = query
            .order_by_asc(verb::Column::VerbId)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn insert_verb(&self, bloom_level_id: i32, name: &str) -> Result<i32> {
        let active = verb::ActiveModel {
            verb_name: Set(name.to_string()),
            bloom_level_id: Set(bloom_level_id),
            ..Default::default()
        };
        let result = verb::Entity::insert(active).exec(&*self.db).await?;

        Ok(result.last_insert_id)
    }
}

// ===== Account Repository =====

pub struct SeaOrmAccountRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmAccountRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountRepository for SeaOrmAccountRepository {
    async fn list_users(&self) -> Result<Vec<User>> {
        let results = user::Entity::find()
            .order_by_asc(user::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn list_professors(&self) -> Result<Vec<Professor>> {
        let results = professor::Entity::find()
            .order_by_asc(professor::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn find_by_username_or_email(&self, username: &str, email: &str) -> Result<Option<User>> {
        let result = user::Entity::find()
            .filter(
                Condition::any()
                    .add(user::Column::Username.eq(username))
                    .add(user::Column::Email.eq(email)),
            )
            .one(&*self.db)
            .await?;

        Ok(result.map(|e| e.into()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let result = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&*self.db)
            .await?;

        Ok(result.map(|e| e.into()))
    }

    async fn insert_user(
        &self,
        username: &str,
        name: &str,
        email: &str,
        password_hash: &str,
        role: &str,
    ) -> Result<i32> {
        let active = user::ActiveModel {
            username: Set(username.to_string()),
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            password: Set(password_hash.to_string()),
            role: Set(role.to_string()),
            ..Default::default()
        };
        let result = user::Entity::insert(active).exec(&*self.db).await?;

        Ok(result.last_insert_id)
    }

    async fn insert_professor(&self, name: &str, user_id: i32, username: &str) -> Result<i32> {
        let active = professor::ActiveModel {
            name: Set(name.to_string()),
            users_id: Set(Some(user_id)),
            users_name: Set(Some(username.to_string())),
            ..Default::default()
        };
        let result = professor::Entity::insert(active).exec(&*self.db).await?;

        Ok(result.last_insert_id)
    }

    async fn find_professor_by_user(&self, user_id: i32) -> Result<Option<Professor>> {
        let result = professor::Entity::find()
            .filter(professor::Column::UsersId.eq(user_id))
            .order_by_asc(professor::Column::Id)
            .one(&*self.db)
            .await?;

        Ok(result.map(|e| e.into()))
    }
}

// ===== Submission Repository =====

pub struct SeaOrmSubmissionRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmSubmissionRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SubmissionRepository for SeaOrmSubmissionRepository {
    async fn list_rows(&self, professor_id: Option<i32>) -> Result<Vec<SubmissionRow>> {
        let mut query = submission::Entity::find()
            .select_only()
            .column_as(submission::Column::Id, "submission_id")
            .column(submission::Column::Year)
            .column(submission::Column::Level)
            .column(submission::Column::CreatedAt)
            .column_as(professor::Column::Name, "professor_name")
            .column(submission::Column::CurriculumId)
            .column_as(curriculum::Column::Name, "curriculum_name")
            .column(curriculum::Column::CurriculumCode)
            .column(curriculum::Column::CurrPeriod)
            .column(curriculum::Column::TotalHours)
            .column(curriculum::Column::LectureHours)
            .column(curriculum::Column::LabHours)
            .column(curriculum::Column::Prerequisites)
            .column(faculty::Column::FacultyName)
            .column(track::Column::TrackName)
            .column_as(outcome::Column::Id, "outcome_id")
            .column(outcome::Column::BloomLevelId)
            .column(bloom_level::Column::BloomLevelName)
            .column(outcome::Column::VerbId)
            .column(verb::Column::VerbName)
            .column(outcome::Column::Object)
            .column(outcome::Column::Qualifier)
            .join(JoinType::LeftJoin, submission::Relation::Professor.def())
            .join(JoinType::LeftJoin, submission::Relation::Curriculum.def())
            .join(JoinType::LeftJoin, curriculum::Relation::Track.def())
            .join(JoinType::LeftJoin, track::Relation::Faculty.def())
            .join(JoinType::LeftJoin, submission::Relation::Outcomes.def())
            .join(JoinType::LeftJoin, outcome::Relation::BloomLevel.def())
            .join(JoinType::LeftJoin, outcome::Relation::Verb.def());

        if let Some(pid) = professor_id {
            query = query.filter(submission::Column::ProfessorId.eq(pid));
        }

        let results = query
            .order_by_asc(submission::Column::Id)
            .order_by_asc(outcome::Column::Id)
            .into_model::<SubmissionRowModel>()
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|r| r.into()).collect())
    }

    async fn find(&self, id: i32) -> Result<Option<Submission>> {
        let result = submission::Entity::find_by_id(id).one(&*self.db).await?;

        Ok(result.map(|e| e.into()))
    }

    async fn insert(
        &self,
        professor_id: i32,
        curriculum_id: i32,
        level: i32,
        year: &str,
    ) -> Result<i32> {
        let active = submission::ActiveModel {
            professor_id: Set(professor_id),
            curriculum_id: Set(curriculum_id),
            level: Set(level),
            year: Set(year.to_string()),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };
        let result = submission::Entity::insert(active).exec(&*self.db).await?;

        Ok(result.last_insert_id)
    }

    async fn update(
        &self,
        id: i32,
        professor_id: i32,
        curriculum_id: i32,
        level: i32,
        year: &str,
    ) -> Result<()> {
        submission::Entity::update_many()
            .col_expr(submission::Column::ProfessorId, Expr::value(professor_id))
            .col_expr(submission::Column::CurriculumId, Expr::value(curriculum_id))
            .col_expr(submission::Column::Level, Expr::value(level))
            .col_expr(submission::Column::Year, Expr::value(year))
            .filter(submission::Column::Id.eq(id))
            .exec(&*self.db)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        submission::Entity::delete_by_id(id).exec(&*self.db).await?;

        Ok(())
    }

    async fn insert_outcome(&self, submission_id: i32, record: &OutcomeRecord) -> Result<i32> {
        let active = outcome_active_model(submission_id, record);
        let result = outcome::Entity::insert(active).exec(&*self.db).await?;

        Ok(result.last_insert_id)
    }

    async fn update_outcome(
        &self,
        submission_id: i32,
        outcome_id: i32,
        record: &OutcomeRecord,
    ) -> Result<u64> {
        let result = outcome::Entity::update_many()
            .col_expr(outcome::Column::BloomLevelId, Expr::value(record.bloom_level_id))
            .col_expr(outcome::Column::VerbId, Expr::value(record.verb_id))
            .col_expr(outcome::Column::Object, Expr::value(record.object.clone()))
            .col_expr(outcome::Column::Qualifier, Expr::value(record.qualifier.clone()))
            .filter(outcome::Column::Id.eq(outcome_id))
            .filter(outcome::Column::SubmissionId.eq(submission_id))
            .exec(&*self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn delete_outcomes(&self, submission_id: i32) -> Result<u64> {
        let result = outcome::Entity::delete_many()
            .filter(outcome::Column::SubmissionId.eq(submission_id))
            .exec(&*self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
