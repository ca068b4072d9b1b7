//! SeaORM entities for database tables

/// Faculties table entity
pub mod faculty {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "faculties")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub faculty_id: i32,
        #[sea_orm(unique)]
        pub faculty_name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::track::Entity")]
        Tracks,
    }

    impl Related<super::track::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Tracks.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Tracks table entity
pub mod track {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "tracks")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub track_id: i32,
        pub faculty_id: i32,
        pub track_name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::faculty::Entity",
            from = "Column::FacultyId",
            to = "super::faculty::Column::FacultyId"
        )]
        Faculty,
        #[sea_orm(has_many = "super::curriculum::Entity")]
        Curriculums,
    }

    impl Related<super::faculty::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Faculty.def()
        }
    }

    impl Related<super::curriculum::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Curriculums.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Curriculums table entity
pub mod curriculum {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "curriculums")]
    pub struct Model {
        #[sea_orm(primary_key)]
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

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::track::Entity",
            from = "Column::TrackId",
            to = "super::track::Column::TrackId"
        )]
        Track,
        #[sea_orm(has_many = "super::submission::Entity")]
        Submissions,
    }

    impl Related<super::track::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Track.def()
        }
    }

    impl Related<super::submission::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Submissions.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Users table entity
pub mod user {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "users")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub username: String,
        pub name: String,
        #[sea_orm(unique)]
        pub email: String,
        /// Salted password hash, never the plain password
        pub password: String,
        pub role: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::professor::Entity")]
        Professors,
    }

    impl Related<super::professor::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Professors.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Professors table entity
pub mod professor {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "professors")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub name: String,
        pub users_id: Option<i32>,
        pub users_name: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::user::Entity",
            from = "Column::UsersId",
            to = "super::user::Column::Id"
        )]
        User,
        #[sea_orm(has_many = "super::submission::Entity")]
        Submissions,
    }

    impl Related<super::user::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::User.def()
        }
    }

    impl Related<super::submission::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Submissions.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Bloom levels table entity
pub mod bloom_level {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "bloom_levels")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub bloom_level_id: i32,
        #[sea_orm(unique)]
        pub bloom_level_name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::verb::Entity")]
        Verbs,
        #[sea_orm(has_many = "super::outcome::Entity")]
        Outcomes,
    }

    impl Related<super::verb::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Verbs.def()
        }
    }

    impl Related<super::outcome::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Outcomes.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Verbs table entity
pub mod verb {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "verbs")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub verb_id: i32,
        pub verb_name: String,
        /// Informational only; an outcome's own bloom level is authoritative
        pub bloom_level_id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::bloom_level::Entity",
            from = "Column::BloomLevelId",
            to = "super::bloom_level::Column::BloomLevelId"
        )]
        BloomLevel,
        #[sea_orm(has_many = "super::outcome::Entity")]
        Outcomes,
    }

    impl Related<super::bloom_level::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::BloomLevel.def()
        }
    }

    impl Related<super::outcome::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Outcomes.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Submissions table entity
pub mod submission {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "submissions")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub professor_id: i32,
        pub curriculum_id: i32,
        pub level: i32,
        pub year: String,
        pub created_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::professor::Entity",
            from = "Column::ProfessorId",
            to = "super::professor::Column::Id"
        )]
        Professor,
        #[sea_orm(
            belongs_to = "super::curriculum::Entity",
            from = "Column::CurriculumId",
            to = "super::curriculum::Column::CurriculumId"
        )]
        Curriculum,
        #[sea_orm(has_many = "super::outcome::Entity")]
        Outcomes,
    }

    impl Related<super::professor::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Professor.def()
        }
    }

    impl Related<super::curriculum::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Curriculum.def()
        }
    }

    impl Related<super::outcome::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Outcomes.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Outcomes table entity
pub mod outcome {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "outcomes")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub submission_id: i32,
        pub bloom_level_id: i32,
        pub verb_id: i32,
        pub object: String,
        pub qualifier: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::submission::Entity",
            from = "Column::SubmissionId",
            to = "super::submission::Column::Id"
        )]
        Submission,
        #[sea_orm(
            belongs_to = "super::bloom_level::Entity",
            from = "Column::BloomLevelId",
            to = "super::bloom_level::Column::BloomLevelId"
        )]
        BloomLevel,
        #[sea_orm(
            belongs_to = "super::verb::Entity",
            from = "Column::VerbId",
            to = "super::verb::Column::VerbId"
        )]
        Verb,
    }

    impl Related<super::submission::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Submission.def()
        }
    }

    impl Related<super::bloom_level::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::BloomLevel.def()
        }
    }

    impl Related<super::verb::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Verb.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Flat row of the submission listing join
pub mod submission_row {
    use sea_orm::entity::prelude::*;
    use sea_orm::FromQueryResult;

    #[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
    pub struct SubmissionRowModel {
        pub submission_id: i32,
        pub year: Option<String>,
        pub level: Option<i32>,
        pub created_at: Option<DateTimeUtc>,
        pub professor_name: Option<String>,
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
}
