//! Database migrations for outcomes service

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_reference_tables::Migration),
            Box::new(m20250301_000002_create_accounts::Migration),
            Box::new(m20250301_000003_create_submissions::Migration),
        ]
    }
}

mod m20250301_000001_create_reference_tables {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000001_create_reference_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Faculties::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Faculties::FacultyId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Faculties::FacultyName)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Tracks::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Tracks::TrackId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Tracks::FacultyId).integer().not_null())
                        .col(ColumnDef::new(Tracks::TrackName).string().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_tracks_faculty")
                                .from(Tracks::Table, Tracks::FacultyId)
                                .to(Faculties::Table, Faculties::FacultyId),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Curriculums::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Curriculums::CurriculumId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Curriculums::TrackId).integer().not_null())
                        .col(ColumnDef::new(Curriculums::Name).string().not_null())
                        .col(ColumnDef::new(Curriculums::CurriculumCode).string().not_null())
                        .col(ColumnDef::new(Curriculums::CurrPeriod).string().not_null())
                        .col(ColumnDef::new(Curriculums::TotalHours).integer().not_null())
                        .col(
                            ColumnDef::new(Curriculums::LectureHours)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Curriculums::LabHours)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Curriculums::Prerequisites)
                                .string()
                                .not_null()
                                .default("none"),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_curriculums_track")
                                .from(Curriculums::Table, Curriculums::TrackId)
                                .to(Tracks::Table, Tracks::TrackId),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(BloomLevels::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(BloomLevels::BloomLevelId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(BloomLevels::BloomLevelName)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Verbs::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Verbs::VerbId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Verbs::VerbName).string().not_null())
                        .col(ColumnDef::new(Verbs::BloomLevelId).integer().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_verbs_bloom_level")
                                .from(Verbs::Table, Verbs::BloomLevelId)
                                .to(BloomLevels::Table, BloomLevels::BloomLevelId),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_tracks_faculty_id")
                        .table(Tracks::Table)
                        .col(Tracks::FacultyId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_curriculums_track_id")
                        .table(Curriculums::Table)
                        .col(Curriculums::TrackId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Verbs::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(BloomLevels::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Curriculums::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Tracks::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Faculties::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Faculties {
        Table,
        FacultyId,
        FacultyName,
    }

    #[derive(DeriveIden)]
    enum Tracks {
        Table,
        TrackId,
        FacultyId,
        TrackName,
    }

    #[derive(DeriveIden)]
    enum Curriculums {
        Table,
        CurriculumId,
        TrackId,
        Name,
        CurriculumCode,
        CurrPeriod,
        TotalHours,
        LectureHours,
        LabHours,
        Prerequisites,
    }

    #[derive(DeriveIden)]
    enum BloomLevels {
        Table,
        BloomLevelId,
        BloomLevelName,
    }

    #[derive(DeriveIden)]
    enum Verbs {
        Table,
        VerbId,
        VerbName,
        BloomLevelId,
    }
}

mod m20250301_000002_create_accounts {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000002_create_accounts"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Users::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Users::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Users::Username).string().not_null().unique_key())
                        .col(ColumnDef::new(Users::Name).string().not_null())
                        .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                        .col(ColumnDef::new(Users::Password).string().not_null())
                        .col(
                            ColumnDef::new(Users::Role)
                                .string()
                                .not_null()
                                .default("professor"),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Professors::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Professors::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Professors::Name).string().not_null())
                        .col(ColumnDef::new(Professors::UsersId).integer())
                        .col(ColumnDef::new(Professors::UsersName).string())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_professors_user")
                                .from(Professors::Table, Professors::UsersId)
                                .to(Users::Table, Users::Id),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Professors::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Users::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Users {
        Table,
        Id,
        Username,
        Name,
        Email,
        Password,
        Role,
    }

    #[derive(DeriveIden)]
    enum Professors {
        Table,
        Id,
        Name,
        UsersId,
        UsersName,
    }
}

mod m20250301_000003_create_submissions {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000003_create_submissions"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Submissions::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Submissions::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Submissions::ProfessorId).integer().not_null())
                        .col(ColumnDef::new(Submissions::CurriculumId).integer().not_null())
                        .col(ColumnDef::new(Submissions::Level).integer().not_null())
                        .col(ColumnDef::new(Submissions::Year).string().not_null())
                        .col(
                            ColumnDef::new(Submissions::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_submissions_professor")
                                .from(Submissions::Table, Submissions::ProfessorId)
                                .to(Professors::Table, Professors::Id),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_submissions_curriculum")
                                .from(Submissions::Table, Submissions::CurriculumId)
                                .to(Curriculums::Table, Curriculums::CurriculumId),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Outcomes::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Outcomes::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Outcomes::SubmissionId).integer().not_null())
                        .col(ColumnDef::new(Outcomes::BloomLevelId).integer().not_null())
                        .col(ColumnDef::new(Outcomes::VerbId).integer().not_null())
                        .col(ColumnDef::new(Outcomes::Object).text().not_null())
                        .col(ColumnDef::new(Outcomes::Qualifier).text())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_outcomes_submission")
                                .from(Outcomes::Table, Outcomes::SubmissionId)
                                .to(Submissions::Table, Submissions::Id),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_outcomes_bloom_level")
                                .from(Outcomes::Table, Outcomes::BloomLevelId)
                                .to(BloomLevels::Table, BloomLevels::BloomLevelId),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_outcomes_verb")
                                .from(Outcomes::Table, Outcomes::VerbId)
                                .to(Verbs::Table, Verbs::VerbId),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_submissions_professor_id")
                        .table(Submissions::Table)
                        .col(Submissions::ProfessorId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_outcomes_submission_id")
                        .table(Outcomes::Table)
                        .col(Outcomes::SubmissionId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Outcomes::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Submissions::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Submissions {
        Table,
        Id,
        ProfessorId,
        CurriculumId,
        Level,
        Year,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    enum Outcomes {
        Table,
        Id,
        SubmissionId,
        BloomLevelId,
        VerbId,
        Object,
        Qualifier,
    }

    #[derive(DeriveIden)]
    enum Professors {
        Table,
        Id,
    }

    #[derive(DeriveIden)]
    enum Curriculums {
        Table,
        CurriculumId,
    }

    #[derive(DeriveIden)]
    enum BloomLevels {
        Table,
        BloomLevelId,
    }

    #[derive(DeriveIden)]
    enum Verbs {
        Table,
        VerbId,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn migration_names_are_unique_and_ordered() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();

        assert_eq!(
            names,
            vec![
                "m20250301_000001_create_reference_tables",
                "m20250301_000002_create_accounts",
                "m20250301_000003_create_submissions",
            ]
        );
        assert_eq!(names.iter().collect::<HashSet<_>>().len(), names.len());
    }
}
