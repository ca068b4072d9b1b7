//! Reference data seeding
//!
//! Find-or-insert for every row, so running it again is a no-op.

use anyhow::Result;
use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::entity::{bloom_level, curriculum, faculty, track};

/// Faculties and the tracks created under each
const FACULTY_TRACKS: &[(&str, &[&str])] = &[
    ("Pharmacy", &["Clinical Pharmacy", "Pharmaceutics"]),
    ("Dentistry", &["Orthodontics", "Oral Surgery"]),
    ("Informatics and Communication Engineering", &["Software", "Networks"]),
    ("Civil Engineering", &["Structural", "Construction"]),
    ("Architectural Engineering", &["Design", "History"]),
    ("Law", &["Private Law", "Public Law"]),
    ("Business Administration", &["Accounting", "Marketing"]),
    ("Arts", &["Fine Arts", "Performing Arts"]),
];

/// Revised Bloom's taxonomy, lowest tier first
pub const BLOOM_LEVELS: &[&str] = &[
    "Remember",
    "Understand",
    "Apply",
    "Analyze",
    "Evaluate",
    "Create",
];

const CURRICULUM_VARIANTS: &[&str] = &["A", "B"];

/// Counts of rows inserted by one seeding run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub faculties: usize,
    pub tracks: usize,
    pub curriculums: usize,
    pub bloom_levels: usize,
}

/// Seed faculties, tracks, example curriculums and bloom levels
pub async fn seed_reference_data(db: &DatabaseConnection) -> Result<SeedReport> {
    let mut report = SeedReport::default();

    for (faculty_name, track_names) in FACULTY_TRACKS {
        let faculty_id = match faculty::Entity::find()
            .filter(faculty::Column::FacultyName.eq(*faculty_name))
            .one(db)
            .await?
        {
            Some(existing) => existing.faculty_id,
            None => {
                report.faculties += 1;
                let active = faculty::ActiveModel {
                    faculty_name: Set(faculty_name.to_string()),
                    ..Default::default()
                };
                faculty::Entity::insert(active).exec(db).await?.last_insert_id
            }
        };

        for track_name in *track_names {
            let track_id = match track::Entity::find()
                .filter(track::Column::FacultyId.eq(faculty_id))
                .filter(track::Column::TrackName.eq(*track_name))
                .one(db)
                .await?
            {
                Some(existing) => existing.track_id,
                None => {
                    report.tracks += 1;
                    let active = track::ActiveModel {
                        faculty_id: Set(faculty_id),
                        track_name: Set(track_name.to_string()),
                        ..Default::default()
                    };
                    track::Entity::insert(active).exec(db).await?.last_insert_id
                }
            };

            report.curriculums += seed_curriculums(db, track_id, track_name).await?;
        }
    }

    for name in BLOOM_LEVELS {
        let existing = bloom_level::Entity::find()
            .filter(bloom_level::Column::BloomLevelName.eq(*name))
            .one(db)
            .await?;
        if existing.is_none() {
            let active = bloom_level::ActiveModel {
                bloom_level_name: Set(name.to_string()),
                ..Default::default()
            };
            bloom_level::Entity::insert(active).exec(db).await?;
            report.bloom_levels += 1;
        }
    }

    tracing::info!(
        faculties = report.faculties,
        tracks = report.tracks,
        curriculums = report.curriculums,
        bloom_levels = report.bloom_levels,
        "Reference data seeded"
    );
    Ok(report)
}

async fn seed_curriculums(db: &DatabaseConnection, track_id: i32, track_name: &str) -> Result<usize> {
    let mut inserted = 0;

    for variant in CURRICULUM_VARIANTS {
        let name = format!("{} - Curriculum {}", track_name, variant);
        let existing = curriculum::Entity::find()
            .filter(curriculum::Column::TrackId.eq(track_id))
            .filter(curriculum::Column::Name.eq(name.as_str()))
            .one(db)
            .await?;
        if existing.is_some() {
            continue;
        }

        let active = curriculum::ActiveModel {
            track_id: Set(track_id),
            name: Set(name),
            curriculum_code: Set(format!("T{}-{}", track_id, variant)),
            curr_period: Set("Semester 1".to_string()),
            total_hours: Set(3),
            lecture_hours: Set(0),
            lab_hours: Set(0),
            prerequisites: Set("none".to_string()),
            ..Default::default()
        };
        curriculum::Entity::insert(active).exec(db).await?;
        inserted += 1;
    }

    Ok(inserted)
}
