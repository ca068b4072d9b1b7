//! Common test utilities: a migrated SQLite database in a temp directory
#![allow(dead_code)]

use outcomes_service::contract::{NewAccount, NewSubmission, OutcomeInput};
use outcomes_service::{Config, OutcomesServiceModule};
use tempfile::TempDir;

/// Module backed by a fresh database file. Keep it alive for the whole
/// test; dropping it removes the directory.
pub struct TestDatabase {
    pub module: OutcomesServiceModule,
    pub url: String,
    _dir: TempDir,
}

impl TestDatabase {
    pub async fn new(seed: bool) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("outcomes.db");
        let url = format!("sqlite://{}?mode=rwc", path.display());
        let config = Config {
            database_url: url.clone(),
            seed_reference_data: seed,
            ..Config::default()
        };

        let module = OutcomesServiceModule::init(config)
            .await
            .expect("Failed to init outcomes module");

        Self {
            module,
            url,
            _dir: dir,
        }
    }

    /// Seeded database
    pub async fn seeded() -> Self {
        Self::new(true).await
    }
}

pub fn account(username: &str, name: &str) -> NewAccount {
    NewAccount {
        username: username.to_string(),
        password: "s3cret".to_string(),
        professor_name: name.to_string(),
        email: format!("{}@example.edu", username),
    }
}

pub fn outcome(bloom_level_id: i32, verb_id: i32, object: &str) -> OutcomeInput {
    OutcomeInput {
        bloom_level_id: Some(bloom_level_id),
        verb_id: Some(verb_id),
        object: Some(object.to_string()),
        ..Default::default()
    }
}

pub fn submission(
    professor_id: i32,
    curriculum_id: i32,
    outcomes: Vec<OutcomeInput>,
) -> NewSubmission {
    NewSubmission {
        professor_id,
        curriculum_id,
        level: 2,
        year: "2025".to_string(),
        outcomes,
    }
}
