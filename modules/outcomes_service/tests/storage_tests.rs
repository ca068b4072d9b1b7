//! End-to-end tests against a migrated SQLite database

mod common;

use common::{account, outcome, submission, TestDatabase};
use outcomes_service::contract::*;
use outcomes_service::infra::storage::migrations::Migrator;
use outcomes_service::infra::storage::seed::{seed_reference_data, SeedReport, BLOOM_LEVELS};
use outcomes_service::{Config, OutcomesServiceModule};
use sea_orm_migration::MigratorTrait;
use std::collections::HashSet;

/// First seeded curriculum and the ids of two seeded bloom levels with a verb each
async fn reference_ids(db: &TestDatabase) -> (i32, (i32, i32), (i32, i32)) {
    let service = db.module.service();
    let curriculum_id = service.list_curriculums(None).await.unwrap()[0].id;
    let levels = service.list_bloom_levels().await.unwrap();
    let remember = levels[0].id;
    let apply = levels[2].id;
    let list = service.add_verb(remember, "list").await.unwrap();
    let demonstrate = service.add_verb(apply, "demonstrate").await.unwrap();
    (curriculum_id, (remember, list), (apply, demonstrate))
}

#[tokio::test]
async fn test_seed_populates_reference_data() {
    let db = TestDatabase::seeded().await;
    let service = db.module.service();

    let faculties = service.list_faculties().await.unwrap();
    assert_eq!(faculties.len(), 8);

    let tracks = service.list_tracks(faculties[0].id).await.unwrap();
    assert_eq!(tracks.len(), 2);

    let curriculums = service.list_curriculums(Some(tracks[0].id)).await.unwrap();
    assert_eq!(curriculums.len(), 2);
    assert_eq!(curriculums[0].lecture_hours, 0);
    assert_eq!(curriculums[0].prerequisites, "none");
    assert_eq!(service.list_curriculums(None).await.unwrap().len(), 32);

    let levels: Vec<String> = service
        .list_bloom_levels()
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.name)
        .collect();
    assert_eq!(levels, BLOOM_LEVELS);
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let db = TestDatabase::seeded().await;
    let conn = db.module.connection();

    let report = seed_reference_data(&conn).await.unwrap();
    assert_eq!(report, SeedReport::default());
    assert_eq!(db.module.service().list_faculties().await.unwrap().len(), 8);
}

#[tokio::test]
async fn test_restart_on_existing_database_keeps_data() {
    let db = TestDatabase::seeded().await;
    let service = db.module.service();
    let professor = service.signup(account("mnasser", "Dr. Nasser")).await.unwrap();

    // Second startup against the same file, as after a server restart
    let config = Config {
        database_url: db.url.clone(),
        seed_reference_data: true,
        ..Config::default()
    };
    let restarted = OutcomesServiceModule::init(config).await.unwrap();

    let conn = restarted.connection();
    let applied: Vec<String> = Migrator::get_applied_migrations(&*conn)
        .await
        .unwrap()
        .iter()
        .map(|m| m.name().to_string())
        .collect();
    assert_eq!(applied.len(), 3);
    assert_eq!(applied.iter().collect::<HashSet<_>>().len(), 3);
    assert!(Migrator::get_pending_migrations(&*conn).await.unwrap().is_empty());

    Migrator::up(&*conn, None).await.unwrap();

    let service = restarted.service();
    assert_eq!(service.list_faculties().await.unwrap().len(), 8);
    let professors = service.list_professors().await.unwrap();
    assert_eq!(professors.len(), 1);
    assert_eq!(professors[0].id, professor.professor_id);
}

#[tokio::test]
async fn test_unseeded_database_is_empty() {
    let db = TestDatabase::new(false).await;
    let service = db.module.service();

    assert!(service.list_faculties().await.unwrap().is_empty());
    assert!(service.list_submissions(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_curriculum_defaults_are_stored() {
    let db = TestDatabase::seeded().await;
    let service = db.module.service();
    let track_id = service.list_tracks(1).await.unwrap()[0].id;

    let id = service
        .add_curriculum(NewCurriculum {
            track_id,
            name: "Pharmacokinetics".into(),
            code: "PK201".into(),
            period: "Semester 2".into(),
            total_hours: 4,
            lecture_hours: 0,
            lab_hours: 0,
            prerequisites: "none".into(),
        })
        .await
        .unwrap();

    let stored = service
        .list_curriculums(Some(track_id))
        .await
        .unwrap()
        .into_iter()
        .find(|c| c.id == id)
        .unwrap();
    assert_eq!(stored.code, "PK201");
    assert_eq!(stored.total_hours, 4);
}

#[tokio::test]
async fn test_submission_round_trip() {
    let db = TestDatabase::seeded().await;
    let service = db.module.service();
    let (curriculum_id, (remember, list), (apply, demonstrate)) = reference_ids(&db).await;
    let registered = service.signup(account("rhaddad", "Dr. Haddad")).await.unwrap();

    let mut qualified = outcome(apply, demonstrate, "aseptic technique");
    qualified.qualifier = Some("in a simulated lab".into());
    let id = service
        .create_submission(submission(
            registered.professor_id,
            curriculum_id,
            vec![outcome(remember, list, "drug classes"), qualified],
        ))
        .await
        .unwrap();

    let documents = service.list_submissions(None).await.unwrap();
    assert_eq!(documents.len(), 1);

    let doc = &documents[0];
    assert_eq!(doc.id, id);
    assert_eq!(doc.professor.as_deref(), Some("Dr. Haddad"));
    assert_eq!(doc.year.as_deref(), Some("2025"));
    assert_eq!(doc.level, Some(2));
    assert_eq!(doc.curriculum_id, Some(curriculum_id));
    assert!(doc.created_at.is_some());
    assert_eq!(doc.curriculum.faculty.as_deref(), Some("Pharmacy"));
    assert_eq!(doc.curriculum.track.as_deref(), Some("Clinical Pharmacy"));
    assert_eq!(doc.curriculum.period.as_deref(), Some("Semester 1"));

    assert_eq!(doc.outcomes.len(), 2);
    assert_eq!(doc.outcomes[0].bloom_level.as_deref(), Some("Remember"));
    assert_eq!(doc.outcomes[0].verb.as_deref(), Some("list"));
    assert_eq!(doc.outcomes[0].qualifier, None);
    assert_eq!(doc.outcomes[1].bloom_level.as_deref(), Some("Apply"));
    assert_eq!(doc.outcomes[1].object.as_deref(), Some("aseptic technique"));
    assert_eq!(
        doc.outcomes[1].qualifier.as_deref(),
        Some("in a simulated lab")
    );
}

#[tokio::test]
async fn test_submission_without_outcomes_has_empty_list() {
    let db = TestDatabase::seeded().await;
    let service = db.module.service();
    let (curriculum_id, _, _) = reference_ids(&db).await;
    let registered = service.signup(account("rhaddad", "Dr. Haddad")).await.unwrap();

    service
        .create_submission(submission(registered.professor_id, curriculum_id, vec![]))
        .await
        .unwrap();

    let documents = service.list_submissions(None).await.unwrap();
    assert_eq!(documents.len(), 1);
    assert!(documents[0].outcomes.is_empty());
}

#[tokio::test]
async fn test_outcome_with_unknown_verb_is_skipped() {
    let db = TestDatabase::seeded().await;
    let service = db.module.service();
    let (curriculum_id, (remember, list), _) = reference_ids(&db).await;
    let registered = service.signup(account("rhaddad", "Dr. Haddad")).await.unwrap();

    let id = service
        .create_submission(submission(
            registered.professor_id,
            curriculum_id,
            vec![outcome(remember, 9999, "dangling"), outcome(remember, list, "kept")],
        ))
        .await
        .expect("Submission survives a failed outcome insert");

    let documents = service.list_submissions(None).await.unwrap();
    assert_eq!(documents[0].id, id);
    assert_eq!(documents[0].outcomes.len(), 1);
    assert_eq!(documents[0].outcomes[0].object.as_deref(), Some("kept"));
}

#[tokio::test]
async fn test_list_filters_by_professor() {
    let db = TestDatabase::seeded().await;
    let service = db.module.service();
    let (curriculum_id, (remember, list), _) = reference_ids(&db).await;
    let first = service.signup(account("rhaddad", "Dr. Haddad")).await.unwrap();
    let second = service.signup(account("lsaleh", "Dr. Saleh")).await.unwrap();

    for professor_id in [first.professor_id, second.professor_id, first.professor_id] {
        service
            .create_submission(submission(
                professor_id,
                curriculum_id,
                vec![outcome(remember, list, "x")],
            ))
            .await
            .unwrap();
    }

    let all = service.list_submissions(None).await.unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));

    let mine = service
        .list_submissions(Some(first.professor_id))
        .await
        .unwrap();
    assert_eq!(mine.len(), 2);
    assert!(mine
        .iter()
        .all(|d| d.professor.as_deref() == Some("Dr. Haddad")));
}

#[tokio::test]
async fn test_update_upserts_and_leaves_omitted_outcomes() {
    let db = TestDatabase::seeded().await;
    let service = db.module.service();
    let (curriculum_id, (remember, list), (apply, demonstrate)) = reference_ids(&db).await;
    let registered = service.signup(account("rhaddad", "Dr. Haddad")).await.unwrap();

    let id = service
        .create_submission(submission(
            registered.professor_id,
            curriculum_id,
            vec![outcome(remember, list, "edit me"), outcome(remember, list, "leave me")],
        ))
        .await
        .unwrap();
    let before = service.list_submissions(None).await.unwrap();
    let edited_id = before[0].outcomes[0].id.unwrap();
    let left_id = before[0].outcomes[1].id.unwrap();

    let mut edited = outcome(apply, demonstrate, "edited");
    edited.id = Some(edited_id);
    let mut update = submission(
        registered.professor_id,
        curriculum_id,
        vec![edited, outcome(apply, demonstrate, "inserted")],
    );
    update.year = "2026".into();

    service.update_submission(id, update).await.unwrap();

    let after = service.list_submissions(None).await.unwrap();
    let doc = &after[0];
    assert_eq!(doc.year.as_deref(), Some("2026"));
    assert_eq!(doc.outcomes.len(), 3);

    let find = |oid: i32| doc.outcomes.iter().find(|o| o.id == Some(oid)).unwrap();
    assert_eq!(find(edited_id).object.as_deref(), Some("edited"));
    assert_eq!(find(edited_id).verb.as_deref(), Some("demonstrate"));
    assert_eq!(find(left_id).object.as_deref(), Some("leave me"));
    assert!(doc
        .outcomes
        .iter()
        .any(|o| o.object.as_deref() == Some("inserted")));
}

#[tokio::test]
async fn test_update_without_qualifier_clears_it() {
    let db = TestDatabase::seeded().await;
    let service = db.module.service();
    let (curriculum_id, (remember, list), _) = reference_ids(&db).await;
    let registered = service.signup(account("rhaddad", "Dr. Haddad")).await.unwrap();

    let mut qualified = outcome(remember, list, "lab safety rules");
    qualified.qualifier = Some("from memory".into());
    let id = service
        .create_submission(submission(registered.professor_id, curriculum_id, vec![qualified]))
        .await
        .unwrap();
    let outcome_id = service.list_submissions(None).await.unwrap()[0].outcomes[0]
        .id
        .unwrap();

    let mut unqualified = outcome(remember, list, "lab safety rules");
    unqualified.id = Some(outcome_id);
    service
        .update_submission(id, submission(registered.professor_id, curriculum_id, vec![unqualified]))
        .await
        .unwrap();

    let doc = &service.list_submissions(None).await.unwrap()[0];
    assert_eq!(doc.outcomes.len(), 1);
    assert_eq!(doc.outcomes[0].qualifier, None);
    assert_eq!(doc.outcomes[0].object.as_deref(), Some("lab safety rules"));
}

#[tokio::test]
async fn test_update_cannot_touch_outcomes_of_other_submissions() {
    let db = TestDatabase::seeded().await;
    let service = db.module.service();
    let (curriculum_id, (remember, list), _) = reference_ids(&db).await;
    let registered = service.signup(account("rhaddad", "Dr. Haddad")).await.unwrap();

    let mine = service
        .create_submission(submission(registered.professor_id, curriculum_id, vec![]))
        .await
        .unwrap();
    let other = service
        .create_submission(submission(
            registered.professor_id,
            curriculum_id,
            vec![outcome(remember, list, "other's")],
        ))
        .await
        .unwrap();
    let docs = service.list_submissions(None).await.unwrap();
    let foreign_id = docs.iter().find(|d| d.id == other).unwrap().outcomes[0]
        .id
        .unwrap();

    let mut hijack = outcome(remember, list, "hijacked");
    hijack.id = Some(foreign_id);
    service
        .update_submission(
            mine,
            submission(registered.professor_id, curriculum_id, vec![hijack]),
        )
        .await
        .unwrap();

    let docs = service.list_submissions(None).await.unwrap();
    let other_doc = docs.iter().find(|d| d.id == other).unwrap();
    assert_eq!(other_doc.outcomes[0].object.as_deref(), Some("other's"));
    let my_doc = docs.iter().find(|d| d.id == mine).unwrap();
    assert!(my_doc.outcomes.is_empty());
}

#[tokio::test]
async fn test_delete_removes_submission_and_outcomes() {
    let db = TestDatabase::seeded().await;
    let service = db.module.service();
    let (curriculum_id, (remember, list), _) = reference_ids(&db).await;
    let registered = service.signup(account("rhaddad", "Dr. Haddad")).await.unwrap();

    let id = service
        .create_submission(submission(
            registered.professor_id,
            curriculum_id,
            vec![outcome(remember, list, "a"), outcome(remember, list, "b")],
        ))
        .await
        .unwrap();

    service.delete_submission(id).await.unwrap();
    assert!(service.list_submissions(None).await.unwrap().is_empty());

    let err = service.delete_submission(id).await.unwrap_err();
    assert_eq!(err, OutcomesError::not_found("submission", id));
}

#[tokio::test]
async fn test_signup_and_login_against_database() {
    let db = TestDatabase::seeded().await;
    let service = db.module.service();

    let registered = service.signup(account("rhaddad", "Dr. Haddad")).await.unwrap();

    let users = service.list_users().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].role, PROFESSOR_ROLE);
    assert!(users[0].password_hash.starts_with("sha256$"));

    let professors = service.list_professors().await.unwrap();
    assert_eq!(professors[0].id, registered.professor_id);
    assert_eq!(professors[0].user_id, Some(registered.user_id));
    assert_eq!(professors[0].username.as_deref(), Some("rhaddad"));

    let user = service
        .login("rhaddad@example.edu", "s3cret")
        .await
        .unwrap();
    assert_eq!(user.professor_id, Some(registered.professor_id));

    let err = service
        .login("rhaddad@example.edu", "wrong")
        .await
        .unwrap_err();
    assert_eq!(err, OutcomesError::InvalidCredentials);

    let err = service
        .signup(account("rhaddad", "Someone Else"))
        .await
        .unwrap_err();
    assert!(matches!(err, OutcomesError::Validation { .. }));
}
