//! Submission aggregation
//!
//! Reshapes the flat submission/outcome join into nested submission
//! documents. Pure: no I/O, no state between calls.

use crate::contract::{CurriculumDocument, OutcomeDocument, SubmissionDocument, SubmissionRow};
use indexmap::IndexMap;

/// Group joined rows into one document per submission.
///
/// Documents come out in order of first appearance of their submission id.
/// Submission and curriculum fields are taken from the first row seen for an
/// id; later rows only contribute outcomes. A row whose `bloom_level_id` is
/// null contributes no outcome.
pub fn aggregate_submissions<I>(rows: I) -> Vec<SubmissionDocument>
where
    I: IntoIterator<Item = SubmissionRow>,
{
    let mut submissions: IndexMap<i32, SubmissionDocument> = IndexMap::new();

    for row in rows {
        let outcome = outcome_from_row(&row);
        let document = submissions
            .entry(row.submission_id)
            .or_insert_with(|| submission_from_row(row));

        if let Some(outcome) = outcome {
            document.outcomes.push(outcome);
        }
    }

    submissions.into_values().collect()
}

fn submission_from_row(row: SubmissionRow) -> SubmissionDocument {
    SubmissionDocument {
        id: row.submission_id,
        professor: row.professor_name,
        year: row.year,
        level: row.level,
        curriculum_id: row.curriculum_id,
        created_at: row.created_at,
        curriculum: CurriculumDocument {
            name: row.curriculum_name,
            code: row.curriculum_code,
            period: row.curr_period,
            total_hours: row.total_hours,
            lecture_hours: row.lecture_hours,
            lab_hours: row.lab_hours,
            prerequisites: row.prerequisites,
            faculty: row.faculty_name,
            track: row.track_name,
        },
        outcomes: Vec::new(),
    }
}

fn outcome_from_row(row: &SubmissionRow) -> Option<OutcomeDocument> {
    let bloom_level_id = row.bloom_level_id?;
    Some(OutcomeDocument {
        id: row.outcome_id,
        bloom_level_id,
        verb_id: row.verb_id,
        bloom_level: row.bloom_level_name.clone(),
        verb: row.verb_name.clone(),
        object: row.object.clone(),
        qualifier: row.qualifier.clone(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn submission(id: i32, professor: &str) -> SubmissionRow {
        SubmissionRow {
            submission_id: id,
            professor_name: Some(professor.to_string()),
            year: Some("2025".to_string()),
            level: Some(2),
            curriculum_id: Some(10),
            curriculum_name: Some("Data Structures".to_string()),
            curriculum_code: Some("CS201".to_string()),
            curr_period: Some("Fall".to_string()),
            total_hours: Some(4),
            lecture_hours: Some(3),
            lab_hours: Some(1),
            prerequisites: Some("none".to_string()),
            faculty_name: Some("Informatics".to_string()),
            track_name: Some("Software".to_string()),
            ..Default::default()
        }
    }

    fn with_outcome(mut row: SubmissionRow, outcome_id: i32, bloom: i32, verb: &str, object: &str) -> SubmissionRow {
        row.outcome_id = Some(outcome_id);
        row.bloom_level_id = Some(bloom);
        row.bloom_level_name = Some(format!("Level {}", bloom));
        row.verb_id = Some(outcome_id * 100);
        row.verb_name = Some(verb.to_string());
        row.object = Some(object.to_string());
        row
    }

    #[test]
    fn empty_input_yields_no_documents() {
        assert!(aggregate_submissions(Vec::new()).is_empty());
    }

    #[test]
    fn null_outcome_row_adds_no_outcome() {
        let rows = vec![
            SubmissionRow {
                submission_id: 1,
                professor_name: Some("A".to_string()),
                bloom_level_id: Some(2),
                verb_name: Some("Explain".to_string()),
                object: Some("photosynthesis".to_string()),
                ..Default::default()
            },
            SubmissionRow {
                submission_id: 1,
                professor_name: Some("A".to_string()),
                ..Default::default()
            },
        ];

        let docs = aggregate_submissions(rows);

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].professor.as_deref(), Some("A"));
        assert_eq!(docs[0].outcomes.len(), 1);
        assert_eq!(docs[0].outcomes[0].verb.as_deref(), Some("Explain"));
        assert_eq!(docs[0].outcomes[0].object.as_deref(), Some("photosynthesis"));
        assert_eq!(docs[0].outcomes[0].qualifier, None);
    }

    #[test]
    fn submission_without_outcomes_has_empty_list() {
        let docs = aggregate_submissions(vec![submission(3, "B")]);

        assert_eq!(docs.len(), 1);
        assert!(docs[0].outcomes.is_empty());
        assert_eq!(docs[0].curriculum.code.as_deref(), Some("CS201"));
        assert_eq!(docs[0].curriculum.faculty.as_deref(), Some("Informatics"));
    }

    #[test]
    fn curriculum_fields_come_from_first_row() {
        let first = with_outcome(submission(1, "A"), 1, 1, "List", "sorting algorithms");
        let mut second = with_outcome(submission(1, "A"), 2, 3, "Apply", "hash tables");
        second.curriculum_name = None;
        second.professor_name = Some("Someone else".to_string());
        second.total_hours = Some(99);

        let docs = aggregate_submissions(vec![first, second]);

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].professor.as_deref(), Some("A"));
        assert_eq!(docs[0].curriculum.name.as_deref(), Some("Data Structures"));
        assert_eq!(docs[0].curriculum.total_hours, Some(4));
        assert_eq!(docs[0].outcomes.len(), 2);
    }

    #[test]
    fn grouping_is_stable_and_outcomes_keep_row_order() {
        let rows = vec![
            with_outcome(submission(7, "A"), 1, 1, "Define", "a"),
            with_outcome(submission(2, "B"), 2, 2, "Explain", "b"),
            with_outcome(submission(7, "A"), 3, 3, "Apply", "c"),
            with_outcome(submission(2, "B"), 4, 4, "Compare", "d"),
            with_outcome(submission(7, "A"), 5, 5, "Judge", "e"),
        ];

        let docs = aggregate_submissions(rows);

        let ids: Vec<i32> = docs.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![7, 2]);

        let objects: Vec<&str> = docs[0]
            .outcomes
            .iter()
            .map(|o| o.object.as_deref().unwrap())
            .collect();
        assert_eq!(objects, vec!["a", "c", "e"]);

        let outcome_ids: Vec<Option<i32>> = docs[1].outcomes.iter().map(|o| o.id).collect();
        assert_eq!(outcome_ids, vec![Some(2), Some(4)]);
    }

    #[test]
    fn outcome_carries_bloom_and_verb_references() {
        let docs = aggregate_submissions(vec![with_outcome(submission(1, "A"), 4, 6, "Design", "a schema")]);
        let outcome = &docs[0].outcomes[0];

        assert_eq!(outcome.id, Some(4));
        assert_eq!(outcome.bloom_level_id, 6);
        assert_eq!(outcome.bloom_level.as_deref(), Some("Level 6"));
        assert_eq!(outcome.verb_id, Some(400));
    }
}
