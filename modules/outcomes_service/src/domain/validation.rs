//! Presence validation for incoming requests
//!
//! Only non-null / non-empty checks are performed. No range checks and no
//! type coercion beyond the defaults applied to optional curriculum fields.

use crate::contract::{OutcomeInput, OutcomeRecord, OutcomesError};

/// Default for omitted lecture/lab hours
pub const DEFAULT_HOURS: i32 = 0;

/// Default for omitted prerequisites
pub const DEFAULT_PREREQUISITES: &str = "none";

/// Require a non-empty string, trimming nothing
pub fn require_text(value: Option<String>, message: &str) -> Result<String, OutcomesError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(OutcomesError::validation(message)),
    }
}

/// Require a present, non-zero integer.
///
/// Zero is treated as absent: ids start at 1 and zero hours/levels are
/// rejected the same way the web client has always seen them rejected.
pub fn require_number(value: Option<i32>, message: &str) -> Result<i32, OutcomesError> {
    match value {
        Some(v) if v != 0 => Ok(v),
        _ => Err(OutcomesError::validation(message)),
    }
}

/// Optional hour count, defaulting to zero
pub fn hours_or_default(value: Option<i32>) -> i32 {
    value.unwrap_or(DEFAULT_HOURS)
}

/// Optional prerequisites, defaulting to "none" when omitted or empty
pub fn prerequisites_or_default(value: Option<String>) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => DEFAULT_PREREQUISITES.to_string(),
    }
}

/// Resolve an outcome entry into a writable record.
///
/// Missing bloom level or verb makes the entry unwritable; the caller logs
/// and skips it like any other failed outcome write. An omitted object is
/// stored as an empty string, but an omitted qualifier stays `None` and is
/// written as NULL, also when updating an outcome that had one.
pub fn outcome_record(input: &OutcomeInput) -> Result<OutcomeRecord, OutcomesError> {
    let bloom_level_id = input
        .bloom_level_id
        .ok_or_else(|| OutcomesError::validation("Outcome bloom_level_id is required"))?;
    let verb_id = input
        .verb_id
        .ok_or_else(|| OutcomesError::validation("Outcome verb_id is required"))?;

    Ok(OutcomeRecord {
        bloom_level_id,
        verb_id,
        object: input.object.clone().unwrap_or_default(),
        qualifier: input.qualifier.clone(),
    })
}
