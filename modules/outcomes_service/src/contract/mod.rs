//! Contract layer - transport-agnostic models and errors
//!
//! NO serde derives on models - these are pure domain types.

pub mod error;
pub mod model;

pub use error::OutcomesError;
pub use model::{
    AuthenticatedUser, BloomLevel, Curriculum, CurriculumDocument, Faculty, NewAccount,
    NewCurriculum, NewSubmission, OutcomeDocument, OutcomeInput, OutcomeRecord, Professor,
    RegisteredAccount, Submission, SubmissionDocument, SubmissionRow, Track, User, Verb,
    PROFESSOR_ROLE,
};
