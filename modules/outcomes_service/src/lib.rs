//! Outcomes Service Module
//!
//! Curriculum reference data, professor accounts and Bloom's-taxonomy
//! learning-outcome submissions. Submissions are read back as nested
//! documents aggregated from a single joined query.

// Public exports
pub mod contract;
pub use contract::{error::OutcomesError, SubmissionDocument, SubmissionRow};

pub mod config;
pub use config::Config;

pub mod module;
pub use module::OutcomesServiceModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
