//! Domain layer - business logic and services

pub mod aggregation;
pub mod password;
pub mod repository;
pub mod service;
pub mod validation;

pub use aggregation::aggregate_submissions;
pub use repository::{AccountRepository, CatalogRepository, SubmissionRepository};
pub use service::Service;
