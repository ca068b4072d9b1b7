//! Module wiring and lifecycle: database, migrations, service and router

use crate::config::Config;
use crate::domain::Service;
use crate::infra::storage::{
    migrations::Migrator,
    repositories::{SeaOrmAccountRepository, SeaOrmCatalogRepository, SeaOrmSubmissionRepository},
    seed::seed_reference_data,
};
use anyhow::{Context, Result};
use axum::Router;
use http::{header, request::Parts, HeaderValue, Method};
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Outcomes service module
pub struct OutcomesServiceModule {
    config: Config,
    db: Arc<DatabaseConnection>,
    service: Arc<Service>,
}

impl OutcomesServiceModule {
    /// Connect to the database, run migrations, optionally seed, and build
    /// the domain service
    pub async fn init(config: Config) -> Result<Self> {
        let db = Database::connect(config.database_url.as_str())
            .await
            .with_context(|| format!("failed to connect to {}", config.database_url))?;

        Self::with_connection(config, db).await
    }

    /// Same as [`init`](Self::init) over an already open connection
    pub async fn with_connection(config: Config, db: DatabaseConnection) -> Result<Self> {
        Migrator::up(&db, None).await.context("migrations failed")?;
        tracing::info!("Outcomes service migrations completed");

        if config.seed_reference_data {
            seed_reference_data(&db).await.context("seeding failed")?;
        }

        let db = Arc::new(db);

        // Build repositories
        let catalog_repo = Arc::new(SeaOrmCatalogRepository::new(db.clone()));
        let account_repo = Arc::new(SeaOrmAccountRepository::new(db.clone()));
        let submission_repo = Arc::new(SeaOrmSubmissionRepository::new(db.clone()));

        // Build domain service
        let service = Arc::new(Service::new(catalog_repo, account_repo, submission_repo));

        tracing::info!("Outcomes service initialized");
        Ok(Self {
            config,
            db,
            service,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    pub fn connection(&self) -> Arc<DatabaseConnection> {
        self.db.clone()
    }

    /// Register REST routes with CORS and request tracing
    pub fn register_rest(&self, router: Router) -> Result<Router> {
        tracing::info!("Registering outcomes service REST routes");
        let router = crate::api::rest::routes::register_routes(router, self.service())?;

        Ok(router
            .layer(cors_layer(&self.config.cors_allowed_origins))
            .layer(TraceLayer::new_for_http()))
    }

    /// Full application router
    pub fn router(&self) -> Result<Router> {
        self.register_rest(Router::new())
    }
}

/// CORS for the configured whitelist plus any `http://localhost:<port>`
fn cors_layer(allowed: &[String]) -> CorsLayer {
    let allowed: Vec<String> = allowed.to_vec();
    let allow_origin = AllowOrigin::predicate(move |origin: &HeaderValue, _: &Parts| {
        origin_allowed(&allowed, origin)
    });

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

fn origin_allowed(allowed: &[String], origin: &HeaderValue) -> bool {
    let Ok(origin) = origin.to_str() else {
        return false;
    };

    if allowed.iter().any(|o| o == origin) || origin.starts_with("http://localhost:") {
        return true;
    }

    tracing::warn!(origin, "CORS blocked");
    false
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn whitelisted_and_localhost_origins_pass() {
        let allowed = vec!["https://ilo-aiu-web.onrender.com".to_string()];

        assert!(origin_allowed(
            &allowed,
            &HeaderValue::from_static("https://ilo-aiu-web.onrender.com")
        ));
        assert!(origin_allowed(
            &allowed,
            &HeaderValue::from_static("http://localhost:4000")
        ));
        assert!(!origin_allowed(
            &allowed,
            &HeaderValue::from_static("https://evil.example")
        ));
        assert!(!origin_allowed(
            &allowed,
            &HeaderValue::from_static("https://localhost:4000")
        ));
    }
}
