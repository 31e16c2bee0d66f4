//! Application context - dependency injection container

use std::sync::Arc;

use devfolio_core::{
    AccountService, IdentityRepository as IdentityRepositoryPort,
    ProfileRepository as ProfileRepositoryPort, ProfileReader, RepoListing as RepoListingPort,
    RepoLookupService, TimelineEditor, UpsertCoordinator,
};
use devfolio_domain::{Config, Result};
use devfolio_infra::{DbManager, GithubClient, SqliteIdentityRepository, SqliteProfileRepository};
use tokio::task;
use tracing::info;

use crate::utils::health::{ComponentHealth, HealthStatus};

/// Type alias for profile repository port trait object
pub type DynProfileRepositoryPort = dyn ProfileRepositoryPort + Send + Sync + 'static;

/// Type alias for identity repository port trait object
pub type DynIdentityRepositoryPort = dyn IdentityRepositoryPort + Send + Sync + 'static;

/// Type alias for repository listing port trait object
pub type DynRepoListingPort = dyn RepoListingPort + Send + Sync + 'static;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub db: Arc<DbManager>,
    pub identities: Arc<DynIdentityRepositoryPort>,

    // Profile services
    pub upsert: Arc<UpsertCoordinator>,
    pub timeline: Arc<TimelineEditor>,
    pub reader: Arc<ProfileReader>,
    pub accounts: Arc<AccountService>,

    // External lookup
    pub repo_lookup: Arc<RepoLookupService>,
}

impl AppContext {
    /// Open the database, apply the schema and wire every service.
    pub fn new(config: Config) -> Result<Self> {
        let db = Arc::new(DbManager::new(&config.database.path, config.database.pool_size)?);
        db.run_migrations()?;

        let listing: Arc<DynRepoListingPort> = Arc::new(GithubClient::from_config(&config.github)?);

        info!(
            db_path = %db.path().display(),
            github_api = %config.github.api_base_url,
            "application context initialised"
        );

        Ok(Self::with_listing(config, db, listing))
    }

    /// Wire the services over an already migrated database and a given
    /// repository-listing adapter.
    pub fn with_listing(config: Config, db: Arc<DbManager>, listing: Arc<DynRepoListingPort>) -> Self {
        let profiles: Arc<DynProfileRepositoryPort> =
            Arc::new(SqliteProfileRepository::new(Arc::clone(&db)));
        let identities: Arc<DynIdentityRepositoryPort> =
            Arc::new(SqliteIdentityRepository::new(Arc::clone(&db)));

        Self {
            config,
            upsert: Arc::new(UpsertCoordinator::new(Arc::<DynProfileRepositoryPort>::clone(&profiles))),
            timeline: Arc::new(TimelineEditor::new(Arc::<DynProfileRepositoryPort>::clone(&profiles))),
            reader: Arc::new(ProfileReader::new(Arc::<DynProfileRepositoryPort>::clone(&profiles), Arc::<DynIdentityRepositoryPort>::clone(&identities))),
            accounts: Arc::new(AccountService::new(profiles, Arc::<DynIdentityRepositoryPort>::clone(&identities))),
            repo_lookup: Arc::new(RepoLookupService::new(listing)),
            identities,
            db,
        }
    }

    /// Check the components the request path depends on.
    pub async fn health_check(&self) -> HealthStatus {
        let db = Arc::clone(&self.db);
        let database = match task::spawn_blocking(move || db.health_check()).await {
            Ok(Ok(())) => ComponentHealth::healthy("database"),
            Ok(Err(err)) => ComponentHealth::unhealthy("database", err.to_string()),
            Err(err) => ComponentHealth::unhealthy("database", format!("health task failed: {err}")),
        };

        HealthStatus::from_components(vec![database])
    }
}
