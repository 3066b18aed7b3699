//! Server State

use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::{DbService, seed};
use crate::utils::AppError;

/// Shared server state, cloned into every handler
///
/// | Field | Type | Purpose |
/// |-------|------|---------|
/// | config | Config | immutable configuration |
/// | db | Surreal<Db> | embedded database handle |
/// | jwt_service | Arc<JwtService> | bearer-token validation |
///
/// There is no other in-process shared mutable state; each request works
/// against the pooled database handle independently.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: Surreal<Db>,
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Db>, jwt_service: Arc<JwtService>) -> Self {
        Self {
            config,
            db,
            jwt_service,
        }
    }

    /// Initialize state for production use
    ///
    /// Creates the work directory layout, opens the on-disk database, and
    /// seeds the sample catalog when configured to.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let db_path = config.database_dir().join("comanda.db");
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;
        let db = db_service.db;

        if config.seed_demo_data {
            seed::seed_if_empty(&db)
                .await
                .map_err(AppError::from)?;
        }

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Ok(Self::new(config.clone(), db, jwt_service))
    }

    /// Initialize state backed by the in-memory engine (tests)
    pub async fn initialize_in_memory(config: &Config) -> Result<Self, AppError> {
        let db = DbService::memory().await?.db;
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Ok(Self::new(config.clone(), db, jwt_service))
    }

    /// Database handle
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// JWT service
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
