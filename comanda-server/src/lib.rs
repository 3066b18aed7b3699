//! Comanda Server - restaurant order management service
//!
//! # Module structure
//!
//! ```text
//! comanda-server/src/
//! ├── core/          # configuration, state, HTTP server
//! ├── auth/          # JWT bearer-token identity
//! ├── api/           # HTTP routes and handlers
//! ├── orders/        # validation, creation pipeline, enrichment
//! ├── pricing/       # catalog-priced order totals
//! ├── db/            # embedded SurrealDB models and repositories
//! └── utils/         # errors, logging
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod orders;
pub mod pricing;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use orders::{OrderEnricher, OrderService};
pub use pricing::PricingEngine;
pub use utils::{AppError, AppResult};

pub use utils::logger::init_logger_with_file;

/// Prepare the process environment: dotenv, work directory, file logging
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    config.ensure_work_dir_structure()?;

    let log_dir = config.log_dir();
    init_logger_with_file(Some(&config.log_level), log_dir.to_str());

    Ok(())
}
