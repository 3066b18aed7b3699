//! Order Domain
//!
//! The order workflow around the repository layer:
//!
//! - [`validator`] - cross-referential validation of creation payloads
//! - [`service`] - creation pipeline (validate, price, persist + claim table)
//! - [`enrich`] - denormalized read views (employee, table, menu items)

pub mod enrich;
pub mod service;
pub mod validator;

pub use enrich::OrderEnricher;
pub use service::OrderService;
