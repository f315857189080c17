//! Core domain logic for Custbook.
//! This crate is the single source of truth for customer-record invariants.

pub mod export;
pub mod logging;
pub mod manager;
pub mod model;

pub use export::{ExportError, ExportFormat, ExportResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use manager::{CustomerManager, ManagerError, ManagerResult};
pub use model::customer::{Customer, CustomerValidationError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
