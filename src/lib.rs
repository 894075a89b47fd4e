//! # Pharmacy Delivery Charges Service
//!
//! Estimates hidden/delivery charges for a basket of pharmacy prices
//! across the supported vendors, each with its own fixed tier schedule.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: vendor registry, tier schedules and error types
//! - **application**: the batch pricing dispatcher
//! - **api**: REST API with Swagger documentation
//! - **config**: TOML application configuration
//! - **shared**: cross-cutting concerns (graceful shutdown)

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export the API router
pub use api::create_api_router;

// Re-export the core engine entry points
pub use application::{charge_for, compute_batch};
pub use domain::{TariffError, Vendor};
