//! REST API module
//!
//! Provides the HTTP endpoints for delivery-charge calculation plus
//! health and metrics probes, with Swagger documentation.

pub mod dto;
pub mod handlers;
pub mod router;

pub use router::create_api_router;
