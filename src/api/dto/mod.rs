//! API DTOs

mod charges;

pub use charges::{ChargeBatchResponse, PriceBatchRequest};
