//! Tariff domain: vendor registry and tier schedules

mod model;

pub use model::{Vendor, MIN_PRICE};
