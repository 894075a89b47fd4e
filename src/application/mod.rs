//! Business logic: batch pricing over the tariff domain

pub mod pricing;

pub use pricing::{charge_for, compute_batch};
