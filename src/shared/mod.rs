//! Cross-cutting concerns

pub mod shutdown;

pub use shutdown::{ShutdownCoordinator, ShutdownSignal};
