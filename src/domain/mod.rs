//! Domain types and DTOs for the estimation service.

pub mod configuration;
pub mod estimate;
pub mod facilities;
pub mod saved;

// Re-export commonly used types
pub use configuration::*;
pub use estimate::*;
pub use saved::*;

// Facility tables are accessed via crate::domain::facilities:: to keep the
// namespace tidy
