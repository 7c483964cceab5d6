// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod activity;
pub mod shared;

// Re-exports for convenience
pub use shared::{DomainError, ProfileHandle, RefreshId};
