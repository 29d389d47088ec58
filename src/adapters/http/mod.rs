//! HTTP adapters - REST API implementations.
//!
//! Each area has its own adapter (dto, handlers, routes); [`api_router`]
//! mounts them all.

pub mod achievements;
pub mod error;
pub mod reports;
pub mod router;
pub mod therapies;

// Re-export key types for convenience
pub use error::{handle_domain_error, ErrorResponse};
pub use router::{api_router, health, ApiState};
