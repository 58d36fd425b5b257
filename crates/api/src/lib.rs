//! Public API traits and types for the ffcrypt library
//!
//! This crate provides the public API surface for the ffcrypt workspace:
//! the trait definitions for key-agreement schemes and domain-parameter
//! collaborators, and the top-level error types shared by every crate.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

pub use traits::{DomainParameterSource, KeyAgreement};

// Re-export trait modules for direct access
pub use traits::{exchange, source};
