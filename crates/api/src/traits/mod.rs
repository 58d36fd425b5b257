//! Trait definitions for the ffcrypt library

pub mod exchange;
pub mod source;

pub use exchange::KeyAgreement;
pub use source::DomainParameterSource;
