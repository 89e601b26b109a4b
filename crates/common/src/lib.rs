//! Shared configuration, error handling, and password utilities for PulseFit
//!
//! - Configuration loaded from the environment
//! - The handler-level error type and its HTTP mapping
//! - Password hash verification for the login flow
//! - A validating JSON extractor

pub mod config;
pub mod crypto;
pub mod error;
pub mod extractors;

pub use config::Config;
pub use crypto::{hash_password, verify_login_password};
pub use error::Error;
pub use extractors::ValidatedJson;
