//! Signed, time-bounded claim tokens
//!
//! This crate provides:
//! - [`ClaimSet`], a typed claim model whose reserved claims can only be
//!   changed through dedicated accessors
//! - [`TokenCodec`] for HS256/HS384/HS512 compact tokens
//! - [`ValidityChecker`] applying signature and time-window policy
//! - [`JwtConfig`], the explicit configuration both are built from

// Internal modules
pub mod api;
pub mod claims;
pub mod codec;
pub mod config;
pub(crate) mod crypto;
mod error;
mod types;
pub mod validity;

// Public re-exports
pub use api::{Jwt, JwtBuilder};
pub use claims::{ClaimSet, ClaimValue, ReservedClaim};
pub use codec::TokenCodec;
pub use config::JwtConfig;
pub use crypto::JwsError;
pub use error::*;
pub use types::*;
pub use validity::{TokenStatus, ValidityChecker};
