//! Claim model - reserved names, typed values and the claim set

pub mod reserved;
pub mod set;
pub mod value;

pub use reserved::{is_reserved, ReservedClaim};
pub use set::{ClaimSet, DEFAULT_LIFETIME_DAYS};
pub use value::ClaimValue;
