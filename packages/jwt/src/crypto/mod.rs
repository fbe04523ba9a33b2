//! Signing and parsing primitive for compact JWS tokens
//!
//! Everything below this module speaks [`JwsError`]; the rest of the crate
//! only sees it through the conversion into [`crate::JwtError`].

mod compact;
mod hmac;
mod jws;

pub(crate) use jws::{check_window, numeric_date, parse, sign, Payload, TimeWindow};

use thiserror::Error;

/// Structured failure reported by the signing primitive
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwsError {
    /// Token structure could not be parsed
    #[error("malformed token: {0}")]
    Malformed(String),

    /// Signature does not match
    #[error("signature is invalid")]
    InvalidSignature,

    /// Header names another algorithm than the one requested
    #[error("algorithm mismatch: expected {expected}, found {found}")]
    AlgorithmMismatch {
        /// Requested algorithm
        expected: String,
        /// Header algorithm
        found: String,
    },

    /// Header names an algorithm outside the HMAC family
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Secret unusable for the algorithm
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Current instant is past `exp`
    #[error("token is expired (exp {expired_at}, now {now})")]
    Expired {
        /// `exp` claim, seconds since epoch
        expired_at: i64,
        /// Evaluation instant, seconds since epoch
        now: i64,
    },

    /// Current instant is before `nbf`
    #[error("token is not yet valid (nbf {not_before}, now {now})")]
    NotYetValid {
        /// `nbf` claim, seconds since epoch
        not_before: i64,
        /// Evaluation instant, seconds since epoch
        now: i64,
    },

    /// JSON encoding failed
    #[error("serialization failed: {0}")]
    Serialization(String),
}
