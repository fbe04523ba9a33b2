//! Token error types

use crate::crypto::JwsError;
use thiserror::Error;

/// Token operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// Token error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// Token is structurally malformed
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    /// Signature does not match the token content
    #[error("Invalid token signature")]
    InvalidSignature,

    /// Token has expired
    #[error("token has expired")]
    TokenExpired,

    /// Token has not entered its validity window yet
    #[error("token has not entered its validity time")]
    TokenNotYetValid,

    /// Header algorithm differs from the configured signing method
    #[error("Algorithm mismatch: expected {expected}, token uses {found}")]
    AlgorithmMismatch {
        /// Configured signing method
        expected: String,
        /// Algorithm named in the token header
        found: String,
    },

    /// Unsupported algorithm
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Secret unusable for the configured signing method
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Fieldless classification of a [`JwtError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Structural parse failure
    MalformedToken,
    /// Cryptographic verification failure
    SignatureInvalid,
    /// Expiration passed
    TokenExpired,
    /// Not-before still ahead
    TokenNotYetValid,
    /// Header algorithm rejected
    AlgorithmMismatch,
    /// Algorithm name not recognised
    UnsupportedAlgorithm,
    /// Secret rejected
    InvalidKey,
    /// JSON serialization failure
    Serialization,
}

impl JwtError {
    /// Classify this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            JwtError::MalformedToken(_) => ErrorKind::MalformedToken,
            JwtError::InvalidSignature => ErrorKind::SignatureInvalid,
            JwtError::TokenExpired => ErrorKind::TokenExpired,
            JwtError::TokenNotYetValid => ErrorKind::TokenNotYetValid,
            JwtError::AlgorithmMismatch { .. } => ErrorKind::AlgorithmMismatch,
            JwtError::UnsupportedAlgorithm(_) => ErrorKind::UnsupportedAlgorithm,
            JwtError::InvalidKey(_) => ErrorKind::InvalidKey,
            JwtError::Serialization(_) => ErrorKind::Serialization,
        }
    }

    /// True for failures of the signature check itself
    #[must_use]
    pub fn is_signature_error(&self) -> bool {
        matches!(
            self,
            JwtError::InvalidSignature | JwtError::AlgorithmMismatch { .. }
        )
    }

    /// True for the two time-window failures
    #[must_use]
    pub fn is_temporal(&self) -> bool {
        matches!(self, JwtError::TokenExpired | JwtError::TokenNotYetValid)
    }

    /// Create a malformed token error
    #[inline]
    #[must_use]
    pub fn malformed(msg: &str) -> Self {
        JwtError::MalformedToken(msg.to_string())
    }

    /// Create an unsupported algorithm error
    #[inline]
    #[must_use]
    pub fn unsupported_algorithm(alg: &str) -> Self {
        JwtError::UnsupportedAlgorithm(alg.to_string())
    }
}

// Every primitive failure enters the public error space here.
impl From<JwsError> for JwtError {
    fn from(err: JwsError) -> Self {
        match err {
            JwsError::Expired { .. } => JwtError::TokenExpired,
            JwsError::NotYetValid { .. } => JwtError::TokenNotYetValid,
            JwsError::Malformed(msg) => JwtError::MalformedToken(msg),
            JwsError::InvalidSignature => JwtError::InvalidSignature,
            JwsError::AlgorithmMismatch { expected, found } => {
                JwtError::AlgorithmMismatch { expected, found }
            }
            JwsError::UnsupportedAlgorithm(alg) => JwtError::UnsupportedAlgorithm(alg),
            JwsError::InvalidKey(msg) => JwtError::InvalidKey(msg),
            JwsError::Serialization(msg) => JwtError::Serialization(msg),
        }
    }
}
