//! Token validity policy
//!
//! A token is valid when it parses, carries the configured algorithm, has a
//! matching signature and the evaluation instant lies inside its window:
//!
//! - expired when `now - leeway > exp`
//! - not yet valid when `now + leeway < nbf`
//!
//! Both boundaries are inclusive. Each call is independent; nothing is
//! remembered between validations.

use crate::{
    claims::ClaimSet,
    codec::from_payload,
    config::JwtConfig,
    crypto::{self, TimeWindow},
    error::{ErrorKind, JwtError, JwtResult},
};
use chrono::{DateTime, Utc};

/// Outcome of a validation, for callers that branch rather than propagate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenStatus {
    /// Well-formed, correctly signed, inside its window
    Valid,
    /// Past its expiration
    Expired,
    /// Before its not-before
    NotYetValid,
    /// Signature or algorithm check failed
    SignatureInvalid,
    /// Could not be parsed
    Malformed,
    /// Refused for another reason, such as an unusable secret
    Rejected,
}

impl TokenStatus {
    /// True only for [`TokenStatus::Valid`]
    #[must_use]
    pub fn is_valid(self) -> bool {
        self == TokenStatus::Valid
    }
}

impl From<&JwtResult<()>> for TokenStatus {
    fn from(result: &JwtResult<()>) -> Self {
        match result {
            Ok(()) => TokenStatus::Valid,
            Err(e) => match e.kind() {
                ErrorKind::TokenExpired => TokenStatus::Expired,
                ErrorKind::TokenNotYetValid => TokenStatus::NotYetValid,
                ErrorKind::SignatureInvalid | ErrorKind::AlgorithmMismatch => {
                    TokenStatus::SignatureInvalid
                }
                ErrorKind::MalformedToken => TokenStatus::Malformed,
                ErrorKind::UnsupportedAlgorithm
                | ErrorKind::InvalidKey
                | ErrorKind::Serialization => TokenStatus::Rejected,
            },
        }
    }
}

/// Checks signature and time window of tokens under one configuration
#[derive(Debug, Clone, Default)]
pub struct ValidityChecker {
    config: JwtConfig,
}

impl ValidityChecker {
    /// Bind a checker to `config`
    #[must_use]
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub fn config(&self) -> &JwtConfig {
        &self.config
    }

    /// Validate `token` against `secret` at the current instant.
    ///
    /// # Errors
    /// - `JwtError::MalformedToken` if the token cannot be parsed
    /// - `JwtError::AlgorithmMismatch` if the header names another method
    /// - `JwtError::InvalidSignature` if the signature does not match
    /// - `JwtError::TokenExpired` / `JwtError::TokenNotYetValid` outside the window
    /// - `JwtError::InvalidKey` for an unusable secret
    pub fn validate(&self, secret: impl AsRef<[u8]>, token: impl AsRef<str>) -> JwtResult<()> {
        self.validate_at(secret, token, Utc::now())
    }

    /// Validate `token` against `secret` as of `now`.
    ///
    /// # Errors
    /// Same as [`ValidityChecker::validate`].
    pub fn validate_at(
        &self,
        secret: impl AsRef<[u8]>,
        token: impl AsRef<str>,
        now: DateTime<Utc>,
    ) -> JwtResult<()> {
        self.check(secret.as_ref(), token.as_ref(), now).map(|_| ())
    }

    /// Validate at the current instant, then decode.
    ///
    /// # Errors
    /// Same as [`ValidityChecker::validate`]; additionally
    /// `JwtError::MalformedToken` if a reserved claim has the wrong JSON type.
    pub fn verify(&self, secret: impl AsRef<[u8]>, token: impl AsRef<str>) -> JwtResult<ClaimSet> {
        self.verify_at(secret, token, Utc::now())
    }

    /// Validate as of `now`, then decode.
    ///
    /// # Errors
    /// Same as [`ValidityChecker::verify`].
    pub fn verify_at(
        &self,
        secret: impl AsRef<[u8]>,
        token: impl AsRef<str>,
        now: DateTime<Utc>,
    ) -> JwtResult<ClaimSet> {
        let parsed = self.check(secret.as_ref(), token.as_ref(), now)?;
        from_payload(parsed)
    }

    /// Classify `token` at the current instant.
    #[must_use]
    pub fn status(&self, secret: impl AsRef<[u8]>, token: impl AsRef<str>) -> TokenStatus {
        self.status_at(secret, token, Utc::now())
    }

    /// Classify `token` as of `now`.
    #[must_use]
    pub fn status_at(
        &self,
        secret: impl AsRef<[u8]>,
        token: impl AsRef<str>,
        now: DateTime<Utc>,
    ) -> TokenStatus {
        TokenStatus::from(&self.validate_at(secret, token, now))
    }

    // Parsed -> SignatureChecked -> window checked. Returns the payload on success.
    fn check(&self, secret: &[u8], token: &str, now: DateTime<Utc>) -> JwtResult<crypto::Payload> {
        let method = self.config.signing_method;

        let outcome = crypto::parse(token).and_then(|parsed| {
            parsed.verify(method, secret, self.config.min_key_length)?;
            crypto::check_window(
                &parsed.claims,
                TimeWindow {
                    now,
                    leeway: self.config.leeway,
                    validate_exp: self.config.validate_exp,
                    validate_nbf: self.config.validate_nbf,
                },
            )?;
            Ok(parsed.claims)
        });

        match outcome {
            Ok(claims) => {
                tracing::debug!(alg = %method, "token valid");
                Ok(claims)
            }
            Err(e) => {
                let err = JwtError::from(e);
                match &err {
                    JwtError::AlgorithmMismatch { expected, found } => {
                        tracing::warn!(%expected, %found, "token signed with unexpected algorithm");
                    }
                    _ => tracing::debug!(alg = %method, kind = ?err.kind(), "token rejected"),
                }
                Err(err)
            }
        }
    }
}
