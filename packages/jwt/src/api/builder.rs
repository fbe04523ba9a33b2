//! Facade over codec and checker, plus its builder

use crate::{
    claims::ClaimSet,
    codec::TokenCodec,
    config::JwtConfig,
    error::JwtResult,
    types::SigningMethod,
    validity::{TokenStatus, ValidityChecker},
};
use chrono::Duration;

/// Codec and checker sharing one configuration.
///
/// ```
/// use chrono::{Duration, Utc};
/// use simple_jwt::{ClaimSet, Jwt};
///
/// let jwt = Jwt::hs256();
/// let mut claims = ClaimSet::new();
/// claims
///     .set_subject("subject")
///     .set_expiration(Utc::now() + Duration::minutes(10));
///
/// let token = jwt.encode("thisistrullyasecret", &claims)?;
/// jwt.validate("thisistrullyasecret", &token)?;
/// assert_eq!(jwt.decode(&token)?.subject(), "subject");
/// # Ok::<(), simple_jwt::JwtError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Jwt {
    codec: TokenCodec,
    checker: ValidityChecker,
}

impl Jwt {
    /// HS256 with default validation
    #[must_use]
    pub fn hs256() -> Self {
        Self::with_config(JwtConfig::new(SigningMethod::Hs256))
    }

    /// HS384 with default validation
    #[must_use]
    pub fn hs384() -> Self {
        Self::with_config(JwtConfig::new(SigningMethod::Hs384))
    }

    /// HS512 with default validation
    #[must_use]
    pub fn hs512() -> Self {
        Self::with_config(JwtConfig::new(SigningMethod::Hs512))
    }

    /// Start from the default configuration
    #[must_use]
    pub fn builder() -> JwtBuilder {
        JwtBuilder::new()
    }

    /// Use an explicit configuration
    #[must_use]
    pub fn with_config(config: JwtConfig) -> Self {
        Self {
            codec: TokenCodec::new(config.clone()),
            checker: ValidityChecker::new(config),
        }
    }

    /// Configuration in use
    #[must_use]
    pub fn config(&self) -> &JwtConfig {
        self.codec.config()
    }

    /// Underlying codec
    #[must_use]
    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Underlying checker
    #[must_use]
    pub fn checker(&self) -> &ValidityChecker {
        &self.checker
    }

    /// See [`TokenCodec::encode`].
    ///
    /// # Errors
    /// Returns `JwtError` if signing fails.
    pub fn encode(&self, secret: impl AsRef<[u8]>, claims: &ClaimSet) -> JwtResult<String> {
        self.codec.encode(secret, claims)
    }

    /// See [`TokenCodec::decode`].
    ///
    /// # Errors
    /// Returns `JwtError::MalformedToken` if the token cannot be parsed.
    pub fn decode(&self, token: impl AsRef<str>) -> JwtResult<ClaimSet> {
        self.codec.decode(token)
    }

    /// See [`ValidityChecker::validate`].
    ///
    /// # Errors
    /// Returns `JwtError` describing why the token is not valid.
    pub fn validate(&self, secret: impl AsRef<[u8]>, token: impl AsRef<str>) -> JwtResult<()> {
        self.checker.validate(secret, token)
    }

    /// See [`ValidityChecker::verify`].
    ///
    /// # Errors
    /// Returns `JwtError` describing why the token is not valid.
    pub fn verify(&self, secret: impl AsRef<[u8]>, token: impl AsRef<str>) -> JwtResult<ClaimSet> {
        self.checker.verify(secret, token)
    }

    /// See [`ValidityChecker::status`].
    #[must_use]
    pub fn status(&self, secret: impl AsRef<[u8]>, token: impl AsRef<str>) -> TokenStatus {
        self.checker.status(secret, token)
    }
}

/// Builder for [`Jwt`]
#[derive(Debug, Clone, Default)]
pub struct JwtBuilder {
    config: JwtConfig,
}

impl JwtBuilder {
    /// Builder over the default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the signing method
    #[inline]
    #[must_use]
    pub fn with_algorithm(mut self, method: SigningMethod) -> Self {
        self.config = self.config.with_signing_method(method);
        self
    }

    /// Set the clock-skew leeway
    #[inline]
    #[must_use]
    pub fn with_leeway(mut self, leeway: Duration) -> Self {
        self.config = self.config.with_leeway(leeway);
        self
    }

    /// Require secrets of at least `len` bytes
    #[inline]
    #[must_use]
    pub fn with_min_key_length(mut self, len: usize) -> Self {
        self.config = self.config.with_min_key_length(len);
        self
    }

    /// Skip the expiration check
    #[inline]
    #[must_use]
    pub fn skip_expiration(mut self) -> Self {
        self.config = self.config.validate_expiration(false);
        self
    }

    /// Skip the not-before check
    #[inline]
    #[must_use]
    pub fn skip_not_before(mut self) -> Self {
        self.config = self.config.validate_not_before(false);
        self
    }

    /// Finish
    #[must_use]
    pub fn build(self) -> Jwt {
        Jwt::with_config(self.config)
    }
}
