//! Signing and validation configuration.

use crate::types::SigningMethod;
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Configuration bound into a codec or checker at construction.
///
/// The value is immutable once handed over, so codecs and checkers built
/// from it can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtConfig {
    /// Signing method used to produce and verify signatures.
    pub signing_method: SigningMethod,
    /// Leeway for time-based claims, in whole seconds on the wire.
    #[serde(with = "leeway_seconds")]
    pub leeway: Duration,
    /// Validate expiry.
    pub validate_exp: bool,
    /// Validate not-before.
    pub validate_nbf: bool,
    /// Minimum secret length in bytes. `None` accepts any non-empty secret.
    pub min_key_length: Option<usize>,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            signing_method: SigningMethod::Hs256,
            leeway: Duration::zero(),
            validate_exp: true,
            validate_nbf: true,
            min_key_length: None,
        }
    }
}

impl JwtConfig {
    /// Default configuration for the given signing method.
    #[must_use]
    pub fn new(signing_method: SigningMethod) -> Self {
        Self {
            signing_method,
            ..Self::default()
        }
    }

    /// Configuration that also requires secrets of at least one digest length.
    #[must_use]
    pub fn strict(signing_method: SigningMethod) -> Self {
        Self {
            min_key_length: Some(signing_method.recommended_key_size()),
            ..Self::new(signing_method)
        }
    }

    /// Set the signing method.
    #[must_use]
    pub fn with_signing_method(mut self, signing_method: SigningMethod) -> Self {
        self.signing_method = signing_method;
        self
    }

    /// Set the time leeway for validation. Negative leeway is clamped to zero.
    #[must_use]
    pub fn with_leeway(mut self, leeway: Duration) -> Self {
        self.leeway = leeway.max(Duration::zero());
        self
    }

    /// Set whether to validate expiration.
    #[must_use]
    pub fn validate_expiration(mut self, validate: bool) -> Self {
        self.validate_exp = validate;
        self
    }

    /// Set whether to validate not-before.
    #[must_use]
    pub fn validate_not_before(mut self, validate: bool) -> Self {
        self.validate_nbf = validate;
        self
    }

    /// Require secrets of at least `len` bytes.
    #[must_use]
    pub fn with_min_key_length(mut self, len: usize) -> Self {
        self.min_key_length = Some(len);
        self
    }
}

mod leeway_seconds {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    // Same range as `deserialize` accepts: negative clamps to 0, overlong to u32::MAX.
    pub fn serialize<S: Serializer>(leeway: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let secs = u32::try_from(leeway.num_seconds().max(0)).unwrap_or(u32::MAX);
        serializer.serialize_u32(secs)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u32::deserialize(deserializer)?;
        Ok(Duration::seconds(i64::from(secs)))
    }
}
