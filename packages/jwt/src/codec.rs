//! Token encoding and decoding
//!
//! [`TokenCodec::encode`] signs a [`ClaimSet`]; [`TokenCodec::decode`] reads
//! one back without checking the signature. Use
//! [`crate::ValidityChecker`] before trusting a decoded claim set.

use crate::{
    claims::{ClaimSet, ClaimValue, ReservedClaim},
    config::JwtConfig,
    crypto::{self, Payload},
    error::{JwtError, JwtResult},
};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Encodes and decodes claim sets under one configuration
#[derive(Debug, Clone, Default)]
pub struct TokenCodec {
    config: JwtConfig,
}

impl TokenCodec {
    /// Bind a codec to `config`
    #[must_use]
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub fn config(&self) -> &JwtConfig {
        &self.config
    }

    /// Serialize and sign `claims` with `secret`.
    ///
    /// # Errors
    /// Returns `JwtError::InvalidKey` for an empty secret or one shorter than
    /// the configured minimum, and `JwtError::Serialization` if the payload
    /// cannot be encoded.
    pub fn encode(&self, secret: impl AsRef<[u8]>, claims: &ClaimSet) -> JwtResult<String> {
        let payload = to_payload(claims);
        let method = self.config.signing_method;

        let token = crypto::sign(
            method,
            secret.as_ref(),
            self.config.min_key_length,
            &payload,
        )
        .map_err(|e| {
            tracing::debug!(alg = %method, error = %e, "token encoding failed");
            e
        })?;

        tracing::debug!(alg = %method, claims = payload.len(), "encoded token");
        Ok(token)
    }

    /// Parse `token` into a fresh claim set. The signature is not checked.
    ///
    /// Timestamps missing from the payload stay unset rather than taking the
    /// defaults of [`ClaimSet::new`].
    ///
    /// # Errors
    /// Returns `JwtError::MalformedToken` when the token does not have three
    /// base64url segments, the header or payload is not a JSON object, or a
    /// reserved claim has the wrong JSON type.
    pub fn decode(&self, token: impl AsRef<str>) -> JwtResult<ClaimSet> {
        let parsed = crypto::parse(token.as_ref())?;
        let claims = from_payload(parsed.claims)?;
        tracing::debug!(alg = %parsed.header.alg, "decoded token");
        Ok(claims)
    }
}

/// Wire payload for a claim set: custom entries first, then reserved claims
/// that are set.
pub(crate) fn to_payload(claims: &ClaimSet) -> Payload {
    let mut payload: Payload = claims
        .custom_claims()
        .map(|(key, value)| (key.to_string(), value.to_json()))
        .collect();

    for reserved in [
        ReservedClaim::Id,
        ReservedClaim::Issuer,
        ReservedClaim::Subject,
        ReservedClaim::TokenType,
    ] {
        if let Some(value) = claims.reserved_str(reserved) {
            payload.insert(reserved.as_str().to_string(), Value::String(value.to_string()));
        }
    }

    if !claims.audiences().is_empty() {
        payload.insert(
            ReservedClaim::Audience.as_str().to_string(),
            Value::Array(
                claims
                    .audiences()
                    .iter()
                    .cloned()
                    .map(Value::String)
                    .collect(),
            ),
        );
    }

    for (reserved, at) in [
        (ReservedClaim::Expiration, claims.expiration()),
        (ReservedClaim::NotBefore, claims.not_before()),
        (ReservedClaim::IssuedAt, claims.issued_at()),
    ] {
        if let Some(at) = at {
            payload.insert(reserved.as_str().to_string(), at.timestamp().into());
        }
    }

    payload
}

/// Rebuild a claim set from a wire payload.
pub(crate) fn from_payload(payload: Payload) -> JwtResult<ClaimSet> {
    let mut claims = ClaimSet::empty();

    for (key, value) in payload {
        match ReservedClaim::from_key(&key) {
            Some(reserved) if reserved.as_str() == key => {
                apply_reserved(&mut claims, reserved, value)?;
            }
            // Variants such as "ISS" are plain entries on the wire. They are
            // kept so a decoded set encodes back to the same payload.
            _ => claims.insert_custom(key, ClaimValue::from(value)),
        }
    }

    Ok(claims)
}

fn apply_reserved(claims: &mut ClaimSet, reserved: ReservedClaim, value: Value) -> JwtResult<()> {
    match reserved {
        ReservedClaim::Id => {
            claims.set_id(expect_string(reserved, value)?);
        }
        ReservedClaim::Issuer => {
            claims.set_issuer(expect_string(reserved, value)?);
        }
        ReservedClaim::Subject => {
            claims.set_subject(expect_string(reserved, value)?);
        }
        ReservedClaim::TokenType => {
            claims.set_token_type(expect_string(reserved, value)?);
        }
        ReservedClaim::Audience => {
            claims.set_audiences(expect_audiences(value)?);
        }
        ReservedClaim::Expiration => {
            if let Some(at) = expect_date(reserved, value)? {
                claims.set_expiration(at);
            }
        }
        ReservedClaim::NotBefore => {
            if let Some(at) = expect_date(reserved, value)? {
                claims.set_not_before(at);
            }
        }
        ReservedClaim::IssuedAt => {
            if let Some(at) = expect_date(reserved, value)? {
                claims.set_issued_at(at);
            }
        }
    }
    Ok(())
}

fn expect_string(reserved: ReservedClaim, value: Value) -> JwtResult<String> {
    match value {
        Value::String(s) => Ok(s),
        _ => Err(JwtError::MalformedToken(format!("{reserved} must be a string"))),
    }
}

// `aud` is either a single string or an array of strings.
fn expect_audiences(value: Value) -> JwtResult<Vec<String>> {
    match value {
        Value::String(s) => Ok(vec![s]),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                _ => Err(JwtError::malformed("aud entries must be strings")),
            })
            .collect(),
        _ => Err(JwtError::malformed(
            "aud must be a string or an array of strings",
        )),
    }
}

fn expect_date(reserved: ReservedClaim, value: Value) -> JwtResult<Option<DateTime<Utc>>> {
    match crypto::numeric_date(reserved.as_str(), Some(&value))? {
        Some(secs) => DateTime::from_timestamp(secs, 0)
            .map(Some)
            .ok_or_else(|| JwtError::MalformedToken(format!("{reserved} is out of range"))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Payload {
        match value {
            Value::Object(map) => map,
            _ => Payload::new(),
        }
    }

    #[test]
    fn payload_carries_only_set_reserved_claims() {
        let mut claims = ClaimSet::empty();
        claims.set_subject("subject").add_claim("role", "admin");
        assert_eq!(
            Value::Object(to_payload(&claims)),
            json!({"sub": "subject", "role": "admin"})
        );
    }

    #[test]
    fn single_string_audience_is_accepted() {
        let claims = from_payload(payload(json!({"aud": "one"}))).expect("decodes");
        assert_eq!(claims.audiences(), ["one"]);
    }

    #[test]
    fn wrong_reserved_types_are_malformed() {
        for bad in [
            json!({"iss": 7}),
            json!({"aud": [1, 2]}),
            json!({"aud": {"x": 1}}),
            json!({"exp": "soon"}),
        ] {
            assert!(matches!(
                from_payload(payload(bad)),
                Err(JwtError::MalformedToken(_))
            ));
        }
    }

    #[test]
    fn reserved_name_variants_on_the_wire_are_kept() {
        let wire = json!({"ISS": "upper", " sub ": "spaced", "iss": "issuer", "role": "x"});
        let claims = from_payload(payload(wire.clone())).expect("decodes");

        assert_eq!(claims.issuer(), "issuer");
        assert_eq!(claims.subject(), "");
        // Lookups by a variant name still go to the typed accessor
        assert_eq!(claims.claim("ISS"), Some(ClaimValue::from("issuer")));
        assert_eq!(
            claims.custom_claims().map(|(k, _)| k).collect::<Vec<_>>(),
            [" sub ", "ISS", "role"]
        );
        assert_eq!(Value::Object(to_payload(&claims)), wire);
    }

    #[test]
    fn large_unsigned_numbers_survive_re_encoding() {
        let wire = json!({"big": u64::MAX, "ratio": 0.25});
        let claims = from_payload(payload(wire.clone())).expect("decodes");
        assert_eq!(Value::Object(to_payload(&claims)), wire);
    }
}
