//! JWS sign, parse, verify and time-window check.

use super::{
    compact::{base64_url_decode, base64_url_encode, join, Segments},
    hmac, JwsError,
};
use crate::types::{JwtHeader, SigningMethod};
use chrono::{DateTime, Duration, Utc};
use serde_json::{Map, Value};

/// Claim payload as it travels on the wire.
pub(crate) type Payload = Map<String, Value>;

/// A token split and decoded, signature not yet checked.
#[derive(Debug, Clone)]
pub(crate) struct ParsedJws {
    pub header: JwtHeader,
    pub claims: Payload,
    signing_input: String,
    signature: Vec<u8>,
}

/// Instant and tolerances for [`check_window`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct TimeWindow {
    pub now: DateTime<Utc>,
    pub leeway: Duration,
    pub validate_exp: bool,
    pub validate_nbf: bool,
}

/// Reject empty secrets and secrets under the configured minimum.
fn check_key(secret: &[u8], min_key_length: Option<usize>) -> Result<(), JwsError> {
    if secret.is_empty() {
        return Err(JwsError::InvalidKey("secret must not be empty".to_string()));
    }
    if let Some(min) = min_key_length {
        if secret.len() < min {
            return Err(JwsError::InvalidKey(format!(
                "secret must be at least {min} bytes, got {}",
                secret.len()
            )));
        }
    }
    Ok(())
}

/// Serialize `claims` under a header for `method` and sign it.
pub(crate) fn sign(
    method: SigningMethod,
    secret: &[u8],
    min_key_length: Option<usize>,
    claims: &Payload,
) -> Result<String, JwsError> {
    check_key(secret, min_key_length)?;

    let header_json = serde_json::to_vec(&JwtHeader::new(method))
        .map_err(|e| JwsError::Serialization(e.to_string()))?;
    let payload_json =
        serde_json::to_vec(claims).map_err(|e| JwsError::Serialization(e.to_string()))?;

    let message = join(
        &base64_url_encode(&header_json),
        &base64_url_encode(&payload_json),
    );
    let signature = hmac::sign(method, message.as_bytes(), secret)?;
    Ok(join(&message, &base64_url_encode(&signature)))
}

/// Split and decode a compact token without checking its signature.
pub(crate) fn parse(token: &str) -> Result<ParsedJws, JwsError> {
    let segments = Segments::split(token)?;

    let header_bytes = base64_url_decode(segments.header, "header")?;
    let header: JwtHeader = serde_json::from_slice(&header_bytes)
        .map_err(|e| JwsError::Malformed(format!("invalid header: {e}")))?;

    let payload_bytes = base64_url_decode(segments.payload, "payload")?;
    let claims = match serde_json::from_slice::<Value>(&payload_bytes) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            return Err(JwsError::Malformed(
                "payload must be a JSON object".to_string(),
            ))
        }
        Err(e) => return Err(JwsError::Malformed(format!("invalid payload: {e}"))),
    };

    let signature = base64_url_decode(segments.signature, "signature")?;

    Ok(ParsedJws {
        header,
        claims,
        signing_input: segments.signing_input(),
        signature,
    })
}

impl ParsedJws {
    /// Check the header algorithm and the signature against `secret`.
    pub(crate) fn verify(
        &self,
        method: SigningMethod,
        secret: &[u8],
        min_key_length: Option<usize>,
    ) -> Result<(), JwsError> {
        check_key(secret, min_key_length)?;

        let alg: SigningMethod = self
            .header
            .alg
            .parse()
            .map_err(|_| JwsError::UnsupportedAlgorithm(self.header.alg.clone()))?;
        if alg != method {
            return Err(JwsError::AlgorithmMismatch {
                expected: method.as_str().to_string(),
                found: self.header.alg.clone(),
            });
        }

        if hmac::verify(method, self.signing_input.as_bytes(), &self.signature, secret)? {
            Ok(())
        } else {
            Err(JwsError::InvalidSignature)
        }
    }
}

/// Read a NumericDate claim; integers and floats are both accepted.
pub(crate) fn numeric_date(key: &str, value: Option<&Value>) -> Result<Option<i64>, JwsError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .map(Some)
            .ok_or_else(|| JwsError::Malformed(format!("{key} is out of range"))),
        Some(_) => Err(JwsError::Malformed(format!("{key} must be a numeric date"))),
    }
}

/// Expired when `now - leeway > exp`; not yet valid when `now + leeway < nbf`.
///
/// Both boundaries are inclusive: a token is still valid at the exact `exp`
/// second and already valid at the exact `nbf` second.
pub(crate) fn check_window(claims: &Payload, window: TimeWindow) -> Result<(), JwsError> {
    let now = window.now.timestamp();
    let leeway = window.leeway.num_seconds();

    if window.validate_exp {
        if let Some(exp) = numeric_date("exp", claims.get("exp"))? {
            if now.saturating_sub(leeway) > exp {
                return Err(JwsError::Expired {
                    expired_at: exp,
                    now,
                });
            }
        }
    }

    if window.validate_nbf {
        if let Some(nbf) = numeric_date("nbf", claims.get("nbf"))? {
            if now.saturating_add(leeway) < nbf {
                return Err(JwsError::NotYetValid {
                    not_before: nbf,
                    now,
                });
            }
        }
    }

    Ok(())
}
