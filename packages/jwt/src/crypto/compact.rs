//! Compact serialization helpers - base64url segments (RFC 7515)

use super::JwsError;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

/// Base64 URL-safe encoding without padding
#[inline]
pub(crate) fn base64_url_encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Base64 URL-safe decoding without padding
#[inline]
pub(crate) fn base64_url_decode(input: &str, segment: &str) -> Result<Vec<u8>, JwsError> {
    URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|e| JwsError::Malformed(format!("invalid {segment} encoding: {e}")))
}

/// The three raw segments of a compact token
#[derive(Debug, Clone, Copy)]
pub(crate) struct Segments<'a> {
    pub header: &'a str,
    pub payload: &'a str,
    pub signature: &'a str,
}

impl<'a> Segments<'a> {
    /// Split `header.payload.signature`
    pub(crate) fn split(token: &'a str) -> Result<Self, JwsError> {
        let mut parts = token.split('.');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(header), Some(payload), Some(signature), None) => Ok(Self {
                header,
                payload,
                signature,
            }),
            _ => Err(JwsError::Malformed(format!(
                "token must have 3 segments, found {}",
                token.split('.').count()
            ))),
        }
    }

    /// Bytes covered by the signature
    pub(crate) fn signing_input(&self) -> String {
        join(self.header, self.payload)
    }
}

/// `a.b` with a single allocation
pub(crate) fn join(a: &str, b: &str) -> String {
    let mut out = String::with_capacity(a.len() + 1 + b.len());
    out.push_str(a);
    out.push('.');
    out.push_str(b);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_three_segments() {
        let segments = Segments::split("aGVhZA.Ym9keQ.c2ln").expect("three segments");
        assert_eq!(segments.header, "aGVhZA");
        assert_eq!(segments.payload, "Ym9keQ");
        assert_eq!(segments.signature, "c2ln");
        assert_eq!(segments.signing_input(), "aGVhZA.Ym9keQ");
    }

    #[test]
    fn rejects_wrong_segment_count() {
        for token in ["", "a", "a.b", "a.b.c.d"] {
            assert!(matches!(
                Segments::split(token),
                Err(JwsError::Malformed(_))
            ));
        }
    }

    #[test]
    fn decode_rejects_padding_and_garbage() {
        assert_eq!(base64_url_decode("Ym9keQ", "payload").ok(), Some(b"body".to_vec()));
        assert!(base64_url_decode("Ym9keQ==", "payload").is_err());
        assert!(base64_url_decode("not base64!", "payload").is_err());
    }
}
