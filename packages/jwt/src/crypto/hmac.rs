//! HMAC-SHA signing and verification (HS256, HS384, HS512)

use super::JwsError;
use crate::types::SigningMethod;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Compute the raw MAC of `message` under `secret`
pub(crate) fn sign(method: SigningMethod, message: &[u8], secret: &[u8]) -> Result<Vec<u8>, JwsError> {
    match method {
        SigningMethod::Hs256 => mac::<HmacSha256>(message, secret),
        SigningMethod::Hs384 => mac::<HmacSha384>(message, secret),
        SigningMethod::Hs512 => mac::<HmacSha512>(message, secret),
    }
}

/// Recompute and compare in constant time
pub(crate) fn verify(
    method: SigningMethod,
    message: &[u8],
    signature: &[u8],
    secret: &[u8],
) -> Result<bool, JwsError> {
    let expected = sign(method, message, secret)?;
    Ok(expected.ct_eq(signature).into())
}

#[inline]
fn mac<M: Mac + hmac::digest::KeyInit>(message: &[u8], secret: &[u8]) -> Result<Vec<u8>, JwsError> {
    let mut mac = <M as Mac>::new_from_slice(secret)
        .map_err(|_| JwsError::InvalidKey("Invalid HMAC key".to_string()))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}
