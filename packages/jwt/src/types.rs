//! Token type definitions

use crate::error::JwtError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Keyed-hash algorithm used to produce the signature segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SigningMethod {
    /// HMAC-SHA256
    #[default]
    #[serde(rename = "HS256")]
    Hs256,
    /// HMAC-SHA384
    #[serde(rename = "HS384")]
    Hs384,
    /// HMAC-SHA512
    #[serde(rename = "HS512")]
    Hs512,
}

impl SigningMethod {
    /// Header `alg` value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SigningMethod::Hs256 => "HS256",
            SigningMethod::Hs384 => "HS384",
            SigningMethod::Hs512 => "HS512",
        }
    }

    /// Recommended secret length in bytes (one full digest)
    #[must_use]
    pub fn recommended_key_size(self) -> usize {
        match self {
            SigningMethod::Hs256 => 32,
            SigningMethod::Hs384 => 48,
            SigningMethod::Hs512 => 64,
        }
    }
}

impl fmt::Display for SigningMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SigningMethod {
    type Err = JwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HS256" => Ok(SigningMethod::Hs256),
            "HS384" => Ok(SigningMethod::Hs384),
            "HS512" => Ok(SigningMethod::Hs512),
            other => Err(JwtError::unsupported_algorithm(other)),
        }
    }
}

/// JOSE header carried in the first segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtHeader {
    /// Algorithm name
    pub alg: String,
    /// Media type, `"JWT"` for tokens produced here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
}

impl JwtHeader {
    /// Header for the given signing method
    #[must_use]
    pub fn new(method: SigningMethod) -> Self {
        Self {
            alg: method.as_str().to_string(),
            typ: Some("JWT".to_string()),
        }
    }
}
