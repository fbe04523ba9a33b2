//! Reserved claim names (RFC 7519 §4.1 plus `typ`)

use std::fmt;

/// One of the eight claims that only typed accessors may write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservedClaim {
    /// `iss`
    Issuer,
    /// `sub`
    Subject,
    /// `aud`
    Audience,
    /// `exp`
    Expiration,
    /// `nbf`
    NotBefore,
    /// `iat`
    IssuedAt,
    /// `jti`
    Id,
    /// `typ`
    TokenType,
}

const RESERVED: [(&str, ReservedClaim); 8] = [
    ("iss", ReservedClaim::Issuer),
    ("sub", ReservedClaim::Subject),
    ("aud", ReservedClaim::Audience),
    ("exp", ReservedClaim::Expiration),
    ("nbf", ReservedClaim::NotBefore),
    ("iat", ReservedClaim::IssuedAt),
    ("jti", ReservedClaim::Id),
    ("typ", ReservedClaim::TokenType),
];

impl ReservedClaim {
    /// All reserved claims in wire-name order
    pub const ALL: [ReservedClaim; 8] = [
        ReservedClaim::Issuer,
        ReservedClaim::Subject,
        ReservedClaim::Audience,
        ReservedClaim::Expiration,
        ReservedClaim::NotBefore,
        ReservedClaim::IssuedAt,
        ReservedClaim::Id,
        ReservedClaim::TokenType,
    ];

    /// Match a key after trimming whitespace, ignoring ASCII case.
    ///
    /// `" ISS "`, `"Iss"` and `"iss"` all resolve to [`ReservedClaim::Issuer`].
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        RESERVED
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|&(_, claim)| claim)
    }

    /// Exact wire name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ReservedClaim::Issuer => "iss",
            ReservedClaim::Subject => "sub",
            ReservedClaim::Audience => "aud",
            ReservedClaim::Expiration => "exp",
            ReservedClaim::NotBefore => "nbf",
            ReservedClaim::IssuedAt => "iat",
            ReservedClaim::Id => "jti",
            ReservedClaim::TokenType => "typ",
        }
    }
}

impl fmt::Display for ReservedClaim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True when `key` names a reserved claim
#[inline]
#[must_use]
pub fn is_reserved(key: &str) -> bool {
    ReservedClaim::from_key(key).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_normalizes_case_and_whitespace() {
        assert_eq!(ReservedClaim::from_key("iss"), Some(ReservedClaim::Issuer));
        assert_eq!(ReservedClaim::from_key(" ISS "), Some(ReservedClaim::Issuer));
        assert_eq!(ReservedClaim::from_key("\tAud\n"), Some(ReservedClaim::Audience));
        assert_eq!(ReservedClaim::from_key("JTI"), Some(ReservedClaim::Id));
        assert_eq!(ReservedClaim::from_key("issuer"), None);
        assert_eq!(ReservedClaim::from_key("i ss"), None);
        assert_eq!(ReservedClaim::from_key(""), None);
    }

    #[test]
    fn names_round_trip() {
        for claim in ReservedClaim::ALL {
            assert_eq!(ReservedClaim::from_key(claim.as_str()), Some(claim));
            assert!(is_reserved(&claim.to_string().to_uppercase()));
        }
    }
}
