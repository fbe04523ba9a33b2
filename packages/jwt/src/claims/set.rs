//! The claim set carried by a token.

use super::{
    reserved::{is_reserved, ReservedClaim},
    value::ClaimValue,
};
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;

/// Default lifetime of a new claim set in days: ten 360-day years, practically never.
pub const DEFAULT_LIFETIME_DAYS: i64 = 3600;

/// Reserved and custom claims of a single token.
///
/// Reserved claims (`iss`, `sub`, `aud`, `exp`, `nbf`, `iat`, `jti`, `typ`)
/// live in typed fields and can only be changed through their setters.
/// Everything else goes into an open mapping via [`ClaimSet::add_claim`],
/// which silently drops reserved names in any case or surrounding
/// whitespace.
///
/// ```
/// use chrono::{Duration, Utc};
/// use simple_jwt::ClaimSet;
///
/// let mut claims = ClaimSet::new();
/// claims
///     .set_issuer("issuer")
///     .add_audience("one")
///     .add_audience("two")
///     .set_expiration(Utc::now() + Duration::minutes(10))
///     .add_claim("role", "admin")
///     .add_claim(" ISS ", "ignored");
///
/// assert_eq!(claims.issuer(), "issuer");
/// assert_eq!(claims.audiences(), ["one", "two"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimSet {
    id: Option<String>,
    issuer: Option<String>,
    subject: Option<String>,
    token_type: Option<String>,
    audiences: Vec<String>,
    expiration: Option<DateTime<Utc>>,
    not_before: Option<DateTime<Utc>>,
    issued_at: Option<DateTime<Utc>>,
    custom: BTreeMap<String, ClaimValue>,
}

impl ClaimSet {
    /// New claim set issued now: expires in [`DEFAULT_LIFETIME_DAYS`], valid
    /// since the epoch.
    #[must_use]
    pub fn new() -> Self {
        Self::new_at(Utc::now())
    }

    /// New claim set with the default lifecycle relative to `now`.
    #[must_use]
    pub fn new_at(now: DateTime<Utc>) -> Self {
        Self {
            expiration: Some(
                now.checked_add_signed(Duration::days(DEFAULT_LIFETIME_DAYS))
                    .unwrap_or(DateTime::<Utc>::MAX_UTC),
            ),
            not_before: Some(DateTime::<Utc>::UNIX_EPOCH),
            issued_at: Some(now),
            ..Self::empty()
        }
    }

    /// Claim set with nothing set, not even timestamps.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            id: None,
            issuer: None,
            subject: None,
            token_type: None,
            audiences: Vec::new(),
            expiration: None,
            not_before: None,
            issued_at: None,
            custom: BTreeMap::new(),
        }
    }

    /// Set the token ID (`jti`).
    pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.id = Some(id.into());
        self
    }

    /// Token ID, empty if never set.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    /// Set the issuer (`iss`).
    pub fn set_issuer(&mut self, issuer: impl Into<String>) -> &mut Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Issuer, empty if never set.
    #[must_use]
    pub fn issuer(&self) -> &str {
        self.issuer.as_deref().unwrap_or_default()
    }

    /// Set the subject (`sub`).
    pub fn set_subject(&mut self, subject: impl Into<String>) -> &mut Self {
        self.subject = Some(subject.into());
        self
    }

    /// Subject, empty if never set.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.subject.as_deref().unwrap_or_default()
    }

    /// Set the free-form token type (`typ`), e.g. `"access"` or `"refresh"`.
    pub fn set_token_type(&mut self, token_type: impl Into<String>) -> &mut Self {
        self.token_type = Some(token_type.into());
        self
    }

    /// Token type, empty if never set.
    #[must_use]
    pub fn token_type(&self) -> &str {
        self.token_type.as_deref().unwrap_or_default()
    }

    /// Append an audience (`aud`). Order is kept and duplicates are allowed.
    pub fn add_audience(&mut self, audience: impl Into<String>) -> &mut Self {
        self.audiences.push(audience.into());
        self
    }

    /// Audiences in insertion order.
    #[must_use]
    pub fn audiences(&self) -> &[String] {
        &self.audiences
    }

    /// Set the expiration time (`exp`).
    pub fn set_expiration(&mut self, at: DateTime<Utc>) -> &mut Self {
        self.expiration = Some(at);
        self
    }

    /// Expiration time.
    #[must_use]
    pub fn expiration(&self) -> Option<DateTime<Utc>> {
        self.expiration
    }

    /// Set the start of validity (`nbf`).
    pub fn set_not_before(&mut self, at: DateTime<Utc>) -> &mut Self {
        self.not_before = Some(at);
        self
    }

    /// Start of validity.
    #[must_use]
    pub fn not_before(&self) -> Option<DateTime<Utc>> {
        self.not_before
    }

    /// Set the issue time (`iat`).
    pub fn set_issued_at(&mut self, at: DateTime<Utc>) -> &mut Self {
        self.issued_at = Some(at);
        self
    }

    /// Issue time.
    #[must_use]
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.issued_at
    }

    /// Add a custom claim. Reserved names are ignored without error.
    pub fn add_claim(&mut self, key: impl Into<String>, value: impl Into<ClaimValue>) -> &mut Self {
        let key = key.into();
        if !is_reserved(&key) {
            self.custom.insert(key, value.into());
        }
        self
    }

    /// Remove a custom claim. Reserved names are ignored without error.
    pub fn remove_claim(&mut self, key: &str) -> &mut Self {
        if !is_reserved(key) {
            self.custom.remove(key);
        }
        self
    }

    /// Look up any claim by name.
    ///
    /// Reserved names dispatch to their typed accessor: strings come back as
    /// [`ClaimValue::String`] (empty when unset), audiences as
    /// [`ClaimValue::Strings`], timestamps as [`ClaimValue::Timestamp`] or
    /// `None` when unset. Other keys are looked up verbatim.
    #[must_use]
    pub fn claim(&self, key: &str) -> Option<ClaimValue> {
        match ReservedClaim::from_key(key) {
            Some(reserved) => self.reserved(reserved),
            None => self.custom.get(key).cloned(),
        }
    }

    /// Value of a reserved claim through its typed accessor.
    #[must_use]
    pub fn reserved(&self, claim: ReservedClaim) -> Option<ClaimValue> {
        match claim {
            ReservedClaim::Issuer => Some(self.issuer().into()),
            ReservedClaim::Subject => Some(self.subject().into()),
            ReservedClaim::Audience => Some(ClaimValue::Strings(self.audiences.clone())),
            ReservedClaim::Expiration => self.expiration.map(ClaimValue::Timestamp),
            ReservedClaim::NotBefore => self.not_before.map(ClaimValue::Timestamp),
            ReservedClaim::IssuedAt => self.issued_at.map(ClaimValue::Timestamp),
            ReservedClaim::Id => Some(self.id().into()),
            ReservedClaim::TokenType => Some(self.token_type().into()),
        }
    }

    /// True when the named claim has been set.
    #[must_use]
    pub fn contains_claim(&self, key: &str) -> bool {
        match ReservedClaim::from_key(key) {
            Some(ReservedClaim::Audience) => !self.audiences.is_empty(),
            Some(ReservedClaim::Expiration) => self.expiration.is_some(),
            Some(ReservedClaim::NotBefore) => self.not_before.is_some(),
            Some(ReservedClaim::IssuedAt) => self.issued_at.is_some(),
            Some(reserved) => self.reserved_str(reserved).is_some(),
            None => self.custom.contains_key(key),
        }
    }

    /// Custom claims in key order.
    pub fn custom_claims(&self) -> impl Iterator<Item = (&str, &ClaimValue)> {
        self.custom.iter().map(|(k, v)| (k.as_str(), v))
    }

    // Reserved string claims as set, without the empty-string default.
    pub(crate) fn reserved_str(&self, claim: ReservedClaim) -> Option<&str> {
        match claim {
            ReservedClaim::Issuer => self.issuer.as_deref(),
            ReservedClaim::Subject => self.subject.as_deref(),
            ReservedClaim::Id => self.id.as_deref(),
            ReservedClaim::TokenType => self.token_type.as_deref(),
            _ => None,
        }
    }

    // Decoding writes wire entries verbatim, including variants of reserved
    // names that `add_claim` would refuse.
    pub(crate) fn insert_custom(&mut self, key: String, value: ClaimValue) {
        self.custom.insert(key, value);
    }

    pub(crate) fn set_audiences(&mut self, audiences: Vec<String>) {
        self.audiences = audiences;
    }
}

impl Default for ClaimSet {
    fn default() -> Self {
        Self::new()
    }
}
