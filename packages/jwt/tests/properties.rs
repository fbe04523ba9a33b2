//! Property tests for claim-set round trips and reserved-name protection

use chrono::{DateTime, Utc};
use proptest::prelude::*;
use simple_jwt::{ClaimSet, ClaimValue, Jwt, ReservedClaim};

fn timestamp() -> impl Strategy<Value = DateTime<Utc>> {
    // 1970 .. 2100, with sub-second noise that encoding truncates
    (0i64..4_102_444_800, 0u32..1_000_000_000)
        .prop_map(|(secs, nanos)| DateTime::from_timestamp(secs, nanos).unwrap_or_default())
}

fn custom_key() -> impl Strategy<Value = String> {
    "[a-z_]{4,12}".prop_filter("reserved", |k| ReservedClaim::from_key(k).is_none())
}

fn reserved_variant() -> impl Strategy<Value = String> {
    (
        prop::sample::select(ReservedClaim::ALL.to_vec()),
        prop::collection::vec(any::<bool>(), 3),
        "[ \t]{0,2}",
        "[ \t]{0,2}",
    )
        .prop_map(|(claim, upper, lead, trail)| {
            let name: String = claim
                .as_str()
                .chars()
                .zip(upper)
                .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
                .collect();
            format!("{lead}{name}{trail}")
        })
}

proptest! {
    #[test]
    fn round_trip_preserves_claims(
        id in "[ -~]{0,16}",
        issuer in "[ -~]{0,16}",
        subject in "\\PC{0,16}",
        token_type in "(access|refresh|[a-z]{1,8})",
        audiences in prop::collection::vec("[a-z0-9.-]{1,12}", 0..5),
        exp in timestamp(),
        nbf in timestamp(),
        iat in timestamp(),
        custom in prop::collection::btree_map(custom_key(), any::<i64>(), 0..4),
    ) {
        let mut claims = ClaimSet::new();
        claims
            .set_id(id.clone())
            .set_issuer(issuer.clone())
            .set_subject(subject.clone())
            .set_token_type(token_type.clone())
            .set_expiration(exp)
            .set_not_before(nbf)
            .set_issued_at(iat);
        for audience in &audiences {
            claims.add_audience(audience.clone());
        }
        for (key, value) in &custom {
            claims.add_claim(key.clone(), *value);
        }

        let jwt = Jwt::hs256();
        let decoded = jwt.decode(jwt.encode("secret", &claims).unwrap()).unwrap();

        prop_assert_eq!(decoded.id(), id.as_str());
        prop_assert_eq!(decoded.issuer(), issuer.as_str());
        prop_assert_eq!(decoded.subject(), subject.as_str());
        prop_assert_eq!(decoded.token_type(), token_type.as_str());
        prop_assert_eq!(decoded.audiences(), audiences.as_slice());
        prop_assert_eq!(decoded.expiration().map(|t| t.timestamp()), Some(exp.timestamp()));
        prop_assert_eq!(decoded.not_before().map(|t| t.timestamp()), Some(nbf.timestamp()));
        prop_assert_eq!(decoded.issued_at().map(|t| t.timestamp()), Some(iat.timestamp()));
        for (key, value) in &custom {
            prop_assert_eq!(decoded.claim(key), Some(ClaimValue::Number(*value)));
        }
    }

    #[test]
    fn add_claim_never_changes_reserved_values(key in reserved_variant(), value in "[a-z]{1,8}") {
        let mut claims = ClaimSet::new();
        claims.set_issuer("issuer").set_subject("subject").add_audience("one");
        let before = claims.clone();

        claims.add_claim(key.clone(), value);

        prop_assert_eq!(&claims, &before);
        prop_assert!(ReservedClaim::from_key(&key).is_some());
    }

    #[test]
    fn other_secrets_never_validate(secret in "[a-z]{8,16}", other in "[a-z]{8,16}") {
        prop_assume!(secret != other);
        let jwt = Jwt::hs256();
        let token = jwt.encode(&secret, &ClaimSet::new()).unwrap();
        prop_assert!(jwt.validate(&other, &token).unwrap_err().is_signature_error());
    }
}
