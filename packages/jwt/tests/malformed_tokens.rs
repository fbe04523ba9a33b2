//! Tests for malformed token handling - structural failures surface as errors, never panics

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use simple_jwt::{ErrorKind, Jwt, JwtError, TokenStatus};

const SECRET: &str = "thisistrullyasecret";

fn token_from(header: &str, payload: &str) -> String {
    format!(
        "{}.{}.{}",
        URL_SAFE_NO_PAD.encode(header),
        URL_SAFE_NO_PAD.encode(payload),
        URL_SAFE_NO_PAD.encode(b"signature")
    )
}

#[test]
fn test_wrong_segment_count() {
    let jwt = Jwt::hs256();
    for token in ["", "abc", "abc.def", "a.b.c.d", "...."] {
        assert_eq!(
            jwt.decode(token).map_err(|e| e.kind()),
            Err(ErrorKind::MalformedToken),
            "decode {token:?}"
        );
        assert_eq!(jwt.status(SECRET, token), TokenStatus::Malformed);
    }
}

#[test]
fn test_invalid_base64() {
    let jwt = Jwt::hs256();
    assert!(matches!(
        jwt.decode("!!!.e30.c2ln"),
        Err(JwtError::MalformedToken(_))
    ));
    assert!(matches!(
        jwt.validate(SECRET, "eyJhbGciOiJIUzI1NiJ9.%%%.c2ln"),
        Err(JwtError::MalformedToken(_))
    ));
}

#[test]
fn test_header_must_name_an_algorithm() {
    let jwt = Jwt::hs256();
    assert!(matches!(
        jwt.decode(token_from(r#"{"typ":"JWT"}"#, "{}")),
        Err(JwtError::MalformedToken(_))
    ));
    assert!(matches!(
        jwt.decode(token_from("not json", "{}")),
        Err(JwtError::MalformedToken(_))
    ));
}

#[test]
fn test_payload_must_be_an_object() {
    let jwt = Jwt::hs256();
    for payload in ["[]", "\"text\"", "42", "null", "{"] {
        assert!(
            matches!(
                jwt.decode(token_from(r#"{"alg":"HS256"}"#, payload)),
                Err(JwtError::MalformedToken(_))
            ),
            "payload {payload:?}"
        );
    }
}

#[test]
fn test_reserved_claims_with_wrong_types() {
    let jwt = Jwt::hs256();
    for payload in [
        r#"{"iss": 1}"#,
        r#"{"sub": ["a"]}"#,
        r#"{"aud": [1]}"#,
        r#"{"exp": "tomorrow"}"#,
        r#"{"nbf": true}"#,
        r#"{"jti": {}}"#,
    ] {
        assert!(
            matches!(
                jwt.decode(token_from(r#"{"alg":"HS256"}"#, payload)),
                Err(JwtError::MalformedToken(_))
            ),
            "payload {payload}"
        );
    }
}

#[test]
fn test_unsigned_token_is_rejected() {
    let jwt = Jwt::hs256();
    let token = token_from(r#"{"alg":"none"}"#, r#"{"sub":"subject"}"#);

    // Structure is fine, so decoding works
    assert_eq!(jwt.decode(&token).map(|c| c.subject().to_string()), Ok("subject".into()));

    assert_eq!(
        jwt.validate(SECRET, &token),
        Err(JwtError::UnsupportedAlgorithm("none".into()))
    );
}

#[test]
fn test_lenient_decoding() {
    let jwt = Jwt::hs256();
    let claims = jwt
        .decode(token_from(
            r#"{"alg":"HS256"}"#,
            r#"{"aud":"one","exp":1700000000.75,"nbf":null}"#,
        ))
        .expect("decodes");

    assert_eq!(claims.audiences(), ["one"]);
    assert_eq!(claims.expiration().map(|t| t.timestamp()), Some(1_700_000_000));
    assert_eq!(claims.not_before(), None);
}
