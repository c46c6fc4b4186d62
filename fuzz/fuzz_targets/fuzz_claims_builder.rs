//! Fuzz target for the token claims builder.
//!
//! Run with:
//! cargo +nightly fuzz run fuzz_claims_builder -- -max_total_time=600

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use passgate_auth::{encode_token, SigningSecret, TokenAuthority, TokenClaims};
use passgate_core::{TokenId, UserId};

#[derive(Arbitrary, Debug)]
struct ClaimsInput {
    issued_at: Option<i64>,
    expiration: Option<i64>,
    lifetime_secs: Option<i32>,
    with_jwt_id: bool,
    with_subject: bool,
}

fuzz_target!(|input: ClaimsInput| {
    let subject = UserId::new();
    let mut builder = TokenClaims::builder();

    if input.with_subject {
        builder = builder.subject(subject);
    }
    if let Some(iat) = input.issued_at {
        builder = builder.issued_at(iat);
    }
    if let Some(exp) = input.expiration {
        builder = builder.expiration(exp);
    }
    if let Some(secs) = input.lifetime_secs {
        builder = builder.expires_in(chrono::Duration::seconds(i64::from(secs)));
    }
    let jti = TokenId::new();
    if input.with_jwt_id {
        builder = builder.jwt_id(jti);
    }

    let Ok(claims) = builder.build() else {
        assert!(!input.with_subject);
        return;
    };
    assert_eq!(claims.subject(), subject);
    assert_eq!(claims.jti == jti, input.with_jwt_id);

    let _ = serde_json::to_string(&claims);

    // A signed token either round-trips or is rejected as a token error.
    let secret = SigningSecret::from("fuzz-secret-for-claims-builder-target");
    let Ok(token) = encode_token(&claims, &secret) else {
        return;
    };
    let Ok(authority) = TokenAuthority::new(secret, chrono::Duration::hours(1)) else {
        return;
    };
    match authority.verify(&token) {
        Ok(decoded) => assert_eq!(decoded, claims),
        Err(e) => assert!(e.is_token_error(), "unexpected error kind: {e:?}"),
    }
});
