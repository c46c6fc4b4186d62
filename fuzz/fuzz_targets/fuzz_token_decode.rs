//! Fuzz target for bearer token verification.
//!
//! Arbitrary input must be rejected as a token error, never panic and never
//! surface as an internal failure.
//!
//! Run with:
//! cargo +nightly fuzz run fuzz_token_decode -- -max_total_time=600

#![no_main]

use libfuzzer_sys::fuzz_target;
use passgate_auth::{authorize, AccessDenied, SigningSecret, TokenAuthority};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let secret = SigningSecret::from("fuzz-secret-for-token-decode-target");
    let Ok(authority) = TokenAuthority::new(secret, chrono::Duration::hours(1)) else {
        return;
    };

    if let Err(e) = authority.verify(input) {
        assert!(e.is_token_error(), "unexpected error kind: {e:?}");
    }

    let header = format!("Bearer {input}");
    match authorize(Some(&header), &authority) {
        Ok(_) | Err(AccessDenied::Forbidden) => {}
        Err(AccessDenied::Unauthenticated) => panic!("present header reported as absent"),
    }
});
