//! Fuzz target for password hashing.
//!
//! Hashes arbitrary UTF-8 input with low-cost parameters and checks that the
//! hash verifies for the same input and not for a different one.
//!
//! Run with:
//! cargo +nightly fuzz run fuzz_password_hash -- -max_total_time=600

#![no_main]

use libfuzzer_sys::fuzz_target;
use passgate_auth::PasswordHasher;

fuzz_target!(|data: &[u8]| {
    let Ok(password) = std::str::from_utf8(data) else {
        return;
    };
    if password.len() > 4096 {
        return;
    }

    let Ok(hasher) = PasswordHasher::with_params(1024, 1, 1) else {
        return;
    };

    match hasher.hash(password) {
        Ok(hash) => {
            assert!(hash.starts_with("$argon2id$"));
            assert_eq!(hasher.verify(password, &hash).ok(), Some(true));

            let other = format!("{password}x");
            assert_eq!(hasher.verify(&other, &hash).ok(), Some(false));
        }
        Err(e) => assert!(password.is_empty() && e.is_password_error()),
    }

    // Arbitrary text as a stored hash must never panic.
    let _ = hasher.verify("password", password);
});
