//! Print an Argon2id hash for a password, for seeding fixtures.
//!
//! Usage: cargo run -p passgate-auth --example gen_hash -- <password>

use passgate_auth::hash_password;

fn main() {
    let Some(password) = std::env::args().nth(1) else {
        eprintln!("usage: gen_hash <password>");
        std::process::exit(2);
    };
    match hash_password(&password) {
        Ok(hash) => println!("{hash}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
