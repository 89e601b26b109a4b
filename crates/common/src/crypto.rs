//! Password hashing utilities shared across PulseFit crates
//!
//! Stored hashes are argon2 PHC strings. Verification is a one-way
//! comparison; the credential subsystem never sees plaintext beyond
//! the login request.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Verify a candidate password against a stored PHC hash.
///
/// Malformed stored hashes verify as `false` rather than erroring so a
/// corrupt row cannot be distinguished from a wrong password by the caller.
pub fn verify_password(candidate: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash is not a valid PHC string");
            false
        }
    }
}

/// Well-formed argon2id PHC string with the default cost parameters that
/// matches no password. Checked against when a login email is unknown.
const UNKNOWN_ACCOUNT_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$MS/njUbpGu+bT9xuF3y9LQ$QRmB9qZEzcYS/gDfjdAu9OvbMqzjWjMz66vdcQwxNYo";

/// Verify a login attempt against the account's stored hash, if any.
///
/// A missing account still runs a full argon2 verification so the two
/// failure paths cost the same; the result is always `false` then.
pub fn verify_login_password(candidate: &str, stored_hash: Option<&str>) -> bool {
    match stored_hash {
        Some(hash) => verify_password(candidate, hash),
        None => {
            let _ = verify_password(candidate, UNKNOWN_ACCOUNT_HASH);
            false
        }
    }
}

/// Hash a password into a PHC string with a random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut argon2::password_hash::rand_core::OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}
