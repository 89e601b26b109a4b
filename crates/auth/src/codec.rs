//! Signed credential encoding and verification
//!
//! Wire format: `base64url(header).base64url(payload).base64url(signature)`,
//! unpadded, where the signature is HMAC-SHA256 over `header "." payload`.
//! The header is fixed and never read back: verification always uses
//! HMAC-SHA256 regardless of what a presented header claims.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::claims::ClaimSet;
use crate::clock::check_expiry;
use crate::config::SharedSecret;
use crate::error::VerificationError;

type HmacSha256 = Hmac<Sha256>;

const HEADER_JSON: &str = r#"{"alg":"HMAC-SHA256","typ":"credential"}"#;

/// Encodes and verifies credentials with one shared secret
#[derive(Debug, Clone)]
pub struct CredentialCodec {
    secret: SharedSecret,
}

impl CredentialCodec {
    pub fn new(secret: SharedSecret) -> Self {
        Self { secret }
    }

    /// Serialize and sign a claim set. Deterministic for identical input.
    pub fn encode(&self, claims: &ClaimSet) -> String {
        let header = URL_SAFE_NO_PAD.encode(HEADER_JSON);
        let payload = URL_SAFE_NO_PAD.encode(payload_json(claims));
        let signature = self.sign(&header, &payload);
        format!("{header}.{payload}.{signature}")
    }

    /// Check structure, signature and expiry, returning the claim set.
    ///
    /// The credential type is not checked here; callers narrow the result
    /// with `ClaimSet::into_access` / `ClaimSet::into_refresh`.
    pub fn verify(&self, credential: &str, now: i64) -> Result<ClaimSet, VerificationError> {
        let (header, payload, signature) =
            split_segments(credential).ok_or(VerificationError::MalformedCredential)?;

        let expected = self.sign(header, payload);
        if !bool::from(expected.as_bytes().ct_eq(signature.as_bytes())) {
            return Err(VerificationError::InvalidSignature);
        }

        let claims = decode_payload(payload).ok_or(VerificationError::MalformedCredential)?;
        check_expiry(&claims, now)?;

        Ok(claims)
    }

    /// Decode the payload without checking the signature or expiry.
    ///
    /// Diagnostics only. Never authorize anything from this result.
    pub fn decode_unverified(credential: &str) -> Option<ClaimSet> {
        let (_, payload, _) = split_segments(credential)?;
        decode_payload(payload)
    }

    fn sign(&self, header: &str, payload: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(header.as_bytes());
        mac.update(b".");
        mac.update(payload.as_bytes());
        URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
    }
}

fn split_segments(credential: &str) -> Option<(&str, &str, &str)> {
    let mut parts = credential.split('.');
    let header = parts.next()?;
    let payload = parts.next()?;
    let signature = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((header, payload, signature))
}

fn decode_payload(segment: &str) -> Option<ClaimSet> {
    let bytes = URL_SAFE_NO_PAD.decode(segment).ok()?;
    serde_json::from_slice(&bytes).ok()
}

fn payload_json(claims: &ClaimSet) -> String {
    serde_json::json!({
        "sub": claims.sub,
        "email": claims.email,
        "type": claims.credential_type.as_str(),
        "iat": claims.iat,
        "exp": claims.exp,
    })
    .to_string()
}
