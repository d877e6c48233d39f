//! Lark custom bot signature.
//!
//! The bot expects `timestamp + "\n" + secret` to be used as the HMAC-SHA256
//! *key* over an empty message, base64 encoded. This is the inverse of the
//! usual arrangement but it is what the receiving side verifies against, so
//! it must not be swapped.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signature fields added to a signed payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignaturePair {
    /// Unix seconds, as a decimal string.
    pub timestamp: String,
    pub sign: String,
}

impl SignaturePair {
    pub fn at(timestamp_secs: i64, secret: &str) -> Self {
        let timestamp = timestamp_secs.to_string();
        let sign = sign(&timestamp, secret);
        Self { timestamp, sign }
    }

    pub fn now(secret: &str) -> Self {
        Self::at(Utc::now().timestamp(), secret)
    }
}

pub fn sign(timestamp: &str, secret: &str) -> String {
    let key = format!("{timestamp}\n{secret}");
    let mac = HmacSha256::new_from_slice(key.as_bytes())
        .unwrap_or_else(|_| unreachable!("HMAC accepts keys of any length"));
    BASE64.encode(mac.finalize().into_bytes())
}
