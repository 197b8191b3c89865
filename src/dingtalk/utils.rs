use base64::{Engine as _, engine::general_purpose};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signature for robots with "加签" enabled:
/// base64(HMAC-SHA256(secret, "{timestamp_ms}\n{secret}")).
pub fn sign_webhook(timestamp_ms: i64, secret: &str) -> anyhow::Result<String> {
    let string_to_sign = format!("{timestamp_ms}\n{secret}");

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())?;
    mac.update(string_to_sign.as_bytes());

    Ok(general_purpose::STANDARD.encode(mac.finalize().into_bytes()))
}
