//! Shared Access Signature token generation.

use super::encode::{encode_pairs, quote_plus};
use super::time::{SystemTimeSource, TimeSource};
use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt;

/// Prefix of every rendered token.
pub const TOKEN_PREFIX: &str = "SharedAccessSignature ";

/// Default lifetime of a token in seconds.
pub const DEFAULT_EXPIRY_SECS: i64 = 3600;

/// A generated Shared Access Signature.
///
/// The [`Display`](fmt::Display) implementation renders the full bearer
/// token, `SharedAccessSignature sr=..&sig=..&se=..[&skn=..]`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct SasToken {
    /// Resource URI the token authorizes, unescaped.
    pub resource_uri: String,
    /// Base64 HMAC-SHA256 signature.
    pub signature: String,
    /// Absolute expiry as Unix seconds.
    pub expires_at: i64,
    /// Optional shared access policy name.
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub policy_name: Option<String>,
}

impl SasToken {
    /// Render the query part of the token, fields in `sr`, `sig`, `se`, `skn` order.
    pub fn to_query(&self) -> String {
        let expires_at = self.expires_at.to_string();
        let mut pairs = vec![
            ("sr", self.resource_uri.as_str()),
            ("sig", self.signature.as_str()),
            ("se", expires_at.as_str()),
        ];
        if let Some(policy) = &self.policy_name {
            pairs.push(("skn", policy.as_str()));
        }
        encode_pairs(pairs)
    }
}

impl fmt::Display for SasToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{TOKEN_PREFIX}{}", self.to_query())
    }
}

/// Build the string that gets signed: the quote-plus encoded URI, a newline,
/// and the absolute expiry.
pub fn signing_payload(uri: &str, expires_at: i64) -> String {
    format!("{}\n{}", quote_plus(uri), expires_at)
}

/// Build the resource URI of a device registration, `{scope_id}/registrations/{registration_id}`.
pub fn registration_uri(scope_id: &str, registration_id: &str) -> String {
    format!("{scope_id}/registrations/{registration_id}")
}

/// Generate a token valid for `expiry` seconds from now.
///
/// `key` is the base64-encoded signing secret. A key that does not decode
/// yields [`Error::KeyDecode`]. Zero and negative `expiry` values are
/// accepted and produce a token that is already expired.
///
/// # Example
///
/// ```rust
/// use dps_tools::sas::generate_sas_token;
///
/// let token = generate_sas_token("scope/registrations/dev1", "c2VjcmV0", None, 3600).unwrap();
/// assert!(token.starts_with("SharedAccessSignature sr=scope%2Fregistrations%2Fdev1&sig="));
/// ```
pub fn generate_sas_token(
    uri: &str,
    key: &str,
    policy_name: Option<&str>,
    expiry: i64,
) -> Result<String> {
    let token = generate_sas_token_at(uri, key, policy_name, expiry, &SystemTimeSource)?;
    Ok(token.to_string())
}

/// Generate a token against an explicit time source.
pub fn generate_sas_token_at<T: TimeSource + ?Sized>(
    uri: &str,
    key: &str,
    policy_name: Option<&str>,
    expiry: i64,
    clock: &T,
) -> Result<SasToken> {
    let now = clock.now_unix()?;
    let expires_at = now
        .checked_add(expiry)
        .ok_or(Error::ExpiryOverflow { expiry })?;

    let payload = signing_payload(uri, expires_at);
    tracing::debug!(payload = %payload.escape_debug(), "signing payload");

    let signature = sign(&payload, key)?;

    let token = SasToken {
        resource_uri: uri.to_string(),
        signature,
        expires_at,
        policy_name: policy_name.map(str::to_string),
    };
    tracing::debug!(token = %token, "generated token");
    Ok(token)
}

/// HMAC-SHA256 `payload` with the base64-decoded `key`, returning base64.
fn sign(payload: &str, key: &str) -> Result<String> {
    let key_bytes = STANDARD.decode(key.trim())?;
    let mut mac = Hmac::<Sha256>::new_from_slice(&key_bytes)?;
    mac.update(payload.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}
