//! Signing key generation.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::RngCore;

/// Size in bytes of a generated symmetric enrollment key.
pub const DEFAULT_KEY_BYTES: usize = 64;

/// Generate a random signing key of `len` bytes, base64 encoded.
///
/// Bytes come from the thread-local CSPRNG, so the result is suitable as a
/// real symmetric key and not just a test fixture.
///
/// # Example
///
/// ```rust
/// use dps_tools::sas::{generate_signing_key, DEFAULT_KEY_BYTES};
///
/// let key = generate_signing_key(DEFAULT_KEY_BYTES);
/// assert_eq!(key.len(), 88);
/// ```
pub fn generate_signing_key(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut bytes);
    STANDARD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sas::{generate_sas_token, TOKEN_PREFIX};
    use base64::Engine as _;

    #[test]
    fn test_key_decodes_to_requested_length() {
        let key = generate_signing_key(32);
        assert_eq!(STANDARD.decode(&key).unwrap().len(), 32);
    }

    #[test]
    fn test_keys_are_unique() {
        let key1 = generate_signing_key(DEFAULT_KEY_BYTES);
        let key2 = generate_signing_key(DEFAULT_KEY_BYTES);
        assert_ne!(key1, key2);
    }

    #[test]
    fn test_generated_key_signs() {
        let key = generate_signing_key(DEFAULT_KEY_BYTES);
        let token = generate_sas_token("scope/registrations/dev", &key, None, 60).unwrap();
        assert!(token.starts_with(TOKEN_PREFIX));
    }

    #[test]
    fn test_zero_length_key() {
        assert_eq!(generate_signing_key(0), "");
    }
}
