//! Shared Access Signature tokens for device provisioning.
//!
//! A token is an HMAC-SHA256 over the quote-plus encoded resource URI and an
//! absolute expiry, rendered as `SharedAccessSignature sr=..&sig=..&se=..`
//! with an optional trailing `skn` policy name.

mod encode;
mod key;
mod time;
mod token;

pub use encode::{encode_pairs, quote_plus};
pub use key::{generate_signing_key, DEFAULT_KEY_BYTES};
pub use time::{FixedTimeSource, SystemTimeSource, TimeSource};
pub use token::{
    generate_sas_token, generate_sas_token_at, registration_uri, signing_payload, SasToken,
    DEFAULT_EXPIRY_SECS, TOKEN_PREFIX,
};
