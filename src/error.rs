//! Error type shared by the token generator and the file formatter.

use std::io;
use std::path::PathBuf;
use std::time::SystemTimeError;

/// Errors produced by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The signing key is not valid base64.
    #[cfg(feature = "sas")]
    #[error("signing key is not valid base64: {0}")]
    KeyDecode(#[from] base64::DecodeError),

    /// The decoded key was rejected by the MAC implementation.
    #[cfg(feature = "sas")]
    #[error("signing key has an invalid length")]
    InvalidKeyLength(#[from] hmac::digest::InvalidLength),

    /// The system clock reports a time before the Unix epoch.
    #[error("system clock is before the Unix epoch: {0}")]
    Clock(#[from] SystemTimeError),

    /// `now + expiry` does not fit into a signed 64-bit timestamp.
    #[error("expiry of {expiry} seconds overflows the timestamp range")]
    ExpiryOverflow { expiry: i64 },

    /// No signing key was supplied on the command line or in the environment.
    #[error("no signing key given (use --key or set SAS_SIGNING_KEY)")]
    MissingKey,

    /// An accepted input file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing formatted output failed.
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

/// Result alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_read_names_the_path() {
        let err = Error::FileRead {
            path: PathBuf::from("certs/device.crt"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        let message = err.to_string();
        assert!(message.contains("certs/device.crt"));
        assert!(message.contains("No such file"));
    }

    #[test]
    fn missing_key_mentions_env_var() {
        assert!(Error::MissingKey.to_string().contains("SAS_SIGNING_KEY"));
    }
}
