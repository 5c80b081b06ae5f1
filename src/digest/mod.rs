//! Digest (hash) computation.
//!
//! MD5 is implemented from scratch in [`md5`]; the SHA family is delegated
//! to the RustCrypto `sha1`/`sha2` crates. All output is lowercase hex, two
//! characters per byte.

pub mod md5;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use std::fmt;

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// MD5 (128-bit, RFC 1321)
    Md5,
    /// SHA-1 (160-bit)
    Sha1,
    /// SHA-256 (256-bit)
    Sha256,
    /// SHA-512 (512-bit)
    Sha512,
}

impl Algorithm {
    /// All supported algorithms, in display order.
    pub const ALL: [Self; 4] = [Self::Md5, Self::Sha1, Self::Sha256, Self::Sha512];

    /// Computes the digest of `data` as a lowercase hex string.
    #[must_use]
    pub fn hex_digest(self, data: &[u8]) -> String {
        match self {
            Self::Md5 => md5::hex_digest(data),
            Self::Sha1 => to_hex(Sha1::digest(data).as_slice()),
            Self::Sha256 => to_hex(Sha256::digest(data).as_slice()),
            Self::Sha512 => to_hex(Sha512::digest(data).as_slice()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        };
        write!(f, "{name}")
    }
}

/// Encodes bytes as lowercase hex, two characters per byte.
#[must_use]
pub fn to_hex(bytes: &[u8]) -> String {
    use std::fmt::Write;

    bytes.iter().fold(
        String::with_capacity(bytes.len() * 2),
        |mut hex, byte| {
            let _ = write!(hex, "{byte:02x}");
            hex
        },
    )
}
