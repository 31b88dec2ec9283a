use std::fmt;
use std::str::FromStr;

use crate::error::HashError;
use crate::util::{from_hex, to_hex};

pub const DIGEST_SIZE: usize = 20;

/// A 160-bit SHA-0 or SHA-1 digest in big-endian register order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        to_hex(&self.0)
    }

    pub fn from_hex(text: &str) -> Result<Self, HashError> {
        let bytes = from_hex(text)?;
        let arr: [u8; DIGEST_SIZE] = bytes.try_into().map_err(|_| HashError::InvalidHexLength(text.len()))?;
        Ok(Digest(arr))
    }
}

impl From<[u8; DIGEST_SIZE]> for Digest {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Digest(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_SIZE] {
    fn from(digest: Digest) -> [u8; DIGEST_SIZE] {
        digest.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = HashError;
    fn from_str(s: &str) -> Result<Self, HashError> {
        Digest::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_SHA1: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";

    #[test]
    fn display_matches_hex() {
        let digest: Digest = EMPTY_SHA1.parse().unwrap();
        assert_eq!(digest.to_string(), EMPTY_SHA1);
        assert_eq!(format!("{digest:x}"), EMPTY_SHA1);
        assert_eq!(digest.as_bytes()[0], 0xda);
        assert_eq!(digest.as_bytes()[19], 0x09);
    }

    #[test]
    fn parse_accepts_uppercase() {
        let lower: Digest = EMPTY_SHA1.parse().unwrap();
        let upper: Digest = EMPTY_SHA1.to_uppercase().parse().unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!("abcd".parse::<Digest>(), Err(HashError::InvalidHexLength(4)));
        assert_eq!(format!("{EMPTY_SHA1}00").parse::<Digest>(), Err(HashError::InvalidHexLength(42)));
    }
}
