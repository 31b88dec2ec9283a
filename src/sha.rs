//! SHA-0 and SHA-1 (FIPS 180 and FIPS 180-1).
//!
//! Both algorithms share one compression routine. They differ only in the
//! message schedule expansion, where SHA-1 rotates each expanded word left by
//! one bit and SHA-0 does not. That difference is carried by
//! [`Variant::SCHEDULE_ROTATION`].
//!
//! Neither algorithm is collision resistant. They are provided for
//! interoperability with systems that still require them.

use std::fmt;
use std::str::FromStr;

use crate::error::HashError;
use crate::trace::TraceSink;

pub mod block;
pub mod compress;
pub mod digest;
pub mod hasher;

use self::digest::Digest;
use self::hasher::Hasher;

pub trait Variant {
    const NAME: &'static str;
    /// Left rotation applied to each expanded message schedule word.
    const SCHEDULE_ROTATION: u32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sha0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sha1;

impl Variant for Sha0 {
    const NAME: &'static str = "SHA-0";
    const SCHEDULE_ROTATION: u32 = 0;
}

impl Variant for Sha1 {
    const NAME: &'static str = "SHA-1";
    const SCHEDULE_ROTATION: u32 = 1;
}

pub type Sha0Hasher = Hasher<Sha0>;
pub type Sha1Hasher = Hasher<Sha1>;

pub fn sha0(bytes: &[u8]) -> Digest {
    oneshot::<Sha0>(bytes)
}

pub fn sha1(bytes: &[u8]) -> Digest {
    oneshot::<Sha1>(bytes)
}

fn oneshot<V: Variant>(bytes: &[u8]) -> Digest {
    let mut hasher = Hasher::<V>::new();
    // a fresh hasher is always accepting
    let _ = hasher.update(bytes);
    hasher.finalize()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Sha0,
    Sha1,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Sha0 => Sha0::NAME,
            Algorithm::Sha1 => Sha1::NAME,
        }
    }

    pub fn digest(&self, bytes: &[u8]) -> Digest {
        match self {
            Algorithm::Sha0 => sha0(bytes),
            Algorithm::Sha1 => sha1(bytes),
        }
    }

    pub fn hasher(&self) -> AnyHasher {
        match self {
            Algorithm::Sha0 => AnyHasher::Sha0(Hasher::new()),
            Algorithm::Sha1 => AnyHasher::Sha1(Hasher::new()),
        }
    }

    pub fn hasher_with_sink<S: TraceSink>(&self, sink: S) -> AnyHasher<S> {
        match self {
            Algorithm::Sha0 => AnyHasher::Sha0(Hasher::with_sink(sink)),
            Algorithm::Sha1 => AnyHasher::Sha1(Hasher::with_sink(sink)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = HashError;
    fn from_str(s: &str) -> Result<Self, HashError> {
        match s.to_ascii_lowercase().as_str() {
            "sha0" | "sha-0" => Ok(Algorithm::Sha0),
            "sha1" | "sha-1" => Ok(Algorithm::Sha1),
            _ => Err(HashError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

/// A hasher whose algorithm is chosen at run time.
#[derive(Debug)]
pub enum AnyHasher<S: TraceSink = crate::trace::NoopSink> {
    Sha0(Hasher<Sha0, S>),
    Sha1(Hasher<Sha1, S>),
}

impl<S: TraceSink> AnyHasher<S> {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            AnyHasher::Sha0(_) => Algorithm::Sha0,
            AnyHasher::Sha1(_) => Algorithm::Sha1,
        }
    }

    pub fn update(&mut self, data: &[u8]) -> Result<(), HashError> {
        match self {
            AnyHasher::Sha0(hasher) => hasher.update(data),
            AnyHasher::Sha1(hasher) => hasher.update(data),
        }
    }

    pub fn update_prefix(&mut self, data: &[u8], length: usize) -> Result<(), HashError> {
        match self {
            AnyHasher::Sha0(hasher) => hasher.update_prefix(data, length),
            AnyHasher::Sha1(hasher) => hasher.update_prefix(data, length),
        }
    }

    pub fn finalize_into(&mut self, out: &mut [u8; digest::DIGEST_SIZE]) -> Result<(), HashError> {
        match self {
            AnyHasher::Sha0(hasher) => hasher.finalize_into(out),
            AnyHasher::Sha1(hasher) => hasher.finalize_into(out),
        }
    }

    pub fn finish(&mut self) -> Result<Digest, HashError> {
        match self {
            AnyHasher::Sha0(hasher) => hasher.finish(),
            AnyHasher::Sha1(hasher) => hasher.finish(),
        }
    }

    pub fn finalize(self) -> Digest {
        match self {
            AnyHasher::Sha0(hasher) => hasher.finalize(),
            AnyHasher::Sha1(hasher) => hasher.finalize(),
        }
    }
}
