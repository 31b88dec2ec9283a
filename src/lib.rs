//! Streaming SHA-0 and SHA-1 digests.
//!
//! ```
//! use legacy_sha::{sha1, Sha1Hasher};
//!
//! let mut hasher = Sha1Hasher::new();
//! hasher.update(b"ab").unwrap();
//! hasher.update(b"c").unwrap();
//! assert_eq!(hasher.finalize(), sha1(b"abc"));
//! assert_eq!(sha1(b"abc").to_hex(), "a9993e364706816aba3e25717850c26c9cd0d89d");
//! ```
//!
//! These algorithms are broken for collision resistance. Use them only where
//! an existing format or protocol demands them.

mod error;
mod sha;
mod trace;
mod util;

pub use error::HashError;
pub use sha::{sha0, sha1, Algorithm, AnyHasher, Sha0, Sha0Hasher, Sha1, Sha1Hasher, Variant};
pub use sha::block::{BlockBuffer, BLOCK_SIZE};
pub use sha::compress::{compress, INITIAL_REGISTERS};
pub use sha::digest::{Digest, DIGEST_SIZE};
pub use sha::hasher::Hasher;
pub use trace::{NoopSink, TraceSink, TracingSink};
pub use util::{from_hex, to_hex};
pub use util::io::digest_reader;
