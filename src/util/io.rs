use std::io::{self, BufReader, Read, Write, copy};

use crate::error::HashError;
use crate::sha::{Algorithm, AnyHasher, Variant};
use crate::sha::digest::Digest;
use crate::sha::hasher::Hasher;
use crate::trace::TraceSink;

fn to_io_error(e: HashError) -> io::Error {
    io::Error::other(e)
}

impl<V: Variant, S: TraceSink> Write for Hasher<V, S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf).map_err(to_io_error)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: TraceSink> Write for AnyHasher<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf).map_err(to_io_error)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Hashes everything `reader` yields.
pub fn digest_reader<R: Read>(algorithm: Algorithm, reader: R) -> io::Result<Digest> {
    let mut reader = BufReader::new(reader);
    let mut hasher = algorithm.hasher();
    copy(&mut reader, &mut hasher)?;
    hasher.finish().map_err(to_io_error)
}
