use std::fmt;
use std::marker::PhantomData;

use crate::error::HashError;
use crate::sha::Variant;
use crate::sha::block::BlockBuffer;
use crate::sha::compress::{compress, INITIAL_REGISTERS};
use crate::sha::digest::{Digest, DIGEST_SIZE};
use crate::trace::{NoopSink, TraceSink};
use crate::util::from_words;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Accepting,
    Finalized,
}

/// An in-progress SHA-0 or SHA-1 computation.
///
/// Feed input with [`update`](Hasher::update) as many times as needed, then
/// call one of the finalizers exactly once. A finalized hasher rejects any
/// further input with [`HashError::AlreadyFinalized`]; start a new one instead.
pub struct Hasher<V: Variant, S: TraceSink = NoopSink> {
    registers: [u32; 5],
    total_bits: u64,
    buffer: BlockBuffer,
    blocks_processed: u64,
    state: State,
    sink: S,
    variant: PhantomData<V>,
}

impl<V: Variant> Hasher<V> {
    pub fn new() -> Self {
        Self::with_sink(NoopSink)
    }
}

impl<V: Variant> Default for Hasher<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variant, S: TraceSink> Hasher<V, S> {
    pub fn with_sink(sink: S) -> Self {
        Hasher {
            registers: INITIAL_REGISTERS,
            total_bits: 0,
            buffer: BlockBuffer::new(),
            blocks_processed: 0,
            state: State::Accepting,
            sink,
            variant: PhantomData,
        }
    }

    pub fn update(&mut self, data: &[u8]) -> Result<(), HashError> {
        self.ensure_accepting()?;
        let mut remaining = data;
        while !remaining.is_empty() {
            let taken = self.buffer.fill(remaining);
            remaining = &remaining[taken..];
            if self.buffer.is_full() {
                self.flush();
                self.total_bits = self.total_bits.wrapping_add(512);
            }
        }
        Ok(())
    }

    /// Absorbs the first `length` bytes of `data`.
    pub fn update_prefix(&mut self, data: &[u8], length: usize) -> Result<(), HashError> {
        self.ensure_accepting()?;
        let prefix = data.get(..length).ok_or(HashError::InvalidArgument {
            requested: length,
            available: data.len(),
        })?;
        self.update(prefix)
    }

    /// Pads the message and writes the digest into `out`.
    pub fn finalize_into(&mut self, out: &mut [u8; DIGEST_SIZE]) -> Result<(), HashError> {
        self.ensure_accepting()?;
        self.pad();
        self.state = State::Finalized;
        *out = from_words(&self.registers);
        Ok(())
    }

    pub fn finish(&mut self) -> Result<Digest, HashError> {
        let mut out = [0; DIGEST_SIZE];
        self.finalize_into(&mut out)?;
        Ok(Digest::from(out))
    }

    /// Consumes the hasher and returns the digest.
    pub fn finalize(mut self) -> Digest {
        if self.state == State::Accepting {
            self.pad();
        }
        Digest::from(from_words(&self.registers))
    }

    pub fn is_finalized(&self) -> bool {
        self.state == State::Finalized
    }

    pub fn blocks_processed(&self) -> u64 {
        self.blocks_processed
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn ensure_accepting(&self) -> Result<(), HashError> {
        match self.state {
            State::Accepting => Ok(()),
            State::Finalized => Err(HashError::AlreadyFinalized),
        }
    }

    fn flush(&mut self) {
        if let Some(block) = self.buffer.take_block() {
            compress::<V>(&mut self.registers, block);
            self.blocks_processed += 1;
            self.sink.block_compressed(V::NAME, self.blocks_processed, &self.registers);
        }
    }

    fn pad(&mut self) {
        self.total_bits = self.total_bits.wrapping_add(self.buffer.len() as u64 * 8);
        self.buffer.push(0x80);
        if self.buffer.len() > 56 {
            self.sink.padding_overflow(V::NAME);
            self.buffer.zero_until(64);
            self.flush();
        }
        self.buffer.zero_until(56);
        self.buffer.write_length(self.total_bits);
        self.sink.final_block(V::NAME, self.total_bits);
        self.flush();
    }
}

impl<V: Variant, S: TraceSink + Clone> Clone for Hasher<V, S> {
    fn clone(&self) -> Self {
        Hasher {
            registers: self.registers,
            total_bits: self.total_bits,
            buffer: self.buffer.clone(),
            blocks_processed: self.blocks_processed,
            state: self.state,
            sink: self.sink.clone(),
            variant: PhantomData,
        }
    }
}

impl<V: Variant, S: TraceSink> fmt::Debug for Hasher<V, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Hasher")
            .field("algorithm", &V::NAME)
            .field("total_bits", &self.total_bits)
            .field("buffered", &self.buffer.len())
            .field("blocks_processed", &self.blocks_processed)
            .field("state", &self.state)
            .finish()
    }
}
