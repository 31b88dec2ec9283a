//! Diagnostic side channel for the compression engine.
//!
//! The hasher reports what it is doing to a [`TraceSink`]. Nothing it reports
//! feeds back into the digest, so [`NoopSink`] is the default and any sink may
//! drop events.

use tracing::trace;

use crate::util::to_hex;
use crate::util::from_words;

pub trait TraceSink {
    /// Called after each block is folded into the registers.
    fn block_compressed(&self, _algorithm: &'static str, _block_number: u64, _registers: &[u32; 5]) {}

    /// The final partial block left no room for the length field, so an
    /// extra block is being compressed.
    fn padding_overflow(&self, _algorithm: &'static str) {}

    /// The block carrying the message length is about to be compressed.
    fn final_block(&self, _algorithm: &'static str, _total_bits: u64) {}
}

impl<T: TraceSink + ?Sized> TraceSink for &T {
    fn block_compressed(&self, algorithm: &'static str, block_number: u64, registers: &[u32; 5]) {
        (**self).block_compressed(algorithm, block_number, registers)
    }

    fn padding_overflow(&self, algorithm: &'static str) {
        (**self).padding_overflow(algorithm)
    }

    fn final_block(&self, algorithm: &'static str, total_bits: u64) {
        (**self).final_block(algorithm, total_bits)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

/// Forwards events to `tracing` at trace level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn block_compressed(&self, algorithm: &'static str, block_number: u64, registers: &[u32; 5]) {
        trace!(algorithm, block = block_number, registers = %to_hex(&from_words(registers)), "processed block");
    }

    fn padding_overflow(&self, algorithm: &'static str) {
        trace!(algorithm, "final block does not satisfy 448 mod 512, compressing an extra block");
    }

    fn final_block(&self, algorithm: &'static str, total_bits: u64) {
        trace!(algorithm, total_bits, "processing final block with padding and message length");
    }
}
