//! Integration tests for the diagnostic sinks.

use std::sync::{Arc, Mutex};

use legacy_sha::{sha1, Algorithm, Hasher, NoopSink, Sha1, TraceSink, TracingSink};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;
    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[derive(Default)]
struct Counting {
    blocks: Mutex<u64>,
    overflows: Mutex<u64>,
}

impl TraceSink for Counting {
    fn block_compressed(&self, _algorithm: &'static str, _block_number: u64, _registers: &[u32; 5]) {
        *self.blocks.lock().unwrap() += 1;
    }

    fn padding_overflow(&self, _algorithm: &'static str) {
        *self.overflows.lock().unwrap() += 1;
    }
}

// LG-001: the tracing sink emits trace events without changing the digest
#[test]
fn test_lg001_tracing_sink_events() {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(captured.clone())
        .finish();

    let digest = tracing::subscriber::with_default(subscriber, || {
        let mut hasher = Hasher::<Sha1, _>::with_sink(TracingSink);
        hasher.update(&[b'a'; 60]).unwrap();
        hasher.finish().unwrap()
    });

    assert_eq!(digest, sha1(&[b'a'; 60]));
    let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("processed block"), "{output}");
    assert!(output.contains("block=2"), "{output}");
    assert!(output.contains("448 mod 512"), "{output}");
    assert!(output.contains("total_bits=480"), "{output}");
}

// LG-002: the tracing sink is harmless with no subscriber installed
#[test]
fn test_lg002_tracing_sink_without_subscriber() {
    let mut hasher = Algorithm::Sha1.hasher_with_sink(TracingSink);
    hasher.update(b"abc").unwrap();
    assert_eq!(hasher.finalize(), sha1(b"abc"));
}

// LG-003: a borrowed custom sink sees every compressed block
#[test]
fn test_lg003_borrowed_custom_sink() {
    let sink = Counting::default();
    let mut hasher = Algorithm::Sha0.hasher_with_sink(&sink);
    hasher.update(&[0; 130]).unwrap();
    hasher.finish().unwrap();
    assert_eq!(*sink.blocks.lock().unwrap(), 3);
    assert_eq!(*sink.overflows.lock().unwrap(), 0);

    let sink = Counting::default();
    let mut hasher = Algorithm::Sha1.hasher_with_sink(&sink);
    hasher.update(&[0; 60]).unwrap();
    hasher.finish().unwrap();
    assert_eq!(*sink.blocks.lock().unwrap(), 2);
    assert_eq!(*sink.overflows.lock().unwrap(), 1);
}

// LG-004: the no-op sink is the default
#[test]
fn test_lg004_default_sink() {
    let hasher: Hasher<Sha1> = Hasher::new();
    let _: &NoopSink = hasher.sink();
}
