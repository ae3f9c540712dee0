// tests/common.rs
//! Tracing helpers shared by the integration tests

#[cfg(feature = "logging")]
use std::io;
#[cfg(feature = "logging")]
use std::sync::{Arc, Mutex};

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Route library logs to the test output, filtered by `RUST_LOG`.
/// Repeated calls are ignored.
#[allow(dead_code)]
pub fn setup() {
    #[cfg(feature = "logging")]
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init();
}

/// Shared in-memory sink for [`capture_debug`]
#[cfg(feature = "logging")]
#[derive(Clone, Default)]
struct LogSink(Arc<Mutex<Vec<u8>>>);

#[cfg(feature = "logging")]
impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-local debug subscriber and return what it logged
#[cfg(feature = "logging")]
#[allow(dead_code)]
pub fn capture_debug(f: impl FnOnce()) -> String {
    let sink = LogSink::default();
    let writer = sink.clone();
    let subscriber = fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = sink.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}
