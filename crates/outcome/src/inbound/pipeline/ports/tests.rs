//! Tests for the tracing fault logger.

use super::*;
use rstest::rstest;
use std::io;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, Error)]
#[error("widget store failed")]
struct StoreFailed {
    #[source]
    source: io::Error,
}

/// Shared buffer collecting formatted log output.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().expect("log buffer lock").clone()).expect("UTF-8 logs")
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn log_with_capture(fault: &Fault) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();
    tracing::subscriber::with_default(subscriber, || TracingFaultLogger.log_fault(fault));
    logs.contents()
}

#[rstest]
fn tracing_logger_records_error_with_cause_chain() {
    let fault: Fault = Arc::new(StoreFailed {
        source: io::Error::other("disk on fire"),
    });

    let logs = log_with_capture(&fault);

    assert!(logs.contains("ERROR"), "expected error level in {logs}");
    assert!(logs.contains("unhandled fault converted to outcome"));
    assert!(logs.contains("error=widget store failed"));
    assert!(
        logs.contains(r#"causes=["disk on fire"]"#),
        "expected cause chain in {logs}"
    );
}

#[rstest]
fn tracing_logger_emits_one_event_per_fault() {
    let fault: Fault = Arc::new(io::Error::other("disk on fire"));

    let logs = log_with_capture(&fault);

    assert_eq!(logs.lines().count(), 1);
    assert!(logs.contains("causes=[]"), "expected empty cause list in {logs}");
}
