mod common;

use common::*;
use dio::{attribute, dynamic, string_hash, Forwarder};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;

struct CaptureLogger {
    lines: Mutex<Vec<String>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut lines) = self.lines.lock() {
                lines.push(record.args().to_string());
            }
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    lines: Mutex::new(Vec::new()),
};

fn captured() -> Vec<String> {
    // Another test in this binary may have installed it already.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Debug);
    LOGGER.lines.lock().unwrap().clone()
}

fn logged(needle: &str) -> bool {
    captured().iter().any(|line| line.contains(needle))
}

#[test]
fn test_failed_named_access_is_logged() {
    captured();
    assert!(dynamic(1).deconstruct_keys(&kws(&["upcase"])).is_err());
    assert!(logged("[dynamic_forwarder] cannot deconstruct keys of integer"));
}

#[test]
fn test_failed_slice_is_logged() {
    captured();
    assert!(string_hash(1).deconstruct_keys(&kws(&["a"])).is_err());
    assert!(logged("[string_hash_forwarder] cannot slice integer"));
}

#[test]
fn test_rejected_attributes_are_logged() {
    captured();
    assert!(attribute(alice()).deconstruct_keys(&kws(&["zzz"])).is_err());
    assert!(logged("[attribute_forwarder] rejecting unknown attributes"));
}

#[test]
fn test_failed_sequence_is_logged() {
    captured();
    assert!(dynamic(true).deconstruct().is_err());
    assert!(logged("[dynamic_forwarder] cannot deconstruct boolean"));
}
