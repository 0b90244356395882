// src/compare/sink.rs

use log::Level;
use std::sync::Mutex;

/// Receives the formatted failure report of a comparison.
///
/// The comparator calls `log` at most once per comparison, with the full
/// multi-line diagnostic.
pub trait LogSink {
    fn log(&self, level: Level, message: &str);
}

/// Forwards reports to the `log` facade under the `tensorcheck::compare` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCrateSink;

impl LogSink for LogCrateSink {
    fn log(&self, level: Level, message: &str) {
        log::log!(target: "tensorcheck::compare", level, "{}", message);
    }
}

/// Keeps every delivered report in memory, in delivery order.
#[derive(Debug, Default)]
pub struct BufferSink {
    records: Mutex<Vec<(Level, String)>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the delivered records.
    pub fn records(&self) -> Vec<(Level, String)> {
        match self.records.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => {
                log::warn!("BufferSink: mutex was poisoned. Recovering records.");
                poisoned.into_inner().clone()
            }
        }
    }

    /// Number of delivered records.
    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogSink for BufferSink {
    fn log(&self, level: Level, message: &str) {
        let mut guard = match self.records.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                log::warn!("BufferSink: mutex was poisoned. Recovering writer guard.");
                poisoned.into_inner()
            }
        };
        guard.push((level, message.to_string()));
    }
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn log(&self, level: Level, message: &str) {
        (**self).log(level, message)
    }
}
