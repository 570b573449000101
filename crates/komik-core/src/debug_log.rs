use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

/// Maximum number of events retained in the ring buffer.
const EVENT_LOG_CAPACITY: usize = 200;

/// A typed event from the catalog loading pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebugEvent {
    CatalogRequested {
        generation: u64,
        limit: u32,
    },
    CatalogFetched {
        generation: u64,
        remote_count: usize,
    },
    /// The fetch failed and the catalog fell back to pinned titles only.
    CatalogFetchFailed {
        generation: u64,
        message: String,
    },
    /// A result arrived for a list that has since been remounted.
    StaleResultDiscarded {
        generation: u64,
        current: u64,
    },
    CoverFailed {
        url: String,
        message: String,
    },
}

/// A timestamped event entry.
pub type EventEntry = (DateTime<Utc>, DebugEvent);

/// Bounded ring buffer of debug events.
#[derive(Debug)]
pub struct EventLog {
    entries: VecDeque<EventEntry>,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLog {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(EVENT_LOG_CAPACITY),
        }
    }

    /// Push a new event, evicting the oldest if at capacity.
    pub fn push(&mut self, event: DebugEvent) {
        if self.entries.len() >= EVENT_LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back((Utc::now(), event));
    }

    /// Return a snapshot of all entries (newest last).
    pub fn snapshot(&self) -> Vec<EventEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Thread-safe handle to the event log.
pub type SharedEventLog = Arc<Mutex<EventLog>>;

/// Create a new shared event log.
pub fn shared_event_log() -> SharedEventLog {
    Arc::new(Mutex::new(EventLog::new()))
}

/// Record an event; a poisoned lock drops it.
pub fn record(log: &SharedEventLog, event: DebugEvent) {
    if let Ok(mut log) = log.lock() {
        log.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evicts_oldest_at_capacity() {
        let mut log = EventLog::new();
        for generation in 0..(EVENT_LOG_CAPACITY as u64 + 5) {
            log.push(DebugEvent::CatalogRequested { generation, limit: 30 });
        }
        assert_eq!(log.len(), EVENT_LOG_CAPACITY);
        let snapshot = log.snapshot();
        assert_eq!(
            snapshot[0].1,
            DebugEvent::CatalogRequested { generation: 5, limit: 30 }
        );
    }

    #[test]
    fn test_shared_record() {
        let log = shared_event_log();
        record(
            &log,
            DebugEvent::CoverFailed {
                url: "https://uploads.mangadex.org/covers/x/y.256.jpg".into(),
                message: "403".into(),
            },
        );
        assert_eq!(log.lock().unwrap().len(), 1);
    }
}
