use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Timestamp-derived identifiers (`PORT_<unix millis>`).
///
/// Two calls within the same millisecond still get distinct ids: the
/// counter never hands out a value at or below the previous one.
#[derive(Debug)]
pub struct IdGenerator {
    prefix: String,
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            last: AtomicI64::new(0),
        }
    }

    pub fn next_id(&self) -> String {
        let now = Utc::now().timestamp_millis();
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |prev| {
                Some(now.max(prev + 1))
            })
            .unwrap_or(now);
        let stamp = now.max(previous + 1);
        format!("{}_{}", self.prefix, stamp)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new("PORT")
    }
}
