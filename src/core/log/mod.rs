use std::fmt::{Display, Formatter};
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use serde::{Serialize, Deserialize};

static LOG_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Kind of mutating queue operation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Op {
    Enqueue,
    Dequeue,
    Clear,
    Shuffle,
}

/// Log entry recording an operation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry<T> {
    pub local_log_id: u64,
    pub op: Op,
    pub item: Option<T>,     // enqueued or dequeued item, None for clear/shuffle or an empty dequeue
    pub len_after: usize,
}

impl<T: std::fmt::Debug> Display for LogEntry<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogEntry {{ local_log_id: {}, op: {:?}, item: {:?}, len_after: {} }}",
            self.local_log_id,
            self.op,
            self.item,
            self.len_after,
        )
    }
}

/// Logger storing all entries
#[derive(Clone, Debug)]
pub struct Logger<T> {
    entries: Vec<LogEntry<T>>,
}

impl<T> Logger<T> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Log an operation
    pub fn log(&mut self, op: Op, item: Option<T>, len_after: usize) {
        // --- Negative-space assertion: only enqueue/dequeue carry an item ---
        debug_assert!(
            item.is_none() || matches!(op, Op::Enqueue | Op::Dequeue),
            "Only enqueue and dequeue record an item"
        );

        let local_log_id = LOG_ID_COUNTER.fetch_add(1, Ordering::SeqCst);
        self.entries.push(LogEntry { local_log_id, op, item, len_after });
    }

    pub fn entries(&self) -> &[LogEntry<T>] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<LogEntry<T>> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Logger<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Write `log` as NDJSON, one entry per line
pub fn write_logs<T: Serialize, W: Write>(log: &[LogEntry<T>], mut writer: W) -> io::Result<()> {
    for entry in log {
        let json = serde_json::to_string(entry)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        writeln!(writer, "{}", json)?; // one JSON object per line
    }
    writer.flush()
}
