use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use log::{error, warn};

use crate::{AuditEntry, AuditLog};

/// Sink that forwards entries to the `log` facade at error level.
///
/// The default production sink: correlation fields end up in whatever
/// logger the binary installed.
#[derive(Debug, Default, Clone)]
pub struct LogAudit;

impl AuditLog for LogAudit {
    fn record(&self, entry: AuditEntry) {
        error!("audit: {}", entry);
    }
}

/// Append-only JSON-lines file sink.
///
/// Opens the file per record so a crashed run never holds the file hostage.
/// Write failures are reported through the log facade and otherwise
/// swallowed; record must not raise.
#[derive(Debug, Clone)]
pub struct JsonlAudit {
    path: PathBuf,
}

impl JsonlAudit {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn append(&self, entry: &AuditEntry) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let line = serde_json::to_string(entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        writeln!(file, "{}", line)
    }
}

impl AuditLog for JsonlAudit {
    fn record(&self, entry: AuditEntry) {
        if let Err(e) = self.append(&entry) {
            warn!("audit sink write failed ({}): {}", self.path.display(), e);
            // Fall back to the log facade so the entry is not lost silently
            error!("audit: {}", entry);
        }
    }
}

/// In-process collector for deterministic tests.
///
/// Clones share the same backing store, so a test can keep a handle while
/// the engine owns another.
#[derive(Debug, Default, Clone)]
pub struct MemoryAudit {
    entries: Arc<Mutex<Vec<AuditEntry>>>,
}

impl MemoryAudit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuditLog for MemoryAudit {
    fn record(&self, entry: AuditEntry) {
        // Recover from a poisoned lock: the trait contract forbids
        // panicking, and a Vec of entries is valid even after a panic
        // elsewhere.
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn sample() -> AuditEntry {
        AuditEntry::new(
            Uuid::new_v4(),
            "BTCUSDT",
            "current_price",
            "restex",
            "strategy",
            "transport error",
        )
    }

    #[test]
    fn test_memory_audit_collects() {
        let audit = MemoryAudit::new();
        let handle = audit.clone();

        audit.record(sample());
        audit.record(sample());

        assert_eq!(handle.len(), 2);
        assert_eq!(handle.entries()[0].symbol, "BTCUSDT");
    }

    #[test]
    fn test_memory_audit_survives_poisoned_lock() {
        let audit = MemoryAudit::new();
        audit.record(sample());

        // Poison the lock by panicking while holding it
        let poisoner = audit.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.entries.lock().unwrap();
            panic!("poison");
        })
        .join();

        // Collector keeps working without panicking
        audit.record(sample());
        assert_eq!(audit.len(), 2);
        assert_eq!(audit.entries().len(), 2);
    }

    #[test]
    fn test_jsonl_audit_appends_lines() {
        let dir = std::env::temp_dir().join(format!("dipwatch-audit-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("audit.jsonl");

        let audit = JsonlAudit::new(&path);
        audit.record(sample());
        audit.record(sample());

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: AuditEntry = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed.call_site, "current_price");

        std::fs::remove_dir_all(&dir).ok();
    }
}
