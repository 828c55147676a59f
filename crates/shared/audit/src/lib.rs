//! Dipwatch Audit
//!
//! The audit-log capability injected into the strategy engine at
//! construction. Keeping it behind a trait (rather than a process-wide
//! sink) lets tests swap in an in-memory collector and assert on exactly
//! which failures were recorded.
//!
//! `record` is fire-and-forget: sinks must never panic and have no way to
//! report failure back to the caller.

mod entry;
mod sinks;

pub use entry::AuditEntry;
pub use sinks::{JsonlAudit, LogAudit, MemoryAudit};

/// Append-only failure log keyed by run id, symbol, and call site.
pub trait AuditLog: Send + Sync {
    /// Record one entry. Fire-and-forget; must not panic.
    fn record(&self, entry: AuditEntry);
}

impl<T: AuditLog + ?Sized> AuditLog for Box<T> {
    fn record(&self, entry: AuditEntry) {
        (**self).record(entry)
    }
}

impl<T: AuditLog + ?Sized> AuditLog for std::sync::Arc<T> {
    fn record(&self, entry: AuditEntry) {
        (**self).record(entry)
    }
}
