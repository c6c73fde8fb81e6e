//! In-memory ledger used by tests

use super::{FontLedger, LedgerEntry};
use fontsync_core::error::Result;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Ledger kept in a map; counts mutations so tests can assert idempotence
#[derive(Debug, Default)]
pub struct MemoryLedger {
    entries: Mutex<BTreeMap<String, String>>,
    writes: AtomicUsize,
    deletes: AtomicUsize,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger pre-populated with `(display name, file name)` pairs
    ///
    /// Seeding does not count as writes.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(name, file)| (name.to_string(), file.to_string()))
            .collect();
        Self {
            entries: Mutex::new(map),
            ..Self::default()
        }
    }

    /// Number of `write` calls so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Number of `delete` calls that removed an entry
    pub fn delete_count(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    pub fn get(&self, display_name: &str) -> Option<String> {
        self.lock().get(display_name).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        // A poisoned map is still consistent for our purposes
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl FontLedger for MemoryLedger {
    fn entries(&self) -> Result<Vec<LedgerEntry>> {
        Ok(self
            .lock()
            .iter()
            .map(|(name, file)| LedgerEntry::new(name.clone(), file.clone()))
            .collect())
    }

    fn write(&self, display_name: &str, file_name: &str) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.lock()
            .insert(display_name.to_string(), file_name.to_string());
        Ok(())
    }

    fn delete(&self, display_name: &str) -> Result<bool> {
        let removed = self.lock().remove(display_name).is_some();
        if removed {
            self.deletes.fetch_add(1, Ordering::SeqCst);
        }
        Ok(removed)
    }

    fn exists(&self, display_name: &str) -> Result<bool> {
        Ok(self.lock().contains_key(display_name))
    }
}
