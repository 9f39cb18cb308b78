//! Shape identifier generation.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of session-unique shape identifiers.
pub trait IdGenerator: Send + Sync + std::fmt::Debug {
    /// Produce a new identifier of the form `<prefix>_<unique>`.
    ///
    /// Must never return the same value twice within a session, including
    /// identifiers of shapes that were since deleted.
    fn uid(&self, prefix: &str) -> String;
}

/// Random identifiers backed by UUID v4.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn uid(&self, prefix: &str) -> String {
        format!("{}_{}", prefix, Uuid::new_v4().simple())
    }
}

/// Monotonic counter identifiers (`pt_1`, `ln_2`, ...).
///
/// Deterministic, which makes it the generator of choice for tests and
/// replayed sessions.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn uid(&self, prefix: &str) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}_{}", prefix, n)
    }
}
