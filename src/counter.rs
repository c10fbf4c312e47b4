//! Call counting for BLAS routines.
//!
//! Every `*_with_counter` routine reports the shape of a call to a
//! [`Counter`] after the call has finished writing its output. Rejected calls
//! are never reported. The plain routines pass [`NoCounter`], so
//! instrumentation is chosen by the caller rather than at compile time.
//!
//! ```rust
//! use strided_blas::{symv_with_counter, CallRecord, CountingSet, Layout, Uplo};
//!
//! let counter = CountingSet::new();
//! let a = [2.0, 0.0, 1.0, 3.0];
//! let x = [1.0, 1.0];
//! let mut y = [0.0, 0.0];
//! symv_with_counter(&counter, Layout::ColMajor, Uplo::Upper, 2, 1.0, &a, 2, &x, 1, 0.0, &mut y, 1)
//!     .unwrap();
//!
//! assert_eq!(counter.count(&CallRecord::Symv { uplo: Uplo::Upper, n: 2 }), 1);
//! assert_eq!(counter.to_string(), "symv( U, 2 ) count 1\n");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, PoisonError};

use crate::enums::Uplo;

/// Routine identifiers in a counting set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CounterId {
    Axpy,
    Hemv,
    Symv,
}

impl CounterId {
    pub const fn name(self) -> &'static str {
        match self {
            CounterId::Axpy => "axpy",
            CounterId::Hemv => "hemv",
            CounterId::Symv => "symv",
        }
    }
}

/// Shape parameters of one routine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CallRecord {
    Axpy { n: i64 },
    Hemv { uplo: Uplo, n: i64 },
    Symv { uplo: Uplo, n: i64 },
}

impl CallRecord {
    pub fn id(&self) -> CounterId {
        match self {
            CallRecord::Axpy { .. } => CounterId::Axpy,
            CallRecord::Hemv { .. } => CounterId::Hemv,
            CallRecord::Symv { .. } => CounterId::Symv,
        }
    }
}

impl fmt::Display for CallRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.id().name();
        match *self {
            CallRecord::Axpy { n } => write!(f, "{name}( {n} )"),
            CallRecord::Hemv { uplo, n } | CallRecord::Symv { uplo, n } => {
                write!(f, "{name}( {}, {n} )", uplo.to_char())
            }
        }
    }
}

/// Observer of routine calls.
///
/// Implementations must be cheap and thread-safe: routines may be called
/// concurrently from many threads with the same counter.
pub trait Counter: Sync {
    /// Record one call.
    fn insert(&self, record: CallRecord);
}

/// Counter that records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCounter;

impl Counter for NoCounter {
    #[inline(always)]
    fn insert(&self, _record: CallRecord) {}
}

/// In-memory counting set: how many times each distinct call shape occurred.
#[derive(Debug, Default)]
pub struct CountingSet {
    counts: Mutex<HashMap<CallRecord, usize>>,
}

impl CountingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of calls recorded with exactly this shape.
    pub fn count(&self, record: &CallRecord) -> usize {
        self.lock().get(record).copied().unwrap_or(0)
    }

    /// Number of calls recorded for routine `id`, over all shapes.
    pub fn count_id(&self, id: CounterId) -> usize {
        self.lock()
            .iter()
            .filter(|(record, _)| record.id() == id)
            .map(|(_, count)| count)
            .sum()
    }

    /// Number of calls recorded in total.
    pub fn total(&self) -> usize {
        self.lock().values().sum()
    }

    /// All recorded shapes with their counts, ordered by routine then shape.
    pub fn records(&self) -> Vec<(CallRecord, usize)> {
        let mut records: Vec<_> = self.lock().iter().map(|(r, c)| (*r, *c)).collect();
        records.sort_unstable();
        records
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<CallRecord, usize>> {
        // Counts stay meaningful even if another thread panicked mid-insert.
        self.counts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Counter for CountingSet {
    fn insert(&self, record: CallRecord) {
        *self.lock().entry(record).or_insert(0) += 1;
    }
}

impl fmt::Display for CountingSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (record, count) in self.records() {
            writeln!(f, "{record} count {count}")?;
        }
        Ok(())
    }
}
