//! Process-wide holder of the loaded tables.
//!
//! Each table is an immutable `Arc<[T]>` snapshot. Replacing a table swaps
//! the `Arc` under a short write lock, so a reader holds either the old or
//! the new sequence in full. Loads are serialized by a separate mutex so
//! two reloads never interleave.

use serde::Serialize;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::{error, info};

use crate::diagnostic::{self, MatchTarget};
use crate::loader::{LoaderOptions, Sources, load_table};
use crate::schema::{AllocationRecord, Record, StationRecord, TableKind};

/// A complete replacement for one of the held tables.
#[derive(Debug, Clone)]
pub enum Table {
    Allocation(Vec<AllocationRecord>),
    Station(Vec<StationRecord>),
}

impl Table {
    pub fn kind(&self) -> TableKind {
        match self {
            Table::Allocation(_) => TableKind::Allocation,
            Table::Station(_) => TableKind::Station,
        }
    }
    pub fn len(&self) -> usize {
        match self {
            Table::Allocation(records) => records.len(),
            Table::Station(records) => records.len(),
        }
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Outcome of loading one source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableReport {
    pub table: TableKind,
    pub records: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome of a full load of both sources.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadReport {
    pub allocation: TableReport,
    pub station: TableReport,
    /// Number of allocation records matching the reference row, when checked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_matches: Option<usize>,
}

#[derive(Debug)]
pub struct Store {
    allocation: RwLock<Arc<[AllocationRecord]>>,
    station: RwLock<Arc<[StationRecord]>>,
    loading: Mutex<()>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self {
            allocation: RwLock::new(Arc::from(Vec::new())),
            station: RwLock::new(Arc::from(Vec::new())),
            loading: Mutex::new(()),
        }
    }

    /// Current allocation snapshot.
    pub fn allocations(&self) -> Arc<[AllocationRecord]> {
        // A poisoned lock still guards a complete snapshot.
        Arc::clone(&self.allocation.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Current station snapshot.
    pub fn stations(&self) -> Arc<[StationRecord]> {
        Arc::clone(&self.station.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Installs `table`, discarding the previous sequence of the same kind.
    pub fn replace(&self, table: Table) {
        let kind = table.kind();
        let count = table.len();
        match table {
            Table::Allocation(records) => {
                let snapshot: Arc<[AllocationRecord]> = Arc::from(records);
                *self.allocation.write().unwrap_or_else(PoisonError::into_inner) = snapshot;
            }
            Table::Station(records) => {
                let snapshot: Arc<[StationRecord]> = Arc::from(records);
                *self.station.write().unwrap_or_else(PoisonError::into_inner) = snapshot;
            }
        }
        info!(table = %kind, records = count, "table replaced");
    }

    /// Loads both sources and installs the results.
    ///
    /// A source that fails to load is installed as an empty table and does
    /// not prevent the other source from loading. Concurrent calls run one
    /// after the other.
    pub fn load(&self, sources: &Sources, options: &LoaderOptions, reference: Option<&MatchTarget>) -> LoadReport {
        let _loading = self.loading.lock().unwrap_or_else(PoisonError::into_inner);

        let (allocations, allocation) = load_reported::<AllocationRecord>(&sources.allocation, options);
        let (stations, station) = load_reported::<StationRecord>(&sources.station, options);
        let reference_matches = reference.map(|target| diagnostic::report(&allocations, target));

        self.replace(Table::Allocation(allocations));
        self.replace(Table::Station(stations));
        LoadReport { allocation, station, reference_matches }
    }
}

fn load_reported<R: Record>(path: &std::path::Path, options: &LoaderOptions) -> (Vec<R>, TableReport) {
    let table = R::KIND;
    match load_table::<R>(path, options) {
        Ok(records) => {
            let report = TableReport { table, records: records.len(), error: None };
            (records, report)
        }
        Err(e) => {
            error!(%table, error = %e, "failed to load source, serving an empty table");
            (Vec::new(), TableReport { table, records: 0, error: Some(e.to_string()) })
        }
    }
}
