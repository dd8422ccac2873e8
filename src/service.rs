//! Read-only access to the loaded tables.

use std::sync::Arc;

use crate::diagnostic::MatchTarget;
use crate::loader::{LoaderOptions, Sources};
use crate::store::{LoadReport, Store};

/// What a load needs besides the store itself.
#[derive(Debug, Clone, Default)]
pub struct LoadPlan {
    pub sources: Sources,
    pub options: LoaderOptions,
    pub reference: Option<MatchTarget>,
}

/// Hands out snapshots of the store. Snapshots are immutable, so nothing a
/// caller does with them reaches the store.
#[derive(Debug, Clone)]
pub struct QueryService {
    store: Arc<Store>,
    plan: Arc<LoadPlan>,
}

impl QueryService {
    pub fn new(store: Arc<Store>, plan: LoadPlan) -> Self {
        Self { store, plan: Arc::new(plan) }
    }

    pub fn allocation_records(&self) -> Arc<[crate::schema::AllocationRecord]> {
        self.store.allocations()
    }

    pub fn station_records(&self) -> Arc<[crate::schema::StationRecord]> {
        self.store.stations()
    }

    /// Loads both sources again and swaps them in. Blocks while reading files.
    pub fn reload(&self) -> LoadReport {
        self.store.load(&self.plan.sources, &self.plan.options, self.plan.reference.as_ref())
    }
}
