//! Allotment – serves a cargo allocation table and a station grouping table as JSON.
//!
//! Two spreadsheet exports are read once at startup:
//! * the allocation table, one row per flight/period with capacity, weight
//!   and rate figures ([`schema::AllocationRecord`]);
//! * the station table, grouping sectors and stations ([`schema::StationRecord`]).
//!
//! Columns are positional. Each row is cut to the record width, every cell
//! is normalized into a [`normalize::Value`] (text, number or null) and the
//! values are assembled into typed records. Numbers written with thousands
//! separators (`"12,345"`) are understood; anything that does not parse is
//! null rather than zero.
//!
//! ## Modules
//! * [`normalize`] – Cell coercion into text, numbers or null.
//! * [`schema`] – Field tables and record types for both sources.
//! * [`loader`] – CSV reading, empty row filtering and record mapping.
//! * [`diagnostic`] – Load-time lookup of a known reference row.
//! * [`store`] – Atomically replaced in-memory snapshots of both tables.
//! * [`service`] – Read-only access to the snapshots, plus reloads.
//! * [`server`] – The HTTP endpoints.
//! * [`settings`] – Layered configuration.
//!
//! ## Quick Start
//! ```
//! use std::sync::Arc;
//! use allotment::loader::{LoaderOptions, Sources};
//! use allotment::store::Store;
//! let store = Arc::new(Store::new());
//! let sources = Sources { allocation: "missing.csv".into(), station: "missing.csv".into() };
//! let report = store.load(&sources, &LoaderOptions::default(), None);
//! assert!(report.allocation.error.is_some());
//! assert!(store.allocations().is_empty());
//! ```

pub mod diagnostic;
pub mod error;
pub mod loader;
pub mod normalize;
pub mod schema;
pub mod server;
pub mod service;
pub mod settings;
pub mod store;
