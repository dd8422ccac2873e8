//! Positional schemas for the two source tables.
//!
//! Raw columns are identified by position only. Each table has a fixed
//! list of [`Field`]s; a raw row is truncated or padded to that width and
//! every cell is normalized according to the field's [`FieldKind`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::normalize::{FieldKind, Value};

/// Characters stripped from both ends of header cells, besides whitespace.
const HEADER_QUOTE: char = '"';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

const fn text(name: &'static str) -> Field {
    Field { name, kind: FieldKind::Text }
}
const fn number(name: &'static str) -> Field {
    Field { name, kind: FieldKind::Number }
}

pub const ALLOCATION_FIELDS: [Field; 15] = [
    text("sts"),
    text("dest"),
    text("month"),
    text("flightNo"),
    text("marketSegment"),
    text("sector"),
    text("aircraft"),
    text("dayOfWeek"),
    number("allocatedPosition"),
    text("aircraftType"),
    number("chargeableWeightPosition"),
    number("totalChargeableWeight"),
    number("netRateUsd"),
    number("allInRate"),
    number("revenue"),
];

pub const STATION_FIELDS: [Field; 4] = [
    text("group"),
    text("sector"),
    text("station"),
    text("note"),
];

/// The two kinds of table the service knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    Allocation,
    Station,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TableKind::Allocation => write!(f, "allocation"),
            TableKind::Station => write!(f, "station"),
        }
    }
}

/// A normalized row of one of the source tables.
pub trait Record: Serialize + Clone + fmt::Debug + Send + Sync + 'static {
    const KIND: TableKind;
    const FIELDS: &'static [Field];
    /// Builds the record from exactly `FIELDS.len()` normalized values, in field order.
    fn from_values(values: Vec<Value>) -> Self;
    /// Maps a raw row positionally. Extra cells are ignored, missing cells are null.
    fn from_cells(cells: &[Option<&str>]) -> Self {
        Self::from_values(normalize_cells(Self::FIELDS, cells))
    }
}

/// Normalizes the first `fields.len()` cells, padding with nulls.
pub fn normalize_cells(fields: &[Field], cells: &[Option<&str>]) -> Vec<Value> {
    fields
        .iter()
        .enumerate()
        .map(|(i, field)| Value::normalize(field.kind, cells.get(i).copied().flatten()))
        .collect()
}

/// Strips surrounding whitespace and quote characters from a header cell.
pub fn clean_header(raw: &str) -> String {
    raw.trim().replace(HEADER_QUOTE, "").trim().to_string()
}

// ------------- Allocation -------------
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationRecord {
    pub sts: Option<String>,
    pub dest: Option<String>,
    pub month: Option<String>,
    pub flight_no: Option<String>,
    pub market_segment: Option<String>,
    pub sector: Option<String>,
    pub aircraft: Option<String>,
    pub day_of_week: Option<String>,
    pub allocated_position: Option<f64>,
    pub aircraft_type: Option<String>,
    pub chargeable_weight_position: Option<f64>,
    pub total_chargeable_weight: Option<f64>,
    pub net_rate_usd: Option<f64>,
    pub all_in_rate: Option<f64>,
    pub revenue: Option<f64>,
}

impl Record for AllocationRecord {
    const KIND: TableKind = TableKind::Allocation;
    const FIELDS: &'static [Field] = &ALLOCATION_FIELDS;
    fn from_values(values: Vec<Value>) -> Self {
        let mut v = values.into_iter();
        let mut next = move || v.next().unwrap_or(Value::Null);
        AllocationRecord {
            sts: next().into_text(),
            dest: next().into_text(),
            month: next().into_text(),
            flight_no: next().into_text(),
            market_segment: next().into_text(),
            sector: next().into_text(),
            aircraft: next().into_text(),
            day_of_week: next().into_text(),
            allocated_position: next().into_number(),
            aircraft_type: next().into_text(),
            chargeable_weight_position: next().into_number(),
            total_chargeable_weight: next().into_number(),
            net_rate_usd: next().into_number(),
            all_in_rate: next().into_number(),
            revenue: next().into_number(),
        }
    }
}

pub fn map_allocation_row(cells: &[Option<&str>]) -> AllocationRecord {
    AllocationRecord::from_cells(cells)
}

// ------------- Station -------------
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    pub group: Option<String>,
    pub sector: Option<String>,
    pub station: Option<String>,
    pub note: Option<String>,
}

impl Record for StationRecord {
    const KIND: TableKind = TableKind::Station;
    const FIELDS: &'static [Field] = &STATION_FIELDS;
    fn from_values(values: Vec<Value>) -> Self {
        let mut v = values.into_iter();
        let mut next = move || v.next().unwrap_or(Value::Null);
        StationRecord {
            group: next().into_text(),
            sector: next().into_text(),
            station: next().into_text(),
            note: next().into_text(),
        }
    }
}

pub fn map_station_row(cells: &[Option<&str>]) -> StationRecord {
    StationRecord::from_cells(cells)
}
