//! Load-time self check over allocation records.
//!
//! After a load, the configured reference row is looked up to confirm it
//! survived normalization. The outcome only goes to the log; what the
//! query endpoints serve is never affected.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::schema::AllocationRecord;

/// Reference values looked for in the allocation table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchTarget {
    pub flight_no: String,
    pub sector: String,
    pub month: String,
    pub day_of_week: String,
    pub sts: Option<String>,
}

impl Default for MatchTarget {
    fn default() -> Self {
        Self {
            flight_no: "VN011".to_string(),
            sector: "SGNCDG".to_string(),
            month: "FEB".to_string(),
            day_of_week: "D1".to_string(),
            sts: None,
        }
    }
}

/// Uppercased and trimmed; an absent value folds to the empty string.
fn fold(value: Option<&str>) -> String {
    value.unwrap_or_default().trim().to_uppercase()
}

fn same(field: &Option<String>, target: &str) -> bool {
    fold(field.as_deref()) == fold(Some(target))
}

impl MatchTarget {
    pub fn matches(&self, record: &AllocationRecord) -> bool {
        same(&record.flight_no, &self.flight_no)
            && same(&record.sector, &self.sector)
            && same(&record.month, &self.month)
            && same(&record.day_of_week, &self.day_of_week)
            && self.sts.as_deref().is_none_or(|sts| same(&record.sts, sts))
    }
}

/// Records satisfying `predicate`, in their original order.
pub fn scan<'a, P>(records: &'a [AllocationRecord], predicate: P) -> Vec<&'a AllocationRecord>
where
    P: Fn(&AllocationRecord) -> bool,
{
    records.iter().filter(|r| predicate(r)).collect()
}

pub fn find_matches<'a>(records: &'a [AllocationRecord], target: &MatchTarget) -> Vec<&'a AllocationRecord> {
    scan(records, |r| target.matches(r))
}

/// Logs how many records match `target` and returns that count.
pub fn report(records: &[AllocationRecord], target: &MatchTarget) -> usize {
    let found = find_matches(records, target);
    if found.is_empty() {
        warn!(
            flight_no = %target.flight_no,
            sector = %target.sector,
            month = %target.month,
            day_of_week = %target.day_of_week,
            "reference row not found in allocation data"
        );
    } else {
        info!(
            flight_no = %target.flight_no,
            sector = %target.sector,
            month = %target.month,
            day_of_week = %target.day_of_week,
            matches = found.len(),
            "reference row present in allocation data"
        );
    }
    for (i, entry) in found.iter().enumerate() {
        debug!(
            i,
            sts = ?entry.sts,
            month = ?entry.month,
            flight_no = ?entry.flight_no,
            sector = ?entry.sector,
            day_of_week = ?entry.day_of_week,
            "reference match"
        );
    }
    found.len()
}
