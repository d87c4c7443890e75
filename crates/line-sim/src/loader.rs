//! CSV roster loader.
//!
//! # CSV format
//!
//! One row per waiting rider, registered in file order.
//!
//! ```csv
//! rider_id,origin,destination
//! 12345612-22,Downtown,The University
//! 11223322-67,Downtown,The Village
//! ```
//!
//! Fields are trimmed.  Age digits are *not* validated here; a malformed
//! identifier only surfaces when the rider's fare is computed.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use line_core::{StopName, WaitingRider};

use crate::{LineError, LineResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RosterRecord {
    rider_id:    String,
    origin:      String,
    destination: String,
}

/// A waiting rider together with the stop it waits at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterEntry {
    pub origin: StopName,
    pub rider:  WaitingRider,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a roster from a CSV file.
pub fn load_roster_csv(path: &Path) -> LineResult<Vec<RosterEntry>> {
    let file = std::fs::File::open(path).map_err(LineError::Io)?;
    load_roster_reader(file)
}

/// Like [`load_roster_csv`] but accepts any `Read` source.
pub fn load_roster_reader<R: Read>(reader: R) -> LineResult<Vec<RosterEntry>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<RosterRecord>()
        .map(|result| {
            let row = result.map_err(|e| LineError::Parse(e.to_string()))?;
            if row.rider_id.is_empty() || row.origin.is_empty() || row.destination.is_empty() {
                return Err(LineError::Parse(format!(
                    "empty field in roster row for rider {:?}",
                    row.rider_id
                )));
            }
            Ok(RosterEntry {
                origin: StopName::new(row.origin),
                rider:  WaitingRider::new(row.rider_id, row.destination),
            })
        })
        .collect()
}
