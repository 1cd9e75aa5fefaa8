//! Signal statistics opmode
use std::path::Path;

use gnss_trials::prelude::{SignalTable, SummaryReporter};

use crate::Error;

/// Describes given signal table, or the field trial sample table.
/// Returns the text report.
pub fn describe(path: Option<&Path>) -> Result<String, Error> {
    let table = match path {
        Some(path) => {
            let table = SignalTable::from_csv_path(path)?;
            info!("loaded {} signal records from \"{}\"", table.len(), path.display());
            table
        },
        None => {
            info!("no signal table specified: describing sample table");
            SignalTable::sample()
        },
    };
    let reporter = SummaryReporter::new(&table)?;
    Ok(reporter.report())
}
