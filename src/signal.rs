//! GNSS signal quality records
use std::{path::Path, str::FromStr};

use itertools::Itertools;

use crate::{
    prelude::{Constellation, Error, SV},
    reader::CsvTable,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "log")]
use log::debug;

/// Label of the satellite identifier (categorical) column
pub const SATELLITE_ID: &str = "Satellite_ID";

/// One signal quality record, for one satellite.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SignalRecord {
    /// Satellite identifier
    pub sv: SV,
    /// Signal to noise ratio [dB]
    pub snr_db: f64,
    /// Pseudo range [m]
    pub pseudorange_m: f64,
    /// Doppler shift [Hz]
    pub doppler_hz: f64,
    /// Elevation angle [°]
    pub elevation_deg: f64,
}

/// Numerical columns of a [SignalTable]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SignalColumn {
    Snr,
    Pseudorange,
    Doppler,
    Elevation,
}

impl SignalColumn {
    /// All numerical columns, in table order
    pub const ALL: [Self; 4] = [Self::Snr, Self::Pseudorange, Self::Doppler, Self::Elevation];

    /// Column label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Snr => "SNR_dB",
            Self::Pseudorange => "Pseudorange_m",
            Self::Doppler => "Doppler_Hz",
            Self::Elevation => "Elevation_deg",
        }
    }

    /// Picks this column's value in given record
    pub fn value(&self, record: &SignalRecord) -> f64 {
        match self {
            Self::Snr => record.snr_db,
            Self::Pseudorange => record.pseudorange_m,
            Self::Doppler => record.doppler_hz,
            Self::Elevation => record.elevation_deg,
        }
    }
}

impl std::fmt::Display for SignalColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SignalColumn {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|column| column.label().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| Error::UnknownColumn(s.to_string()))
    }
}

/// Parses a satellite identifier like "G01"
pub(crate) fn parse_sv(descriptor: &str) -> Result<SV, Error> {
    let descriptor = descriptor.trim();
    // SV parser slices the first byte out
    if descriptor.len() < 2 || !descriptor.is_ascii() {
        return Err(Error::InvalidSatellite(descriptor.to_string()));
    }
    SV::from_str(descriptor).map_err(|_| Error::InvalidSatellite(descriptor.to_string()))
}

/// [SignalTable] is an ordered set of [SignalRecord]s.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SignalTable {
    records: Vec<SignalRecord>,
}

impl SignalTable {
    /// Sample signal table, as reviewed during field trials
    pub fn sample() -> Self {
        [
            (1, 45.2, 20200000.0, -1200.5, 60.0),
            (2, 38.5, 20185000.0, -1150.3, 45.0),
            (3, 42.0, 20215000.0, -1180.0, 55.0),
            (4, 30.8, 20150000.0, -1305.7, 30.0),
            (5, 47.1, 20230000.0, -1100.2, 70.0),
        ]
        .into_iter()
        .fold(
            SignalTableBuilder::new(),
            |builder, (prn, snr_db, pseudorange_m, doppler_hz, elevation_deg)| {
                builder.record(SignalRecord {
                    sv: SV::new(Constellation::GPS, prn),
                    snr_db,
                    pseudorange_m,
                    doppler_hz,
                    elevation_deg,
                })
            },
        )
        .build()
    }

    /// Loads a [SignalTable] from a CSV file that has one column
    /// per [SignalColumn] plus the [SATELLITE_ID] column.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let table = CsvTable::from_path(path.as_ref())?;

        let sv_column = table.column(SATELLITE_ID)?;
        let columns = SignalColumn::ALL
            .iter()
            .map(|column| table.column(column.label()))
            .collect::<Result<Vec<_>, _>>()?;

        let mut builder = SignalTableBuilder::new();
        for record in table.records() {
            builder = builder.record(SignalRecord {
                sv: parse_sv(table.text(record, sv_column))?,
                snr_db: table.number(record, columns[0])?,
                pseudorange_m: table.number(record, columns[1])?,
                doppler_hz: table.number(record, columns[2])?,
                elevation_deg: table.number(record, columns[3])?,
            });
        }

        let signals = builder.build();
        if signals.is_empty() {
            return Err(Error::EmptyDataset(path.as_ref().to_path_buf()));
        }

        #[cfg(feature = "log")]
        debug!(
            "\"{}\": {} signal records",
            path.as_ref().display(),
            signals.len()
        );

        Ok(signals)
    }

    pub fn records(&self) -> &[SignalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns all values of given column, in table order
    pub fn column(&self, column: SignalColumn) -> Vec<f64> {
        self.records.iter().map(|r| column.value(r)).collect()
    }

    /// Returns all satellite identifiers, in table order
    pub fn satellites(&self) -> Vec<SV> {
        self.records.iter().map(|r| r.sv).collect()
    }
}

impl std::fmt::Display for SignalTable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:>4} {:>12}", "", SATELLITE_ID)?;
        writeln!(
            f,
            " {}",
            SignalColumn::ALL
                .iter()
                .map(|c| format!("{:>14}", c.label()))
                .join(" ")
        )?;
        for (index, record) in self.records.iter().enumerate() {
            write!(f, "{:>4} {:>12}", index, record.sv.to_string())?;
            writeln!(
                f,
                " {}",
                SignalColumn::ALL
                    .iter()
                    .map(|c| format!("{:>14}", c.value(record)))
                    .join(" ")
            )?;
        }
        Ok(())
    }
}

/// [SignalTableBuilder] builds a [SignalTable] record by record.
#[derive(Debug, Default, Clone)]
pub struct SignalTableBuilder {
    records: Vec<SignalRecord>,
}

impl SignalTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one [SignalRecord]
    pub fn record(mut self, record: SignalRecord) -> Self {
        self.records.push(record);
        self
    }

    /// Appends one record, identified by its satellite descriptor (like "G01").
    pub fn satellite(
        self,
        descriptor: &str,
        snr_db: f64,
        pseudorange_m: f64,
        doppler_hz: f64,
        elevation_deg: f64,
    ) -> Result<Self, Error> {
        let sv = parse_sv(descriptor)?;
        Ok(self.record(SignalRecord {
            sv,
            snr_db,
            pseudorange_m,
            doppler_hz,
            elevation_deg,
        }))
    }

    pub fn build(self) -> SignalTable {
        SignalTable {
            records: self.records,
        }
    }
}
