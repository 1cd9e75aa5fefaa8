//! Descriptive statistics of signal tables
use std::{collections::HashMap, hash::Hash};

use itertools::Itertools;

use crate::{
    prelude::{Error, SV},
    signal::{SignalColumn, SignalTable, SATELLITE_ID},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Linearly interpolated quantile of sorted values,
/// interpolating between closest ranks: position is (n-1)q.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = (sorted.len() - 1) as f64 * q;
    let (lower, upper) = (position.floor() as usize, position.ceil() as usize);
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// Summary of one numerical column
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumericSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n-1 denominator), NaN for a single value
    pub std: f64,
    pub min: f64,
    /// 25% quantile
    pub q25: f64,
    /// Median
    pub q50: f64,
    /// 75% quantile
    pub q75: f64,
    pub max: f64,
}

impl NumericSummary {
    /// Summarizes given values. Returns None on empty input.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        let std = if count > 1 {
            let sum_sq = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
            (sum_sq / (count - 1) as f64).sqrt()
        } else {
            f64::NAN
        };
        let sorted = values
            .iter()
            .copied()
            .sorted_by(|a, b| a.total_cmp(b))
            .collect::<Vec<_>>();
        Some(Self {
            count,
            mean,
            std,
            min: sorted[0],
            q25: quantile(&sorted, 0.25),
            q50: quantile(&sorted, 0.50),
            q75: quantile(&sorted, 0.75),
            max: sorted[count - 1],
        })
    }

    /// Statistics labels, in report order
    pub const LABELS: [&'static str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

    /// Statistics values, in report order
    pub fn values(&self) -> [f64; 8] {
        [
            self.count as f64,
            self.mean,
            self.std,
            self.min,
            self.q25,
            self.q50,
            self.q75,
            self.max,
        ]
    }
}

impl std::fmt::Display for NumericSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (label, value) in Self::LABELS.iter().zip(self.values()) {
            writeln!(f, "{:<6} {:>16.6}", label, value)?;
        }
        Ok(())
    }
}

/// Summary of one categorical column
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CategoricalSummary<T> {
    pub count: usize,
    /// Number of distinct values
    pub unique: usize,
    /// Most frequent value. Ties resolve to the first one encountered.
    pub top: T,
    /// Frequency of [Self::top]
    pub freq: usize,
}

impl<T: Clone + Eq + Hash> CategoricalSummary<T> {
    /// Summarizes given values. Returns None on empty input.
    pub fn from_values(values: &[T]) -> Option<Self> {
        let counts: HashMap<&T, usize> = values.iter().counts();
        let (top, freq) = values.iter().fold(None, |best: Option<(&T, usize)>, value| {
            let freq = counts[value];
            match best {
                Some((_, best_freq)) if best_freq >= freq => best,
                _ => Some((value, freq)),
            }
        })?;
        Some(Self {
            count: values.len(),
            unique: counts.len(),
            top: top.clone(),
            freq,
        })
    }
}

impl<T: std::fmt::Display> std::fmt::Display for CategoricalSummary<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{:<6} {:>8}", "count", self.count)?;
        writeln!(f, "{:<6} {:>8}", "unique", self.unique)?;
        writeln!(f, "{:<6} {:>8}", "top", self.top.to_string())?;
        writeln!(f, "{:<6} {:>8}", "freq", self.freq)
    }
}

/// Descriptive statistics of a whole [SignalTable]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SignalSummary {
    /// One summary per numerical column, in table order
    pub numeric: Vec<(SignalColumn, NumericSummary)>,
    /// Satellite identifiers summary
    pub satellites: CategoricalSummary<SV>,
}

impl SignalSummary {
    /// Summary of given numerical column
    pub fn column(&self, column: SignalColumn) -> Option<&NumericSummary> {
        self.numeric
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, summary)| summary)
    }
}

impl std::fmt::Display for SignalSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "{:<6} {}",
            "",
            self.numeric
                .iter()
                .map(|(column, _)| format!("{:>16}", column.label()))
                .join(" ")
        )?;
        for (row, label) in NumericSummary::LABELS.iter().enumerate() {
            writeln!(
                f,
                "{:<6} {}",
                label,
                self.numeric
                    .iter()
                    .map(|(_, summary)| format!("{:>16.6}", summary.values()[row]))
                    .join(" ")
            )?;
        }
        Ok(())
    }
}

/// Key figures of a [SignalTable]
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SignalInsights {
    /// Average SNR [dB]
    pub mean_snr_db: f64,
    /// Lowest elevation [°]
    pub min_elevation_deg: f64,
    /// Highest elevation [°]
    pub max_elevation_deg: f64,
    /// Doppler shifts (min, max) [Hz]
    pub doppler_range_hz: (f64, f64),
}

impl std::fmt::Display for SignalInsights {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "• Average SNR (dB): {}", self.mean_snr_db)?;
        writeln!(f, "• Minimum Elevation (deg): {}", self.min_elevation_deg)?;
        writeln!(f, "• Maximum Elevation (deg): {}", self.max_elevation_deg)?;
        writeln!(
            f,
            "• Doppler Range (Hz): {} to {}",
            self.doppler_range_hz.0, self.doppler_range_hz.1
        )
    }
}

/// [SummaryReporter] computes descriptive statistics of a [SignalTable].
#[derive(Debug, Clone, Copy)]
pub struct SummaryReporter<'a> {
    table: &'a SignalTable,
}

impl<'a> SummaryReporter<'a> {
    /// Builds a [SummaryReporter]. Fails on empty tables,
    /// which do not have any statistics.
    pub fn new(table: &'a SignalTable) -> Result<Self, Error> {
        if table.is_empty() {
            Err(Error::EmptyTable)
        } else {
            Ok(Self { table })
        }
    }

    /// Summary of one numerical column
    pub fn describe_column(&self, column: SignalColumn) -> NumericSummary {
        NumericSummary::from_values(&self.table.column(column))
            .unwrap_or_else(|| unreachable!("non empty table"))
    }

    /// Summary of the satellite identifiers
    pub fn describe_satellites(&self) -> CategoricalSummary<SV> {
        CategoricalSummary::from_values(&self.table.satellites())
            .unwrap_or_else(|| unreachable!("non empty table"))
    }

    /// Summary of all columns
    pub fn describe(&self) -> SignalSummary {
        SignalSummary {
            numeric: SignalColumn::ALL
                .iter()
                .map(|column| (*column, self.describe_column(*column)))
                .collect(),
            satellites: self.describe_satellites(),
        }
    }

    pub fn insights(&self) -> SignalInsights {
        let snr = self.describe_column(SignalColumn::Snr);
        let elevation = self.describe_column(SignalColumn::Elevation);
        let doppler = self.describe_column(SignalColumn::Doppler);
        SignalInsights {
            mean_snr_db: snr.mean,
            min_elevation_deg: elevation.min,
            max_elevation_deg: elevation.max,
            doppler_range_hz: (doppler.min, doppler.max),
        }
    }

    /// Complete text report, sections separated by rulers
    pub fn report(&self) -> String {
        let ruler = "-".repeat(70);
        let mut sections = vec![
            format!("GNSS Signal Dataset:\n{}", self.table),
            format!(
                "Statistical Summary of GNSS Signal Parameters:\n{}",
                self.describe()
            ),
            format!(
                "Summary of Satellite IDs:\n{:<6} {:>8}\n{}",
                "",
                SATELLITE_ID,
                self.describe_satellites()
            ),
        ];
        for (title, column) in [
            ("SNR Statistics", SignalColumn::Snr),
            ("Pseudorange Statistics", SignalColumn::Pseudorange),
        ] {
            sections.push(format!(
                "{}:\n{}Name: {}\n",
                title,
                self.describe_column(column),
                column
            ));
        }
        sections.push(format!("GNSS Insights:\n{}", self.insights()));
        sections.iter().join(&format!("{}\n", ruler))
    }
}
