//! CSV input, plain or gzip compressed.
use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, StringRecord, Trim};

#[cfg(feature = "flate2")]
use flate2::read::GzDecoder;

use crate::prelude::Error;

/// [CsvTable] is a fully loaded CSV file: header row and data rows.
/// Field and header whitespaces are trimmed.
#[derive(Debug, Clone)]
pub(crate) struct CsvTable {
    path: PathBuf,
    headers: StringRecord,
    records: Vec<StringRecord>,
}

impl CsvTable {
    /// Loads a readable CSV file. When built with the `flate2` feature,
    /// files terminated by `.gz` are decompressed on the fly.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let fd = File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(Self::decoder(path, fd));

        let csv_error = |source: csv::Error| Error::Csv {
            path: path.to_path_buf(),
            source,
        };

        let headers = reader.headers().map_err(csv_error)?.clone();
        let records = reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .map_err(csv_error)?;

        Ok(Self {
            path: path.to_path_buf(),
            headers,
            records,
        })
    }

    #[cfg(feature = "flate2")]
    fn decoder(path: &Path, fd: File) -> Box<dyn Read> {
        let gzip = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("gz"))
            .unwrap_or(false);
        if gzip {
            Box::new(GzDecoder::new(fd))
        } else {
            Box::new(fd)
        }
    }

    #[cfg(not(feature = "flate2"))]
    fn decoder(_: &Path, fd: File) -> Box<dyn Read> {
        Box::new(fd)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[StringRecord] {
        &self.records
    }

    /// Returns index of the column labeled `name`
    pub fn column(&self, name: &str) -> Result<usize, Error> {
        self.headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| Error::MissingColumn {
                path: self.path.clone(),
                column: name.to_string(),
            })
    }

    /// Returns text field at given column
    pub fn text<'a>(&self, record: &'a StringRecord, column: usize) -> &'a str {
        record.get(column).unwrap_or_default()
    }

    /// Parses numerical field at given column.
    /// NaN and infinite values are rejected.
    pub fn number(&self, record: &StringRecord, column: usize) -> Result<f64, Error> {
        let value = self.text(record, column);
        match value.parse::<f64>() {
            Ok(number) if number.is_finite() => Ok(number),
            _ => Err(Error::InvalidValue {
                path: self.path.clone(),
                line: record.position().map(|pos| pos.line()).unwrap_or_default(),
                column: self.headers.get(column).unwrap_or_default().to_string(),
                value: value.to_string(),
            }),
        }
    }
}
