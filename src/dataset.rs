//! Trajectory datasets loading
use std::path::Path;

use crate::{
    position::EcefPosition,
    prelude::Error,
    reader::CsvTable,
    trajectory::{Dataset, Trajectory},
};

#[cfg(feature = "log")]
use log::{debug, info};

/// File stem, without the `.csv` of compressed `.csv.gz` files
fn default_title(path: &Path) -> String {
    let stem = match path.file_stem() {
        Some(stem) => stem.to_string_lossy().to_string(),
        None => return path.display().to_string(),
    };
    let gzip = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false);
    if gzip {
        let inner = Path::new(&stem);
        let csv = inner
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if csv {
            if let Some(inner_stem) = inner.file_stem() {
                return inner_stem.to_string_lossy().to_string();
            }
        }
    }
    stem
}

/// [DatasetLoader] loads [Dataset]s from CSV files that contain
/// at least three ECEF coordinates columns (in meters).
/// Other columns are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetLoader {
    x: String,
    y: String,
    z: String,
}

impl Default for DatasetLoader {
    /// Expects columns labeled `X`, `Y` and `Z`
    fn default() -> Self {
        Self {
            x: "X".to_string(),
            y: "Y".to_string(),
            z: "Z".to_string(),
        }
    }
}

impl DatasetLoader {
    /// Copies and returns [DatasetLoader] with custom column labels
    pub fn with_columns(&self, x: &str, y: &str, z: &str) -> Self {
        Self {
            x: x.to_string(),
            y: y.to_string(),
            z: z.to_string(),
        }
    }

    /// Loads one file. The [Dataset] title defaults to the file stem.
    pub fn load_file<P: AsRef<Path>>(&self, path: P, title: Option<&str>) -> Result<Dataset, Error> {
        let path = path.as_ref();
        let table = CsvTable::from_path(path)?;

        let columns = (
            table.column(&self.x)?,
            table.column(&self.y)?,
            table.column(&self.z)?,
        );

        let samples = table
            .records()
            .iter()
            .map(|record| {
                Ok(EcefPosition::new(
                    table.number(record, columns.0)?,
                    table.number(record, columns.1)?,
                    table.number(record, columns.2)?,
                ))
            })
            .collect::<Result<Vec<_>, Error>>()?;

        let trajectory =
            Trajectory::new(samples).ok_or_else(|| Error::EmptyDataset(path.to_path_buf()))?;

        #[cfg(feature = "log")]
        debug!("\"{}\": {} samples", path.display(), trajectory.len());

        let title = match title {
            Some(title) => title.to_string(),
            None => default_title(path),
        };

        Ok(Dataset::new(&title, trajectory).with_path(table.path()))
    }

    /// Loads all files, in order. Titles default to file stems.
    /// Fails on the first file that cannot be loaded.
    pub fn load_files<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<Dataset>, Error> {
        if paths.is_empty() {
            return Err(Error::NoDatasets);
        }
        let datasets = paths
            .iter()
            .map(|path| self.load_file(path, None))
            .collect::<Result<Vec<_>, _>>()?;

        #[cfg(feature = "log")]
        info!("{} dataset(s) loaded", datasets.len());

        Ok(datasets)
    }
}
