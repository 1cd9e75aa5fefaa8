//! Trajectory rendition opmode
use std::{
    io::Write,
    path::{Path, PathBuf},
};

use itertools::Itertools;
use walkdir::WalkDir;

use gnss_trials::prelude::{CoordinateConverter, Dataset, DatasetLoader, TrajectoryPlotter};

use crate::{
    cli::{TrajectoryOpts, Workspace},
    Error,
};

/// Output product, within workspace
pub const HTML_PRODUCT: &str = "trajectories.html";

/// Returns true if this file is a (possibly compressed) CSV dataset
fn is_csv_dataset(path: &Path) -> bool {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    name.ends_with(".csv") || name.ends_with(".csv.gz")
}

/// Lists all CSV datasets contained in given directory, in sorted order
fn walk_directory(directory: &Path, max_depth: usize) -> Result<Vec<PathBuf>, Error> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(directory).max_depth(max_depth) {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_dir() && is_csv_dataset(path) {
            paths.push(path.to_path_buf());
        } else if !entry.file_type().is_dir() {
            debug!("\"{}\" is not a CSV dataset", path.display());
        }
    }
    Ok(paths.into_iter().sorted().collect())
}

/// Loads all datasets defined by user: individual files first,
/// then directories content.
pub fn load_datasets(opts: &TrajectoryOpts) -> Result<Vec<Dataset>, Error> {
    let (x, y, z) = &opts.columns;
    let loader = DatasetLoader::default().with_columns(x, y, z);

    let mut datasets = Vec::new();
    for (path, title) in opts.files.iter() {
        let dataset = loader.load_file(path, title.as_deref())?;
        info!("loaded \"{}\" ({})", dataset.title, path.display());
        datasets.push(dataset);
    }

    for directory in opts.directories.iter() {
        let paths = walk_directory(directory, opts.depth)?;
        if paths.is_empty() {
            warn!("no CSV dataset found in \"{}\"", directory.display());
        }
        for path in paths {
            let dataset = loader.load_file(&path, None)?;
            info!("loaded \"{}\" ({})", dataset.title, path.display());
            datasets.push(dataset);
        }
    }

    Ok(datasets)
}

/// Renders all trajectories into the workspace.
/// Returns path to the generated HTML page.
pub fn trajectory(opts: &TrajectoryOpts, workspace: &Workspace) -> Result<PathBuf, Error> {
    let datasets = load_datasets(opts)?;

    let plotter = TrajectoryPlotter::new(CoordinateConverter::wgs84());
    let figure = plotter.render(&datasets)?;

    for panel in figure.panels.iter() {
        info!(
            "\"{}\": {} samples, from ({:.6}°, {:.6}°) to ({:.6}°, {:.6}°)",
            panel.title,
            panel.len(),
            panel.start.0,
            panel.start.1,
            panel.end.0,
            panel.end.1
        );
    }

    let mut fd = workspace.create_file(HTML_PRODUCT)?;
    write!(fd, "{}", figure.to_html())?;

    let fullpath = workspace.root.join(HTML_PRODUCT);
    info!("\"{}\" has been generated", fullpath.display());
    Ok(fullpath)
}
