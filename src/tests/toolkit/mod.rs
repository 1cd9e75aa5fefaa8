use rand::{distributions::Alphanumeric, Rng};
use std::path::{Path, PathBuf};

/// Default ocean field trial datasets, in travel order
pub const OCEAN_TRIAL: [&str; 3] = [
    "gps_data_Travel_To.csv",
    "gps_data_Travel_Mid.csv",
    "gps_data_Travel_Fro.csv",
];

/// Returns path to given CSV test resource
pub fn csv_resource(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test_resources")
        .join("CSV")
        .join(name)
}

/// Returns path to ocean field trial dataset
pub fn ocean_resource(name: &str) -> PathBuf {
    csv_resource("ocean").join(name)
}

pub fn random_name(size: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(size)
        .map(char::from)
        .collect()
}

/// Writes content to a uniquely named temporary file.
/// Caller is responsible for removing it.
pub fn temporary_csv(content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("test-{}.csv", random_name(8)));
    std::fs::write(&path, content).unwrap();
    path
}
