// Trajectory rendition opmode
use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

/// Ocean field trial legs, loaded when no dataset is specified
const OCEAN_FIELD_TRIAL: [(&str, &str); 3] = [
    ("gps_data_Travel_To.csv", "Ocean Field Trial: Travel To"),
    ("gps_data_Travel_Mid.csv", "Ocean Field Trial: Mid Trajectory"),
    ("gps_data_Travel_Fro.csv", "Ocean Field Trial: Travel From"),
];

/// Default --dir,-d maximal recursive depth
const DEFAULT_DEPTH: u8 = 5;

pub fn subcommand() -> Command {
    Command::new("trajectory")
        .short_flag('T')
        .long_flag("trajectory")
        .about("Renders trajectories in geodetic coordinates. See --help for more information.")
        .long_about(
            "Loads one trajectory per CSV file (ECEF coordinates, in meters)
and renders all of them side by side, in an HTML page generated within the workspace.
When no dataset is specified, the three ocean field trial legs are loaded
from the current directory.",
        )
        .next_help_heading("Datasets")
        .arg(
            Arg::new("filepath")
                .long("fp")
                .short('f')
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Append)
                .help("Load a single dataset. Use as many times as needed."),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .short('t')
                .value_name("TITLE")
                .action(ArgAction::Append)
                .help("Dataset title, in --fp,-f order. Defaults to file name."),
        )
        .arg(
            Arg::new("directory")
                .short('d')
                .long("dir")
                .value_name("DIRECTORY")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Append)
                .help("Load all CSV datasets (.csv, .csv.gz) contained in given directory."),
        )
        .arg(
            Arg::new("depth")
                .long("depth")
                .action(ArgAction::Set)
                .value_parser(value_parser!(u8))
                .help("Custom --dir,-d maximal recursive depth (default: 5)."),
        )
        .next_help_heading("Columns")
        .arg(
            Arg::new("x")
                .short('x')
                .value_name("COLUMN")
                .default_value("X")
                .help("ECEF X coordinate column label"),
        )
        .arg(
            Arg::new("y")
                .short('y')
                .value_name("COLUMN")
                .default_value("Y")
                .help("ECEF Y coordinate column label"),
        )
        .arg(
            Arg::new("z")
                .short('z')
                .value_name("COLUMN")
                .default_value("Z")
                .help("ECEF Z coordinate column label"),
        )
}

/// Trajectory opmode options
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryOpts {
    /// Individual files, with their optional title
    pub files: Vec<(PathBuf, Option<String>)>,
    /// Directories to walk through
    pub directories: Vec<PathBuf>,
    /// Maximal recursive depth
    pub depth: usize,
    /// ECEF (x, y, z) column labels
    pub columns: (String, String, String),
}

impl TrajectoryOpts {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let files = matches
            .get_many::<PathBuf>("filepath")
            .map(|files| files.cloned().collect::<Vec<_>>())
            .unwrap_or_default();

        let titles = matches
            .get_many::<String>("title")
            .map(|titles| titles.cloned().collect::<Vec<_>>())
            .unwrap_or_default();

        let directories = matches
            .get_many::<PathBuf>("directory")
            .map(|dirs| dirs.cloned().collect::<Vec<_>>())
            .unwrap_or_default();

        let files = if files.is_empty() && directories.is_empty() {
            info!("no dataset specified: loading ocean field trial");
            OCEAN_FIELD_TRIAL
                .iter()
                .map(|(file, title)| (PathBuf::from(file), Some(title.to_string())))
                .collect()
        } else {
            if titles.len() > files.len() {
                warn!(
                    "{} title(s) but only {} file(s): extra titles are ignored",
                    titles.len(),
                    files.len()
                );
            }
            let mut titles = titles.into_iter();
            files
                .into_iter()
                .map(|file| (file, titles.next()))
                .collect()
        };

        let column = |name: &str| {
            matches
                .get_one::<String>(name)
                .cloned()
                .unwrap_or_else(|| name.to_uppercase())
        };

        Self {
            files,
            directories,
            depth: *matches.get_one::<u8>("depth").unwrap_or(&DEFAULT_DEPTH) as usize,
            columns: (column("x"), column("y"), column("z")),
        }
    }
}
