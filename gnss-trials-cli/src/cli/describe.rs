// Signal statistics opmode
use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

pub fn subcommand() -> Command {
    Command::new("describe")
        .short_flag('D')
        .long_flag("describe")
        .about("Descriptive statistics of a GNSS signal table")
        .long_about(
            "Prints a signal quality table (Satellite_ID, SNR_dB, Pseudorange_m, Doppler_Hz,
Elevation_deg) along with its statistical summary and key figures.
When no file is specified, the field trial sample table is described.",
        )
        .arg(
            Arg::new("filepath")
                .long("fp")
                .short('f')
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Set)
                .help("Signal table (CSV)"),
        )
}

/// Signal table defined by user, if any
pub fn signal_table(matches: &ArgMatches) -> Option<&PathBuf> {
    matches.get_one::<PathBuf>("filepath")
}
