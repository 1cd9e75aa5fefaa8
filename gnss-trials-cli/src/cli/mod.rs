use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, ColorChoice, Command};

mod describe;
mod trajectory;
mod workspace;

pub use describe::signal_table;
pub use trajectory::TrajectoryOpts;
pub use workspace::Workspace;

pub struct Cli {
    /// Arguments passed by user
    pub matches: ArgMatches,
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}

impl Cli {
    fn command() -> Command {
        Command::new("gnss-trials-cli")
            .version(env!("CARGO_PKG_VERSION"))
            .about("GNSS field trials review")
            .long_about(
                "gnss-trials-cli renders receiver trajectories recorded during field trials
(ECEF coordinates converted to WGS84 longitude and latitude)
and describes GNSS signal quality tables.",
            )
            .arg_required_else_help(true)
            .subcommand_required(true)
            .color(ColorChoice::Always)
            .next_help_heading("Session (custom preferences)")
            .arg(
                Arg::new("quiet")
                    .short('q')
                    .long("quiet")
                    .global(true)
                    .action(ArgAction::SetTrue)
                    .help("Only report warnings and errors. Disables automatic chart opener (Web browser)."),
            )
            .arg(
                Arg::new("workspace")
                    .short('w')
                    .long("workspace")
                    .value_name("FOLDER")
                    .global(true)
                    .value_parser(value_parser!(PathBuf))
                    .help("Define custom workspace location. See --help for more information.")
                    .long_help(
                        "Workspace is where output products are generated.
When no workspace is defined, we simply create a local WORKSPACE folder.",
                    ),
            )
            .subcommand(trajectory::subcommand())
            .subcommand(describe::subcommand())
    }

    /// Build new command line interface
    pub fn new() -> Self {
        Self {
            matches: Self::command().get_matches(),
        }
    }

    /// Build command line interface from given arguments
    #[cfg(test)]
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Ok(Self {
            matches: Self::command().try_get_matches_from(args)?,
        })
    }

    /// Quiet session
    pub fn quiet(&self) -> bool {
        self.matches.get_flag("quiet")
    }

    /// Workspace defined by user
    pub fn workspace(&self) -> Option<&PathBuf> {
        self.matches.get_one::<PathBuf>("workspace")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn command_definition() {
        Cli::command().debug_assert();
    }
    #[test]
    fn global_options() {
        let cli = Cli::from_args(["gnss-trials-cli", "-q", "-w", "/tmp/review", "describe"])
            .unwrap();
        assert!(cli.quiet());
        assert_eq!(cli.workspace(), Some(&PathBuf::from("/tmp/review")));

        let cli = Cli::from_args(["gnss-trials-cli", "describe", "-q"]).unwrap();
        assert!(cli.quiet());
        assert!(cli.workspace().is_none());
    }
    #[test]
    fn subcommand_required() {
        assert!(Cli::from_args(["gnss-trials-cli"]).is_err());
        assert!(Cli::from_args(["gnss-trials-cli", "merge"]).is_err());
    }
}
