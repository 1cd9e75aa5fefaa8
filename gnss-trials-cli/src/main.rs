//! Command line tool to review GNSS field trials.
//! Refer to README for command line arguments.

mod cli; // command line interface
mod describe;
mod trajectory;

use std::path::PathBuf;

use cli::{signal_table, Cli, TrajectoryOpts, Workspace};

use env_logger::{Builder, Env, Target};

#[macro_use]
extern crate log;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    StdioError(#[from] std::io::Error),
    #[error("field trial error: {0}")]
    TrialsError(#[from] gnss_trials::prelude::Error),
    #[error("directory walk error: {0}")]
    WalkDirError(#[from] walkdir::Error),
    #[error("workspace error \"{}\": {source}", .path.display())]
    Workspace {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub fn main() -> Result<(), Error> {
    let cli = Cli::new();

    // RUST_LOG always prevails
    let default_filter = if cli.quiet() { "warn" } else { "info" };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter));
    builder
        .target(Target::Stdout)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    match cli.matches.subcommand() {
        Some(("trajectory", submatches)) => {
            let opts = TrajectoryOpts::from_matches(submatches);
            debug!("{:?}", opts);
            let workspace = Workspace::new(&cli)?;
            trajectory::trajectory(&opts, &workspace)?;
            if !cli.quiet() {
                workspace.open_with_web_browser(trajectory::HTML_PRODUCT);
            }
        },
        Some(("describe", submatches)) => {
            let report = describe::describe(signal_table(submatches).map(|p| p.as_path()))?;
            println!("{}", report);
        },
        _ => unreachable!("subcommand is required"),
    }

    Ok(())
} // main
