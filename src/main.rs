#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # cgpa
//!
//! Command line CGPA calculator.
//!
//! ```text
//! cgpa calc O:4 A:3 B+:2
//! cgpa calc --file grades.txt --json
//! cgpa interactive
//! cgpa scale
//! ```

use std::path::PathBuf;

use anyhow::Result;
use bpaf::*;
use cgpa::{Config, compute_breakdown_with, input, report};
use dotenvy::dotenv;
use tracing::metadata::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Options shared by every subcommand.
#[derive(Debug, Clone)]
struct Common {
    /// Reject grades that are not on the scale
    strict: bool,
    /// JSON grade scale file
    scale:  Option<PathBuf>,
}

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Compute from entries given on the command line or in a file
    Calc {
        /// Shared options
        common:  Common,
        /// Print JSON instead of tables
        json:    bool,
        /// File with one entry per line
        file:    Option<PathBuf>,
        /// `GRADE:CREDITS` entries
        entries: Vec<String>,
    },
    /// Ask for each subject on the terminal
    Interactive(Common),
    /// Print the grade scale
    Scale(Common),
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses shared options
    fn common_opts() -> impl Parser<Common> {
        let strict = long("strict")
            .help("Reject grades that are not on the grade scale instead of scoring them as 0")
            .switch();
        let scale = long("scale")
            .help("JSON grade scale file, eg. [{\"grade\": \"O\", \"point\": 10}]")
            .argument::<PathBuf>("FILE")
            .optional();
        construct!(Common { strict, scale })
    }

    let json = long("json").help("Print the result as JSON").switch();
    let file = long("file")
        .short('f')
        .help("Read GRADE:CREDITS entries from a file, one per line")
        .argument::<PathBuf>("FILE")
        .optional();
    let entries = positional::<String>("GRADE:CREDITS")
        .help("Letter grade and credits of a subject, eg. B+:3")
        .many();
    let common = common_opts();

    let calc = construct!(Cmd::Calc {
        common,
        json,
        file,
        entries
    })
    .to_options()
    .command("calc")
    .help("Compute a CGPA from letter grades and credits");

    let interactive = construct!(Cmd::Interactive(common_opts()))
        .to_options()
        .command("interactive")
        .help("Enter subjects one at a time");

    let scale = construct!(Cmd::Scale(common_opts()))
        .to_options()
        .command("scale")
        .help("Print the grade scale in use");

    let cmd = construct!([calc, interactive, scale]);

    cmd.to_options().descr("CGPA calculator").run()
}

/// Applies command line overrides on top of the environment config.
fn load_config(common: &Common) -> Result<Config> {
    Ok(Config::from_env_with_scale(common.scale.as_deref())?.with_strict(common.strict))
}

/// Entry point: sets up logging, parses arguments and runs the command
fn main() -> Result<()> {
    dotenv().ok();

    let cmd = options();
    let level = cgpa::config::log_level_from_env();

    let fmt = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(level);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    match cmd {
        Cmd::Calc {
            common,
            json,
            file,
            entries,
        } => {
            let config = load_config(&common)?;
            let mut records = match &file {
                Some(path) => input::read_records_file(path)?,
                None => Vec::new(),
            };
            records.extend(input::collect_records(&entries, config.scale(), config.strict())?);

            if records.is_empty() {
                tracing::warn!("No subjects given; pass GRADE:CREDITS entries or --file");
            }

            let breakdown = compute_breakdown_with(&records, config.scale(), config.policy())?;
            if json {
                println!("{}", report::render_json(&breakdown)?);
            } else {
                println!("{}", report::render_report(&breakdown));
            }
        }
        Cmd::Interactive(common) => {
            let config = load_config(&common)?;
            let stdin = std::io::stdin();
            let records =
                input::prompt_records(&mut stdin.lock(), &mut std::io::stdout(), config.scale())?;

            let breakdown = compute_breakdown_with(&records, config.scale(), config.policy())?;
            println!();
            println!("{}", report::render_report(&breakdown));
        }
        Cmd::Scale(common) => {
            let config = load_config(&common)?;
            match config.scale_file() {
                Some(path) => tracing::info!("Grade scale from {}", path.display()),
                None => tracing::info!("Using the default grade scale"),
            }
            println!("{}", report::render_scale(config.scale()));
        }
    };

    Ok(())
}
