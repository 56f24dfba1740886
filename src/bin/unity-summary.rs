#[macro_use]
extern crate clap;

use std::io;

use unity_summary::{
    config::{self, clap::Clappable},
    discover,
    run::Summariser,
    ux::out::{Outputter, Text},
};

use clap::{App, Arg};

fn main() {
    init_tracing();
    if let Err(e) = run(app().get_matches()) {
        usage(&e);
        std::process::exit(1)
    }
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("unity-summary")
        .author(crate_authors!())
        .version(crate_version!())
        .about("Summarises Unity test result files")
        .arg(
            Arg::with_name(config::clap::arg::CONFIG)
                .help("TOML config file to load before applying arguments")
                .short("-c")
                .long("--config")
                .value_name("FILE"),
        )
        .arg(
            Arg::with_name(config::clap::arg::DUMP_CONFIG)
                .help("Dump config instead of summarising")
                .long("--dump-config"),
        )
        .arg(
            Arg::with_name(config::clap::arg::RESULTS_DIR)
                .help("The location of your results files (default: current directory)")
                .index(1),
        )
        .arg(
            Arg::with_name(config::clap::arg::ROOT)
                .help("Prefix for relative paths in the report (default: current directory)")
                .index(2),
        )
}

fn run(matches: clap::ArgMatches) -> anyhow::Result<()> {
    let config = load_config(&matches)?;
    if matches.is_present(config::clap::arg::DUMP_CONFIG) {
        print!("{}", config.to_string()?);
        return Ok(());
    }

    let paths = discover::discover(&config.glob())?;
    let report = Summariser::new()
        .with_root(config.root_or_default()?)
        .run(&paths)?;
    Box::new(Text::new(io::stdout())).output(&report)?;
    Ok(())
}

/// Builds the config from the default, any config file, and the arguments,
/// in increasing order of precedence.
fn load_config(matches: &clap::ArgMatches) -> anyhow::Result<config::Config> {
    let base = match config::clap::config_file(matches) {
        Some(path) => config::io::load(&path)?,
        None => config::Config::default(),
    };
    Ok(base.parse_clap(matches)?)
}

/// Prints `err` and usage information to stdout.
fn usage(err: &anyhow::Error) {
    println!("\nERROR: ");
    println!("{:#}", err);
    println!("\nUsage: unity-summary result_file_directory/ root_path/");
    println!("     result_file_directory - The location of your results files.");
    println!("                             Defaults to current directory if not specified.");
    println!("                             Should end in / if specified.");
    println!("     root_path - Helpful for producing more verbose output if using relative paths.");
}

/// Installs a log subscriber on stderr, if `RUST_LOG` asks for one.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}
