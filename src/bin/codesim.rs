//! Command-line interface for codesim
//!
//! Usage:
//!   codesim compare `<left>` `<right>` [--format `<format>`] [--no-color]  - Compare two source files
//!   codesim show `<path>` [--format `<format>`]                          - Print the syntax tree of a file
//!   codesim tokens `<path>` [--format `<format>`]                        - Print the tokens of a file
//!
//! A `codesim.toml` in the working directory is layered over the built-in
//! defaults when present. Every subcommand accepts `--config <file>` to layer
//! another TOML file on top. Logging goes to stderr and is filtered by `CODESIM_LOG`,
//! falling back to `logging.level` from the configuration.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use crossterm::tty::IsTty;
use tracing_subscriber::EnvFilter;

use codesim::codesim::formats::{FormatRegistry, TableStyle};
use codesim::codesim::processor::{self, Target};
use codesim_config::{CodesimConfig, LoggingConfig, Loader};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn cli() -> Command {
    Command::new("codesim")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Measure the structural similarity of source files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults")
                .global(true),
        )
        .subcommand(
            Command::new("compare")
                .about("Compare two source files")
                .arg(
                    Arg::new("left")
                        .help("Path to the left-hand file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("right")
                        .help("Path to the right-hand file")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('table', 'json' or 'yaml')")
                        .default_value("table"),
                )
                .arg(
                    Arg::new("no-color")
                        .long("no-color")
                        .help("Do not colour the diff table")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Print the syntax tree of a source file")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help(format!(
                            "Output format ({})",
                            FormatRegistry::with_defaults().list_formats().join(", ")
                        ))
                        .default_value("treeviz"),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the tokens of a source file")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('simple' or 'json')")
                        .default_value("simple"),
                ),
        )
}

fn run() -> Result<()> {
    let matches = cli().get_matches();
    let config = load_config(&matches)?;
    init_logging(&config.logging);

    match matches.subcommand() {
        Some(("compare", compare_matches)) => handle_compare_command(compare_matches, &config),
        Some(("show", show_matches)) => handle_show_command(show_matches),
        Some(("tokens", tokens_matches)) => handle_tokens_command(tokens_matches),
        _ => unreachable!(),
    }
}

const LOCAL_CONFIG: &str = "codesim.toml";

fn load_config(matches: &ArgMatches) -> Result<CodesimConfig> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    let config_path = matches
        .subcommand()
        .and_then(|(_, sub)| sub.get_one::<String>("config"))
        .or_else(|| matches.get_one::<String>("config"));
    if let Some(path) = config_path {
        loader = loader.with_file(path);
    }

    let no_color = matches
        .subcommand_matches("compare")
        .is_some_and(|compare| compare.get_flag("no-color"));
    if no_color || !std::io::stdout().is_tty() {
        loader = loader.set_override("display.color", false)?;
    }

    loader.build().context("failed to load configuration")
}

fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_env("CODESIM_LOG").unwrap_or_else(|_| EnvFilter::new(&config.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_default()
}

/// Handle the compare command
fn handle_compare_command(matches: &ArgMatches, config: &CodesimConfig) -> Result<()> {
    let format = Target::Report.format(required(matches, "format"))?;
    let report = processor::compare_files(required(matches, "left"), required(matches, "right"))?;
    let style = TableStyle::from(&config.display);
    let output = processor::format_report(
        &report,
        format,
        &style,
        config.report.near_duplicate_threshold,
    )?;
    println!("{}", output.trim_end());
    Ok(())
}

/// Handle the show command
fn handle_show_command(matches: &ArgMatches) -> Result<()> {
    let format = Target::Tree.format(required(matches, "format"))?;
    let tree = processor::parse_file(required(matches, "path"))?;
    println!("{}", processor::format_tree(&tree, format)?.trim_end());
    Ok(())
}

/// Handle the tokens command
fn handle_tokens_command(matches: &ArgMatches) -> Result<()> {
    let format = Target::Tokens.format(required(matches, "format"))?;
    let output = processor::process_tokens(required(matches, "path"), format)?;
    println!("{}", output.trim_end());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn test_compare_flags() {
        let matches = cli()
            .try_get_matches_from(["codesim", "compare", "A.java", "B.java", "--no-color"])
            .expect("valid arguments");
        let (name, compare) = matches.subcommand().expect("a subcommand");

        assert_eq!(name, "compare");
        assert!(compare.get_flag("no-color"));
        assert_eq!(required(compare, "format"), "table");
    }

    #[test]
    fn test_show_help_lists_tree_formats() {
        let cli = cli();
        let show = cli.find_subcommand("show").expect("show subcommand");
        let format = show
            .get_arguments()
            .find(|arg| arg.get_id() == "format")
            .expect("format argument");
        assert_eq!(
            format.get_help().map(ToString::to_string).as_deref(),
            Some("Output format (json, treeviz, yaml)")
        );
    }

    #[test]
    fn test_config_is_global() {
        let matches = cli()
            .try_get_matches_from(["codesim", "show", "A.java", "--config", "codesim.toml"])
            .expect("valid arguments");
        let (_, show) = matches.subcommand().expect("a subcommand");
        assert_eq!(
            show.get_one::<String>("config").map(String::as_str),
            Some("codesim.toml")
        );
    }
}
