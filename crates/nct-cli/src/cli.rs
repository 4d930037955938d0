//! Command-line definition

use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

fn output_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("payload")
            .long("payload")
            .action(ArgAction::SetTrue)
            .help("Wrap output in the import request body"),
    )
    .arg(
        Arg::new("diagnostics")
            .long("diagnostics")
            .action(ArgAction::SetTrue)
            .help("Print skipped rows to stderr"),
    )
}

/// Build the `nct-import` command
pub(crate) fn build() -> Command {
    Command::new("nct-import")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Import NCT planning sheets as a structured hierarchy")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("quarter")
                .long("quarter")
                .global(true)
                .help("Quarter label for the parsed plan (default from config)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML parser configuration"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v debug, -vv trace)"),
        )
        .subcommand(output_args(
            Command::new("csv").about("Parse a CSV export").arg(
                Arg::new("file")
                    .required(true)
                    .value_parser(value_parser!(PathBuf))
                    .help("CSV file to import"),
            ),
        ))
        .subcommand(output_args(
            Command::new("sheet-values")
                .about("Parse a saved Google Sheets values response")
                .arg(
                    Arg::new("file")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("JSON body of the values endpoint"),
                ),
        ))
        .subcommand(
            Command::new("sheet-url")
                .about("Show the Sheets API endpoints for a spreadsheet URL")
                .arg(Arg::new("url").required(true).help("Browser URL of the sheet"))
                .arg(
                    Arg::new("api-key")
                        .long("api-key")
                        .default_value("API_KEY")
                        .help("Key to place in the endpoint URLs"),
                )
                .arg(
                    Arg::new("sheet-name")
                        .long("sheet-name")
                        .help("Tab title for the values endpoint"),
                ),
        )
        .subcommand(
            Command::new("kr")
                .about("Extract the numeric target from a Key Result")
                .arg(Arg::new("text").required(true).help("Key Result text")),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_well_formed() {
        build().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let matches = build()
            .try_get_matches_from(["nct-import", "csv", "plan.csv", "--quarter", "Q2 2026", "-vv"])
            .unwrap();
        assert_eq!(matches.get_one::<String>("quarter").map(String::as_str), Some("Q2 2026"));
        assert_eq!(matches.get_count("verbose"), 2);

        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "csv");
        assert_eq!(sub.get_one::<PathBuf>("file"), Some(&PathBuf::from("plan.csv")));
        assert!(!sub.get_flag("payload"));
    }

    #[test]
    fn subcommand_required() {
        assert!(build().try_get_matches_from(["nct-import"]).is_err());
    }
}
