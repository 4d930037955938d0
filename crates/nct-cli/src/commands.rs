//! Subcommand handlers

use anyhow::{Context, Result};
use clap::ArgMatches;
use nct_core::{import_csv_file, kr::kr_target, parse_kr_number, ImportPayload, ParseOutcome, ParserConfig};
use nct_sheets::{import_values, FlatNct, SheetImport, SheetRef};
use std::io::Write;
use std::path::PathBuf;

/// Parser configuration from `--config` and `--quarter`
pub(crate) fn load_config(matches: &ArgMatches) -> Result<ParserConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => ParserConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ParserConfig::default(),
    };
    if let Some(quarter) = matches.get_one::<String>("quarter") {
        config = config.with_quarter(quarter.as_str());
    }
    Ok(config)
}

/// Dispatch the chosen subcommand, writing results to `out`
pub(crate) fn run(matches: &ArgMatches, out: &mut impl Write) -> Result<()> {
    let config = load_config(matches)?;

    match matches.subcommand() {
        Some(("csv", sub)) => {
            let path = required_path(sub)?;
            let outcome = import_csv_file(path, &config)
                .with_context(|| format!("importing {}", path.display()))?;
            emit(sub, outcome, out)
        }
        Some(("sheet-values", sub)) => {
            let path = required_path(sub)?;
            let body = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let import = import_values(&body, &config)
                .with_context(|| format!("importing {}", path.display()))?;
            match import {
                SheetImport::Hierarchy(outcome) => emit(sub, outcome, out),
                SheetImport::Flat(ncts) => emit_flat(sub, &ncts, out),
            }
        }
        Some(("sheet-url", sub)) => {
            let url = sub.get_one::<String>("url").context("missing url")?;
            let key = sub.get_one::<String>("api-key").context("missing api key")?;
            let sheet = SheetRef::from_url(url)?;
            writeln!(out, "spreadsheet: {}", sheet.spreadsheet_id)?;
            writeln!(out, "gid:         {}", sheet.gid)?;
            writeln!(out, "metadata:    {}", sheet.metadata_url(key))?;
            if let Some(name) = sub.get_one::<String>("sheet-name") {
                writeln!(out, "values:      {}", sheet.values_url(name, key))?;
            }
            Ok(())
        }
        Some(("kr", sub)) => {
            let text = sub.get_one::<String>("text").context("missing text")?;
            match parse_kr_number(text) {
                Some(value) => writeln!(out, "{value}")?,
                None => writeln!(out, "{} (no number found)", kr_target(text))?,
            }
            Ok(())
        }
        _ => anyhow::bail!("no subcommand given"),
    }
}

fn required_path(sub: &ArgMatches) -> Result<&PathBuf> {
    sub.get_one::<PathBuf>("file").context("missing file argument")
}

fn emit(sub: &ArgMatches, outcome: ParseOutcome, out: &mut impl Write) -> Result<()> {
    let ParseOutcome { data, diagnostics } = outcome;
    tracing::info!(summary = %data.summary(), quarter = %data.quarter, "parsed plan");

    if sub.get_flag("diagnostics") {
        for skipped in diagnostics.rows() {
            eprintln!("skipped {skipped}");
        }
    }

    let json = if sub.get_flag("payload") {
        ImportPayload::new(data).to_json_pretty()?
    } else {
        serde_json::to_string_pretty(&data)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}

fn emit_flat(sub: &ArgMatches, ncts: &[FlatNct], out: &mut impl Write) -> Result<()> {
    tracing::info!(count = ncts.len(), "parsed flat table");
    if sub.get_flag("payload") {
        tracing::warn!("flat tables have no hierarchy payload; printing rows");
    }
    writeln!(out, "{}", serde_json::to_string_pretty(ncts)?)?;
    Ok(())
}
