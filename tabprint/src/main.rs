//! # tabprint
//!
//! Prints tables from a JSON data file as box-drawing terminal tables.
//!
//! ## Usage
//!
//! ```bash
//! # Print one table
//! tabprint --data db.json print users
//!
//! # Same data as JSON rows
//! tabprint --data db.json --output json print users
//!
//! # Read command lines from stdin
//! printf 'print users\nprint orders\n' | tabprint --data db.json
//! ```
//!
//! The data file maps table names to arrays of row objects:
//!
//! ```json
//! { "users": [ { "id": 1, "name": "Eva Song" } ] }
//! ```

mod render;

use std::io::BufRead;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::style;
use tabprintlib::{Command as _, MemoryStore, PrintCommand, View, WriterView};
use tracing::{debug, info};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use render::{print_json, OutputMode};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("tabprint")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print tables from a JSON data file as box-drawing tables")
        .arg(
            Arg::new("data")
                .short('d')
                .long("data")
                .value_name("FILE")
                .required(true)
                .help("JSON data file mapping table names to arrays of rows"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v, -vv, -vvv)"),
        )
        .arg(
            Arg::new("command")
                .num_args(1..)
                .trailing_var_arg(true)
                .help("Command to run, e.g. `print users` (read from stdin when omitted)"),
        )
}

/// Set up stderr logging. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose >= 3)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Command lines from the trailing arguments, or from stdin when none were given
fn collect_lines(matches: &ArgMatches) -> anyhow::Result<Vec<String>> {
    if let Some(words) = matches.get_many::<String>("command") {
        let words: Vec<&str> = words.map(|s| s.as_str()).collect();
        return Ok(vec![words.join(" ")]);
    }

    read_lines(std::io::stdin().lock())
}

/// Non-blank lines from `reader`, with any CRLF carriage return removed
fn read_lines(reader: impl BufRead) -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.context("reading commands from stdin")?;
        let line = line.trim_end_matches('\r');
        if !line.trim().is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

/// Run one command line
fn dispatch<V: View>(
    printer: &mut PrintCommand<V, &MemoryStore>,
    store: &MemoryStore,
    mode: OutputMode,
    line: &str,
) -> anyhow::Result<()> {
    if !printer.can_process(line) {
        bail!("unknown command: '{}'", line);
    }
    debug!(line, ?mode, "dispatching");

    match mode {
        OutputMode::Table => printer.process(line)?,
        OutputMode::Json => printer.view_mut().write(&print_json(store, line)?)?,
    }
    Ok(())
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let data = matches
        .get_one::<String>("data")
        .context("missing --data argument")?;
    let mode = matches
        .get_one::<String>("output")
        .map(|s| OutputMode::from_name(s))
        .unwrap_or_default();

    let store = MemoryStore::load(data).with_context(|| format!("loading data from '{}'", data))?;
    info!(path = %data, tables = store.table_names().len(), "data loaded");

    let lines = collect_lines(matches)?;
    let mut printer = PrintCommand::new(WriterView::stdout(), &store);
    for line in &lines {
        dispatch(&mut printer, &store, mode, line)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", style("Error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabprintlib::{BufferView, Row, Table};

    fn store() -> MemoryStore {
        MemoryStore::new().with_table("test", Table::from(vec![Row::new().with("id", 1)]))
    }

    #[test]
    fn test_command_definition_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_trailing_words_form_one_line() {
        let matches = build_command()
            .try_get_matches_from(["tabprint", "-d", "db.json", "print", "users"])
            .unwrap();
        assert_eq!(collect_lines(&matches).unwrap(), vec!["print users"]);
    }

    #[test]
    fn test_data_is_required() {
        assert!(build_command()
            .try_get_matches_from(["tabprint", "print", "users"])
            .is_err());
    }

    #[test]
    fn test_dispatch_table_mode() {
        let store = store();
        let mut printer = PrintCommand::new(BufferView::new(), &store);
        dispatch(&mut printer, &store, OutputMode::Table, "print test").unwrap();
        assert_eq!(
            printer.view().contents(),
            "╔════╗\n║ id ║\n╠════╣\n║ 1  ║\n╚════╝\n"
        );
    }

    #[test]
    fn test_dispatch_json_mode_writes_to_view() {
        let store = store();
        let mut printer = PrintCommand::new(BufferView::new(), &store);
        dispatch(&mut printer, &store, OutputMode::Json, "print test").unwrap();
        assert_eq!(printer.view().written().len(), 1);
        let parsed: serde_json::Value =
            serde_json::from_str(&printer.view().contents()).unwrap();
        assert_eq!(parsed[0]["id"], 1);
    }

    #[test]
    fn test_dispatch_json_mode_rejects_malformed_table() {
        let store = MemoryStore::new().with_table(
            "bad",
            Table::from(vec![Row::new().with("id", 1), Row::new().with("x", 2)]),
        );
        let mut printer = PrintCommand::new(BufferView::new(), &store);
        assert!(dispatch(&mut printer, &store, OutputMode::Json, "print bad").is_err());
        assert!(printer.view().written().is_empty());
    }

    #[test]
    fn test_read_lines_strips_carriage_returns() {
        let input = std::io::Cursor::new("print users\r\n\r\nprint test\r\n");
        assert_eq!(
            read_lines(input).unwrap(),
            vec!["print users", "print test"]
        );
    }

    #[test]
    fn test_dispatch_unknown_command() {
        let store = store();
        let mut printer = PrintCommand::new(BufferView::new(), &store);
        let err = dispatch(&mut printer, &store, OutputMode::Table, "drop test").unwrap_err();
        assert!(err.to_string().contains("unknown command"));
        assert!(printer.view().written().is_empty());
    }
}
