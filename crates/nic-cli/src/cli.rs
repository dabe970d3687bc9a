//! CLI argument definitions for the NIC decoder.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use nic_core::{DEFAULT_CENTURY_PIVOT, LeapDayPolicy};
use nic_ingest::{ColumnSelection, InputFormat, RowRange};
use nic_output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "lanka-nic",
    version,
    about = "Decode Sri Lankan National Identity Card numbers",
    long_about = "Decode Sri Lankan National Identity Card (NIC) numbers.\n\n\
                  Supports pre-2016 (9 digits + V/X) and post-2016 (9 digits) layouts.\n\
                  Reads NICs from arguments or txt/csv/json files and writes txt, csv,\n\
                  json, or a console table."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include NIC numbers in log output (redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Prefix pretty and compact log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode NIC numbers from arguments and/or files.
    Decode(DecodeArgs),

    /// Show the columns of a csv/json file and which of them hold NICs.
    Inspect(InspectArgs),

    /// List the field codes accepted by `decode --data`.
    Fields,
}

#[derive(Parser)]
pub struct DecodeArgs {
    /// NIC numbers to decode.
    #[arg(value_name = "NIC")]
    pub nics: Vec<String>,

    /// Input files containing NIC numbers.
    #[arg(short = 'i', long = "input", value_name = "FILE", num_args = 1..)]
    pub input_files: Vec<PathBuf>,

    /// Input file format (default: inferred from each file's extension).
    #[arg(long = "input-format", value_enum)]
    pub input_format: Option<InputFormatArg>,

    /// Columns (csv) or keys (json) to read NICs from: "auto", indices, or names.
    ///
    /// With "auto", every column whose first rows contain valid NICs is used.
    #[arg(long = "columns", value_name = "SPEC", default_value = "auto")]
    pub columns: ColumnSelection,

    /// Fields to display, in order (e.g. "bfa" for date of birth, format, age).
    ///
    /// y: year of birth, d: day of year, b: date of birth, g/s: gender,
    /// v: voting, f: format, a: age, n: next birthday. Default: "basf".
    #[arg(short = 'd', long = "data", value_name = "CODES")]
    pub data: Option<String>,

    /// Display values without labels.
    #[arg(long = "plain", visible_aliases = ["raw", "no-label"])]
    pub plain: bool,

    /// Separator written after each txt value. Escapes \n and \t are understood.
    #[arg(long = "separator", visible_alias = "sep", default_value = "\\n")]
    pub separator: String,

    /// Leave the NIC number itself out of the output.
    #[arg(long = "no-nic")]
    pub no_nic: bool,

    /// Output format (default: inferred from --output, else txt).
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormatArg>,

    /// Save the output to a file.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Do not print the output to the console.
    #[arg(long = "no-print")]
    pub no_print: bool,

    /// Date used for age and next-birthday (YYYY-MM-DD, default: today).
    #[arg(long = "as-of", value_name = "DATE")]
    pub as_of: Option<NaiveDate>,

    /// Two-digit years below this value are read as 20xx, the rest as 19xx.
    #[arg(
        long = "century-pivot",
        value_name = "YY",
        default_value_t = DEFAULT_CENTURY_PIVOT,
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    pub century_pivot: u8,

    /// Where Feb 29 birthdays fall in common years.
    #[arg(long = "leap-day", value_enum, default_value = "feb28")]
    pub leap_day: LeapDayArg,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// File to inspect.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Input file format (default: inferred from the extension).
    #[arg(long = "input-format", value_enum)]
    pub input_format: Option<InputFormatArg>,

    /// Rows to preview, 1-based and inclusive (e.g. 1:5).
    #[arg(long = "rows", value_name = "START:END")]
    pub rows: Option<RowRange>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum InputFormatArg {
    Txt,
    Csv,
    Json,
}

impl From<InputFormatArg> for InputFormat {
    fn from(value: InputFormatArg) -> Self {
        match value {
            InputFormatArg::Txt => InputFormat::Txt,
            InputFormatArg::Csv => InputFormat::Csv,
            InputFormatArg::Json => InputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Txt,
    Csv,
    Json,
    Table,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(value: OutputFormatArg) -> Self {
        match value {
            OutputFormatArg::Txt => OutputFormat::Txt,
            OutputFormatArg::Csv => OutputFormat::Csv,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Table => OutputFormat::Table,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LeapDayArg {
    Feb28,
    Mar1,
}

impl From<LeapDayArg> for LeapDayPolicy {
    fn from(value: LeapDayArg) -> Self {
        match value {
            LeapDayArg::Feb28 => LeapDayPolicy::Feb28,
            LeapDayArg::Mar1 => LeapDayPolicy::Mar1,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn decode_defaults() {
        let cli = Cli::try_parse_from(["lanka-nic", "decode", "851234567V"]).unwrap();
        let Command::Decode(args) = cli.command else {
            panic!("expected decode");
        };
        assert_eq!(args.nics, vec!["851234567V"]);
        assert_eq!(args.columns, ColumnSelection::Auto);
        assert_eq!(args.century_pivot, DEFAULT_CENTURY_PIVOT);
        assert_eq!(args.separator, "\\n");
        assert!(args.as_of.is_none());
    }

    #[test]
    fn decode_with_files_and_options() {
        let cli = Cli::try_parse_from([
            "lanka-nic",
            "-v",
            "decode",
            "-i",
            "a.csv",
            "b.txt",
            "--columns",
            "NIC",
            "-d",
            "bvn",
            "--as-of",
            "2024-05-03",
            "--format",
            "json",
        ])
        .unwrap();
        let Command::Decode(args) = cli.command else {
            panic!("expected decode");
        };
        assert_eq!(
            args.input_files,
            vec![PathBuf::from("a.csv"), PathBuf::from("b.txt")]
        );
        assert_eq!(
            args.columns,
            ColumnSelection::Names(vec!["NIC".to_string()])
        );
        assert_eq!(args.as_of, NaiveDate::from_ymd_opt(2024, 5, 3));
        assert!(matches!(args.format, Some(OutputFormatArg::Json)));
    }

    #[test]
    fn century_pivot_is_bounded() {
        assert!(
            Cli::try_parse_from(["lanka-nic", "decode", "--century-pivot", "101", "x"]).is_err()
        );
    }

    #[test]
    fn inspect_parses_row_range() {
        let cli = Cli::try_parse_from(["lanka-nic", "inspect", "people.csv", "--rows", "2:4"])
            .unwrap();
        let Command::Inspect(args) = cli.command else {
            panic!("expected inspect");
        };
        assert_eq!(args.rows, Some(RowRange { start: 2, end: 4 }));
    }
}
