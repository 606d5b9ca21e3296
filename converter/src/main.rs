//! nlu-convert CLI - Convert intent CSV files to Rasa NLU YAML and back
//!
//! # Main Commands
//!
//! ```bash
//! nlu-convert to-yaml train.csv -d data            # CSV → data/nlu.yml
//! nlu-convert to-csv data/nlu.yml -o sample.csv    # YAML → ./sample.csv
//! nlu-convert convert train.csv [--to-csv]         # single entry point
//! ```
//!
//! # Action Commands
//!
//! ```bash
//! nlu-convert actions                                        # list actions
//! nlu-convert run-action action_greet_with_name -s user_name=Linh
//! ```
//!
//! Column and key options fall back to `NLU_*` environment variables, which
//! may also come from a `.env` file. Set `RUST_LOG` to tune log output.

use clap::{Args, Parser, Subcommand};
use nlu_actions::{action_names, run_action, CollectingDispatcher, Domain, Tracker};
use nlu_converter::logs::log_error;
use nlu_converter::{convert, ConversionReport, ConvertOptions, Direction};
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nlu-convert")]
#[command(version, about = "Convert intent CSV files to Rasa NLU YAML and back", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print the conversion report as JSON on stdout
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an intent CSV into a Rasa NLU YAML file
    ToYaml {
        /// Input CSV file
        input: PathBuf,

        #[command(flatten)]
        keys: KeyArgs,

        /// Output file name (default: nlu.yml)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Convert a Rasa NLU YAML file into an intent CSV
    ToCsv {
        /// Input YAML file
        input: PathBuf,

        #[command(flatten)]
        keys: KeyArgs,

        /// Output file name (default: nlu.csv)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Convert in the direction given by --to-csv (default: CSV → YAML)
    Convert {
        /// Input CSV or YAML file
        input: PathBuf,

        #[command(flatten)]
        keys: KeyArgs,

        /// Output file name (default: nlu.yml)
        #[arg(short, long)]
        output: Option<String>,

        /// Convert YAML to CSV instead
        #[arg(long)]
        to_csv: bool,
    },

    /// List registered custom actions
    Actions,

    /// Run a custom action against an in-memory tracker
    RunAction {
        /// Action name, e.g. action_show_balance
        name: String,

        /// Slot value as key=value (value parsed as JSON when possible)
        #[arg(short, long = "slot", value_parser = parse_slot)]
        slots: Vec<(String, Value)>,

        /// Conversation id
        #[arg(long, default_value = "default")]
        sender: String,
    },
}

/// Column names, YAML keys and output location shared by the conversions.
#[derive(Args)]
struct KeyArgs {
    /// Directory to write the output to
    #[arg(short = 'd', long, env = "NLU_EXPORT_DIR", default_value = ".")]
    export_dir: PathBuf,

    /// CSV column / YAML key holding the intent
    #[arg(long, env = "NLU_INTENT_COLUMN", default_value = "intent")]
    intent_column: String,

    /// CSV column holding the example text
    #[arg(long, env = "NLU_TEXT_COLUMN", default_value = "text")]
    text_column: String,

    /// YAML key holding the examples block
    #[arg(long, env = "NLU_EXAMPLES_KEY", default_value = "examples")]
    examples_key: String,

    /// Value of the document's version key
    #[arg(long, env = "NLU_RASA_VERSION", default_value = "3.0")]
    rasa_version: String,
}

impl KeyArgs {
    fn into_options(self, input: PathBuf, direction: Direction, output: Option<String>) -> ConvertOptions {
        let mut options = ConvertOptions::new(input)
            .with_export_dir(self.export_dir)
            .with_label_key(self.intent_column)
            .with_text_key(self.text_column)
            .with_examples_key(self.examples_key)
            .with_format_version(self.rasa_version)
            .with_direction(direction);
        if let Some(name) = output {
            options = options.with_output_file_name(name);
        }
        options
    }
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::ToYaml { input, keys, output } => {
            cmd_convert(keys.into_options(input, Direction::ToYaml, output), cli.json)
        }

        Commands::ToCsv { input, keys, output } => {
            let output = output.unwrap_or_else(|| "nlu.csv".to_string());
            cmd_convert(keys.into_options(input, Direction::ToCsv, Some(output)), cli.json)
        }

        Commands::Convert { input, keys, output, to_csv } => {
            let direction = if to_csv { Direction::ToCsv } else { Direction::ToYaml };
            cmd_convert(keys.into_options(input, direction, output), cli.json)
        }

        Commands::Actions => cmd_actions(),

        Commands::RunAction { name, slots, sender } => cmd_run_action(&name, slots, sender),
    };

    if let Err(e) = result {
        log_error(e.to_string());
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_convert(options: ConvertOptions, as_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let report = convert(&options)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &ConversionReport) {
    eprintln!("📄 Written: {}", report.destination.display());
    eprintln!("   Labels: {}", report.labels);
    eprintln!("   Rows: {} read, {} written, {} dropped", report.rows_read, report.rows_written, report.dropped);
}

fn cmd_actions() -> Result<(), Box<dyn std::error::Error>> {
    for name in action_names() {
        println!("{}", name);
    }
    Ok(())
}

fn cmd_run_action(
    name: &str,
    slots: Vec<(String, Value)>,
    sender: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let tracker = slots
        .into_iter()
        .fold(Tracker::new(sender), |t, (key, value)| t.with_slot(key, value));

    let mut dispatcher = CollectingDispatcher::new();
    let events = run_action(name, &mut dispatcher, &tracker, &Domain::new())?;

    let output = json!({
        "action": name,
        "messages": dispatcher.messages(),
        "events": events,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn parse_slot(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))?;

    if key.is_empty() {
        return Err(format!("empty slot name in '{}'", raw));
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}
