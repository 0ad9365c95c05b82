mod config;

use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use qml_core::{lex, parse_with, EntryRule, ModalFlavor, ParseError};
use tracing_subscriber::EnvFilter;

use config::{CliError, Config, Settings};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Quantified modal logic toolchain.
#[derive(Parser)]
#[command(name = "qml", version, about = "Quantified modal logic lexer and parser")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Reading of □ and ⋄ (alethic, deontic or epistemic)
    #[arg(long, global = true)]
    flavor: Option<ModalFlavor>,

    /// Grammar rule to start from (default: equivalence)
    #[arg(long, global = true)]
    entry: Option<EntryRule>,

    /// Path to a TOML file with a [parser] table
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the token stream of a formula
    Lex {
        /// Formula text
        formula: String,
    },

    /// Parse a formula and print its expression tree
    Parse {
        /// Formula text
        formula: String,
    },

    /// Parse every formula in a file, one per line
    Check {
        /// Path to the formula file (blank lines and `#` comments are skipped)
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = match load_settings(&cli) {
        Ok(s) => s,
        Err(e) => {
            report_error(&e.to_string(), cli.output, cli.quiet);
            process::exit(1);
        }
    };
    tracing::debug!(flavor = %settings.flavor, entry = %settings.entry, "resolved settings");

    let ok = match &cli.command {
        Commands::Lex { formula } => cmd_lex(formula, cli.output, cli.quiet),
        Commands::Parse { formula } => cmd_parse(formula, settings, cli.output, cli.quiet),
        Commands::Check { file } => cmd_check(file, settings, cli.output, cli.quiet),
    };
    if !ok {
        process::exit(1);
    }
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "qml=warn,qml_core=warn",
        1 => "qml=debug,qml_core=debug",
        _ => "qml=trace,qml_core=trace",
    }
}

fn load_settings(cli: &Cli) -> Result<Settings, CliError> {
    let file = match &cli.config {
        Some(path) => config::read_config(path)?,
        None => Config::default(),
    };
    Ok(config::resolve(&file, cli.flavor, cli.entry))
}

// ──────────────────────────────────────────────
// Commands
// ──────────────────────────────────────────────

fn cmd_lex(formula: &str, output: OutputFormat, quiet: bool) -> bool {
    let tokens = lex(formula);
    if quiet {
        return true;
    }
    match output {
        OutputFormat::Json => print_json(&tokens),
        OutputFormat::Text => {
            for token in &tokens {
                if token.literal.is_empty() {
                    println!("{}", token.kind);
                } else {
                    println!("{} {}", token.kind, token.literal);
                }
            }
        }
    }
    true
}

fn cmd_parse(formula: &str, settings: Settings, output: OutputFormat, quiet: bool) -> bool {
    match parse_with(formula, settings.entry, settings.flavor) {
        Ok(expr) => {
            if !quiet {
                match output {
                    OutputFormat::Json => print_json(&expr),
                    OutputFormat::Text => println!("{:#?}", expr),
                }
            }
            true
        }
        Err(e) => {
            report_parse_error(&e, output, quiet);
            false
        }
    }
}

/// One checked line of a formula file.
#[derive(serde::Serialize)]
struct LineResult {
    line: usize,
    formula: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<qml_core::ErrorReport>,
}

fn cmd_check(file: &Path, settings: Settings, output: OutputFormat, quiet: bool) -> bool {
    let content = match std::fs::read_to_string(file) {
        Ok(c) => c,
        Err(source) => {
            let err = CliError::Read {
                path: file.to_path_buf(),
                source,
            };
            report_error(&err.to_string(), output, quiet);
            return false;
        }
    };

    let results = check_lines(&content, settings);
    let failed = results.iter().filter(|r| r.error.is_some()).count();
    tracing::debug!(checked = results.len(), failed, "checked formula file");

    if !quiet {
        match output {
            OutputFormat::Json => print_json(&results),
            OutputFormat::Text => {
                for r in &results {
                    match &r.error {
                        None => println!("line {}: ok", r.line),
                        Some(e) => println!("line {}: error: {}", r.line, e.message),
                    }
                }
                println!("{} formula(s) checked, {} failed", results.len(), failed);
            }
        }
    }
    failed == 0
}

fn check_lines(content: &str, settings: Settings) -> Vec<LineResult> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(idx, line)| {
            let formula = line.trim_end_matches('\r');
            LineResult {
                line: idx + 1,
                formula: formula.to_owned(),
                error: parse_with(formula, settings.entry, settings.flavor)
                    .err()
                    .map(|e| e.to_json_value()),
            }
        })
        .collect()
}

// ──────────────────────────────────────────────
// Output helpers
// ──────────────────────────────────────────────

fn print_json<T: serde::Serialize>(value: &T) {
    let json = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"serialization: {}\"}}", e));
    println!("{}", json);
}

fn report_parse_error(e: &ParseError, output: OutputFormat, quiet: bool) {
    match output {
        OutputFormat::Json => {
            let err_json = serde_json::to_string_pretty(&e.to_json_value())
                .unwrap_or_else(|_| format!("{{\"error\": \"{:?}\"}}", e));
            eprintln!("{}", err_json);
        }
        OutputFormat::Text => {
            if !quiet {
                eprintln!("parse error: {}", e);
            }
        }
    }
}

fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => eprintln!("{}", serde_json::json!({ "error": msg })),
    }
}
