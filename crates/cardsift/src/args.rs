//! CLI argument definitions for cardsift.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Filter card collections with the cardsift criteria language.
///
/// ## Examples
///
/// List the filterable fields of a collection:
///   cardsift fields cards.json
///
/// Cards costing 3 or more that are not red:
///   cardsift filter cards.json --where "cost:3+" --not "color:red"
///
/// Blue cards through the color shortcut, printed as JSON lines:
///   cardsift filter cards.json --pick color:U --format json
#[derive(Parser, Debug)]
#[command(name = "cardsift")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// YAML configuration file
    #[arg(short = 'c', long, global = true, env = "CARDSIFT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(long, global = true, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the filterable fields of the first card
    Fields {
        /// JSON card collection (array or object keyed by card number)
        cards: PathBuf,
    },

    /// Filter the collection and print the matching cards
    Filter {
        /// JSON card collection (array or object keyed by card number)
        cards: PathBuf,

        /// Keep cards whose FIELD matches TEXT
        #[arg(short = 'w', long = "where", value_name = "FIELD:TEXT", value_parser = parse_field_text)]
        include: Vec<FieldText>,

        /// Drop cards whose FIELD matches TEXT
        #[arg(short = 'n', long = "not", value_name = "FIELD:TEXT", value_parser = parse_field_text)]
        exclude: Vec<FieldText>,

        /// Keep cards matching a configured shortcut, e.g. color:U
        #[arg(short = 'p', long, value_name = "FIELD:ID", value_parser = parse_field_text)]
        pick: Vec<FieldText>,

        /// Output format for matching cards
        #[arg(short = 'f', long, value_enum, default_value = "names")]
        format: OutputFormat,
    },
}

/// A `FIELD:TEXT` pair; the text may itself contain colons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldText {
    pub field: String,
    pub text: String,
}

/// Output format argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One title per line
    Names,
    /// One JSON object per line
    Json,
}

/// Log level argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    /// Trace level (most verbose)
    Trace,
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warning level (default)
    Warn,
    /// Error level (least verbose)
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Parse a `FIELD:TEXT` pair, splitting at the first colon.
fn parse_field_text(s: &str) -> Result<FieldText, String> {
    let (field, text) = s
        .split_once(':')
        .ok_or_else(|| format!("'{}' is not in FIELD:TEXT form", s))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(format!("'{}' has an empty field name", s));
    }
    Ok(FieldText {
        field: field.to_string(),
        text: text.to_string(),
    })
}
