//! Main execution logic for the cardsift CLI.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use cardsift_criteria::{
    describe_fields, load_records, Config, FieldType, FieldValue, FilterBuilder, FilterSet, Record,
    Searchable,
};

use crate::args::{Cli, Command, FieldText, OutputFormat};

/// Execute the command given on the command line, writing results to `out`.
pub fn execute(args: Cli, out: &mut impl Write) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Fields { cards } => {
            let records = read_cards(&cards, &config)?;
            list_fields(&config, &records, out)
        }
        Command::Filter {
            cards,
            include,
            exclude,
            pick,
            format,
        } => {
            let records = read_cards(&cards, &config)?;
            let filters = build_filters(&config, &records, &include, &exclude, &pick);
            print_matches(&config, &filters, &records, format, out)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(Config::default()),
    }
}

fn read_cards(path: &Path, config: &Config) -> Result<Vec<Record>> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    load_records(BufReader::new(file), &config.secondary_field)
        .with_context(|| format!("failed to load cards from {}", path.display()))
}

fn list_fields(config: &Config, records: &[Record], out: &mut impl Write) -> Result<()> {
    let Some(first) = records.first() else {
        tracing::warn!("collection is empty, no fields to list");
        return Ok(());
    };

    let fields = config.visible_fields(describe_fields(first));
    let width = fields.iter().map(|f| f.label.len()).max().unwrap_or(0);
    for field in &fields {
        writeln!(out, "{:<width$}  {}", field.label, field.field_type, width = width)?;
    }
    Ok(())
}

fn build_filters(
    config: &Config,
    records: &[Record],
    include: &[FieldText],
    exclude: &[FieldText],
    pick: &[FieldText],
) -> FilterSet {
    // Field types come from the first card; unknown fields are strings
    let types: HashMap<String, FieldType> = records
        .first()
        .map(|first| {
            describe_fields(first)
                .into_iter()
                .map(|field| (field.field_name, field.field_type))
                .collect()
        })
        .unwrap_or_default();
    let type_of = |field: &str| types.get(field).copied().unwrap_or(FieldType::String);

    let shortcuts = config.shortcuts();
    let builders = include
        .iter()
        .map(|ft| (ft, false))
        .chain(exclude.iter().map(|ft| (ft, true)))
        .map(|(ft, negate)| {
            // Typed text is trimmed; shortcut text is used as configured
            FilterBuilder::new(ft.field.as_str())
                .text(ft.text.trim())
                .negate(negate)
                .field_type(type_of(&ft.field))
        })
        .chain(
            pick.iter()
                .map(|ft| FilterBuilder::shortcut(ft.field.as_str(), &ft.text, &shortcuts)),
        );

    let mut filters = FilterSet::new();
    for builder in builders {
        let Some(id) = builder.id() else {
            tracing::warn!("ignoring shortcut with no configured text");
            continue;
        };
        if filters.apply(&builder).is_none() {
            tracing::warn!(%id, "filter already applied");
        }
    }
    filters
}

fn print_matches(
    config: &Config,
    filters: &FilterSet,
    records: &[Record],
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    for entry in filters {
        writeln!(out, "Filter: {}", entry)?;
    }

    let matching = filters.filter(records);
    for record in &matching {
        match format {
            OutputFormat::Names => writeln!(out, "{}", title(record, &config.title_field))?,
            OutputFormat::Json => {
                let line = serde_json::to_string(&record.to_json())
                    .context("failed to serialize card")?;
                writeln!(out, "{}", line)?;
            }
        }
    }

    writeln!(out, "Total of cards: {}", matching.len())?;
    Ok(())
}

fn title(record: &Record, title_field: &str) -> String {
    match record.field(title_field) {
        Some(FieldValue::Scalar(scalar)) => scalar.to_string(),
        Some(FieldValue::Null) | None => "(untitled)".to_string(),
        Some(other) => other.to_json_string(),
    }
}
