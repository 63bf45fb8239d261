//! Command implementations for mission-prep.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{info, info_span};

use mission_ingest::{load_glossary, load_records, write_records};
use mission_model::Glossary;
use mission_normalize::{apply_glossary, standard_ruleset};

use crate::cli::CleanArgs;
use crate::summary::apply_table_style;
use crate::types::CleanResult;

/// Lists the cleantext rules in application order.
pub fn run_rules() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["#", "Rule", "Pattern", "Replacement"]);
    apply_table_style(&mut table);
    for (index, rule) in standard_ruleset().rules().iter().enumerate() {
        table.add_row(vec![
            index.to_string(),
            rule.name().to_string(),
            format!("{:?}", rule.pattern()),
            format!("{:?}", rule.replacement_display()),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Runs the pipeline over one column of the input CSV.
pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let span = info_span!(
        "clean",
        input = %args.input.display(),
        column = %args.column
    );
    let _guard = span.enter();
    let start = Instant::now();

    // Configuration-level failures (missing columns, malformed glossary
    // rows) surface here, before any record is touched.
    let glossary = match &args.glossary {
        Some(path) => load_glossary(path).context("load glossary table")?,
        None => Glossary::default(),
    };

    let mut table = load_records(&args.input).context("load input records")?;
    let Some(column_index) = table.column_index(&args.column) else {
        bail!(
            "column '{}' not found in {} (available: {})",
            args.column,
            args.input.display(),
            table.headers().join(", ")
        );
    };

    let ruleset = standard_ruleset();
    let changed = table.rewrite_column(column_index, |text| {
        let normalized = if args.skip_cleantext {
            text.to_string()
        } else {
            ruleset.normalize(text)
        };
        apply_glossary(&normalized, &glossary)
    });
    let records = table.len();
    info!(
        records,
        changed,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "processed records"
    );

    let output = if args.dry_run {
        info!("dry run, skipping output");
        None
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&args.input));
        write_records(&path, &table).context("write output records")?;
        Some(path)
    };

    Ok(CleanResult {
        input: args.input.clone(),
        output,
        column: args.column.clone(),
        records,
        changed,
        glossary_entries: glossary.len(),
    })
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{stem}.clean.csv"))
}
