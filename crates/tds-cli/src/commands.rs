use std::time::Instant;

use anyhow::{Context, Result};
use tds_ingest::{ingest_statement, read_statement};
use tds_model::{Record, StatementLayout};
use tds_report::{ExportFormat, encode, write_export};
use tds_transform::convert_file;
use tracing::{debug, info, info_span};

use tds_cli::logging::redact_value;
use tds_cli::output::default_output_path;

use crate::cli::{ConvertArgs, InspectArgs};
use crate::types::{ConvertResult, InspectResult};

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let span = info_span!("convert", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();
    let layout = StatementLayout::default();

    let conversion = convert_file(&args.input, &layout)
        .with_context(|| format!("convert {}", args.input.display()))?;

    let format = ExportFormat::from(args.format);
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input, format));

    let written = if args.dry_run {
        info!(output = %output.display(), "dry run, output not written");
        None
    } else {
        let bytes = info_span!("export", format = format.extension())
            .in_scope(|| encode(&conversion.table, format))
            .context("encode table")?;
        write_export(&output, &bytes)
            .with_context(|| format!("write {}", output.display()))?;
        Some(bytes.len())
    };

    info!(
        rows = conversion.table.height(),
        duration_ms = start.elapsed().as_millis(),
        "convert complete"
    );
    Ok(ConvertResult {
        input: args.input.clone(),
        output,
        format,
        table: conversion.table,
        stats: conversion.stats,
        deductors: conversion.deductors,
        written,
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<InspectResult> {
    let span = info_span!("inspect", input = %args.input.display());
    let _guard = span.enter();
    let layout = StatementLayout::default();

    let text = read_statement(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let record_set = ingest_statement(&text, &layout)
        .with_context(|| format!("inspect {}", args.input.display()))?;

    let mut identities: Vec<&[String]> =
        record_set.records.iter().map(Record::identity).collect();
    identities.dedup();
    for identity in identities {
        if let [number, name, tan] = identity {
            debug!(
                deductor_number = %number,
                deductor = redact_value(name),
                tan = redact_value(tan),
                "deductor rows"
            );
        }
    }

    Ok(InspectResult {
        input: args.input.clone(),
        deductors: record_set.deductor_count(),
        header: record_set.header,
        stats: record_set.stats,
    })
}
