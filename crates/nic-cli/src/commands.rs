use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::Local;
use comfy_table::{Cell, CellAlignment, Table};
use tracing::{debug, info, info_span};

use nic_core::{DecodeOptions, Decoder};
use nic_ingest::{InputFormat, PREVIEW_ROWS, RowRange, Table as InputTable, load_table};
use nic_output::{Field, RenderOptions, parse_fields, render, write_output};

use crate::cli::{DecodeArgs, InspectArgs};
use crate::summary::{align_column, apply_table_style, dim_cell, header_cell};
use crate::types::DecodeResult;
use nic_cli::pipeline::{
    collect_inputs, decode_inputs, ensure_inputs, resolve_output_format, run_status,
    unescape_separator,
};

pub fn run_decode(args: &DecodeArgs) -> Result<DecodeResult> {
    let decoder = Decoder::new(DecodeOptions::default().with_century_pivot(args.century_pivot));
    let fields = parse_fields(args.data.as_deref().unwrap_or_default()).context("parse --data field codes")?;
    let format = resolve_output_format(args.format.map(Into::into), args.output.as_deref());

    let inputs = collect_inputs(
        &args.nics,
        &args.input_files,
        args.input_format.map(InputFormat::from),
        &args.columns,
        &decoder,
    );
    ensure_inputs(&inputs)?;

    let span = info_span!("decode", inputs = inputs.nics.len(), format = %format);
    let _guard = span.enter();
    let batch = decode_inputs(&decoder, &inputs.nics);

    let as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    debug!(%as_of, pivot = args.century_pivot, "render options");
    let options = RenderOptions::new(as_of)
        .with_fields(fields)
        .with_plain(args.plain)
        .with_separator(unescape_separator(&args.separator))
        .with_include_nic(!args.no_nic)
        .with_leap_day(args.leap_day.into());
    let rendered = render(&batch.records, &options, format).context("render output")?;

    if let Some(path) = &args.output {
        write_output(path, &rendered).context("write output")?;
        info!(path = %path.display(), records = batch.records.len(), "saved output");
    }
    if !args.no_print {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(rendered.as_bytes())
            .context("write to stdout")?;
        if !rendered.is_empty() && !rendered.ends_with('\n') {
            writeln!(stdout).context("write to stdout")?;
        }
    }

    let status = run_status(&inputs, &batch);
    Ok(DecodeResult {
        summary: batch.summary,
        format,
        output: args.output.clone(),
        missing_files: inputs.missing_files,
        failed_files: inputs.failed_files,
        status,
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let format = args
        .input_format
        .map_or_else(|| InputFormat::from_path(&args.file), InputFormat::from);
    let table = load_table(&args.file, format)
        .with_context(|| format!("load {}", args.file.display()))?;
    let decoder = Decoder::default();

    let mut columns = Table::new();
    columns.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("NIC"),
    ]);
    apply_table_style(&mut columns);
    align_column(&mut columns, 0, CellAlignment::Right);
    align_column(&mut columns, 2, CellAlignment::Center);
    for summary in table.column_summaries(&decoder, PREVIEW_ROWS) {
        let marker = if summary.nic_candidate {
            Cell::new("*")
        } else {
            dim_cell("-")
        };
        columns.add_row(vec![
            Cell::new(summary.index),
            Cell::new(&summary.name),
            marker,
        ]);
    }
    println!("{} ({format}, {} rows)", args.file.display(), table.rows.len());
    println!("{columns}");

    if let Some(range) = args.rows {
        print_preview(&table, range);
    }
    Ok(())
}

fn print_preview(table: &InputTable, range: RowRange) {
    let rows = table.preview(range);
    if rows.is_empty() {
        println!("No rows in {}:{}", range.start, range.end);
        return;
    }
    let mut preview = Table::new();
    preview.set_header(
        std::iter::once(header_cell("Row"))
            .chain(table.headers.iter().map(String::as_str).map(header_cell))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut preview);
    align_column(&mut preview, 0, CellAlignment::Right);
    for (offset, row) in rows.iter().enumerate() {
        let mut cells = vec![Cell::new(range.start + offset)];
        cells.extend(row.iter().map(Cell::new));
        preview.add_row(cells);
    }
    println!("{preview}");
}

pub fn run_fields() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Code"), header_cell("Field")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    for field in Field::ALL {
        let codes: Vec<String> = field.codes().iter().map(char::to_string).collect();
        table.add_row(vec![codes.join("/"), field.label().to_string()]);
    }
    println!("{table}");
    Ok(())
}
