use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use taxon_model::{
    CanonicalField, DatasetKind, DetectedRole, UploadOutcome, ValidateBody,
};

use taxon_cli::commands::{ExportResult, ValidateResult};

pub fn print_fields() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Strings"),
        header_cell("Classifications"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Center);
    for field in CanonicalField::all() {
        let mut row = vec![Cell::new(field.as_str())];
        for kind in DatasetKind::all() {
            row.push(if kind.required_fields().contains(field) {
                Cell::new("required").fg(Color::Green)
            } else {
                dim_cell("-")
            });
        }
        table.add_row(row);
    }
    println!("{table}");
}

pub fn print_detection(results: &[(PathBuf, UploadOutcome)], json: bool) -> Result<()> {
    if json {
        let outcomes: Vec<&UploadOutcome> = results.iter().map(|(_, outcome)| outcome).collect();
        let rendered = serde_json::to_string_pretty(&outcomes).context("encode detection")?;
        println!("{rendered}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Role"),
        header_cell("Rows"),
        header_cell("Missing headers"),
        header_cell("Extra headers"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (path, outcome) in results {
        let file = Cell::new(path.display());
        match outcome {
            UploadOutcome::Parsed(analysis) => {
                table.add_row(vec![
                    file,
                    role_cell(analysis.detected_role),
                    Cell::new(analysis.row_count),
                    list_cell(&analysis.missing_required_headers, Color::Red),
                    list_cell(&analysis.extra_headers, Color::Yellow),
                ]);
            }
            UploadOutcome::Failed(failure) => {
                table.add_row(vec![
                    file,
                    Cell::new("parse error")
                        .fg(Color::Red)
                        .add_attribute(Attribute::Bold),
                    dim_cell("-"),
                    Cell::new(&failure.error).fg(Color::Red),
                    dim_cell("-"),
                ]);
            }
        }
    }
    println!("{table}");
    Ok(())
}

pub fn print_validation(result: &ValidateResult, json: bool) -> Result<()> {
    if json {
        let rendered =
            serde_json::to_string_pretty(&result.response).context("encode validate response")?;
        println!("{rendered}");
        return Ok(());
    }

    println!(
        "Strings: {} ({} rows)",
        result.pair.strings.filename.as_deref().unwrap_or("-"),
        result.pair.strings.row_count
    );
    println!(
        "Classifications: {} ({} rows)",
        result.pair.classifications.filename.as_deref().unwrap_or("-"),
        result.pair.classifications.row_count
    );

    match &result.response.body {
        ValidateBody::Valid { .. } => println!("Validation passed"),
        ValidateBody::HeaderErrors { header_errors, .. } => {
            let mut table = Table::new();
            table.set_header(vec![
                header_cell("Dataset"),
                header_cell("Missing headers"),
                header_cell("Reason"),
            ]);
            apply_issue_table_style(&mut table);
            for error in header_errors {
                table.add_row(vec![
                    Cell::new(error.kind),
                    list_cell(&error.missing_required_headers, Color::Red),
                    Cell::new(&error.reason),
                ]);
            }
            println!("{table}");
        }
        ValidateBody::InvalidRows {
            invalid_rows,
            total_rows,
            invalid_count,
            ..
        } => {
            let mut table = Table::new();
            table.set_header(vec![header_cell("Row"), header_cell("Reason")]);
            apply_issue_table_style(&mut table);
            align_column(&mut table, 0, CellAlignment::Right);
            for record in invalid_rows {
                table.add_row(vec![Cell::new(record.row_index), Cell::new(&record.reason)]);
            }
            println!("{table}");
            println!("{invalid_count} of {total_rows} strings rows failed validation");
        }
    }
    Ok(())
}

pub fn print_export(result: &ExportResult) {
    println!(
        "Exported {} rows of the {} dataset to {}",
        result.rows,
        result.dataset,
        result.output.display()
    );
    if let Some(warning) = &result.check.warning {
        println!("warning: {warning}");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn role_cell(role: DetectedRole) -> Cell {
    let color = match role {
        DetectedRole::Strings | DetectedRole::Classifications => Color::Green,
        DetectedRole::Ambiguous => Color::Yellow,
        DetectedRole::Unknown => Color::Red,
    };
    Cell::new(role).fg(color)
}

fn list_cell(values: &[String], color: Color) -> Cell {
    if values.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(values.join(", ")).fg(color)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
