use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use bhid_cli::types::RunResult;

/// Findings listed per document before the table is cut off.
const MAX_FINDINGS_SHOWN: usize = 50;

pub fn print_summary(result: &RunResult) {
    println!("Config: {}", result.config_path.display());
    if let Some(path) = &result.output {
        println!("Output: {}", path.display());
    } else if result.dry_run {
        println!("Output: dry run, nothing written");
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Document"),
        header_cell("Role"),
        header_cell("Records"),
        header_cell("Checks"),
        header_cell("Findings"),
        header_cell("Rows"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for summary in &result.documents {
        let report = &summary.validation;
        table.add_row(vec![
            Cell::new(&summary.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            dim_cell(summary.role),
            Cell::new(summary.records),
            dim_cell(report.checks_run),
            count_cell(report.findings.len(), Color::Red),
            count_cell(report.failing_rows().len(), Color::Yellow),
        ]);
    }
    println!("{table}");
    if !result.columns.is_empty() {
        println!(
            "Hashed {} records using columns: {}",
            result.records_hashed,
            result.columns.join(", ")
        );
    }
    print_findings_table(result);
    if result.blocked {
        eprintln!(
            "Hashing skipped: {} validation findings (fail_on_findings is set)",
            result.finding_count()
        );
    }
}

fn print_findings_table(result: &RunResult) {
    if result.finding_count() == 0 {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Document"),
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Rule"),
        header_cell("Message"),
    ]);
    apply_findings_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for summary in &result.documents {
        let findings = &summary.validation.findings;
        for finding in findings.iter().take(MAX_FINDINGS_SHOWN) {
            table.add_row(vec![
                Cell::new(&summary.name),
                // 1-based, header excluded
                Cell::new(finding.row + 1),
                Cell::new(&finding.column),
                Cell::new(finding.kind).fg(Color::Yellow),
                Cell::new(&finding.message),
            ]);
        }
        if findings.len() > MAX_FINDINGS_SHOWN {
            table.add_row(vec![
                Cell::new(&summary.name),
                dim_cell("..."),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell(format!(
                    "{} more findings",
                    findings.len() - MAX_FINDINGS_SHOWN
                )),
            ]);
        }
    }
    println!();
    println!("Findings:");
    println!("{table}");
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_findings_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Fixed(26)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
