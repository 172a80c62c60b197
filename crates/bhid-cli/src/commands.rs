use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use bhid_cli::pipeline::{RunOptions, column_role, required_columns, run};
use bhid_cli::types::RunResult;
use bhid_config::load_config;

use crate::cli::{ConfigArgs, HashArgs};
use crate::summary::{apply_table_style, header_cell};

pub fn run_hash(args: &HashArgs) -> Result<RunResult> {
    let options = RunOptions {
        output: args.output.clone(),
        dry_run: args.dry_run,
        validate_only: false,
    };
    run(&args.config.config, &options)
}

pub fn run_validate(args: &ConfigArgs) -> Result<RunResult> {
    let options = RunOptions {
        validate_only: true,
        ..RunOptions::default()
    };
    run(&args.config, &options)
}

pub fn run_columns(args: &ConfigArgs) -> Result<()> {
    let config = load_config(&args.config)
        .with_context(|| format!("load config {}", args.config.display()))?;
    let (schema, linked) = config.schemas()?;
    let columns = required_columns(&config, &schema, linked.as_ref())?;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Role"),
        header_cell("Source label"),
    ]);
    apply_table_style(&mut table);
    for (position, column) in columns.iter().enumerate() {
        let label = schema
            .column_by_alias(column)
            .or_else(|| linked.as_ref().and_then(|l| l.column_by_alias(column)))
            .map_or_else(|| "-".to_string(), |c| c.name.clone());
        table.add_row(vec![
            Cell::new(position + 1),
            Cell::new(column),
            Cell::new(column_role(&config, column)),
            Cell::new(label),
        ]);
    }
    table.add_row(vec![
        Cell::new(columns.len() + 1),
        Cell::new(&config.destination.id_column),
        Cell::new("identifier"),
        Cell::new("-"),
    ]);
    println!("{table}");
    Ok(())
}
