use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mstep_cli::check::StepReport;
use mstep_core::ReferenceAttribute;

pub fn attributes_table(attributes: &[ReferenceAttribute]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Attribute"), header_cell("Source")]);
    apply_table_style(&mut table);
    for attribute in attributes {
        table.add_row(vec![Cell::new(attribute.name), Cell::new(attribute.source)]);
    }
    table
}

pub fn check_table(reports: &[StepReport]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Type"),
        header_cell("Mode"),
        header_cell("Status"),
        header_cell("Issues"),
    ]);
    apply_summary_table_style(&mut table);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for report in reports {
        table.add_row(vec![
            Cell::new(report.index),
            Cell::new(&report.step_type),
            Cell::new(&report.action),
            status_cell(report.is_ok()),
            issues_cell(&report.issues),
        ]);
    }
    table
}

pub fn print_check_summary(reports: &[StepReport]) {
    println!("{}", check_table(reports));
    let failing = reports.iter().filter(|report| !report.is_ok()).count();
    if failing == 0 {
        println!("{} steps OK", reports.len());
    } else {
        println!("{failing} of {} steps have issues", reports.len());
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn status_cell(ok: bool) -> Cell {
    if ok {
        Cell::new("ok").fg(Color::Green)
    } else {
        Cell::new("error")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn issues_cell(issues: &[String]) -> Cell {
    if issues.is_empty() {
        Cell::new("-").fg(Color::DarkGrey)
    } else {
        Cell::new(issues.join("\n"))
    }
}
