use seaports::{PageLink, PageResult, Record, SortDirection, TableState};
use std::fmt::Write;

const MAX_CELL_WIDTH: usize = 28;

/// Plain-text grid of the visible columns.
pub fn page(table: &TableState, result: &PageResult) -> String {
    let columns: Vec<_> = table.visible_columns().collect();

    let headers: Vec<String> = columns
        .iter()
        .map(|column| match table.sort_direction(&column.id) {
            Some(SortDirection::Asc) => format!("{} ^", column.label),
            Some(SortDirection::Desc) => format!("{} v", column.label),
            None => column.label.clone(),
        })
        .collect();

    let rows: Vec<Vec<String>> = result
        .records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|column| truncate(&column.cell_text(record)))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);

    if rows.is_empty() {
        out.push_str("No results.\n");
    }
    for row in &rows {
        push_row(&mut out, row, &widths);
    }

    out.push_str(&pager(table, result.total_count));
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(line.trim_end());
    out.push('\n');
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_CELL_WIDTH {
        return text.to_string();
    }
    let mut short: String = text.chars().take(MAX_CELL_WIDTH - 3).collect();
    short.push_str("...");
    short
}

/// `Page 2 of 5 (43 ports)  1 [2] 3 4 5`
pub fn pager(table: &TableState, total_count: usize) -> String {
    let pages = table.page_count(total_count);
    let current = table.pagination().page_index.saturating_add(1);

    let mut out = format!(
        "Page {} of {} ({} ports)",
        current.min(pages.max(1)),
        pages.max(1),
        total_count
    );
    let filters = table.active_filter_count();
    if filters > 0 {
        let _ = write!(out, ", {filters} column filter(s)");
    }

    if pages > 1 {
        let links: Vec<String> = table
            .page_links(total_count)
            .into_iter()
            .map(|link| match link {
                PageLink::Page(n) if n == current => format!("[{n}]"),
                PageLink::Page(n) => n.to_string(),
                PageLink::Ellipsis => "...".to_string(),
            })
            .collect();
        let _ = write!(out, "  {}", links.join(" "));
    }
    out.push('\n');
    out
}

pub fn record(record: &Record) -> String {
    serde_json::to_string_pretty(record).unwrap_or_else(|_| record.id().to_string())
}

pub fn options(values: &[&str]) -> String {
    if values.is_empty() {
        return "No options.\n".to_string();
    }
    let mut out = String::new();
    for value in values {
        out.push_str(value);
        out.push('\n');
    }
    out
}
