//! Output formatting helpers for the CLI.

use comfy_table::{CellAlignment, Table};
use virtuallet_core::storage::{LedgerEntry, TIMESTAMP_FORMAT};

/// Render ledger entries as a borderless table, one row per entry.
pub fn transactions_table(entries: &[LedgerEntry]) -> String {
    if entries.is_empty() {
        return "\t(no transactions)".to_string();
    }

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::NOTHING);

    for entry in entries {
        table.add_row(vec![
            entry.created_at.format(TIMESTAMP_FORMAT).to_string(),
            format!("{:.2}", entry.amount),
            entry.description.clone().unwrap_or_default(),
        ]);
    }

    if let Some(column) = table.column_mut(0) {
        column.set_padding((8, 2));
    }
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    table.to_string()
}
