//! Row rendering for the user directory table.

use egui_extras::TableBody as EguiTableBody;
use roster_business::user_list::{COLUMNS, RowView};

use super::cells::{render_skeleton_cell, render_text_cell};
use super::columns::ROW_HEIGHT;

/// One row per surviving record; background keyed by id parity.
#[inline]
pub fn render_user_rows(body: &mut EguiTableBody<'_>, rows: &[RowView<'_>]) {
    for view in rows {
        body.row(ROW_HEIGHT, |mut row| {
            for (column, text) in view.cells().iter().enumerate() {
                row.col(|ui| {
                    render_text_cell(ui, text, view.striped, column == 0);
                });
            }
        });
    }
}

/// Placeholder rows; the actual data is ignored while loading.
#[inline]
pub fn render_skeleton_rows(body: &mut EguiTableBody<'_>, rows: usize) {
    for _ in 0..rows {
        body.row(ROW_HEIGHT, |mut row| {
            for _ in COLUMNS {
                row.col(render_skeleton_cell);
            }
        });
    }
}
