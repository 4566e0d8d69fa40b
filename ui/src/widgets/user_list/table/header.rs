//! Table header for the user directory.

use egui::Button;
use egui_extras::TableRow;
use roster_business::SortOrder;
use roster_business::user_list::COLUMNS;

use super::cells::{fill_cell, render_header_label};
use crate::utils::colors::HEADER_BG;

/// Glyph on the name sort toggle for each order.
pub fn sort_glyph(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Neutral => "⇅",
        SortOrder::Ascending => "⬆",
        SortOrder::Descending => "⬇",
    }
}

/// Renders the header row. Returns `true` if the sort toggle was clicked.
#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>, sort: SortOrder) -> bool {
    let mut toggled = false;
    for label in COLUMNS {
        header.col(|ui| {
            if label == "Name" {
                fill_cell(ui, HEADER_BG);
                ui.horizontal(|ui| {
                    ui.strong(label);
                    toggled = ui
                        .add(Button::new(sort_glyph(sort)).small().frame(false))
                        .on_hover_text("Sort by name")
                        .clicked();
                });
            } else {
                render_header_label(ui, label);
            }
        });
    }
    toggled
}
