//! Column definitions for the user directory table.

use egui_extras::Column;

pub const ID_WIDTH: f32 = 50.0;
pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 28.0;

/// ID, Name, Username, Email, Website.
#[inline]
pub fn table_columns() -> [Column; 5] {
    [
        Column::exact(ID_WIDTH),
        Column::auto().at_least(140.0),
        Column::auto().at_least(110.0),
        Column::auto().at_least(180.0),
        Column::remainder().at_least(100.0),
    ]
}
