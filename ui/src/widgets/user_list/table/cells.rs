//! Cell rendering functions for the user directory table.

use egui::{Color32, CornerRadius, RichText, Sense, Ui, vec2};

use crate::utils::colors::{HEADER_BG, SKELETON_BRIGHT, SKELETON_DIM, STRIPE_BG};

/// Fills the whole cell; call before adding content.
#[inline]
pub fn fill_cell(ui: &mut Ui, color: Color32) {
    let rect = ui.max_rect();
    ui.painter().rect_filled(rect, CornerRadius::ZERO, color);
}

#[inline]
pub fn render_header_label(ui: &mut Ui, label: &str) {
    fill_cell(ui, HEADER_BG);
    ui.strong(label);
}

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str, striped: bool, monospace: bool) {
    if striped {
        fill_cell(ui, STRIPE_BG);
    }
    let text = if monospace {
        RichText::new(text).monospace()
    } else {
        RichText::new(text)
    };
    ui.label(text);
}

/// A pulsing gray bar standing in for text that is still loading.
#[inline]
pub fn render_skeleton_cell(ui: &mut Ui) {
    let time = ui.input(|i| i.time);
    let color = SKELETON_DIM.lerp_to_gamma(SKELETON_BRIGHT, pulse(time));
    let width = ui.available_width().max(8.0);
    let (rect, _) = ui.allocate_exact_size(vec2(width, 12.0), Sense::hover());
    ui.painter().rect_filled(rect, CornerRadius::same(4), color);
}

/// 0..=1, one full cycle every two seconds.
#[inline]
fn pulse(time: f64) -> f32 {
    let phase = (time * std::f64::consts::PI).sin() * 0.5 + 0.5;
    phase as f32
}
