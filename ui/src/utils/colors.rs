//! Shared color constants for the UI.

use egui::Color32;

/// Red color for error/unavailable/failed status.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Alternate row background (even ids).
pub const STRIPE_BG: Color32 = Color32::from_rgb(249, 250, 251);

/// Header background (light gray).
pub const HEADER_BG: Color32 = Color32::from_rgb(245, 245, 245);

/// Skeleton placeholder at the bottom and top of its pulse.
pub const SKELETON_DIM: Color32 = Color32::from_gray(209);
pub const SKELETON_BRIGHT: Color32 = Color32::from_gray(229);

/// Subtle gray table border.
pub const TABLE_BORDER: Color32 = Color32::from_rgb(200, 200, 200);
