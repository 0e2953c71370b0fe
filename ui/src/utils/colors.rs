//! Shared color constants for the UI.

use egui::Color32;

/// Red color for validation and encoding errors.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Light gray outline drawn around the symbol preview.
pub const COLOR_BORDER: Color32 = Color32::from_rgb(209, 213, 219);
