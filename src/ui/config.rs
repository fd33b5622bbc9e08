use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub central_panel: Color32,
    pub error: Color32,
    pub subdued: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Vertical gap between the stacked charts
    pub chart_spacing: f32,
    pub panel_margin: i8,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(230, 230, 230),
        central_panel: Color32::from_rgb(20, 22, 28),
        error: Color32::from_rgb(255, 100, 100),
        subdued: Color32::from_rgb(140, 140, 150),
    },
    chart_spacing: 8.0,
    panel_margin: 12,
};
