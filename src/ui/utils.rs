use eframe::egui::{Context, Visuals};

use crate::ui::config::UI_CONFIG;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.panel_fill = UI_CONFIG.colors.central_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Formats a quote-currency price.
/// Two decimals for anything above a cent, more below that so small
/// alts still show movement.
pub fn format_price(price: f64) -> String {
    let abs_price = price.abs();
    if abs_price == 0.0 || abs_price >= 0.01 {
        format!("{:.2}", price)
    } else {
        format!("{:.8}", price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_use_two_decimals() {
        assert_eq!(format_price(43_250.456), "43250.46");
        assert_eq!(format_price(0.0), "0.00");
        assert_eq!(format_price(-1.5), "-1.50");
    }

    #[test]
    fn sub_cent_prices_keep_precision() {
        assert_eq!(format_price(0.00000231), "0.00000231");
    }
}
