//! # GUI Theme
//!
//! Light form theme: white cards, blue accent, green/red field feedback.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};

/// Portal color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortalColors {
    pub background: Color32,
    pub card: Color32,
    pub text: Color32,
    /// Primary accent (buttons, links, focus)
    pub accent: Color32,
    pub accent_dark: Color32,
    pub border: Color32,
    pub gray_secondary: Color32,
    pub green_success: Color32,
    pub red_error: Color32,
}

impl Default for PortalColors {
    fn default() -> Self {
        PortalColors {
            background: Color32::from_rgb(243, 245, 249), // #F3F5F9
            card: Color32::WHITE,
            text: Color32::from_rgb(33, 37, 41),            // #212529
            accent: Color32::from_rgb(13, 110, 253),        // #0D6EFD
            accent_dark: Color32::from_rgb(10, 88, 202),    // #0A58CA
            border: Color32::from_rgb(206, 212, 218),       // #CED4DA
            gray_secondary: Color32::from_rgb(108, 117, 125), // #6C757D
            green_success: Color32::from_rgb(25, 135, 84),  // #198754
            red_error: Color32::from_rgb(220, 53, 69),      // #DC3545
        }
    }
}

/// Application theme
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub colors: PortalColors,
    /// Normal text color
    pub normal: Color32,
    /// Headings and primary buttons
    pub selected: Color32,
    pub border: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
    pub background: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = PortalColors::default();
        Theme {
            colors,
            normal: colors.text,
            selected: colors.accent,
            border: colors.border,
            dim: colors.gray_secondary,
            success: colors.green_success,
            error: colors.red_error,
            background: colors.background,
        }
    }
}

impl Theme {
    /// egui visuals for the portal palette
    pub fn portal_visuals(&self) -> Visuals {
        let colors = self.colors;
        let mut visuals = Visuals::light();

        visuals.override_text_color = Some(colors.text);
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.card;
        visuals.window_stroke = Stroke::new(1.0, colors.border);
        visuals.extreme_bg_color = colors.card;

        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, colors.accent);
        visuals.widgets.active.bg_stroke = Stroke::new(2.0, colors.accent_dark);

        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(13, 110, 253, 64);
        visuals.selection.stroke = Stroke::new(2.0, colors.accent);
        visuals.hyperlink_color = colors.accent;

        visuals
    }

    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &Context) {
        let visuals = self.portal_visuals();

        // style_mut_of instead of set_visuals, which panics in egui 0.33
        for egui_theme in [EguiTheme::Light, EguiTheme::Dark] {
            ctx.style_mut_of(egui_theme, |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
                style.spacing.button_padding = egui::Vec2::new(12.0, 6.0);
                style.spacing.interact_size = egui::Vec2::new(32.0, 28.0);
                style.spacing.window_margin = egui::Margin::same(12);
            });
        }
        ctx.set_theme(EguiTheme::Light);

        tracing::debug!("Applied portal theme");
    }
}
