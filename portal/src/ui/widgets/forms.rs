//! # Form Components
//!
//! Reusable form elements for consistent UI across screens

use egui::{RichText, Stroke};

use crate::app::{FieldStatus, PasswordVisibility};
use crate::ui::theme::Theme;

/// Width shared by inputs and buttons
pub const FIELD_WIDTH: f32 = 320.0;

fn status_stroke(status: &FieldStatus, theme: &Theme) -> Stroke {
    match status {
        FieldStatus::Untouched => Stroke::new(1.0, theme.border),
        FieldStatus::Valid => Stroke::new(1.5, theme.success),
        FieldStatus::Invalid(_) => Stroke::new(1.5, theme.error),
    }
}

fn field_frame(status: &FieldStatus, theme: &Theme) -> egui::Frame {
    egui::Frame::new()
        .stroke(status_stroke(status, theme))
        .fill(theme.colors.card)
        .corner_radius(egui::CornerRadius::same(4))
        .inner_margin(egui::Margin::symmetric(8, 6))
}

/// Render a form heading with a one-line subtitle
pub fn render_form_heading(ui: &mut egui::Ui, title: &str, subtitle: &str, theme: &Theme) {
    ui.label(RichText::new(title).size(24.0).strong().color(theme.normal));
    ui.label(RichText::new(subtitle).size(14.0).color(theme.dim));
    ui.add_space(16.0);
}

/// Render a labeled text input decorated by its field status
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    status: &FieldStatus,
    theme: &Theme,
) -> egui::Response {
    ui.label(RichText::new(label).size(14.0));
    let response = field_frame(status, theme)
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::singleline(value)
                    .id_salt(label)
                    .hint_text(hint)
                    .frame(false)
                    .desired_width(FIELD_WIDTH - 16.0),
            )
        })
        .inner;
    render_field_feedback(ui, status, theme);
    response
}

/// Render a password input with its Show/Hide toggle.
///
/// Returns the input's response and whether the toggle was clicked.
pub fn render_password_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    status: &FieldStatus,
    visibility: PasswordVisibility,
    theme: &Theme,
) -> (egui::Response, bool) {
    ui.label(RichText::new(label).size(14.0));
    let (response, toggled) = field_frame(status, theme)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(value)
                        .id_salt(label)
                        .password(visibility.is_masked())
                        .hint_text(hint)
                        .frame(false)
                        .desired_width(FIELD_WIDTH - 80.0),
                );
                let toggle = ui
                    .small_button(visibility.button_label())
                    .on_hover_text(visibility.accessible_label());
                // Screen readers announce "Show password" rather than the bare "Show"
                toggle.widget_info(|| {
                    egui::WidgetInfo::labeled(egui::WidgetType::Button, true, visibility.accessible_label())
                });
                (response, toggle.clicked())
            })
            .inner
        })
        .inner;
    render_field_feedback(ui, status, theme);
    (response, toggled)
}

/// Error text under a touched, invalid field
pub fn render_field_feedback(ui: &mut egui::Ui, status: &FieldStatus, theme: &Theme) {
    if let Some(message) = status.error() {
        render_error(ui, message, theme);
    } else {
        ui.add_space(8.0);
    }
}

/// Render a checkbox bound to `checked`
pub fn render_checkbox(ui: &mut egui::Ui, label: &str, checked: &mut bool) -> egui::Response {
    ui.checkbox(checked, label)
}

/// Render the primary submit button, disabled while a submission is in flight
pub fn render_submit_button(ui: &mut egui::Ui, text: &str, enabled: bool, theme: &Theme) -> egui::Response {
    let button = egui::Button::new(RichText::new(text).size(16.0).color(egui::Color32::WHITE))
        .fill(theme.selected)
        .min_size(egui::vec2(FIELD_WIDTH, 36.0));
    ui.add_enabled(enabled, button)
}

/// Render "prompt [link]" on one line. Returns whether the link was clicked.
pub fn render_link_row(ui: &mut egui::Ui, prompt: &str, link: &str, theme: &Theme) -> bool {
    ui.horizontal(|ui| {
        ui.label(RichText::new(prompt).color(theme.dim));
        ui.link(link).clicked()
    })
    .inner
}

/// Render an error message
pub fn render_error(ui: &mut egui::Ui, error: &str, theme: &Theme) {
    ui.label(RichText::new(error).size(13.0).color(theme.error));
    ui.add_space(4.0);
}

/// Render a help/hint text
pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.label(RichText::new(hint).size(12.0).color(theme.dim));
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Render one password input headless and collect AccessKit node labels
    fn accessible_labels(visibility: PasswordVisibility) -> Vec<String> {
        let ctx = egui::Context::default();
        ctx.enable_accesskit();
        let theme = Theme::default();
        let mut value = "Demo@1234".to_string();

        let output = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                render_password_input(
                    ui,
                    "Password",
                    &mut value,
                    "Enter your password",
                    &FieldStatus::Untouched,
                    visibility,
                    &theme,
                );
            });
        });

        output
            .platform_output
            .accesskit_update
            .map(|update| {
                update
                    .nodes
                    .iter()
                    .filter_map(|(_, node)| node.label().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn test_toggle_exposes_accessible_label() {
        let labels = accessible_labels(PasswordVisibility::default());
        assert!(labels.iter().any(|l| l == "Show password"), "labels: {:?}", labels);

        let mut revealed = PasswordVisibility::default();
        revealed.toggle();
        let labels = accessible_labels(revealed);
        assert!(labels.iter().any(|l| l == "Hide password"), "labels: {:?}", labels);
        assert!(!labels.iter().any(|l| l == "Show password"));
    }

    #[test]
    fn test_status_stroke_follows_field_status() {
        let theme = Theme::default();
        assert_eq!(status_stroke(&FieldStatus::Untouched, &theme).color, theme.border);
        assert_eq!(status_stroke(&FieldStatus::Valid, &theme).color, theme.success);
        assert_eq!(
            status_stroke(&FieldStatus::Invalid("Passwords do not match.".to_string()), &theme).color,
            theme.error
        );
    }
}
