//! # Login Screen
//!
//! Email, password and "remember me", checked against the account service.

use crate::app::{App, FieldValue, LoginField, LoginScreen, NavigationRequest, Screen};
use crate::ui::screens::{log_refused, PASSWORD_HINT};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

/// Render the login form from a snapshot of its state
pub fn render(ui: &mut egui::Ui, screen: &LoginScreen, app: &mut App, theme: &Theme) {
    forms::render_form_heading(
        ui,
        Screen::Login.title(),
        "Sign in to continue to your account",
        theme,
    );

    if screen.just_signed_up() {
        ui.label(
            egui::RichText::new("Account created. Sign in with your new password.")
                .color(theme.success),
        );
        ui.add_space(8.0);
    }

    let mut submit = false;

    // Email
    let mut email = screen.form.email.clone();
    let response = forms::render_text_input(
        ui,
        "Email address",
        &mut email,
        "you@example.com",
        &screen.field_status(LoginField::Email),
        theme,
    );
    text_events(app, LoginField::Email, email, &response);

    // Password
    let mut password = screen.form.password.clone();
    let (response, toggled) = forms::render_password_input(
        ui,
        "Password",
        &mut password,
        "Enter your password",
        &screen.field_status(LoginField::Password),
        screen.password_visibility,
        theme,
    );
    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        submit = true;
    }
    text_events(app, LoginField::Password, password, &response);
    if toggled {
        log_refused(app.handle_login_toggle_visibility());
    }
    forms::render_hint(ui, PASSWORD_HINT, theme);
    ui.add_space(8.0);

    // Remember + forgot
    ui.horizontal(|ui| {
        let mut remember = screen.form.remember;
        if forms::render_checkbox(ui, "Remember me", &mut remember).changed() {
            log_refused(app.handle_login_change(LoginField::Remember, FieldValue::Checked(remember)));
        }
        ui.add_space(24.0);
        // No password reset flow exists
        ui.add_enabled(false, egui::Link::new("Forgot password?"));
    });

    ui.add_space(8.0);
    let enabled = !screen.submission.is_submitting();
    if forms::render_submit_button(ui, screen.submit_label(), enabled, theme).clicked() {
        submit = true;
    }
    if submit {
        log_refused(app.handle_login_submit());
    }

    ui.add_space(12.0);
    ui.separator();
    if forms::render_link_row(ui, "New here?", "Create an account", theme) {
        app.navigate(NavigationRequest::push(Screen::Signup));
    }
}

fn text_events(app: &mut App, field: LoginField, value: String, response: &egui::Response) {
    if response.changed() {
        log_refused(app.handle_login_change(field, FieldValue::Text(value)));
    }
    if response.lost_focus() {
        log_refused(app.handle_login_blur(field));
    }
}
