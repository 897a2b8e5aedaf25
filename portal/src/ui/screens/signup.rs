//! # Sign-up Screen
//!
//! Name, email, password and confirmation with inline validation.

use crate::app::{App, NavigationRequest, Screen, SignupField, SignupScreen};
use crate::ui::screens::{log_refused, PASSWORD_HINT};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

/// Render the sign-up form from a snapshot of its state
pub fn render(ui: &mut egui::Ui, screen: &SignupScreen, app: &mut App, theme: &Theme) {
    forms::render_form_heading(
        ui,
        Screen::Signup.title(),
        "Use your email and set a strong password",
        theme,
    );

    let mut submit = false;

    // Name
    let mut name = screen.form.name.clone();
    let response = forms::render_text_input(
        ui,
        "Full name",
        &mut name,
        "Your name",
        &screen.field_status(SignupField::Name),
        theme,
    );
    text_events(app, SignupField::Name, name, &response);

    // Email
    let mut email = screen.form.email.clone();
    let response = forms::render_text_input(
        ui,
        "Email address",
        &mut email,
        "you@example.com",
        &screen.field_status(SignupField::Email),
        theme,
    );
    text_events(app, SignupField::Email, email, &response);

    // Password
    let mut password = screen.form.password.clone();
    let (response, toggled) = forms::render_password_input(
        ui,
        "Password",
        &mut password,
        "Create a strong password",
        &screen.field_status(SignupField::Password),
        screen.password_visibility,
        theme,
    );
    text_events(app, SignupField::Password, password, &response);
    if toggled {
        log_refused(app.handle_signup_toggle_visibility(SignupField::Password));
    }
    forms::render_hint(ui, PASSWORD_HINT, theme);
    ui.add_space(8.0);

    // Confirm password
    let mut confirm = screen.form.confirm_password.clone();
    let (response, toggled) = forms::render_password_input(
        ui,
        "Confirm password",
        &mut confirm,
        "Re-type your password",
        &screen.field_status(SignupField::ConfirmPassword),
        screen.confirm_visibility,
        theme,
    );
    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        submit = true;
    }
    text_events(app, SignupField::ConfirmPassword, confirm, &response);
    if toggled {
        log_refused(app.handle_signup_toggle_visibility(SignupField::ConfirmPassword));
    }

    ui.add_space(8.0);
    let enabled = !screen.submission.is_submitting();
    if forms::render_submit_button(ui, screen.submit_label(), enabled, theme).clicked() {
        submit = true;
    }
    if submit {
        log_refused(app.handle_signup_submit());
    }

    ui.add_space(12.0);
    ui.separator();
    if forms::render_link_row(ui, "Already have an account?", "Sign in", theme) {
        app.navigate(NavigationRequest::push(Screen::Login));
    }
}

fn text_events(app: &mut App, field: SignupField, value: String, response: &egui::Response) {
    if response.changed() {
        log_refused(app.handle_signup_change(field, value));
    }
    if response.lost_focus() {
        log_refused(app.handle_signup_blur(field));
    }
}
