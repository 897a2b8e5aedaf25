//! # Application State Types
//!
//! All state-related types for the portal: screens, form values, touched
//! fields, derived error maps, password visibility and notifications.
//!
//! Only one screen is mounted at a time ([`AuthState`]). Leaving a screen
//! drops its state; coming back builds a fresh one.

use std::collections::BTreeSet;
use std::fmt::Debug;
use std::time::Duration;

use shared::{LoginRequest, NavigationState, SignupRequest};

use crate::app::submission::SubmissionController;
use crate::core::error::AppError;
use crate::utils::validation::{
    validate_confirm_password, validate_email, validate_name, validate_password,
};

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Account creation form
    Signup,
    /// Sign-in form
    Login,
}

impl Screen {
    /// Get screen title for the window heading
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Signup => "Create your account",
            Screen::Login => "Welcome back",
        }
    }

    /// Route path, used in logs
    pub fn path(&self) -> &'static str {
        match self {
            Screen::Signup => "/signup",
            Screen::Login => "/login",
        }
    }
}

// ========== Fields ==========

/// A named input on one of the forms.
pub trait FormField: Copy + Ord + Debug + 'static {
    /// Fields that carry a validator, in display order.
    ///
    /// A submit attempt marks exactly these as touched.
    fn validated() -> &'static [Self];

    /// Input name, as used in logs
    fn name(self) -> &'static str;
}

/// Inputs on the sign-up form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SignupField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl FormField for SignupField {
    fn validated() -> &'static [Self] {
        &[
            SignupField::Name,
            SignupField::Email,
            SignupField::Password,
            SignupField::ConfirmPassword,
        ]
    }

    fn name(self) -> &'static str {
        match self {
            SignupField::Name => "name",
            SignupField::Email => "email",
            SignupField::Password => "password",
            SignupField::ConfirmPassword => "confirmPassword",
        }
    }
}

/// Inputs on the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoginField {
    Email,
    Password,
    /// "Remember me" checkbox, never validated
    Remember,
}

impl FormField for LoginField {
    fn validated() -> &'static [Self] {
        &[LoginField::Email, LoginField::Password]
    }

    fn name(self) -> &'static str {
        match self {
            LoginField::Email => "email",
            LoginField::Password => "password",
            LoginField::Remember => "remember",
        }
    }
}

/// New value delivered by an input's change event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Text inputs
    Text(String),
    /// Checkboxes
    Checked(bool),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Checked(value)
    }
}

// ========== Touched / errors ==========

/// Fields that have lost focus at least once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TouchedSet<F: FormField> {
    fields: BTreeSet<F>,
}

impl<F: FormField> Default for TouchedSet<F> {
    fn default() -> Self {
        Self {
            fields: BTreeSet::new(),
        }
    }
}

impl<F: FormField> TouchedSet<F> {
    /// Mark a field touched. Returns `false` if it already was.
    pub fn touch(&mut self, field: F) -> bool {
        self.fields.insert(field)
    }

    /// Mark every validated field touched
    pub fn touch_all(&mut self) {
        self.fields.extend(F::validated().iter().copied());
    }

    pub fn is_touched(&self, field: F) -> bool {
        self.fields.contains(&field)
    }
}

/// Per-field error messages, derived from form values on every read.
///
/// An empty message means the field is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMap<F: FormField> {
    entries: Vec<(F, String)>,
}

impl<F: FormField> ErrorMap<F> {
    fn from_entries(entries: Vec<(F, String)>) -> Self {
        Self { entries }
    }

    /// Error text for a field, or `""` when valid or unvalidated
    pub fn get(&self, field: F) -> &str {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| message.as_str())
            .unwrap_or("")
    }

    /// True iff every entry is empty
    pub fn is_valid(&self) -> bool {
        self.entries.iter().all(|(_, message)| message.is_empty())
    }

    /// Fields that currently fail validation, in display order
    pub fn invalid_fields(&self) -> Vec<F> {
        self.entries
            .iter()
            .filter(|(_, message)| !message.is_empty())
            .map(|(field, _)| *field)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> {
        self.entries.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// How a field should be decorated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldStatus {
    /// Not yet visited: no decoration, no error text
    Untouched,
    Valid,
    Invalid(String),
}

impl FieldStatus {
    /// Apply the display rule: decorate only touched fields, and show text
    /// only for a non-empty error.
    pub fn resolve<F: FormField>(touched: &TouchedSet<F>, errors: &ErrorMap<F>, field: F) -> Self {
        if !touched.is_touched(field) {
            return FieldStatus::Untouched;
        }
        match errors.get(field) {
            "" => FieldStatus::Valid,
            message => FieldStatus::Invalid(message.to_string()),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FieldStatus::Invalid(message) => Some(message),
            _ => None,
        }
    }
}

/// A form whose errors can be derived from its current values.
pub trait FormModel {
    type Field: FormField;

    /// Recompute every validator against the current values
    fn errors(&self) -> ErrorMap<Self::Field>;

    fn is_valid(&self) -> bool {
        self.errors().is_valid()
    }
}

// ========== Forms ==========

/// Sign-up form values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn value(&self, field: SignupField) -> &str {
        match field {
            SignupField::Name => &self.name,
            SignupField::Email => &self.email,
            SignupField::Password => &self.password,
            SignupField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: SignupField, value: String) {
        match field {
            SignupField::Name => self.name = value,
            SignupField::Email => self.email = value,
            SignupField::Password => self.password = value,
            SignupField::ConfirmPassword => self.confirm_password = value,
        }
    }

    pub fn to_request(&self) -> SignupRequest {
        SignupRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

impl FormModel for SignupForm {
    type Field = SignupField;

    fn errors(&self) -> ErrorMap<SignupField> {
        ErrorMap::from_entries(vec![
            (SignupField::Name, validate_name(&self.name).message().to_string()),
            (SignupField::Email, validate_email(&self.email).message().to_string()),
            (SignupField::Password, validate_password(&self.password).message().to_string()),
            (
                SignupField::ConfirmPassword,
                validate_confirm_password(&self.confirm_password, &self.password)
                    .message()
                    .to_string(),
            ),
        ])
    }
}

/// Login form values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

impl LoginForm {
    /// Apply a change event.
    ///
    /// The checkbox takes [`FieldValue::Checked`]; text inputs take [`FieldValue::Text`].
    pub fn set(&mut self, field: LoginField, value: FieldValue) -> Result<(), AppError> {
        match (field, value) {
            (LoginField::Email, FieldValue::Text(text)) => self.email = text,
            (LoginField::Password, FieldValue::Text(text)) => self.password = text,
            (LoginField::Remember, FieldValue::Checked(checked)) => self.remember = checked,
            (field, value) => {
                return Err(AppError::State(format!(
                    "field '{}' cannot take {:?}",
                    field.name(),
                    value
                )));
            }
        }
        Ok(())
    }

    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            remember: self.remember,
        }
    }
}

impl FormModel for LoginForm {
    type Field = LoginField;

    fn errors(&self) -> ErrorMap<LoginField> {
        ErrorMap::from_entries(vec![
            (LoginField::Email, validate_email(&self.email).message().to_string()),
            (LoginField::Password, validate_password(&self.password).message().to_string()),
        ])
    }
}

// ========== Password visibility ==========

/// Show/hide toggle attached to one password input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordVisibility {
    revealed: bool,
}

impl PasswordVisibility {
    pub fn toggle(&mut self) {
        self.revealed = !self.revealed;
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Whether the input should mask its characters
    pub fn is_masked(&self) -> bool {
        !self.revealed
    }

    /// Text on the toggle button
    pub fn button_label(&self) -> &'static str {
        if self.revealed {
            "Hide"
        } else {
            "Show"
        }
    }

    /// Accessible label of the toggle button
    pub fn accessible_label(&self) -> &'static str {
        if self.revealed {
            "Hide password"
        } else {
            "Show password"
        }
    }
}

// ========== Notifications ==========

/// Notification styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Danger,
}

/// Transient status message shown after a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub visible: bool,
    pub kind: NotificationKind,
    pub message: String,
    /// Id of the latest `show`; expiries for other generations are ignored
    pub generation: u64,
    /// Auto-dismiss delay
    pub lifetime: Duration,
}

impl Notification {
    /// Nothing shown yet
    pub fn hidden(lifetime: Duration) -> Self {
        Self {
            visible: false,
            kind: NotificationKind::Success,
            message: String::new(),
            generation: 0,
            lifetime,
        }
    }
}

// ========== Screens ==========

/// Sign-up screen state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupScreen {
    pub mount_id: u64,
    pub form: SignupForm,
    pub touched: TouchedSet<SignupField>,
    pub submission: SubmissionController,
    pub password_visibility: PasswordVisibility,
    pub confirm_visibility: PasswordVisibility,
    pub notification: Notification,
}

impl SignupScreen {
    pub fn new(mount_id: u64, notification_lifetime: Duration) -> Self {
        Self {
            mount_id,
            form: SignupForm::default(),
            touched: TouchedSet::default(),
            submission: SubmissionController::default(),
            password_visibility: PasswordVisibility::default(),
            confirm_visibility: PasswordVisibility::default(),
            notification: Notification::hidden(notification_lifetime),
        }
    }

    pub fn errors(&self) -> ErrorMap<SignupField> {
        self.form.errors()
    }

    pub fn field_status(&self, field: SignupField) -> FieldStatus {
        FieldStatus::resolve(&self.touched, &self.errors(), field)
    }

    /// Visibility toggle for a password input, if the field has one
    pub fn visibility_mut(&mut self, field: SignupField) -> Option<&mut PasswordVisibility> {
        match field {
            SignupField::Password => Some(&mut self.password_visibility),
            SignupField::ConfirmPassword => Some(&mut self.confirm_visibility),
            SignupField::Name | SignupField::Email => None,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submission.is_submitting() {
            "Creating account…"
        } else {
            "Create account"
        }
    }
}

/// Login screen state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginScreen {
    pub mount_id: u64,
    pub form: LoginForm,
    pub touched: TouchedSet<LoginField>,
    pub submission: SubmissionController,
    pub password_visibility: PasswordVisibility,
    pub notification: Notification,
    /// Route state this screen was opened with
    pub arrival: Option<NavigationState>,
}

impl LoginScreen {
    /// Build a fresh login screen.
    ///
    /// Arriving straight from sign-up prefills the email that was just registered.
    pub fn new(mount_id: u64, notification_lifetime: Duration, arrival: Option<NavigationState>) -> Self {
        let mut form = LoginForm::default();
        if let Some(state) = arrival.as_ref().filter(|state| state.just_signed_up) {
            form.email = state.email.clone();
        }

        Self {
            mount_id,
            form,
            touched: TouchedSet::default(),
            submission: SubmissionController::default(),
            password_visibility: PasswordVisibility::default(),
            notification: Notification::hidden(notification_lifetime),
            arrival,
        }
    }

    pub fn errors(&self) -> ErrorMap<LoginField> {
        self.form.errors()
    }

    pub fn field_status(&self, field: LoginField) -> FieldStatus {
        FieldStatus::resolve(&self.touched, &self.errors(), field)
    }

    pub fn just_signed_up(&self) -> bool {
        self.arrival.as_ref().is_some_and(|state| state.just_signed_up)
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submission.is_submitting() {
            "Signing in..."
        } else {
            "Sign in"
        }
    }
}

/// The mounted screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Signup(SignupScreen),
    Login(LoginScreen),
}

impl AuthState {
    pub fn screen(&self) -> Screen {
        match self {
            AuthState::Signup(_) => Screen::Signup,
            AuthState::Login(_) => Screen::Login,
        }
    }

    pub fn mount_id(&self) -> u64 {
        match self {
            AuthState::Signup(screen) => screen.mount_id,
            AuthState::Login(screen) => screen.mount_id,
        }
    }

    pub fn notification(&self) -> &Notification {
        match self {
            AuthState::Signup(screen) => &screen.notification,
            AuthState::Login(screen) => &screen.notification,
        }
    }

    pub fn notification_mut(&mut self) -> &mut Notification {
        match self {
            AuthState::Signup(screen) => &mut screen.notification,
            AuthState::Login(screen) => &mut screen.notification,
        }
    }
}

// ========== Navigation ==========

/// Request to switch screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub screen: Screen,
    /// Overwrite the current history entry instead of pushing
    pub replace: bool,
    pub state: Option<NavigationState>,
}

impl NavigationRequest {
    /// Plain link-style navigation
    pub fn push(screen: Screen) -> Self {
        Self {
            screen,
            replace: false,
            state: None,
        }
    }

    /// Redirect that replaces the current entry and carries route state
    pub fn replace(screen: Screen, state: NavigationState) -> Self {
        Self {
            screen,
            replace: true,
            state: Some(state),
        }
    }
}

// ========== Root ==========

/// Root application state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub auth: AuthState,
    /// Visited screens, most recent last
    pub history: Vec<Screen>,
    next_id: u64,
}

impl AppState {
    /// Start on the login screen
    pub fn new(login_notification_lifetime: Duration) -> Self {
        Self {
            auth: AuthState::Login(LoginScreen::new(1, login_notification_lifetime, None)),
            history: vec![Screen::Login],
            next_id: 2,
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.auth.screen()
    }

    /// Allocate an id for a screen mount or a notification generation.
    ///
    /// Ids are unique for the life of the process, so a timer armed for a
    /// destroyed screen can never match anything mounted later.
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIFETIME: Duration = Duration::from_millis(2000);

    fn valid_signup() -> SignupForm {
        SignupForm {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            password: "Abcdef1!".to_string(),
            confirm_password: "Abcdef1!".to_string(),
        }
    }

    // ========== Screen Tests ==========

    #[test]
    fn test_screen_titles_and_paths() {
        assert_eq!(Screen::Signup.title(), "Create your account");
        assert_eq!(Screen::Login.title(), "Welcome back");
        assert_eq!(Screen::Login.path(), "/login");
    }

    #[test]
    fn test_field_names() {
        assert_eq!(SignupField::ConfirmPassword.name(), "confirmPassword");
        assert_eq!(LoginField::Remember.name(), "remember");
        assert!(!LoginField::validated().contains(&LoginField::Remember));
    }

    // ========== Touched Tests ==========

    #[test]
    fn test_touch_is_idempotent() {
        let mut touched = TouchedSet::<SignupField>::default();

        assert!(touched.touch(SignupField::Email));
        assert!(!touched.touch(SignupField::Email));
        assert!(!touched.touch(SignupField::Email));
        assert!(touched.is_touched(SignupField::Email));
        assert!(!touched.is_touched(SignupField::Name));
    }

    #[test]
    fn test_touch_all_marks_validated_fields_only() {
        let mut touched = TouchedSet::<LoginField>::default();
        touched.touch_all();

        assert!(touched.is_touched(LoginField::Email));
        assert!(touched.is_touched(LoginField::Password));
        assert!(!touched.is_touched(LoginField::Remember));
    }

    // ========== Error Map Tests ==========

    #[test]
    fn test_empty_signup_form_is_invalid_everywhere_but_confirmation() {
        let errors = SignupForm::default().errors();

        assert!(!errors.is_valid());
        assert_eq!(errors.get(SignupField::Name), "Please enter your full name.");
        assert_eq!(errors.get(SignupField::Email), "Please enter a valid email address.");
        assert_eq!(errors.get(SignupField::Password), "Password must be at least 8 characters.");
        // "" == "" so the confirmation alone is valid
        assert_eq!(errors.get(SignupField::ConfirmPassword), "");
        assert_eq!(
            errors.invalid_fields(),
            vec![SignupField::Name, SignupField::Email, SignupField::Password]
        );
    }

    #[test]
    fn test_valid_signup_form() {
        let form = valid_signup();

        assert!(form.is_valid());
        assert!(form.errors().iter().all(|(_, message)| message.is_empty()));
    }

    #[test]
    fn test_confirmation_tracks_current_password() {
        let mut form = valid_signup();
        assert!(form.is_valid());

        // Changing the password re-derives the confirmation error
        form.set(SignupField::Password, "Xyzxyz9?".to_string());
        assert_eq!(form.errors().get(SignupField::ConfirmPassword), "Passwords do not match.");

        form.set(SignupField::ConfirmPassword, "Xyzxyz9?".to_string());
        assert!(form.is_valid());
    }

    #[test]
    fn test_login_form_set_checks_value_kind() {
        let mut form = LoginForm::default();

        assert!(form.set(LoginField::Remember, FieldValue::Checked(true)).is_ok());
        assert!(form.set(LoginField::Email, "demo@site.com".into()).is_ok());
        assert!(form.remember);
        assert_eq!(form.email, "demo@site.com");

        let err = form.set(LoginField::Remember, "yes".into()).expect_err("text into checkbox");
        assert!(matches!(err, AppError::State(_)));
        assert!(form.set(LoginField::Password, true.into()).is_err());
        assert!(form.remember);
        assert_eq!(form.password, "");
    }

    #[test]
    fn test_login_remember_does_not_affect_validity() {
        let mut form = LoginForm {
            email: "demo@site.com".to_string(),
            password: "Demo@1234".to_string(),
            remember: false,
        };
        assert!(form.is_valid());

        form.remember = true;
        assert!(form.is_valid());
        assert_eq!(form.errors().get(LoginField::Remember), "");
    }

    // ========== Field Status Tests ==========

    #[test]
    fn test_field_status_display_rule() {
        let mut screen = SignupScreen::new(1, LIFETIME);
        screen.form.name = "J".to_string();
        screen.form.email = "jane@x.com".to_string();

        assert_eq!(screen.field_status(SignupField::Name), FieldStatus::Untouched);

        screen.touched.touch(SignupField::Name);
        screen.touched.touch(SignupField::Email);

        assert_eq!(
            screen.field_status(SignupField::Name),
            FieldStatus::Invalid("Please enter your full name.".to_string())
        );
        assert_eq!(screen.field_status(SignupField::Email), FieldStatus::Valid);
        assert_eq!(screen.field_status(SignupField::Email).error(), None);
    }

    // ========== Password Visibility Tests ==========

    #[test]
    fn test_password_visibility_toggle() {
        let mut visibility = PasswordVisibility::default();
        assert!(visibility.is_masked());
        assert_eq!(visibility.button_label(), "Show");
        assert_eq!(visibility.accessible_label(), "Show password");

        visibility.toggle();
        assert!(visibility.is_revealed());
        assert_eq!(visibility.button_label(), "Hide");
        assert_eq!(visibility.accessible_label(), "Hide password");

        visibility.toggle();
        assert!(visibility.is_masked());
    }

    #[test]
    fn test_signup_visibility_toggles_are_independent() {
        let mut screen = SignupScreen::new(1, LIFETIME);
        screen.form = valid_signup();
        let before = screen.form.clone();

        if let Some(visibility) = screen.visibility_mut(SignupField::Password) {
            visibility.toggle();
        }

        assert!(screen.password_visibility.is_revealed());
        assert!(screen.confirm_visibility.is_masked());
        assert_eq!(screen.form, before);
        assert!(screen.visibility_mut(SignupField::Email).is_none());
    }

    // ========== Screen State Tests ==========

    #[test]
    fn test_login_arrival_prefills_email() {
        let screen = LoginScreen::new(7, LIFETIME, Some(NavigationState::after_signup("jane@x.com")));

        assert!(screen.just_signed_up());
        assert_eq!(screen.form.email, "jane@x.com");
        assert_eq!(screen.form.password, "");
        assert_eq!(screen.field_status(LoginField::Email), FieldStatus::Untouched);
    }

    #[test]
    fn test_login_without_arrival_is_empty() {
        let screen = LoginScreen::new(7, LIFETIME, None);

        assert!(!screen.just_signed_up());
        assert_eq!(screen.form, LoginForm::default());
        assert_eq!(screen.submit_label(), "Sign in");
        assert!(!screen.notification.visible);
    }

    #[test]
    fn test_initial_app_state() {
        let mut state = AppState::new(LIFETIME);

        assert_eq!(state.current_screen(), Screen::Login);
        assert_eq!(state.history, vec![Screen::Login]);
        assert_eq!(state.auth.mount_id(), 1);

        let first = state.next_id();
        let second = state.next_id();
        assert!(second > first);
        assert!(first > state.auth.mount_id());
    }
}
