//! Auth screen state: mode toggle, field values, submit effects.
//!
//! Submitting never validates or authenticates. Any input (including
//! empty forms) succeeds and yields a notice plus a delayed redirect.

use serde::{Deserialize, Serialize};

use crate::toast::Notice;
use crate::Screen;

/// Delay between the submit notification and the dashboard redirect.
pub const REDIRECT_DELAY_MS: u32 = 800;

/// Which form the auth card is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    #[default]
    SignIn,
    Register,
}

impl AuthMode {
    /// Label on the mode toggle tab.
    pub fn tab_label(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::Register => "Register",
        }
    }

    /// Label on the submit button.
    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::Register => "Create Account",
        }
    }
}

/// An input on the auth card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    FullName,
    Email,
    Password,
    Age,
    BloodGroup,
    EmergencyContact,
}

impl AuthField {
    pub fn label(&self) -> &'static str {
        match self {
            AuthField::FullName => "Full Name",
            AuthField::Email => "Email",
            AuthField::Password => "Password",
            AuthField::Age => "Age",
            AuthField::BloodGroup => "Blood Group",
            AuthField::EmergencyContact => "Emergency Contact",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            AuthField::FullName => "John Doe",
            AuthField::Email => "you@example.com",
            AuthField::Password => "••••••••",
            AuthField::Age => "25",
            AuthField::BloodGroup => "O+",
            AuthField::EmergencyContact => "+1 (555) 000-0000",
        }
    }

    /// HTML `type` attribute for the input element.
    pub fn input_type(&self) -> &'static str {
        match self {
            AuthField::FullName | AuthField::BloodGroup => "text",
            AuthField::Email => "email",
            AuthField::Password => "password",
            AuthField::Age => "number",
            AuthField::EmergencyContact => "tel",
        }
    }
}

/// The auth card's form values plus the active mode.
///
/// Values survive a mode toggle; switching tabs only changes which
/// fields are rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: String,
    pub blood_group: String,
    pub phone: String,
}

impl AuthForm {
    pub fn set_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
    }

    /// Fields rendered for the active mode, in display order.
    pub fn visible_fields(&self) -> &'static [AuthField] {
        match self.mode {
            AuthMode::SignIn => &[AuthField::Email, AuthField::Password],
            AuthMode::Register => &[
                AuthField::FullName,
                AuthField::Email,
                AuthField::Password,
                AuthField::Age,
                AuthField::BloodGroup,
                AuthField::EmergencyContact,
            ],
        }
    }

    pub fn set_field(&mut self, field: AuthField, value: impl Into<String>) {
        let slot = match field {
            AuthField::FullName => &mut self.name,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
            AuthField::Age => &mut self.age,
            AuthField::BloodGroup => &mut self.blood_group,
            AuthField::EmergencyContact => &mut self.phone,
        };
        *slot = value.into();
    }

    pub fn field(&self, field: AuthField) -> &str {
        match field {
            AuthField::FullName => &self.name,
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
            AuthField::Age => &self.age,
            AuthField::BloodGroup => &self.blood_group,
            AuthField::EmergencyContact => &self.phone,
        }
    }

    /// Effects of pressing the submit button.
    pub fn submit(&self) -> Submission {
        let notice = match self.mode {
            AuthMode::SignIn => Notice::new("Welcome back!", "Redirecting to dashboard..."),
            AuthMode::Register => {
                Notice::new("Account created!", "Your emergency profile is ready.")
            }
        };
        Submission {
            notice,
            redirect: Redirect {
                to: Screen::Dashboard,
                delay_ms: REDIRECT_DELAY_MS,
            },
        }
    }
}

/// Everything a submit asks the shell to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub notice: Notice,
    pub redirect: Redirect,
}

/// A pending screen change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub to: Screen,
    pub delay_ms: u32,
}

/// The hospital-admin bypass link: no notice, no delay.
pub fn admin_shortcut() -> Redirect {
    Redirect {
        to: Screen::Admin,
        delay_ms: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_sign_in() {
        let form = AuthForm::default();
        assert_eq!(form.mode, AuthMode::SignIn);
    }

    #[test]
    fn test_sign_in_shows_two_fields() {
        let form = AuthForm::default();
        assert_eq!(form.visible_fields(), &[AuthField::Email, AuthField::Password]);
    }

    #[test]
    fn test_register_shows_six_fields() {
        let mut form = AuthForm::default();
        form.set_mode(AuthMode::Register);

        let fields = form.visible_fields();
        assert_eq!(fields.len(), 6);
        assert_eq!(fields[0], AuthField::FullName);
        assert_eq!(fields[5], AuthField::EmergencyContact);
    }

    #[test]
    fn test_set_and_read_field() {
        let mut form = AuthForm::default();

        form.set_field(AuthField::Email, "jane@example.com");
        form.set_field(AuthField::BloodGroup, "AB-");

        assert_eq!(form.field(AuthField::Email), "jane@example.com");
        assert_eq!(form.field(AuthField::BloodGroup), "AB-");
        assert_eq!(form.field(AuthField::Password), "");
    }

    #[test]
    fn test_values_survive_mode_toggle() {
        let mut form = AuthForm::default();
        form.set_field(AuthField::Email, "jane@example.com");

        form.set_mode(AuthMode::Register);
        form.set_mode(AuthMode::SignIn);

        assert_eq!(form.field(AuthField::Email), "jane@example.com");
    }

    #[test]
    fn test_sign_in_submit_effects() {
        let form = AuthForm::default();

        let submission = form.submit();

        assert_eq!(submission.notice.title, "Welcome back!");
        assert_eq!(submission.notice.body, "Redirecting to dashboard...");
        assert_eq!(submission.redirect.to, Screen::Dashboard);
        assert_eq!(submission.redirect.delay_ms, 800);
    }

    #[test]
    fn test_register_submit_effects() {
        let mut form = AuthForm::default();
        form.set_mode(AuthMode::Register);

        let submission = form.submit();

        assert_eq!(submission.notice.title, "Account created!");
        assert_eq!(submission.notice.body, "Your emergency profile is ready.");
        assert_eq!(submission.redirect.to, Screen::Dashboard);
    }

    #[test]
    fn test_empty_form_still_submits() {
        let form = AuthForm::default();
        let submission = form.submit();
        assert_eq!(submission.redirect.to, Screen::Dashboard);
    }

    #[test]
    fn test_admin_shortcut_is_immediate() {
        let redirect = admin_shortcut();

        assert_eq!(redirect.to, Screen::Admin);
        assert_eq!(redirect.delay_ms, 0);
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(AuthMode::SignIn.tab_label(), "Sign In");
        assert_eq!(AuthMode::Register.tab_label(), "Register");
        assert_eq!(AuthMode::SignIn.submit_label(), "Sign In");
        assert_eq!(AuthMode::Register.submit_label(), "Create Account");
    }

    #[test]
    fn test_field_metadata() {
        assert_eq!(AuthField::Email.input_type(), "email");
        assert_eq!(AuthField::Age.input_type(), "number");
        assert_eq!(AuthField::EmergencyContact.placeholder(), "+1 (555) 000-0000");
        assert_eq!(AuthField::BloodGroup.label(), "Blood Group");
    }

    #[test]
    fn test_form_serialization_round_trip() {
        let mut form = AuthForm::default();
        form.set_mode(AuthMode::Register);
        form.set_field(AuthField::FullName, "Jane Smith");
        form.set_field(AuthField::Age, "34");

        let json = serde_json::to_string(&form).unwrap();
        let parsed: AuthForm = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, form);
    }
}
