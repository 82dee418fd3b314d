//! Local form validation
//!
//! Field checks run before any backend call. Messages are keyed by field
//! name and match the shipped site byte for byte.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// The site's email shape check: a contiguous non-whitespace run, an `@`,
/// another run containing a dot. A presence check, not an RFC parser.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid regex"));

/// Create-account form fields
#[derive(Clone, Debug, Default)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
}

/// Login form fields
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Field-keyed validation errors; empty means the form may be submitted
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// Validate the create-account form
pub fn validate_signup(form: &SignupForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if form.username.trim().is_empty() {
        errors.insert("username", "Username is required");
    }
    if form.email.trim().is_empty() {
        errors.insert("email", "Email is required");
    } else if !email_looks_valid(&form.email) {
        errors.insert("email", "Email is invalid");
    }
    if form.password.is_empty() {
        errors.insert("password", "Password is required");
    } else if form.password.len() < 6 {
        errors.insert("password", "Password must be at least 6 characters");
    }
    if form.password != form.confirm_password {
        errors.insert("confirmPassword", "Passwords do not match");
    }
    errors
}

/// Validate the login form
pub fn validate_login(form: &LoginForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if form.email.trim().is_empty() {
        errors.insert("email", "Email is required");
    } else if !email_looks_valid(&form.email) {
        errors.insert("email", "Email is invalid");
    }
    if form.password.is_empty() {
        errors.insert("password", "Password is required");
    }
    errors
}

fn email_looks_valid(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(username: &str, email: &str, password: &str, confirm: &str) -> SignupForm {
        SignupForm {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm.into(),
            role: "developer".into(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        let errors = validate_signup(&form("ada", "ada@magna.dev", "secret1", "secret1"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_messages_match_the_site() {
        let errors = validate_signup(&form("", "", "", ""));
        assert_eq!(errors["username"], "Username is required");
        assert_eq!(errors["email"], "Email is required");
        assert_eq!(errors["password"], "Password is required");

        let errors = validate_signup(&form("ada", "not-an-email", "short", "other"));
        assert_eq!(errors["email"], "Email is invalid");
        assert_eq!(errors["password"], "Password must be at least 6 characters");
        assert_eq!(errors["confirmPassword"], "Passwords do not match");
    }

    #[test]
    fn test_email_shapes() {
        assert!(email_looks_valid("a@b.co"));
        assert!(email_looks_valid("first.last@sub.domain.org"));
        assert!(!email_looks_valid("a@b"));
        assert!(!email_looks_valid("@b.co"));
        assert!(!email_looks_valid("a@.co"));
        assert!(!email_looks_valid("plain"));
    }

    #[test]
    fn test_email_rejects_whitespace_around_separators() {
        // The run on either side of `@` and `.` must be contiguous
        for email in ["a@ b.c", "a @b.c", "a@b .c"] {
            let errors = validate_login(&LoginForm {
                email: email.into(),
                password: "secret1".into(),
            });
            assert_eq!(errors.get("email"), Some(&"Email is invalid"), "{email:?}");
        }
        // Whitespace elsewhere in the string does not hide a valid shape
        assert!(email_looks_valid(" a@b.co "));
    }

    #[test]
    fn test_login_validation() {
        let errors = validate_login(&LoginForm {
            email: "ada@magna.dev".into(),
            password: "".into(),
        });
        assert_eq!(errors["password"], "Password is required");
        assert!(!errors.contains_key("email"));
    }
}
