//! Account form validation shared by login, signup and settings.
//!
//! Credentials are checked by the backend in production; this desktop
//! build only makes sure the forms are well-formed before creating a
//! local session.

use chrono::Utc;
use volt_core::{ProfileUpdate, UserRef};

pub const INVALID_EMAIL: &str = "Enter a valid email address";
pub const MIN_PASSWORD_LEN: usize = 8;

/// Trim `email` and check it has a local part and a dotted domain.
pub fn validate_email(email: &str) -> Result<&str, &'static str> {
    let email = email.trim();
    let (local, domain) = email.split_once('@').ok_or(INVALID_EMAIL)?;
    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return Err(INVALID_EMAIL);
    }
    if domain.starts_with('.') || domain.ends_with('.') {
        return Err(INVALID_EMAIL);
    }
    Ok(email)
}

fn local_user(email: &str, name: &str) -> UserRef {
    let mut user = UserRef::new(format!("local-{}", Utc::now().timestamp_millis()), email);
    let name = name.trim();
    if !name.is_empty() {
        user.name = Some(name.to_string());
    }
    user
}

/// Validate the login form and build the user to sign in.
pub fn login_user(email: &str, name: &str) -> Result<UserRef, &'static str> {
    let email = validate_email(email)?;
    Ok(local_user(email, name))
}

/// Validate the settings form. An empty name clears the display name.
pub fn profile_update(name: &str, email: &str) -> Result<ProfileUpdate, &'static str> {
    let email = validate_email(email)?;
    Ok(ProfileUpdate {
        name: Some(name.trim().to_string()),
        email: Some(email.to_string()),
    })
}

/// Fields of the signup form, as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Check every field and build the new account's user.
    pub fn validate(&self) -> Result<UserRef, &'static str> {
        let first = self.first_name.trim();
        let last = self.last_name.trim();
        if first.is_empty() || last.is_empty() {
            return Err("Please enter your first and last name");
        }
        let email = validate_email(&self.email)?;
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err("Password must be at least 8 characters long");
        }
        if self.password != self.confirm_password {
            return Err("Passwords do not match");
        }
        Ok(local_user(email, &format!("{first} {last}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup() -> SignupForm {
        SignupForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "analytical".into(),
            confirm_password: "analytical".into(),
        }
    }

    #[test]
    fn email_is_trimmed() {
        assert_eq!(validate_email("  ada@example.com "), Ok("ada@example.com"));
    }

    #[test]
    fn rejects_malformed_email() {
        for bad in ["", "ada", "@example.com", "ada@localhost", "a@b@c.com", "ada@example."] {
            assert_eq!(validate_email(bad), Err(INVALID_EMAIL), "{bad}");
        }
    }

    #[test]
    fn login_accepts_valid_email_and_optional_name() {
        let user = login_user("  ada@example.com ", "").unwrap();
        assert_eq!(user.email, "ada@example.com");
        assert!(user.name.is_none());
        assert!(user.id.starts_with("local-"));

        let named = login_user("ada@example.com", " Ada ").unwrap();
        assert_eq!(named.name.as_deref(), Some("Ada"));
    }

    #[test]
    fn login_rejects_malformed_email() {
        assert_eq!(login_user("ada", "Ada").unwrap_err(), INVALID_EMAIL);
    }

    #[test]
    fn profile_edit_uses_the_login_email_rule() {
        let update = profile_update(" Ada ", " ada@example.com ").unwrap();
        assert_eq!(update.name.as_deref(), Some("Ada"));
        assert_eq!(update.email.as_deref(), Some("ada@example.com"));

        for bad in ["", "ada", "ada@localhost"] {
            assert_eq!(profile_update("Ada", bad).unwrap_err(), INVALID_EMAIL, "{bad}");
        }
    }

    #[test]
    fn signup_builds_named_user() {
        let user = signup().validate().unwrap();
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.name.as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn signup_checks_each_field() {
        let mut form = signup();
        form.last_name = " ".into();
        assert_eq!(form.validate().unwrap_err(), "Please enter your first and last name");

        let mut form = signup();
        form.email = "ada@localhost".into();
        assert_eq!(form.validate().unwrap_err(), INVALID_EMAIL);

        let mut form = signup();
        form.password = "short".into();
        form.confirm_password = "short".into();
        assert_eq!(
            form.validate().unwrap_err(),
            "Password must be at least 8 characters long"
        );

        let mut form = signup();
        form.confirm_password = "analytica1".into();
        assert_eq!(form.validate().unwrap_err(), "Passwords do not match");
    }
}
