//! Login, signup and password reset forms
//!
//! Credentials are only checked for presence. Any filled-in login
//! authenticates.

use crate::error::{DaycareError, Result};

fn require(value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        Err(DaycareError::MissingField(field))
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<()> {
        require(&self.email, "email")?;
        require(&self.password, "password")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub const SUCCESS_NOTICE: &'static str =
        "Registration successful! Please contact admin for account activation.";

    pub fn validate(&self) -> Result<()> {
        require(&self.full_name, "full name")?;
        require(&self.email, "email")?;
        require(&self.phone, "phone")?;
        require(&self.password, "password")?;
        require(&self.confirm_password, "confirm password")?;
        if self.password != self.confirm_password {
            return Err(DaycareError::PasswordMismatch);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForgotPasswordForm {
    pub email: String,
    /// Set once a reset link has been "sent"; holds the address it went to.
    pub sent_to: Option<String>,
}

impl ForgotPasswordForm {
    pub fn submit(&mut self) -> Result<()> {
        require(&self.email, "email")?;
        self.sent_to = Some(self.email.trim().to_string());
        Ok(())
    }

    pub fn is_sent(&self) -> bool {
        self.sent_to.is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        let mut form = LoginForm::default();
        assert_eq!(form.validate().unwrap_err().to_string(), "Please fill in email");
        form.email = "sarah@littlestars.com".to_string();
        assert_eq!(form.validate().unwrap_err().to_string(), "Please fill in password");
        form.password = "secret".to_string();
        assert!(form.validate().is_ok());
    }

    fn signup() -> SignupForm {
        SignupForm {
            full_name: "Maya Lee".to_string(),
            email: "maya@littlestars.com".to_string(),
            phone: "+1 (555) 000-1111".to_string(),
            password: "hunter22".to_string(),
            confirm_password: "hunter22".to_string(),
        }
    }

    #[test]
    fn test_signup_validation() {
        assert!(signup().validate().is_ok());

        let mut form = signup();
        form.confirm_password = "hunter23".to_string();
        assert!(matches!(form.validate(), Err(DaycareError::PasswordMismatch)));

        let mut form = signup();
        form.phone.clear();
        assert!(matches!(form.validate(), Err(DaycareError::MissingField("phone"))));
    }

    #[test]
    fn test_forgot_password_flow() {
        let mut form = ForgotPasswordForm::default();
        assert!(form.submit().is_err());
        assert!(!form.is_sent());

        form.email = " maya@littlestars.com ".to_string();
        form.submit().unwrap();
        assert_eq!(form.sent_to.as_deref(), Some("maya@littlestars.com"));

        form.reset();
        assert_eq!(form, ForgotPasswordForm::default());
    }
}
