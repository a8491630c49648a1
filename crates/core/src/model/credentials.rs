use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoginError {
    #[error("email is required")]
    MissingEmail,

    #[error("password is required")]
    MissingPassword,

    #[error("name is required")]
    MissingName,
}

/// Raw login form input.
///
/// Only required-field checks apply: there is no format validation and the
/// password is never compared against anything.
#[derive(Clone, Debug, Default)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

/// Raw signup form input.
#[derive(Clone, Debug, Default)]
pub struct SignupDraft {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Accepted form input. The password is dropped at validation time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    name: Option<String>,
}

impl LoginDraft {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check that both fields were filled in.
    ///
    /// # Errors
    ///
    /// Returns `LoginError` naming the first empty field.
    pub fn validate(self) -> Result<Credentials, LoginError> {
        if self.email.is_empty() {
            return Err(LoginError::MissingEmail);
        }
        if self.password.is_empty() {
            return Err(LoginError::MissingPassword);
        }
        Ok(Credentials {
            email: self.email,
            name: None,
        })
    }
}

impl SignupDraft {
    /// Check that all three fields were filled in.
    ///
    /// # Errors
    ///
    /// Returns `LoginError` naming the first empty field.
    pub fn validate(self) -> Result<Credentials, LoginError> {
        if self.name.is_empty() {
            return Err(LoginError::MissingName);
        }
        let credentials = LoginDraft::new(self.email, self.password).validate()?;
        Ok(Credentials {
            name: Some(self.name),
            ..credentials
        })
    }
}

impl Credentials {
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
