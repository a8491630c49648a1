use serde::Serialize;
use std::fmt;

/// Display name shown when the stored record has no usable `userName`.
pub const DEFAULT_USER_NAME: &str = "Student";

/// Value written under `isLoggedIn` when a user signs in.
pub const LOGGED_IN_VALUE: &str = "true";

/// Keys of the persisted session layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionKey {
    IsLoggedIn,
    UserName,
    UserEmail,
}

impl SessionKey {
    pub const ALL: [SessionKey; 3] = [Self::IsLoggedIn, Self::UserName, Self::UserEmail];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IsLoggedIn => "isLoggedIn",
            Self::UserName => "userName",
            Self::UserEmail => "userEmail",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == raw)
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client-side session state.
///
/// There is no server identity behind this record. A session is "present"
/// when the `isLoggedIn` entry exists and is non-empty; the other two
/// fields are purely for display.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SessionRecord {
    logged_in: bool,
    user_name: Option<String>,
    user_email: Option<String>,
}

impl SessionRecord {
    /// A record with no session present.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A signed-in record carrying the email typed into the login form.
    #[must_use]
    pub fn signed_in(email: impl Into<String>) -> Self {
        Self {
            logged_in: true,
            user_name: None,
            user_email: Some(email.into()),
        }
    }

    #[must_use]
    pub fn with_user_name(mut self, name: impl Into<String>) -> Self {
        self.user_name = Some(name.into());
        self
    }

    /// Rebuild a record from raw stored entries.
    ///
    /// `lookup` returns the stored value for a key, if any. Empty values are
    /// treated the same as missing ones.
    #[must_use]
    pub fn from_entries(mut lookup: impl FnMut(SessionKey) -> Option<String>) -> Self {
        let logged_in = lookup(SessionKey::IsLoggedIn).is_some_and(|value| !value.is_empty());
        Self {
            logged_in,
            user_name: non_empty(lookup(SessionKey::UserName)),
            user_email: non_empty(lookup(SessionKey::UserEmail)),
        }
    }

    /// The stored form of this record: `Some` entries are written, `None`
    /// entries are removed.
    #[must_use]
    pub fn entries(&self) -> [(SessionKey, Option<&str>); 3] {
        [
            (
                SessionKey::IsLoggedIn,
                self.logged_in.then_some(LOGGED_IN_VALUE),
            ),
            (SessionKey::UserName, self.user_name.as_deref()),
            (SessionKey::UserEmail, self.user_email.as_deref()),
        ]
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    #[must_use]
    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    #[must_use]
    pub fn user_email(&self) -> Option<&str> {
        self.user_email.as_deref()
    }

    /// Name to greet the user with, falling back to [`DEFAULT_USER_NAME`].
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.user_name.as_deref().unwrap_or(DEFAULT_USER_NAME)
    }

    #[must_use]
    pub fn display_email(&self) -> &str {
        self.user_email.as_deref().unwrap_or_default()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|val| !val.is_empty())
}
