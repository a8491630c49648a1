//! Screen access rules.
//!
//! The guard only decides where a visit should end up. Performing the
//! navigation is left to the UI layer.

use crate::model::SessionRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    Landing,
    Login,
    Signup,
    Dashboard,
}

impl Screen {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Dashboard => "/dashboard",
        }
    }

    #[must_use]
    pub fn requires_session(self) -> bool {
        matches!(self, Self::Dashboard)
    }
}

/// Outcome of evaluating the guard for a screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(Screen),
}

/// Decide whether `screen` may render for the given session.
#[must_use]
pub fn guard(screen: Screen, session: &SessionRecord) -> Access {
    if screen.requires_session() && !session.is_logged_in() {
        Access::Redirect(Screen::Login)
    } else {
        Access::Allow
    }
}

/// Which of the two landing views to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LandingVariant {
    WelcomeBack,
    Marketing,
}

impl LandingVariant {
    /// Only presence matters here; name and email are ignored.
    #[must_use]
    pub fn for_session(session: &SessionRecord) -> Self {
        if session.is_logged_in() {
            Self::WelcomeBack
        } else {
            Self::Marketing
        }
    }
}
