use std::sync::Arc;

use edulearn_core::model::{LoginDraft, SessionRecord, SignupDraft};
use edulearn_core::navigation::{Access, Screen, guard};
use storage::repository::SessionRepository;

use crate::error::SessionServiceError;

/// Result of evaluating the navigation guard against the stored session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateDecision {
    pub access: Access,
    pub session: SessionRecord,
}

/// The only way screens reach the session record.
///
/// `get_session`, `set_session` and `clear_session` are the storage access
/// points. The remaining methods are the login, signup and logout flows
/// built on top of them; each returns the screen to navigate to.
#[derive(Clone)]
pub struct SessionService {
    repo: Arc<dyn SessionRepository>,
}

impl SessionService {
    #[must_use]
    pub fn new(repo: Arc<dyn SessionRepository>) -> Self {
        Self { repo }
    }

    /// # Errors
    ///
    /// Returns `SessionServiceError::Storage` if the record cannot be read.
    pub async fn get_session(&self) -> Result<SessionRecord, SessionServiceError> {
        let record = self.repo.load_session().await?;
        tracing::debug!(logged_in = record.is_logged_in(), "loaded session");
        Ok(record)
    }

    /// Replace the stored record.
    ///
    /// # Errors
    ///
    /// Returns `SessionServiceError::Storage` if the record cannot be written.
    pub async fn set_session(&self, record: &SessionRecord) -> Result<(), SessionServiceError> {
        self.repo.save_session(record).await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SessionServiceError::Storage` if the keys cannot be removed.
    pub async fn clear_session(&self) -> Result<(), SessionServiceError> {
        self.repo.clear_session().await?;
        Ok(())
    }

    /// Read the session and decide whether `screen` may render.
    ///
    /// # Errors
    ///
    /// Returns `SessionServiceError::Storage` if the record cannot be read.
    pub async fn authorize(&self, screen: Screen) -> Result<GateDecision, SessionServiceError> {
        let session = self.get_session().await?;
        let access = guard(screen, &session);
        tracing::debug!(?screen, ?access, "evaluated navigation guard");
        Ok(GateDecision { access, session })
    }

    /// Mock sign-in: any non-empty email and password are accepted.
    ///
    /// # Errors
    ///
    /// Returns `SessionServiceError::Login` for an empty field (nothing is
    /// written), or `SessionServiceError::Storage` if the write fails.
    pub async fn login(&self, draft: LoginDraft) -> Result<Screen, SessionServiceError> {
        let credentials = draft.validate()?;
        self.set_session(&SessionRecord::signed_in(credentials.email()))
            .await?;
        tracing::info!(email = credentials.email(), "signed in");
        Ok(Screen::Dashboard)
    }

    /// Mock sign-up: like `login`, but also stores the display name.
    ///
    /// # Errors
    ///
    /// Returns `SessionServiceError::Login` for an empty field (nothing is
    /// written), or `SessionServiceError::Storage` if the write fails.
    pub async fn signup(&self, draft: SignupDraft) -> Result<Screen, SessionServiceError> {
        let credentials = draft.validate()?;
        let mut record = SessionRecord::signed_in(credentials.email());
        if let Some(name) = credentials.name() {
            record = record.with_user_name(name);
        }
        self.set_session(&record).await?;
        tracing::info!(email = credentials.email(), "signed up");
        Ok(Screen::Dashboard)
    }

    /// Forget the session. Succeeds even when nobody is signed in.
    ///
    /// # Errors
    ///
    /// Returns `SessionServiceError::Storage` if the keys cannot be removed.
    pub async fn logout(&self) -> Result<Screen, SessionServiceError> {
        self.clear_session().await?;
        tracing::info!("signed out");
        Ok(Screen::Landing)
    }
}
