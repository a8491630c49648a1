use dioxus::prelude::*;
use edulearn_core::model::LoginError;
use services::SessionServiceError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    Invalid(LoginError),
}

impl ViewError {
    /// Map a service failure for display. Storage details stay in the log.
    #[must_use]
    pub fn from_session(err: &SessionServiceError) -> Self {
        match err {
            SessionServiceError::Login(err) => Self::Invalid(*err),
            other => {
                tracing::warn!(error = %other, "session storage failed");
                Self::Unknown
            }
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Unknown => "Something went wrong. Please try again.".to_string(),
            Self::Invalid(err) => capitalize(&err.to_string()),
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
