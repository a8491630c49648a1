use dioxus::prelude::*;
use dioxus_router::use_navigator;
use edulearn_core::model::SessionRecord;
use edulearn_core::navigation::{Access, Screen};
use services::GateDecision;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

/// What a screen may draw after the navigation guard has run.
#[derive(Clone, Debug, PartialEq)]
pub enum GateState {
    /// The session has not been read yet.
    Pending,
    /// The guard sent the visit elsewhere. Draw nothing.
    Redirecting,
    Allowed(SessionRecord),
    Failed(ViewError),
}

impl GateState {
    fn from_view_state(state: ViewState<GateDecision>) -> Self {
        match state {
            ViewState::Idle | ViewState::Loading => Self::Pending,
            ViewState::Ready(GateDecision {
                access: Access::Allow,
                session,
            }) => Self::Allowed(session),
            ViewState::Ready(_) => Self::Redirecting,
            ViewState::Error(err) => Self::Failed(err),
        }
    }
}

/// Evaluate the guard for `screen` before the screen renders anything of its own.
///
/// The redirect itself happens in an effect, so deciding the destination
/// stays separate from drawing.
pub fn use_session_gate(screen: Screen) -> GateState {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let sessions = ctx.sessions();

    let resource = use_resource(move || {
        let sessions = sessions.clone();
        async move {
            sessions
                .authorize(screen)
                .await
                .map_err(|err| ViewError::from_session(&err))
        }
    });

    use_effect(move || {
        if let ViewState::Ready(decision) = view_state_from_resource(resource) {
            if let Access::Redirect(target) = decision.access {
                tracing::debug!(?screen, ?target, "redirecting");
                navigator.replace(Route::from(target));
            }
        }
    });

    GateState::from_view_state(view_state_from_resource(resource))
}
