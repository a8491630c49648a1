use std::sync::Arc;

use services::{DashboardService, SessionService};

pub trait UiApp: Send + Sync {
    fn sessions(&self) -> Arc<SessionService>;
    fn dashboard(&self) -> Arc<DashboardService>;
}

/// Services handed to every screen. Screens never touch storage directly.
#[derive(Clone)]
pub struct AppContext {
    sessions: Arc<SessionService>,
    dashboard: Arc<DashboardService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            sessions: app.sessions(),
            dashboard: app.dashboard(),
        }
    }

    #[must_use]
    pub fn sessions(&self) -> Arc<SessionService> {
        Arc::clone(&self.sessions)
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
