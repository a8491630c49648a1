use std::sync::Arc;

use storage::repository::Storage;

use crate::dashboard_service::DashboardService;
use crate::error::AppServicesError;
use crate::session_service::SessionService;

/// Assembles app-facing services over a chosen storage backend.
#[derive(Clone)]
pub struct AppServices {
    sessions: Arc<SessionService>,
    dashboard: Arc<DashboardService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        tracing::info!("session storage ready");
        Ok(Self::from_storage(&storage))
    }

    /// Build services over throwaway in-memory storage.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_storage(&Storage::in_memory())
    }

    #[must_use]
    pub fn from_storage(storage: &Storage) -> Self {
        Self {
            sessions: Arc::new(SessionService::new(Arc::clone(&storage.sessions))),
            dashboard: Arc::new(DashboardService::new()),
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
