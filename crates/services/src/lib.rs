#![forbid(unsafe_code)]

pub mod app_services;
pub mod dashboard_service;
pub mod error;
pub mod session_service;

pub use app_services::AppServices;
pub use dashboard_service::{DashboardOverview, DashboardService};
pub use error::{AppServicesError, SessionServiceError};
pub use session_service::{GateDecision, SessionService};
