use edulearn_core::catalog;
use edulearn_core::model::{Achievement, Course, DashboardStats, SessionRecord};

/// Everything the dashboard screen shows.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardOverview {
    pub user_name: String,
    pub user_email: String,
    pub stats: DashboardStats,
    pub courses: Vec<Course>,
    pub achievements: Vec<Achievement>,
}

/// Combines the static catalog with the signed-in user's display fields.
#[derive(Clone, Debug)]
pub struct DashboardService {
    courses: Vec<Course>,
    achievements: Vec<Achievement>,
}

impl Default for DashboardService {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            courses: catalog::courses(),
            achievements: catalog::achievements(),
        }
    }

    #[must_use]
    pub fn overview(&self, session: &SessionRecord) -> DashboardOverview {
        DashboardOverview {
            user_name: session.display_name().to_string(),
            user_email: session.display_email().to_string(),
            stats: catalog::dashboard_stats(&self.courses, &self.achievements),
            courses: self.courses.clone(),
            achievements: self.achievements.clone(),
        }
    }
}
