use serde::Serialize;

/// A selling point on the landing screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

/// A headline figure, e.g. "50K+" / "Students".
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub figure: &'static str,
    pub label: &'static str,
}

/// Summary figures across the top of the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub courses: usize,
    pub study_time: &'static str,
    pub achievements_earned: usize,
    pub day_streak: u32,
}
