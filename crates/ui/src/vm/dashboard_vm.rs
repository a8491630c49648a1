use edulearn_core::model::{Achievement, Course, CourseStatus};
use services::DashboardOverview;

use crate::vm::number_fmt::{format_count, format_rating};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCardVm {
    pub value: String,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCardVm {
    pub key: String,
    pub title: &'static str,
    pub description: &'static str,
    pub status_label: &'static str,
    pub badge_class: &'static str,
    pub progress: u8,
    pub duration: &'static str,
    pub students_str: String,
    pub rating_str: String,
}

impl From<&Course> for CourseCardVm {
    fn from(course: &Course) -> Self {
        let status = course.status();
        Self {
            key: course.id.to_string(),
            title: course.title,
            description: course.description,
            status_label: status.label(),
            badge_class: match status {
                CourseStatus::NotStarted => "badge badge-secondary",
                CourseStatus::InProgress | CourseStatus::Completed => "badge",
            },
            progress: course.progress.percent(),
            duration: course.duration,
            students_str: format_count(course.students),
            rating_str: format_rating(course.rating),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AchievementVm {
    pub name: &'static str,
    pub class: &'static str,
}

impl From<&Achievement> for AchievementVm {
    fn from(achievement: &Achievement) -> Self {
        Self {
            name: achievement.name,
            class: if achievement.earned {
                "achievement earned"
            } else {
                "achievement locked"
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardVm {
    pub user_name: String,
    pub user_email: Option<String>,
    pub stats: Vec<StatCardVm>,
    pub courses: Vec<CourseCardVm>,
    pub achievements: Vec<AchievementVm>,
    pub streak_days: u32,
}

#[must_use]
pub fn map_dashboard(overview: &DashboardOverview) -> DashboardVm {
    let stats = &overview.stats;
    DashboardVm {
        user_name: overview.user_name.clone(),
        user_email: Some(overview.user_email.clone()).filter(|email| !email.is_empty()),
        stats: vec![
            StatCardVm {
                value: stats.courses.to_string(),
                label: "Courses",
            },
            StatCardVm {
                value: stats.study_time.to_string(),
                label: "Study Time",
            },
            StatCardVm {
                value: stats.achievements_earned.to_string(),
                label: "Achievements",
            },
            StatCardVm {
                value: stats.day_streak.to_string(),
                label: "Day Streak",
            },
        ],
        courses: overview.courses.iter().map(CourseCardVm::from).collect(),
        achievements: overview
            .achievements
            .iter()
            .map(AchievementVm::from)
            .collect(),
        streak_days: stats.day_streak,
    }
}
