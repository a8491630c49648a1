//! Static product content.
//!
//! Everything here is a literal: nothing is loaded, mutated or persisted.

use crate::model::{Achievement, Course, CourseId, DashboardStats, Feature, Progress, Stat};

pub const PRODUCT_NAME: &str = "EduLearn";

/// Self-reported study time shown on the dashboard.
pub const STUDY_TIME: &str = "24h";

/// Consecutive study days shown on the dashboard.
pub const DAY_STREAK: u32 = 7;

#[must_use]
pub fn courses() -> Vec<Course> {
    vec![
        Course {
            id: CourseId::new(1),
            title: "Introduction to React",
            description: "Learn the fundamentals of React development",
            progress: Progress::clamped(75),
            duration: "4 hours",
            students: 1234,
            rating: 4.8,
        },
        Course {
            id: CourseId::new(2),
            title: "Advanced JavaScript",
            description: "Master advanced JavaScript concepts and patterns",
            progress: Progress::clamped(30),
            duration: "6 hours",
            students: 892,
            rating: 4.9,
        },
        Course {
            id: CourseId::new(3),
            title: "TypeScript Essentials",
            description: "Type-safe JavaScript development",
            progress: Progress::clamped(0),
            duration: "5 hours",
            students: 756,
            rating: 4.7,
        },
    ]
}

#[must_use]
pub fn achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            name: "First Course",
            earned: true,
        },
        Achievement {
            name: "Week Streak",
            earned: true,
        },
        Achievement {
            name: "Course Master",
            earned: false,
        },
        Achievement {
            name: "Community Helper",
            earned: false,
        },
    ]
}

#[must_use]
pub fn features() -> Vec<Feature> {
    vec![
        Feature {
            title: "Interactive Courses",
            description: "Hands-on learning with real-world projects and practical exercises",
        },
        Feature {
            title: "Expert Instructors",
            description: "Learn from industry professionals with years of experience",
        },
        Feature {
            title: "Personalized Learning",
            description: "Adaptive learning paths tailored to your skill level and goals",
        },
        Feature {
            title: "Certificates",
            description: "Earn recognized certificates upon successful course completion",
        },
    ]
}

#[must_use]
pub fn stats() -> Vec<Stat> {
    vec![
        Stat {
            figure: "50K+",
            label: "Students",
        },
        Stat {
            figure: "200+",
            label: "Courses",
        },
        Stat {
            figure: "95%",
            label: "Success Rate",
        },
        Stat {
            figure: "24/7",
            label: "Support",
        },
    ]
}

/// Dashboard headline figures, counted from the course and achievement lists.
#[must_use]
pub fn dashboard_stats(courses: &[Course], achievements: &[Achievement]) -> DashboardStats {
    DashboardStats {
        courses: courses.len(),
        study_time: STUDY_TIME,
        achievements_earned: achievements.iter().filter(|a| a.earned).count(),
        day_streak: DAY_STREAK,
    }
}
