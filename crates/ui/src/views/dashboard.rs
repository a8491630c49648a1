use dioxus::prelude::*;
use dioxus_router::use_navigator;
use edulearn_core::catalog::PRODUCT_NAME;
use edulearn_core::navigation::Screen;
use services::SessionService;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{GateState, ViewError, use_session_gate};
use crate::vm::{AchievementVm, CourseCardVm, DashboardVm, StatCardVm, map_dashboard};

/// Clear the session and return where to go next.
///
/// # Errors
///
/// Returns `ViewError::Unknown` if the session could not be cleared.
pub async fn run_logout(sessions: &SessionService) -> Result<Route, ViewError> {
    sessions
        .logout()
        .await
        .map(Route::from)
        .map_err(|err| ViewError::from_session(&err))
}

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let gate = use_session_gate(Screen::Dashboard);

    match gate {
        GateState::Pending | GateState::Redirecting => rsx! {
            div { class: "page loading", p { "Loading..." } }
        },
        GateState::Failed(err) => rsx! {
            div { class: "page", p { class: "error", "{err.message()}" } }
        },
        GateState::Allowed(session) => {
            let vm = map_dashboard(&ctx.dashboard().overview(&session));
            rsx! { DashboardContent { vm } }
        }
    }
}

#[component]
fn DashboardContent(vm: DashboardVm) -> Element {
    rsx! {
        div { class: "page dashboard",
            DashboardHeader {}

            section { class: "welcome",
                h2 { "Welcome back, {vm.user_name}! 👋" }
                if let Some(email) = vm.user_email.as_ref() {
                    p { class: "muted user-email", "Signed in as {email}" }
                }
                p { class: "muted", "Continue your learning journey and achieve your goals" }
            }

            section { class: "stats-grid",
                for stat in vm.stats.iter() {
                    StatCard { key: "{stat.label}", stat: stat.clone() }
                }
            }

            div { class: "dashboard-body",
                section { class: "courses",
                    h3 { "My Courses" }
                    for course in vm.courses.iter() {
                        CourseCard { key: "{course.key}", course: course.clone() }
                    }
                }

                aside { class: "sidebar",
                    div { class: "card",
                        h3 { "Achievements" }
                        p { class: "muted", "Your learning milestones" }
                        div { class: "achievements",
                            for achievement in vm.achievements.iter() {
                                AchievementBadge {
                                    key: "{achievement.name}",
                                    achievement: achievement.clone(),
                                }
                            }
                        }
                    }

                    div { class: "card streak",
                        h3 { "Study Streak" }
                        p { class: "muted", "Keep up the momentum!" }
                        div { class: "streak-count", "{vm.streak_days}" }
                        p { class: "muted", "Days in a row" }
                        div { class: "streak-dots",
                            for day in 0..vm.streak_days {
                                span { key: "{day}", class: "streak-dot" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DashboardHeader() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut error = use_signal(|| None::<ViewError>);

    let on_logout = move |_: MouseEvent| {
        let sessions = ctx.sessions();
        spawn(async move {
            match run_logout(&sessions).await {
                Ok(route) => {
                    navigator.push(route);
                }
                Err(err) => error.set(Some(err)),
            }
        });
    };

    rsx! {
        header { class: "topbar",
            h1 { class: "brand", "{PRODUCT_NAME}" }
            div { class: "topbar-actions",
                button { class: "btn btn-outline btn-sm", r#type: "button", "Settings" }
                button {
                    class: "btn btn-outline btn-sm",
                    r#type: "button",
                    onclick: on_logout,
                    "Logout"
                }
            }
            if let Some(err) = error() {
                p { class: "error", "{err.message()}" }
            }
        }
    }
}

#[component]
fn StatCard(stat: StatCardVm) -> Element {
    rsx! {
        div { class: "card stat-card",
            p { class: "stat-value", "{stat.value}" }
            p { class: "muted", "{stat.label}" }
        }
    }
}

#[component]
fn CourseCard(course: CourseCardVm) -> Element {
    rsx! {
        div { class: "card course",
            div { class: "course-head",
                div {
                    h4 { "{course.title}" }
                    p { class: "muted", "{course.description}" }
                }
                span { class: "{course.badge_class}", "{course.status_label}" }
            }
            div { class: "progress-row",
                span { "Progress" }
                span { "{course.progress}%" }
            }
            div { class: "progress",
                div { class: "progress-fill", style: "width: {course.progress}%" }
            }
            div { class: "course-meta muted",
                span { "{course.duration}" }
                span { "{course.students_str} students" }
                span { "★ {course.rating_str}" }
                button { class: "btn btn-sm", r#type: "button", "Continue" }
            }
        }
    }
}

#[component]
fn AchievementBadge(achievement: AchievementVm) -> Element {
    rsx! {
        div { class: "{achievement.class}",
            span { "{achievement.name}" }
        }
    }
}
