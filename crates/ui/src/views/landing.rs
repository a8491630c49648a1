use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use edulearn_core::catalog::{self, PRODUCT_NAME};
use edulearn_core::model::{Feature, Stat};
use edulearn_core::navigation::{LandingVariant, Screen};

use crate::routes::Route;
use crate::views::{GateState, use_session_gate};

#[component]
pub fn LandingView() -> Element {
    let gate = use_session_gate(Screen::Landing);

    match gate {
        GateState::Pending | GateState::Redirecting => rsx! {
            div { class: "page loading", p { "Loading..." } }
        },
        GateState::Failed(err) => rsx! {
            div { class: "page", p { class: "error", "{err.message()}" } }
        },
        GateState::Allowed(session) => match LandingVariant::for_session(&session) {
            LandingVariant::WelcomeBack => rsx! { WelcomeBack {} },
            LandingVariant::Marketing => rsx! { Marketing {} },
        },
    }
}

#[component]
fn WelcomeBack() -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "page centered welcome-back",
            h1 { "Welcome back to {PRODUCT_NAME}!" }
            p { class: "muted", "Ready to continue your learning journey?" }
            button {
                class: "btn btn-lg",
                r#type: "button",
                onclick: move |_| {
                    navigator.push(Route::Dashboard {});
                },
                "Go to Dashboard"
            }
        }
    }
}

#[component]
fn Marketing() -> Element {
    let stats = catalog::stats();
    let features = catalog::features();

    rsx! {
        div { class: "page marketing",
            header { class: "topbar",
                span { class: "brand", "{PRODUCT_NAME}" }
                nav { class: "topbar-actions",
                    Link { class: "btn btn-outline", to: Route::Login {}, "Sign In" }
                    Link { class: "btn", to: Route::Signup {}, "Get Started" }
                }
            }

            section { class: "hero",
                h1 { "Learn, Grow, and " span { class: "accent", "Excel" } }
                p { class: "muted",
                    "Join thousands of learners in our comprehensive educational platform. "
                    "Master new skills with expert-led courses and hands-on projects."
                }
                div { class: "hero-actions",
                    Link { class: "btn btn-lg", to: Route::Signup {}, "Start Learning Today" }
                    Link { class: "btn btn-lg btn-outline", to: Route::Login {}, "Sign In" }
                }
            }

            section { class: "stats",
                for stat in stats {
                    StatFigure { key: "{stat.label}", stat }
                }
            }

            section { class: "features",
                h2 { "Why Choose {PRODUCT_NAME}?" }
                p { class: "muted",
                    "We provide the tools, resources, and support you need to succeed in your learning journey"
                }
                div { class: "grid",
                    for feature in features {
                        FeatureCard { key: "{feature.title}", feature }
                    }
                }
            }

            section { class: "cta card",
                h2 { "Ready to Start Learning?" }
                p { class: "muted",
                    "Join our community of learners and unlock your potential with our comprehensive courses"
                }
                Link { class: "btn btn-lg", to: Route::Signup {}, "Get Started Now" }
            }

            footer { class: "footer",
                span { class: "brand", "{PRODUCT_NAME}" }
                p { "© 2024 {PRODUCT_NAME}. All rights reserved." }
            }
        }
    }
}

#[component]
fn StatFigure(stat: Stat) -> Element {
    rsx! {
        div { class: "stat",
            div { class: "stat-figure", "{stat.figure}" }
            div { class: "muted", "{stat.label}" }
        }
    }
}

#[component]
fn FeatureCard(feature: Feature) -> Element {
    rsx! {
        div { class: "card feature",
            h3 { "{feature.title}" }
            p { class: "muted", "{feature.description}" }
        }
    }
}
