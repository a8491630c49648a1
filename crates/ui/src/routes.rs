use dioxus::prelude::*;
use dioxus_router::Routable;
use edulearn_core::navigation::Screen;

use crate::views::{DashboardView, LandingView, LoginView, NotFoundView, SignupView};

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", LandingView)] Landing {},
    #[route("/login", LoginView)] Login {},
    #[route("/signup", SignupView)] Signup {},
    #[route("/dashboard", DashboardView)] Dashboard {},
    #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

impl From<Screen> for Route {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::Landing => Route::Landing {},
            Screen::Login => Route::Login {},
            Screen::Signup => Route::Signup {},
            Screen::Dashboard => Route::Dashboard {},
        }
    }
}
