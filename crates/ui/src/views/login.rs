use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use edulearn_core::catalog::PRODUCT_NAME;
use edulearn_core::model::LoginDraft;
use services::SessionService;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;

/// Submit the login form and return where to go next.
///
/// # Errors
///
/// Returns `ViewError::Invalid` for an empty field, `ViewError::Unknown` on
/// storage failure.
pub async fn run_login(sessions: &SessionService, draft: LoginDraft) -> Result<Route, ViewError> {
    sessions
        .login(draft)
        .await
        .map(Route::from)
        .map_err(|err| ViewError::from_session(&err))
}

/// Login submit action: stores the session, then pushes the dashboard.
/// Failures land in `error`.
pub fn use_login_action(mut error: Signal<Option<ViewError>>) -> Callback<LoginDraft> {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    use_callback(move |draft: LoginDraft| {
        let sessions = ctx.sessions();
        spawn(async move {
            match run_login(&sessions, draft).await {
                Ok(route) => {
                    error.set(None);
                    navigator.push(route);
                }
                Err(err) => error.set(Some(err)),
            }
        });
    })
}

#[component]
pub fn LoginView() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let error = use_signal(|| None::<ViewError>);
    let login = use_login_action(error);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        login.call(LoginDraft::new(email.read().clone(), password.read().clone()));
    };

    rsx! {
        div { class: "page centered auth",
            div { class: "auth-header",
                h1 { "{PRODUCT_NAME}" }
                p { class: "muted", "Welcome back to your learning journey" }
            }

            div { class: "card",
                h2 { "Sign In" }
                p { class: "muted", "Enter your credentials to access your courses" }

                form { class: "auth-form", onsubmit,
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        placeholder: "student@edulearn.com",
                        required: true,
                        value: "{email.read()}",
                        oninput: move |evt| email.set(evt.value()),
                    }

                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        required: true,
                        value: "{password.read()}",
                        oninput: move |evt| password.set(evt.value()),
                    }

                    if let Some(err) = error() {
                        p { class: "error", "{err.message()}" }
                    }

                    button { class: "btn btn-block", r#type: "submit", "Sign In" }
                }

                p { class: "auth-switch muted",
                    "Don't have an account? "
                    Link { to: Route::Signup {}, "Sign up" }
                }
            }

            div { class: "card notice",
                p {
                    strong { "Demo Mode:" }
                    " Use any email and password to continue"
                }
            }
        }
    }
}
