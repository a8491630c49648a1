use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use edulearn_core::catalog::PRODUCT_NAME;
use edulearn_core::model::SignupDraft;
use services::SessionService;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;

/// Submit the signup form and return where to go next.
///
/// # Errors
///
/// Returns `ViewError::Invalid` for an empty field, `ViewError::Unknown` on
/// storage failure.
pub async fn run_signup(
    sessions: &SessionService,
    draft: SignupDraft,
) -> Result<Route, ViewError> {
    sessions
        .signup(draft)
        .await
        .map(Route::from)
        .map_err(|err| ViewError::from_session(&err))
}

pub fn use_signup_action(mut error: Signal<Option<ViewError>>) -> Callback<SignupDraft> {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    use_callback(move |draft: SignupDraft| {
        let sessions = ctx.sessions();
        spawn(async move {
            match run_signup(&sessions, draft).await {
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
pub fn SignupView() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let error = use_signal(|| None::<ViewError>);
    let signup = use_signup_action(error);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        signup.call(SignupDraft {
            name: name.read().clone(),
            email: email.read().clone(),
            password: password.read().clone(),
        });
    };

    rsx! {
        div { class: "page centered auth",
            div { class: "auth-header",
                h1 { "{PRODUCT_NAME}" }
                p { class: "muted", "Start your learning journey" }
            }

            div { class: "card",
                h2 { "Create Account" }
                p { class: "muted", "Tell us a little about yourself" }

                form { class: "auth-form", onsubmit,
                    label { r#for: "name", "Name" }
                    input {
                        id: "name",
                        r#type: "text",
                        placeholder: "Your name",
                        required: true,
                        value: "{name.read()}",
                        oninput: move |evt| name.set(evt.value()),
                    }

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

                    button { class: "btn btn-block", r#type: "submit", "Get Started" }
                }

                p { class: "auth-switch muted",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }

            div { class: "card notice",
                p {
                    strong { "Demo Mode:" }
                    " Any details will do, nothing is sent anywhere"
                }
            }
        }
    }
}
