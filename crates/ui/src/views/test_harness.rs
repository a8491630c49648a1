use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use edulearn_core::model::{LoginDraft, SessionKey, SignupDraft};
use services::{AppServices, DashboardService, SessionService};
use storage::repository::{InMemoryRepository, SessionRepository, Storage};

use crate::context::{UiApp, build_app_context};
use crate::views::{
    DashboardView, LandingView, LoginView, SignupView, ViewError, use_login_action,
    use_signup_action,
};

#[derive(Clone)]
struct TestApp {
    sessions: Arc<SessionService>,
    dashboard: Arc<DashboardService>,
}

impl UiApp for TestApp {
    fn sessions(&self) -> Arc<SessionService> {
        Arc::clone(&self.sessions)
    }

    fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Landing,
    Login,
    Signup,
    Dashboard,
    /// Mounts only the login submit action.
    LoginAction,
    /// Mounts only the signup submit action.
    SignupAction,
}

#[derive(Clone, Default)]
pub struct ActionHandles {
    login: Rc<RefCell<Option<Callback<LoginDraft>>>>,
    signup: Rc<RefCell<Option<Callback<SignupDraft>>>>,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: ActionHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
    #[route("/:..segments")]
    Elsewhere { segments: Vec<String> },
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Landing => rsx! { LandingView {} },
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::Signup => rsx! { SignupView {} },
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::LoginAction => rsx! { LoginActionHarness {} },
        ViewKind::SignupAction => rsx! { SignupActionHarness {} },
    }
}

#[component]
fn LoginActionHarness() -> Element {
    let handles = use_context::<ActionHandles>();
    let error = use_signal(|| None::<ViewError>);
    let login = use_login_action(error);
    *handles.login.borrow_mut() = Some(login);
    rsx! { ActionError { error } }
}

#[component]
fn SignupActionHarness() -> Element {
    let handles = use_context::<ActionHandles>();
    let error = use_signal(|| None::<ViewError>);
    let signup = use_signup_action(error);
    *handles.signup.borrow_mut() = Some(signup);
    rsx! { ActionError { error } }
}

#[component]
fn ActionError(error: Signal<Option<ViewError>>) -> Element {
    match error() {
        Some(err) => rsx! { p { class: "error", "{err.message()}" } },
        None => rsx! { p { "ready" } },
    }
}

#[component]
fn Elsewhere(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! { p { "navigated to /{path}" } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub repo: InMemoryRepository,
    pub sessions: Arc<SessionService>,
    handles: ActionHandles,
}

impl ViewHarness {
    pub fn submit_login(&self, draft: LoginDraft) {
        let login = (*self.handles.login.borrow()).expect("login action mounted");
        self.dom.in_runtime(|| login.call(draft));
    }

    pub fn submit_signup(&self, draft: SignupDraft) {
        let signup = (*self.handles.signup.borrow()).expect("signup action mounted");
        self.dom.in_runtime(|| signup.call(draft));
    }

    /// Let spawned tasks and router effects finish, e.g. after a submit or redirect.
    pub async fn drain(&mut self) {
        self.drive_async().await;
        self.drive_async().await;
    }

    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Build, then give pending session reads a chance to resolve.
    pub async fn settle(&mut self) {
        self.rebuild();
        self.drive_async().await;
        self.drive_async().await;
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Seed raw entries as if an earlier run had written them.
pub fn seed_entries(repo: &InMemoryRepository, entries: &[(SessionKey, &str)]) {
    for (key, value) in entries {
        repo.set_item(*key, *value).expect("seed entry");
    }
}

pub fn setup_view_harness(view: ViewKind, entries: &[(SessionKey, &str)]) -> ViewHarness {
    let repo = InMemoryRepository::new();
    seed_entries(&repo, entries);
    let sessions_repo: Arc<dyn SessionRepository> = Arc::new(repo.clone());
    setup_view_harness_with_repo(view, repo, sessions_repo)
}

pub fn setup_view_harness_with_repo(
    view: ViewKind,
    repo: InMemoryRepository,
    sessions_repo: Arc<dyn SessionRepository>,
) -> ViewHarness {
    let services = AppServices::from_storage(&Storage {
        sessions: sessions_repo,
    });
    let sessions = services.sessions();

    let app = Arc::new(TestApp {
        sessions: services.sessions(),
        dashboard: services.dashboard(),
    });

    let handles = ActionHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        repo,
        sessions,
        handles,
    }
}
