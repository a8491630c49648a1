use std::sync::Arc;

use edulearn_core::model::{LoginDraft, SessionKey, SessionRecord, SignupDraft};
use storage::repository::{InMemoryRepository, SessionRepository, StorageError};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_repo};
use crate::routes::Route;
use crate::views::{ViewError, run_login, run_logout, run_signup};

const SIGNED_IN: &[(SessionKey, &str)] = &[(SessionKey::IsLoggedIn, "true")];

#[tokio::test(flavor = "current_thread")]
async fn landing_without_session_renders_marketing() {
    let mut harness = setup_view_harness(ViewKind::Landing, &[]);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Sign In"), "missing sign in in {html}");
    assert!(html.contains("Get Started"), "missing get started in {html}");
    assert!(html.contains("Why Choose EduLearn?"), "missing features in {html}");
    assert!(html.contains("50K+"), "missing stats in {html}");
    assert!(!html.contains("Go to Dashboard"), "unexpected shortcut in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn landing_with_session_renders_welcome_back_only() {
    let mut harness = setup_view_harness(ViewKind::Landing, SIGNED_IN);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Welcome back"), "missing welcome in {html}");
    assert!(html.contains("Go to Dashboard"), "missing shortcut in {html}");
    assert!(!html.contains("Get Started"), "marketing leaked into {html}");
    assert!(!html.contains("Why Choose"), "marketing leaked into {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_without_session_redirects_to_login() {
    let mut harness = setup_view_harness(ViewKind::Dashboard, &[]);
    harness.settle().await;
    let html = harness.render();
    assert!(!html.contains("My Courses"), "protected content in {html}");
    assert!(!html.contains("Introduction to React"), "protected content in {html}");
    assert!(!html.contains("Welcome back"), "protected content in {html}");

    harness.drain().await;
    let html = harness.render();
    assert!(html.contains("navigated to /login"), "no redirect in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_with_session_stays_put() {
    let mut harness = setup_view_harness(ViewKind::Dashboard, SIGNED_IN);
    harness.settle().await;
    harness.drain().await;
    let html = harness.render();
    assert!(html.contains("My Courses"), "missing courses in {html}");
    assert!(!html.contains("navigated to"), "unexpected redirect in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_defaults_name_to_student() {
    let mut harness = setup_view_harness(ViewKind::Dashboard, SIGNED_IN);
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("Welcome back, Student!"),
        "missing default name in {html}"
    );
    assert!(html.contains("My Courses"), "missing courses in {html}");
    assert!(html.contains("1,234 students"), "missing student count in {html}");
    assert!(html.contains("Not Started"), "missing status badge in {html}");
    assert!(html.contains("Logout"), "missing logout in {html}");
    assert!(!html.contains("Signed in as"), "unexpected email line in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_shows_stored_name_and_email() {
    let mut harness = setup_view_harness(
        ViewKind::Dashboard,
        &[
            (SessionKey::IsLoggedIn, "true"),
            (SessionKey::UserName, "Ada"),
            (SessionKey::UserEmail, "ada@example.com"),
        ],
    );
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Welcome back, Ada!"), "missing name in {html}");
    assert!(
        html.contains("Signed in as ada@example.com"),
        "missing email in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn login_view_renders_form_and_demo_notice() {
    let mut harness = setup_view_harness(ViewKind::Login, &[]);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Enter your credentials"), "missing form in {html}");
    assert!(html.contains("Demo Mode:"), "missing notice in {html}");
    assert!(html.contains("Sign up"), "missing signup link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn signup_view_renders_form() {
    let mut harness = setup_view_harness(ViewKind::Signup, &[]);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Create Account"), "missing title in {html}");
    assert!(html.contains("Sign in"), "missing login link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn login_action_stores_session_and_targets_dashboard() {
    let harness = setup_view_harness(ViewKind::Login, &[]);
    let route = run_login(&harness.sessions, LoginDraft::new("me@school.org", "pw"))
        .await
        .expect("login");
    assert_eq!(route, Route::Dashboard {});
    assert_eq!(
        harness.repo.get_item(SessionKey::IsLoggedIn).unwrap().as_deref(),
        Some("true")
    );
    assert_eq!(
        harness.repo.get_item(SessionKey::UserEmail).unwrap().as_deref(),
        Some("me@school.org")
    );
}

#[tokio::test(flavor = "current_thread")]
async fn login_action_reports_missing_fields() {
    let harness = setup_view_harness(ViewKind::Login, &[]);
    let err = run_login(&harness.sessions, LoginDraft::new("", "pw"))
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Email is required");
    assert_eq!(harness.repo.get_item(SessionKey::IsLoggedIn).unwrap(), None);
}

#[tokio::test(flavor = "current_thread")]
async fn login_submit_navigates_to_dashboard() {
    let mut harness = setup_view_harness(ViewKind::LoginAction, &[]);
    harness.settle().await;

    harness.submit_login(LoginDraft::new("me@school.org", "pw"));
    harness.drain().await;

    let html = harness.render();
    assert!(html.contains("navigated to /dashboard"), "no navigation in {html}");
    assert_eq!(
        harness.repo.get_item(SessionKey::UserEmail).unwrap().as_deref(),
        Some("me@school.org")
    );
}

#[tokio::test(flavor = "current_thread")]
async fn login_submit_with_blank_password_stays_and_reports() {
    let mut harness = setup_view_harness(ViewKind::LoginAction, &[]);
    harness.settle().await;

    harness.submit_login(LoginDraft::new("me@school.org", ""));
    harness.drain().await;

    let html = harness.render();
    assert!(html.contains("Password is required"), "missing error in {html}");
    assert!(!html.contains("navigated to"), "unexpected navigation in {html}");
    assert_eq!(harness.repo.get_item(SessionKey::IsLoggedIn).unwrap(), None);
}

#[tokio::test(flavor = "current_thread")]
async fn signup_submit_navigates_to_dashboard() {
    let mut harness = setup_view_harness(ViewKind::SignupAction, &[]);
    harness.settle().await;

    harness.submit_signup(SignupDraft {
        name: "Grace".into(),
        email: "grace@example.com".into(),
        password: "pw".into(),
    });
    harness.drain().await;

    let html = harness.render();
    assert!(html.contains("navigated to /dashboard"), "no navigation in {html}");
    assert_eq!(
        harness.repo.get_item(SessionKey::UserName).unwrap().as_deref(),
        Some("Grace")
    );
}

#[tokio::test(flavor = "current_thread")]
async fn signup_then_dashboard_shows_name() {
    let harness = setup_view_harness(ViewKind::Signup, &[]);
    let draft = SignupDraft {
        name: "Grace".into(),
        email: "grace@example.com".into(),
        password: "pw".into(),
    };
    let route = run_signup(&harness.sessions, draft).await.expect("signup");
    assert_eq!(route, Route::Dashboard {});

    let shared = harness.repo.clone();
    let mut dashboard =
        setup_view_harness_with_repo(ViewKind::Dashboard, shared.clone(), Arc::new(shared));
    dashboard.settle().await;
    let html = dashboard.render();
    assert!(html.contains("Welcome back, Grace!"), "missing name in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn logout_action_clears_everything_and_targets_landing() {
    let harness = setup_view_harness(
        ViewKind::Dashboard,
        &[
            (SessionKey::IsLoggedIn, "true"),
            (SessionKey::UserName, "Ada"),
            (SessionKey::UserEmail, "ada@example.com"),
        ],
    );
    let route = run_logout(&harness.sessions).await.expect("logout");
    assert_eq!(route, Route::Landing {});
    for key in SessionKey::ALL {
        assert_eq!(harness.repo.get_item(key).unwrap(), None);
    }
}

struct FailingRepo;

#[async_trait::async_trait]
impl SessionRepository for FailingRepo {
    async fn load_session(&self) -> Result<SessionRecord, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn save_session(&self, _record: &SessionRecord) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn clear_session(&self) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_renders_error_state_on_storage_failure() {
    let mut harness = setup_view_harness_with_repo(
        ViewKind::Dashboard,
        InMemoryRepository::new(),
        Arc::new(FailingRepo),
    );
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(!html.contains("My Courses"), "protected content in {html}");

    let err = run_logout(&harness.sessions).await.unwrap_err();
    assert_eq!(err, ViewError::Unknown);
}
