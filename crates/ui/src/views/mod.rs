mod dashboard;
mod gate;
mod landing;
mod login;
mod not_found;
mod signup;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use dashboard::{DashboardView, run_logout};
pub use gate::{GateState, use_session_gate};
pub use landing::LandingView;
pub use login::{LoginView, run_login, use_login_action};
pub use not_found::NotFoundView;
pub use signup::{SignupView, run_signup, use_signup_action};
pub use state::{ViewError, ViewState, view_state_from_resource};
