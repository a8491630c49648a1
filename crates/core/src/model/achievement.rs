use serde::Serialize;

/// A learning milestone shown on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub name: &'static str,
    pub earned: bool,
}
