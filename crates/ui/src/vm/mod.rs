mod dashboard_vm;
mod number_fmt;

pub use dashboard_vm::{
    AchievementVm, CourseCardVm, DashboardVm, StatCardVm, map_dashboard,
};
pub use number_fmt::{format_count, format_rating};
