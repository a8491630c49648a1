mod achievement;
mod course;
mod credentials;
mod marketing;
mod session;

pub use achievement::Achievement;
pub use course::{Course, CourseError, CourseId, CourseStatus, Progress};
pub use credentials::{Credentials, LoginDraft, LoginError, SignupDraft};
pub use marketing::{DashboardStats, Feature, Stat};
pub use session::{DEFAULT_USER_NAME, LOGGED_IN_VALUE, SessionKey, SessionRecord};
