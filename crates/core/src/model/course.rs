use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("progress must be between 0 and 100, got {0}")]
    ProgressOutOfRange(u8),
}

/// Identifier of a catalog course.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CourseId(u32);

impl CourseId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Completion percentage, always within `0..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Progress(u8);

impl Progress {
    pub const MAX: u8 = 100;

    /// # Errors
    ///
    /// Returns `CourseError::ProgressOutOfRange` for values above 100.
    pub fn new(percent: u8) -> Result<Self, CourseError> {
        if percent > Self::MAX {
            return Err(CourseError::ProgressOutOfRange(percent));
        }
        Ok(Self(percent))
    }

    /// Saturating constructor for literals.
    #[must_use]
    pub const fn clamped(percent: u8) -> Self {
        if percent > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(percent)
        }
    }

    #[must_use]
    pub fn percent(&self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn status(&self) -> CourseStatus {
        match self.0 {
            0 => CourseStatus::NotStarted,
            Self::MAX => CourseStatus::Completed,
            _ => CourseStatus::InProgress,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CourseStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl CourseStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

/// A course card on the dashboard. Display-only.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Course {
    pub id: CourseId,
    pub title: &'static str,
    pub description: &'static str,
    pub progress: Progress,
    pub duration: &'static str,
    pub students: u32,
    pub rating: f32,
}

impl Course {
    #[must_use]
    pub fn status(&self) -> CourseStatus {
        self.progress.status()
    }
}
