use std::{fmt::Display, str::FromStr};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Department letters, optional whitespace, then the course number (e.g. "cs 402", "MATH301").
const CODE_FORMAT: &str = r"^\s*([A-Za-z]+)\s*(\d+[A-Za-z]?)\s*$";

/// Unique identifier of a course record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CourseId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Membership status of a course.
///
/// The status is set by whoever supplies the record and is only rewritten when a course moves
/// between the enrolled and available sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Enrolled,
    Available,
    Full,
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Status::Enrolled => "enrolled",
                Status::Available => "available",
                Status::Full => "full",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    /// Short catalog code (e.g. CS401).
    pub code: String,
    pub name: String,
    pub professor: String,
    pub credits: u32,
    /// Free-text meeting times (e.g. "MWF 10:00-11:30 AM").
    pub schedule: String,
    pub location: String,
    /// Seats taken as last reported by the catalog. Display only.
    pub enrolled: u32,
    pub capacity: u32,
    pub status: Status,
    /// Cosmetic tag used by front ends to color the course.
    pub color: String,
}

impl Course {
    /// Creates an available course, marking it [`Status::Full`] if it is already at capacity.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        code: impl Into<String>,
        name: impl Into<String>,
        professor: impl Into<String>,
        credits: u32,
        schedule: impl Into<String>,
        location: impl Into<String>,
        enrolled: u32,
        capacity: u32,
        color: impl Into<String>,
    ) -> Self {
        let mut course = Self {
            id: CourseId::new(id),
            code: code.into(),
            name: name.into(),
            professor: professor.into(),
            credits,
            schedule: schedule.into(),
            location: location.into(),
            enrolled,
            capacity,
            status: Status::Available,
            color: color.into(),
        };
        if course.is_at_capacity() {
            course.status = Status::Full;
        }
        course
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn is_full(&self) -> bool {
        self.status == Status::Full
    }

    /// Whether the reported seat count has reached the capacity.
    ///
    /// This does not affect [`Course::status`], which stays whatever the catalog said.
    pub fn is_at_capacity(&self) -> bool {
        self.enrolled >= self.capacity
    }

    pub(crate) fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query) || self.code.to_lowercase().contains(query)
    }
}

/// A course code in canonical form, as typed by a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CourseCode(String);

impl CourseCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CourseCode {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // TODO: compile the regex once instead of on every parse
        let re = Regex::new(CODE_FORMAT).map_err(|_| ParseCodeError(s.to_owned()))?;
        let captures = re.captures(s).ok_or_else(|| ParseCodeError(s.to_owned()))?;
        Ok(Self(format!(
            "{}{}",
            captures[1].to_ascii_uppercase(),
            captures[2].to_ascii_uppercase()
        )))
    }
}

impl Display for CourseCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error)]
#[error("`{0}` is not a course code, expected letters followed by a number (e.g. CS401)")]
pub struct ParseCodeError(String);
