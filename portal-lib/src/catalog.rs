//! The enrolled and available course sets and the transitions between them.

use serde::Serialize;
use thiserror::Error;

use crate::{
    course::{Course, CourseId, Status},
    seed,
};

/// A student's view of the catalog for one session.
///
/// Both sets keep insertion order. A course id is never present in both at once.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    enrolled: Vec<Course>,
    available: Vec<Course>,
}

impl Catalog {
    pub fn new(enrolled: Vec<Course>, available: Vec<Course>) -> Self {
        let mut catalog = Self::default();
        catalog.replace(enrolled, available);
        catalog
    }

    /// Catalog built from the fixed lists in [`seed`].
    pub fn seeded() -> Self {
        Self::new(seed::enrolled(), seed::available())
    }

    /// Swaps both sets for the given lists.
    ///
    /// Every enrolled record is marked [`Status::Enrolled`] and available records whose id is
    /// already enrolled are skipped.
    pub fn replace(&mut self, enrolled: Vec<Course>, available: Vec<Course>) {
        self.enrolled = enrolled
            .into_iter()
            .map(|course| course.with_status(Status::Enrolled))
            .collect();

        let enrolled = &self.enrolled;
        self.available = available
            .into_iter()
            .filter(|course| !enrolled.iter().any(|other| other.id == course.id))
            .collect();
    }

    pub fn enrolled(&self) -> &[Course] {
        &self.enrolled
    }

    pub fn available(&self) -> &[Course] {
        &self.available
    }

    pub fn find(&self, id: &CourseId) -> Option<&Course> {
        self.enrolled
            .iter()
            .chain(self.available.iter())
            .find(|course| &course.id == id)
    }

    /// Looks a course up by its code, ignoring case.
    pub fn find_by_code(&self, code: &str) -> Option<&Course> {
        self.enrolled
            .iter()
            .chain(self.available.iter())
            .find(|course| course.code.eq_ignore_ascii_case(code))
    }

    /// Checks that the course could be enrolled in right now, without changing anything.
    pub fn check_enroll(&self, id: &CourseId) -> Result<&Course, CatalogError> {
        let course = self
            .available
            .iter()
            .find(|course| &course.id == id)
            .ok_or_else(|| self.not_available(id))?;

        if course.is_full() {
            return Err(CatalogError::CourseFull {
                code: course.code.clone(),
                name: course.name.clone(),
            });
        }

        Ok(course)
    }

    /// Checks that the course could be dropped right now, without changing anything.
    pub fn check_drop(&self, id: &CourseId) -> Result<&Course, CatalogError> {
        self.enrolled
            .iter()
            .find(|course| &course.id == id)
            .ok_or_else(|| self.not_enrolled(id))
    }

    /// Moves a course from the available set to the end of the enrolled set.
    ///
    /// Fails without touching either set if the course is not available or is full.
    pub fn enroll(&mut self, id: &CourseId) -> Result<Notification, CatalogError> {
        self.check_enroll(id)?;

        let index = self
            .available
            .iter()
            .position(|course| &course.id == id)
            .ok_or_else(|| self.not_available(id))?;
        let course = self.available.remove(index).with_status(Status::Enrolled);

        tracing::info!(code = %course.code, credits = course.credits, "enrolled in course");
        let notification = Notification::success(format!("Enrolled in {}", course.name));
        self.enrolled.push(course);

        Ok(notification)
    }

    /// Moves a course from the enrolled set to the end of the available set.
    ///
    /// The course comes back as [`Status::Available`] even if it was full before.
    pub fn drop(&mut self, id: &CourseId) -> Result<Notification, CatalogError> {
        let index = self
            .enrolled
            .iter()
            .position(|course| &course.id == id)
            .ok_or_else(|| self.not_enrolled(id))?;
        let course = self.enrolled.remove(index).with_status(Status::Available);

        tracing::info!(code = %course.code, credits = course.credits, "dropped course");
        let notification = Notification::success(format!("Dropped {}", course.name));
        self.available.push(course);

        Ok(notification)
    }

    /// Available courses whose name or code contains `query`, ignoring case.
    ///
    /// An empty query yields the whole available set.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Course> + 'a {
        let query = query.to_lowercase();
        self.available
            .iter()
            .filter(move |course| course.matches(&query))
    }

    /// Sum of credits over the enrolled set.
    pub fn total_credits(&self) -> u32 {
        self.enrolled.iter().map(|course| course.credits).sum()
    }

    pub fn enrolled_count(&self) -> usize {
        self.enrolled.len()
    }

    /// Number of available courses that are not full.
    pub fn open_count(&self) -> usize {
        self.available
            .iter()
            .filter(|course| !course.is_full())
            .count()
    }

    fn not_available(&self, id: &CourseId) -> CatalogError {
        CatalogError::NotAvailable {
            id: id.clone(),
            code: self.find(id).map(|course| course.code.clone()),
        }
    }

    fn not_enrolled(&self, id: &CourseId) -> CatalogError {
        CatalogError::NotEnrolled {
            id: id.clone(),
            code: self.find(id).map(|course| course.code.clone()),
        }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            enrolled_courses: self.enrolled_count(),
            total_credits: self.total_credits(),
            open_courses: self.open_count(),
        }
    }
}

/// Figures shown above the course lists. Always computed from the current sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub enrolled_courses: usize,
    pub total_credits: u32,
    pub open_courses: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Error,
}

/// A transient message for the user describing the outcome of an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}

/// Represents a transition the catalog refused. Nothing was changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The course has reached its capacity.
    #[error("course {code} ({name}) is full")]
    CourseFull { code: String, name: String },
    /// The course is not in the available set. `code` is known if the course is elsewhere in
    /// the catalog.
    #[error("course `{}` is not available for enrollment", label(.id, .code))]
    NotAvailable { id: CourseId, code: Option<String> },
    /// The course is not in the enrolled set.
    #[error("course `{}` is not enrolled", label(.id, .code))]
    NotEnrolled { id: CourseId, code: Option<String> },
}

fn label<'a>(id: &'a CourseId, code: &'a Option<String>) -> &'a str {
    code.as_deref().unwrap_or(id.as_str())
}

impl CatalogError {
    /// Message to show the user for this failure.
    pub fn notification(&self) -> Notification {
        match self {
            CatalogError::CourseFull { .. } => Notification::error("This course is full"),
            other => Notification::error(other.to_string()),
        }
    }
}
