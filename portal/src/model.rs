use portal_lib::{Catalog, Course, Notification, Summary};
use serde::Serialize;

/// What the CLI prints after showing or changing the catalog.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub summary: Summary,
    pub enrolled: Vec<CourseRow>,
    pub available: Vec<CourseRow>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notifications: Vec<Notification>,
}

impl CatalogView {
    pub fn new<'a>(
        catalog: &'a Catalog,
        available: impl IntoIterator<Item = &'a Course>,
        notifications: Vec<Notification>,
    ) -> Self {
        CatalogView {
            summary: catalog.summary(),
            enrolled: catalog.enrolled().iter().map(CourseRow::from).collect(),
            available: available.into_iter().map(CourseRow::from).collect(),
            notifications,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CourseRow {
    pub code: String,
    pub name: String,
    pub professor: String,
    pub credits: u32,
    pub schedule: String,
    pub location: String,
    /// Seats taken out of capacity (e.g. 22/30).
    pub seats: String,
    pub status: String,
}

impl From<&Course> for CourseRow {
    fn from(course: &Course) -> Self {
        CourseRow {
            code: course.code.clone(),
            name: course.name.clone(),
            professor: course.professor.clone(),
            credits: course.credits,
            schedule: course.schedule.clone(),
            location: course.location.clone(),
            seats: format!("{}/{}", course.enrolled, course.capacity),
            status: course.status.to_string(),
        }
    }
}
