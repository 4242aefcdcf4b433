//! Bodies exchanged with the portal backend.
//!
//! Responses are trusted to have these shapes; nothing beyond deserialization is validated.

use std::fmt::Display;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Faculty,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prerequisites {
    pub met: bool,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflicts {
    pub has_conflict: bool,
    pub conflicts_with: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCode {
    pub qr_code: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Present,
    Absent,
    Late,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub course: String,
    pub status: Presence,
}

/// Weight, in percent, of each graded component of a course.
pub const GRADE_WEIGHTS: [(&str, f64); 5] = [
    ("quizzes", 15.0),
    ("assignments", 20.0),
    ("midterm", 25.0),
    ("participation", 10.0),
    ("final", 30.0),
];

/// One student's row in a course gradebook. Missing scores are not graded yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeEntry {
    pub id: String,
    pub name: String,
    pub quizzes: Option<f64>,
    pub assignments: Option<f64>,
    pub midterm: Option<f64>,
    pub participation: Option<f64>,
    #[serde(rename = "final")]
    pub final_exam: Option<f64>,
}

impl GradeEntry {
    fn score(&self, component: &str) -> Option<f64> {
        match component {
            "quizzes" => self.quizzes,
            "assignments" => self.assignments,
            "midterm" => self.midterm,
            "participation" => self.participation,
            "final" => self.final_exam,
            _ => None,
        }
    }

    /// Weighted sum of the graded components, for display.
    ///
    /// `None` until every component has a score.
    pub fn weighted_total(&self) -> Option<f64> {
        GRADE_WEIGHTS
            .iter()
            .map(|(component, weight)| self.score(component).map(|score| score * weight / 100.0))
            .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeAnalytics {
    pub highest: f64,
    pub lowest: f64,
    pub average: f64,
}

/// A file attached to a course by its instructor.
#[derive(Debug, Clone)]
pub struct Material {
    pub file_name: String,
    /// Kind of material (e.g. Slides, Assignment, Notes).
    pub kind: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

/// A request filed with student affairs (data update, medical excuse, withdrawal...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffairsRequest {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub subject: String,
    pub date: NaiveDate,
    pub status: RequestStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct Review<'a> {
    pub decision: Decision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraduationEligibility {
    pub eligible: bool,
    pub completed_credits: u32,
    pub required_credits: u32,
    pub missing_courses: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    ImproveGpa,
    FinishCourses,
}

impl Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Scenario::ImproveGpa => "improve_gpa",
                Scenario::FinishCourses => "finish_courses",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub code: String,
    pub name: String,
    pub credits: u32,
    pub reason: String,
    pub tag: String,
    /// Percentage between 0 and 100.
    pub confidence: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Warning,
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicAlert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub message: String,
}

/// A block in the weekly timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableSlot {
    pub id: String,
    pub code: String,
    pub name: String,
    pub professor: String,
    pub time: String,
    pub location: String,
    pub color: String,
    /// 1 is Monday.
    pub day: u8,
    pub start_hour: f32,
    /// In hours.
    pub duration: f32,
}

/// Free-form fields of a student-affairs request, merged next to its `type`.
pub type RequestData = serde_json::Map<String, Value>;
