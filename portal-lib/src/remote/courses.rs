use hyper::{client::connect::Connect, Method};
use serde::Serialize;
use serde_json::Value;

use super::{encode, semester_or_current, RemoteClient, RemoteError};
use crate::{
    course::{Course, CourseId},
    model::{Conflicts, Prerequisites},
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EnrollBody<'a> {
    course_id: &'a CourseId,
}

impl<C> RemoteClient<C>
where
    C: Connect + Clone + Send + Sync + 'static,
{
    /// Catalog courses open for enrollment in `semester` (the current one by default).
    pub async fn available_courses(
        &self,
        semester: Option<&str>,
    ) -> Result<Vec<Course>, RemoteError> {
        self.get(&format!(
            "/courses/available?semester={}",
            encode(semester_or_current(semester))
        ))
        .await
    }

    pub async fn enrolled_courses(&self) -> Result<Vec<Course>, RemoteError> {
        self.get("/courses/enrolled").await
    }

    pub async fn enroll_course(&self, id: &CourseId) -> Result<Value, RemoteError> {
        self.send_json(Method::POST, "/courses/enroll", &EnrollBody { course_id: id })
            .await
    }

    pub async fn drop_course(&self, id: &CourseId) -> Result<Value, RemoteError> {
        self.post_empty(&format!("/courses/{}/drop", encode(id.as_str())))
            .await
    }

    pub async fn check_prerequisites(&self, id: &CourseId) -> Result<Prerequisites, RemoteError> {
        self.get(&format!("/courses/{}/prerequisites", encode(id.as_str())))
            .await
    }

    pub async fn check_conflicts(&self, id: &CourseId) -> Result<Conflicts, RemoteError> {
        self.get(&format!("/courses/{}/conflicts", encode(id.as_str())))
            .await
    }
}
