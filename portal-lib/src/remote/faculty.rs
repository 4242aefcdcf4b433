use hyper::{client::connect::Connect, Method};
use serde_json::Value;

use super::{encode, RemoteClient, RemoteError};
use crate::{
    course::CourseId,
    model::{GradeAnalytics, GradeEntry, Material},
};

impl<C> RemoteClient<C>
where
    C: Connect + Clone + Send + Sync + 'static,
{
    /// Uploads course material as a `multipart/form-data` body with `file` and `type` parts.
    pub async fn upload_material(
        &self,
        course: &CourseId,
        material: &Material,
    ) -> Result<Value, RemoteError> {
        let boundary = format!(
            "portal-{:x}",
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        );
        self.send_raw(
            Method::POST,
            &format!("/faculty/courses/{}/materials", encode(course.as_str())),
            &format!("multipart/form-data; boundary={boundary}"),
            multipart_body(&boundary, material),
        )
        .await
    }

    pub async fn grades(&self, course: &CourseId) -> Result<Vec<GradeEntry>, RemoteError> {
        self.get(&format!("/faculty/courses/{}/grades", encode(course.as_str())))
            .await
    }

    pub async fn update_grade(
        &self,
        course: &CourseId,
        student_id: &str,
        grades: &GradeEntry,
    ) -> Result<Value, RemoteError> {
        self.send_json(
            Method::PUT,
            &format!(
                "/faculty/courses/{}/grades/{}",
                encode(course.as_str()),
                encode(student_id)
            ),
            grades,
        )
        .await
    }

    pub async fn grade_analytics(&self, course: &CourseId) -> Result<GradeAnalytics, RemoteError> {
        self.get(&format!(
            "/faculty/courses/{}/analytics",
            encode(course.as_str())
        ))
        .await
    }
}

fn multipart_body(boundary: &str, material: &Material) -> Vec<u8> {
    let mut body = Vec::with_capacity(material.bytes.len() + 256);
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
            material.file_name.replace('"', "'"),
            material.content_type
        )
        .as_bytes(),
    );
    body.extend_from_slice(&material.bytes);
    body.extend_from_slice(
        format!(
            "\r\n--{boundary}\r\nContent-Disposition: form-data; name=\"type\"\r\n\r\n{}\r\n--{boundary}--\r\n",
            material.kind
        )
        .as_bytes(),
    );
    body
}
