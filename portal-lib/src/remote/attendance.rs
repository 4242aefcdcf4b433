use hyper::{client::connect::Connect, Method};
use serde::Serialize;
use serde_json::Value;

use super::{encode, RemoteClient, RemoteError};
use crate::{
    course::CourseId,
    model::{AttendanceRecord, QrCode},
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateBody<'a> {
    lecture_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecordBody<'a> {
    qr_code: &'a str,
}

impl<C> RemoteClient<C>
where
    C: Connect + Clone + Send + Sync + 'static,
{
    pub async fn generate_qr(&self, lecture_id: &str) -> Result<QrCode, RemoteError> {
        self.send_json(
            Method::POST,
            "/attendance/qr/generate",
            &GenerateBody { lecture_id },
        )
        .await
    }

    pub async fn record_attendance(&self, qr_code: &str) -> Result<Value, RemoteError> {
        self.send_json(Method::POST, "/attendance/record", &RecordBody { qr_code })
            .await
    }

    /// Attendance of the current user, optionally for a single course.
    pub async fn attendance_history(
        &self,
        course: Option<&CourseId>,
    ) -> Result<Vec<AttendanceRecord>, RemoteError> {
        match course {
            Some(id) => {
                self.get(&format!(
                    "/attendance/history?courseId={}",
                    encode(id.as_str())
                ))
                .await
            }
            None => self.get("/attendance/history").await,
        }
    }
}
