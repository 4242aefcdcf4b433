use hyper::{client::connect::Connect, Method};
use serde_json::Value;

use super::{encode, RemoteClient, RemoteError};
use crate::model::{AffairsRequest, Decision, GraduationEligibility, RequestData, Review};

impl<C> RemoteClient<C>
where
    C: Connect + Clone + Send + Sync + 'static,
{
    /// Files a request of the given type. `data` is sent alongside the `type` field and wins if it
    /// carries its own.
    pub async fn submit_request(
        &self,
        kind: &str,
        mut data: RequestData,
    ) -> Result<Value, RemoteError> {
        data.entry("type")
            .or_insert_with(|| Value::String(kind.to_owned()));
        self.send_json(Method::POST, "/student-affairs/requests", &data)
            .await
    }

    pub async fn requests(&self) -> Result<Vec<AffairsRequest>, RemoteError> {
        self.get("/student-affairs/requests").await
    }

    pub async fn review_request(
        &self,
        request_id: &str,
        decision: Decision,
        notes: Option<&str>,
    ) -> Result<Value, RemoteError> {
        self.send_json(
            Method::POST,
            &format!("/student-affairs/requests/{}/review", encode(request_id)),
            &Review { decision, notes },
        )
        .await
    }

    pub async fn graduation_eligibility(
        &self,
        student_id: &str,
    ) -> Result<GraduationEligibility, RemoteError> {
        self.get(&format!(
            "/student-affairs/graduation/{}",
            encode(student_id)
        ))
        .await
    }
}
