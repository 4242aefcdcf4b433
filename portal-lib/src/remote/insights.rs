use hyper::client::connect::Connect;

use super::{encode, semester_or_current, RemoteClient, RemoteError};
use crate::model::{AcademicAlert, Recommendation, Scenario, TimetableSlot};

impl<C> RemoteClient<C>
where
    C: Connect + Clone + Send + Sync + 'static,
{
    pub async fn recommendations(
        &self,
        scenario: Scenario,
    ) -> Result<Vec<Recommendation>, RemoteError> {
        self.get(&format!("/recommendations?scenario={scenario}"))
            .await
    }

    pub async fn academic_alerts(&self) -> Result<Vec<AcademicAlert>, RemoteError> {
        self.get("/recommendations/alerts").await
    }

    /// Weekly timetable for `semester` (the current one by default).
    pub async fn timetable(
        &self,
        semester: Option<&str>,
    ) -> Result<Vec<TimetableSlot>, RemoteError> {
        self.get(&format!(
            "/timetable?semester={}",
            encode(semester_or_current(semester))
        ))
        .await
    }
}
