//! Fixed values standing in for backend answers.
//!
//! Remote operations always report failures. Callers that would rather show mock data than an
//! error resolve the result with [`FallbackExt::or_fallback`].

use chrono::{Duration, Utc};

use crate::{
    model::{
        Conflicts, GradeAnalytics, GraduationEligibility, Prerequisites, QrCode, Role, User,
    },
    remote::RemoteError,
};

/// How long a mock QR code stays valid.
const QR_LIFETIME_SECS: i64 = 300;

/// A value to use when the backend can't provide one.
pub trait Fallback {
    fn fallback() -> Self;
}

impl<T> Fallback for Vec<T> {
    fn fallback() -> Self {
        Vec::new()
    }
}

/// Prerequisite checking is not implemented locally, so everything passes.
impl Fallback for Prerequisites {
    fn fallback() -> Self {
        Prerequisites {
            met: true,
            missing: Vec::new(),
        }
    }
}

/// Conflict detection is not implemented locally, so nothing conflicts.
impl Fallback for Conflicts {
    fn fallback() -> Self {
        Conflicts {
            has_conflict: false,
            conflicts_with: Vec::new(),
        }
    }
}

impl Fallback for GradeAnalytics {
    fn fallback() -> Self {
        GradeAnalytics {
            highest: 95.0,
            lowest: 42.0,
            average: 74.5,
        }
    }
}

impl Fallback for GraduationEligibility {
    fn fallback() -> Self {
        GraduationEligibility {
            eligible: false,
            completed_credits: 105,
            required_credits: 132,
            missing_courses: Vec::new(),
        }
    }
}

impl Fallback for User {
    fn fallback() -> Self {
        User {
            student_id: Some("STU-2024-001".to_owned()),
            ..User::mock("ahmed@edu.com")
        }
    }
}

impl User {
    /// The demo student, signed in under `email`.
    pub fn mock(email: &str) -> Self {
        User {
            id: "1".to_owned(),
            email: email.to_owned(),
            name: "Ahmed Hassan".to_owned(),
            role: Role::Student,
            student_id: None,
        }
    }
}

impl QrCode {
    /// A code for `lecture_id` valid for five minutes from now.
    pub fn mock(lecture_id: &str) -> Self {
        let now = Utc::now();
        QrCode {
            qr_code: format!("QR_{lecture_id}_{}", now.timestamp_millis()),
            expires_at: now + Duration::seconds(QR_LIFETIME_SECS),
        }
    }
}

pub trait FallbackExt<T> {
    /// The successful value, or [`Fallback::fallback`] if the call failed.
    fn or_fallback(self) -> T
    where
        T: Fallback;

    /// The successful value, or the result of `f` if the call failed.
    fn or_fallback_with<F>(self, f: F) -> T
    where
        F: FnOnce() -> T;
}

impl<T> FallbackExt<T> for Result<T, RemoteError> {
    fn or_fallback(self) -> T
    where
        T: Fallback,
    {
        self.or_fallback_with(T::fallback)
    }

    fn or_fallback_with<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Ok(value) => value,
            Err(RemoteError::NotConfigured) => {
                tracing::debug!("no API base URL configured, using mock data");
                f()
            }
            Err(err) => {
                tracing::warn!(error = %err, "remote call failed, using mock data");
                f()
            }
        }
    }
}
