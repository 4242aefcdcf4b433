use hyper::client::connect::Connect;
use serde::Serialize;
use thiserror::Error;

use crate::{
    catalog::{Catalog, CatalogError, Notification},
    course::{Course, CourseId},
    fallback::FallbackExt,
    model::{Conflicts, Prerequisites, User},
    remote::{RemoteClient, RemoteError},
    session::{StoreError, Token, TokenStore},
};

/// One student's session: the catalog plus the backend it is optionally mirrored to.
///
/// Catalog changes are validated locally first, then sent to the backend, and applied locally
/// only once the backend accepted them. Without a configured backend the local change is applied
/// directly.
#[derive(Debug)]
pub struct Portal<C, S> {
    catalog: Catalog,
    remote: RemoteClient<C>,
    store: S,
    semester: Option<String>,
}

impl<C, S> Portal<C, S> {
    /// Starts from the seeded catalog.
    pub fn new(remote: RemoteClient<C>, store: S) -> Self {
        Self::with_catalog(Catalog::seeded(), remote, store)
    }

    pub fn with_catalog(catalog: Catalog, remote: RemoteClient<C>, store: S) -> Self {
        Self {
            catalog,
            remote,
            store,
            semester: None,
        }
    }

    /// Semester asked for when refreshing the available courses (the current one if unset).
    pub fn set_semester(&mut self, semester: Option<String>) {
        self.semester = semester;
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn remote(&self) -> &RemoteClient<C> {
        &self.remote
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Course> + 'a {
        self.catalog.search(query)
    }

    fn resolve(&self, code: &str) -> Result<CourseId, PortalError> {
        self.catalog
            .find_by_code(code)
            .map(|course| course.id.clone())
            .ok_or_else(|| PortalError::UnknownCourse(code.to_owned()))
    }
}

impl<C, S> Portal<C, S>
where
    C: Connect + Clone + Send + Sync + 'static,
    S: TokenStore,
{
    /// Replaces the seeded catalog with the backend's lists.
    ///
    /// Both lists must arrive, otherwise the current catalog is kept. Returns whether anything
    /// was replaced.
    pub async fn refresh(&mut self) -> bool {
        let fetched = futures::try_join!(
            self.remote.enrolled_courses(),
            self.remote.available_courses(self.semester.as_deref()),
        );

        match fetched {
            Ok((enrolled, available)) => {
                tracing::debug!(
                    enrolled = enrolled.len(),
                    available = available.len(),
                    "replacing catalog with backend lists"
                );
                self.catalog.replace(enrolled, available);
                true
            }
            Err(RemoteError::NotConfigured) => false,
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch courses, keeping local catalog");
                false
            }
        }
    }

    /// Enrolls in the course with the given code.
    ///
    /// A full course is refused before anything is sent. A backend failure leaves the catalog
    /// unchanged.
    pub async fn enroll(&mut self, code: &str) -> Result<Notification, PortalError> {
        let id = self.resolve(code)?;
        self.catalog.check_enroll(&id)?;

        match self.remote.enroll_course(&id).await {
            Ok(_) | Err(RemoteError::NotConfigured) => {}
            Err(err) => return Err(PortalError::Rejected { code: code.to_owned(), source: err }),
        }

        Ok(self.catalog.enroll(&id)?)
    }

    /// Drops the course with the given code. A backend failure leaves the catalog unchanged.
    pub async fn drop(&mut self, code: &str) -> Result<Notification, PortalError> {
        let id = self.resolve(code)?;
        self.catalog.check_drop(&id)?;

        match self.remote.drop_course(&id).await {
            Ok(_) | Err(RemoteError::NotConfigured) => {}
            Err(err) => return Err(PortalError::Rejected { code: code.to_owned(), source: err }),
        }

        Ok(self.catalog.drop(&id)?)
    }

    /// Prerequisite and conflict checks for a course, passing whenever the backend can't answer.
    pub async fn check(&self, code: &str) -> Result<EnrollCheck, PortalError> {
        let id = self.resolve(code)?;
        let (prerequisites, conflicts) = futures::join!(
            self.remote.check_prerequisites(&id),
            self.remote.check_conflicts(&id),
        );

        Ok(EnrollCheck {
            course: id,
            prerequisites: prerequisites.or_fallback(),
            conflicts: conflicts.or_fallback(),
        })
    }

    /// Signs in and persists the token.
    ///
    /// Any credentials are accepted when the backend can't be reached: a mock token is minted and
    /// the demo student is returned.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<User, PortalError> {
        let (token, user) = match self.remote.login(email, password).await {
            Ok(response) => (Token::new(response.token), response.user),
            Err(err) => {
                if !err.is_not_configured() {
                    tracing::warn!(error = %err, "login failed, signing in with a mock token");
                }
                (Token::mock(), User::mock(email))
            }
        };

        self.store.save(Some(&token))?;
        self.remote.session_mut().set_token(token);
        Ok(user)
    }

    /// Signs out locally whether or not the backend acknowledged it.
    pub async fn logout(&mut self) -> Result<(), PortalError> {
        if let Err(err) = self.remote.logout().await {
            tracing::debug!(error = %err, "ignoring failed logout request");
        }

        self.remote.session_mut().clear();
        self.store.save(None)?;
        Ok(())
    }

    pub async fn current_user(&self) -> User {
        self.remote.current_user().await.or_fallback()
    }
}

/// Outcome of the pre-enrollment checks for a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollCheck {
    pub course: CourseId,
    pub prerequisites: Prerequisites,
    pub conflicts: Conflicts,
}

impl EnrollCheck {
    pub fn passed(&self) -> bool {
        self.prerequisites.met && !self.conflicts.has_conflict
    }
}

/// Represents errors that can occur acting on a [`Portal`].
#[derive(Debug, Error)]
pub enum PortalError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// The backend refused or failed a change, so nothing was applied locally.
    #[error("could not update {code}: {source}")]
    Rejected {
        code: String,
        #[source]
        source: RemoteError,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("no course with code `{0}` in the catalog")]
    UnknownCourse(String),
}

impl PortalError {
    /// Message to show the user for this failure.
    pub fn notification(&self) -> Notification {
        match self {
            PortalError::Catalog(err) => err.notification(),
            other => Notification::error(other.to_string()),
        }
    }
}
