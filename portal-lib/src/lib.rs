//! Course enrollment for a university student portal.
//!
//! A [`Catalog`] holds the enrolled and available course sets, [`RemoteClient`] talks to an
//! optional backend and [`Portal`] ties both to a persisted [`Session`] token.

mod catalog;
mod course;
pub mod fallback;
pub mod model;
mod portal;
pub mod remote;
pub mod seed;
mod session;

pub use catalog::{Catalog, CatalogError, Level, Notification, Summary};
pub use course::{Course, CourseCode, CourseId, ParseCodeError, Status};
pub use fallback::{Fallback, FallbackExt};
pub use portal::{EnrollCheck, Portal, PortalError};
pub use remote::{RemoteClient, RemoteConfig, RemoteError};
pub use session::{FileTokenStore, MemoryTokenStore, Session, StoreError, Token, TokenStore};
