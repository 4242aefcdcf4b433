//! HTTP access to the portal backend.
//!
//! Every operation makes a single attempt and reports the outcome as a [`Result`]. When no base
//! URL is configured nothing is sent and [`RemoteError::NotConfigured`] is returned, which callers
//! usually resolve with [`FallbackExt`](crate::fallback::FallbackExt).

mod affairs;
mod attendance;
mod auth;
mod courses;
mod faculty;
mod insights;

use std::env;

use hyper::{
    body,
    client::{connect::Connect, HttpConnector},
    header, http::request, Body, Client, Method, Request, StatusCode, Uri,
};
#[cfg(feature = "rustls")]
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use percent_encoding::{utf8_percent_encode, AsciiSet, PercentEncode, NON_ALPHANUMERIC};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::session::Session;

/// Environment variable holding the backend base URL.
pub const BASE_URL_VAR: &str = "PORTAL_API_BASE_URL";

const USER_AGENT: &str = concat!("portal/", env!("CARGO_PKG_VERSION"));
const JSON: &str = "application/json";

// Everything but the RFC 3986 unreserved characters is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Escapes a value for use as a single path segment or query value.
pub(crate) fn encode(value: &str) -> PercentEncode<'_> {
    utf8_percent_encode(value, COMPONENT)
}

/// The semester to ask for, where a missing or empty one means the current semester.
pub(crate) fn semester_or_current(semester: Option<&str>) -> &str {
    semester.filter(|semester| !semester.is_empty()).unwrap_or("current")
}

/// Where the backend lives, if anywhere.
///
/// Running without a base URL is a normal mode: every call resolves to
/// [`RemoteError::NotConfigured`] without touching the network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteConfig {
    base_url: Option<String>,
}

impl RemoteConfig {
    /// An empty or whitespace-only URL counts as unset.
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base_url: base_url
                .map(|url| url.trim().trim_end_matches('/').to_owned())
                .filter(|url| !url.is_empty()),
        }
    }

    /// Configuration read from [`BASE_URL_VAR`].
    pub fn from_env() -> Self {
        Self::new(env::var(BASE_URL_VAR).ok())
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct RemoteClient<C> {
    client: Client<C, Body>,
    config: RemoteConfig,
    session: Session,
}

impl<C> RemoteClient<C> {
    pub fn new(client: Client<C, Body>, config: RemoteConfig, session: Session) -> Self {
        Self {
            client,
            config,
            session,
        }
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }
}

impl RemoteClient<HttpConnector> {
    /// Client speaking plain HTTP only.
    pub fn http(config: RemoteConfig, session: Session) -> Self {
        Self::new(Client::new(), config, session)
    }
}

#[cfg(feature = "rustls")]
impl RemoteClient<HttpsConnector<HttpConnector>> {
    /// Client accepting both `https://` and `http://` base URLs.
    pub fn https(config: RemoteConfig, session: Session) -> Self {
        Self::new(
            Client::builder().build(
                HttpsConnectorBuilder::new()
                    .with_native_roots()
                    .https_or_http()
                    .enable_http1()
                    .build(),
            ),
            config,
            session,
        )
    }
}

impl<C> RemoteClient<C>
where
    C: Connect + Clone + Send + Sync + 'static,
{
    pub(crate) async fn get<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, RemoteError> {
        let request = self
            .builder(Method::GET, endpoint)?
            .header(header::CONTENT_TYPE, JSON)
            .body(Body::empty())?;
        self.send(request).await
    }

    pub(crate) async fn post_empty<R: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<R, RemoteError> {
        let request = self
            .builder(Method::POST, endpoint)?
            .header(header::CONTENT_TYPE, JSON)
            .body(Body::empty())?;
        self.send(request).await
    }

    pub(crate) async fn send_json<B, R>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
    ) -> Result<R, RemoteError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let builder = self.builder(method, endpoint)?;
        let request = builder
            .header(header::CONTENT_TYPE, JSON)
            .body(Body::from(serde_json::to_vec(body)?))?;
        self.send(request).await
    }

    pub(crate) async fn send_raw<R: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<R, RemoteError> {
        let request = self
            .builder(method, endpoint)?
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(bytes))?;
        self.send(request).await
    }

    fn builder(&self, method: Method, endpoint: &str) -> Result<request::Builder, RemoteError> {
        let base_url = self.config.base_url().ok_or(RemoteError::NotConfigured)?;
        let uri: Uri = format!("{base_url}{endpoint}").parse()?;

        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::USER_AGENT, USER_AGENT);
        Ok(match self.session.token() {
            Some(token) => builder.header(header::AUTHORIZATION, token.to_string_bearer()),
            None => builder,
        })
    }

    async fn send<R: DeserializeOwned>(&self, request: Request<Body>) -> Result<R, RemoteError> {
        tracing::debug!(method = %request.method(), uri = %request.uri(), "sending request");

        let response = self.client.request(request).await?;
        let status = response.status();
        let bytes = body::to_bytes(response.into_body()).await?;

        if !status.is_success() {
            return Err(RemoteError::Status {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        // Endpoints acknowledging a write may answer with an empty body.
        if bytes.is_empty() {
            Ok(serde_json::from_value(Value::Null)?)
        } else {
            Ok(serde_json::from_slice(&bytes)?)
        }
    }
}

/// Represents errors that can occur talking to the portal backend.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// No base URL is configured, so no request was made.
    #[error("no API base URL is configured")]
    NotConfigured,
    /// The base URL and endpoint do not form a valid URI.
    #[error("the request URI is invalid")]
    InvalidUri(#[from] hyper::http::uri::InvalidUri),
    /// An argument to build the HTTP request was invalid.
    /// See more [here](https://docs.rs/http/0.2.8/http/request/struct.Builder.html#errors)
    #[error("an argument while building an HTTP request was invalid")]
    MalformedHttpArgs(#[from] hyper::http::Error),
    /// Failed to send the HTTP request or read its response.
    #[error("failed to send HTTP request")]
    HttpRequestFailed(#[from] hyper::Error),
    /// The backend answered with a non-2xx status.
    #[error("API Error {}: {body}", status.as_u16())]
    Status { status: StatusCode, body: String },
    /// The request or response body is not the expected JSON.
    #[error("could not encode or decode a JSON body")]
    MalformedBody(#[from] serde_json::Error),
}

impl RemoteError {
    pub fn is_not_configured(&self) -> bool {
        matches!(self, RemoteError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_base_url_is_unset() {
        assert!(!RemoteConfig::new(None).is_configured());
        assert!(!RemoteConfig::new(Some("  ".to_owned())).is_configured());
        assert_eq!(
            RemoteConfig::new(Some("http://localhost:8080/api/".to_owned())).base_url(),
            Some("http://localhost:8080/api")
        );
    }

    #[test]
    fn components_are_escaped() {
        assert_eq!(encode("fall 2024").to_string(), "fall%202024");
        assert_eq!(encode("a&b#c/d").to_string(), "a%26b%23c%2Fd");
        assert_eq!(encode("STU-2024_001.x~").to_string(), "STU-2024_001.x~");
    }

    #[test]
    fn empty_semester_is_current() {
        assert_eq!(semester_or_current(None), "current");
        assert_eq!(semester_or_current(Some("")), "current");
        assert_eq!(semester_or_current(Some("fall2024")), "fall2024");
    }
}
