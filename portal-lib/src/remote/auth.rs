use hyper::{client::connect::Connect, Method};
use serde_json::Value;

use super::{RemoteClient, RemoteError};
use crate::model::{Credentials, LoginResponse, User};

impl<C> RemoteClient<C>
where
    C: Connect + Clone + Send + Sync + 'static,
{
    /// Exchanges credentials for a token.
    ///
    /// The session is left untouched; storing the returned token is up to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, RemoteError> {
        self.send_json(Method::POST, "/auth/login", &Credentials { email, password })
            .await
    }

    pub async fn logout(&self) -> Result<Value, RemoteError> {
        self.post_empty("/auth/logout").await
    }

    pub async fn current_user(&self) -> Result<User, RemoteError> {
        self.get("/auth/me").await
    }
}
