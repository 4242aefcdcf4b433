use std::{
    fmt::Display,
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use thiserror::Error;

/// Bearer token handed out by the backend on login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token(Arc<str>);

impl Token {
    pub fn new(token: impl AsRef<str>) -> Self {
        Self(Arc::from(token.as_ref()))
    }

    /// A locally minted token used when no backend accepted the login.
    pub fn mock() -> Self {
        Self::new(format!("mock_token_{}", chrono::Utc::now().timestamp_millis()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn to_string_bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Authentication state attached to every outgoing request.
///
/// Each client owns its own session, so independent sessions never observe each other's token.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<Token>,
}

impl Session {
    pub fn new(token: Option<Token>) -> Self {
        Self { token }
    }

    /// Session restored from whatever token the store kept from a previous run.
    pub fn restore(store: &impl TokenStore) -> Result<Self, StoreError> {
        Ok(Self::new(store.load()?))
    }

    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn set_token(&mut self, token: Token) {
        self.token = Some(token);
    }

    pub fn clear(&mut self) {
        self.token = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Keeps the auth token across runs. Nothing else is persisted.
pub trait TokenStore {
    fn load(&self) -> Result<Option<Token>, StoreError>;

    /// Persists `token`, or forgets the stored one when `None`.
    fn save(&mut self, token: Option<&Token>) -> Result<(), StoreError>;
}

/// Stores the token as plain text in a single file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<Token>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| Token::new(token)))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, token: Option<&Token>) -> Result<(), StoreError> {
        match token {
            Some(token) => fs::write(&self.path, token.as_str())?,
            None => match fs::remove_file(&self.path) {
                Err(err) if err.kind() != io::ErrorKind::NotFound => return Err(err.into()),
                _ => {}
            },
        }

        Ok(())
    }
}

/// Keeps the token in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Option<Token>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<Token>, StoreError> {
        Ok(self.token.clone())
    }

    fn save(&mut self, token: Option<&Token>) -> Result<(), StoreError> {
        self.token = token.cloned();
        Ok(())
    }
}

/// Represents errors that can occur persisting the auth token.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the token file failed.
    #[error("failed to access the token store")]
    Io(#[from] io::Error),
}
