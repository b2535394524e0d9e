use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;
pub type SignResult<T> = std::result::Result<T, SignError>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid credentials : {0}")]
    Credential(#[from] CredentialError),
    #[error("query fields could not be empty")]
    MissingParameters,
    #[error("invalid endpoint URL : {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("OAuth sign failed : {0}")]
    Signer(#[from] SignError),
    #[error("request failed : {0}")]
    Transport(#[from] TransportError),
    #[error("response is not a valid JSON : {0}")]
    ResponseDecode(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignError {
    #[error("parameter {0} is specified both as an oauth parameter and as a query field")]
    DuplicateParameter(String),
    #[error("signing key has an invalid length")]
    InvalidKeyLength,
    #[error("authorization header could not be built from {0}")]
    InvalidHeaderValue(String),
}

/// Failure reported by a [`Transport`](crate::Transport).
///
/// The source error is kept as is, so callers can downcast it back to the
/// concrete transport error.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct TransportError(Box<dyn std::error::Error + Send + Sync + 'static>);

impl TransportError {
    pub fn new<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        TransportError(err.into())
    }

    pub fn get_ref(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.0.as_ref()
    }

    pub fn into_inner(self) -> Box<dyn std::error::Error + Send + Sync + 'static> {
        self.0
    }
}

#[cfg(feature = "blocking")]
impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::new(err)
    }
}
