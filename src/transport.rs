use crate::{SignedRequest, TransportError};

/// Minimal HTTP seam the API client sends its signed requests through.
///
/// Implementations own sockets, TLS, timeouts and retries. The call is
/// synchronous and returns the raw response body.
pub trait Transport {
    fn get(&self, request: &SignedRequest) -> Result<String, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, request: &SignedRequest) -> Result<String, TransportError> {
        (**self).get(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, request: &SignedRequest) -> Result<String, TransportError> {
        (**self).get(request)
    }
}

#[cfg(feature = "blocking")]
pub use self::blocking::ReqwestTransport;

#[cfg(feature = "blocking")]
mod blocking {
    use reqwest::blocking::Client as ReqwestClient;

    use super::Transport;
    use crate::{SignedRequest, TransportError};

    /// [`Transport`] backed by `reqwest::blocking::Client`.
    ///
    /// Non-success statuses are reported as errors.
    #[derive(Debug, Clone, Default)]
    pub struct ReqwestTransport {
        inner: ReqwestClient,
    }

    impl ReqwestTransport {
        /// Constructs a new `ReqwestTransport`.
        ///
        /// This method calls reqwest::blocking::Client::new() internally.
        pub fn new() -> Self {
            ReqwestTransport {
                inner: ReqwestClient::new(),
            }
        }

        /// Constructs a new `ReqwestTransport` with specifying inner client,
        /// e.g. one configured with timeouts or a user agent.
        pub fn with_client(client: ReqwestClient) -> Self {
            ReqwestTransport { inner: client }
        }
    }

    impl From<ReqwestClient> for ReqwestTransport {
        fn from(client: ReqwestClient) -> Self {
            ReqwestTransport::with_client(client)
        }
    }

    impl Transport for ReqwestTransport {
        fn get(&self, request: &SignedRequest) -> Result<String, TransportError> {
            let body = self
                .inner
                .request(request.method(), request.url().clone())
                .query(request.query())
                .headers(request.headers().clone())
                .send()?
                .error_for_status()?
                .text()?;
            Ok(body)
        }
    }

}
