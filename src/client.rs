use url::Url;

use crate::header::build_auth_header;
use crate::response::{self, ApiResponse};
use crate::{Error, OAuthParameters, QueryFields, Result, Secrets, SignedRequest, Transport};

/// Base path of the v1.1 REST API.
pub const API_BASE_URL: &str = "https://api.twitter.com/1.1/";

const USER_TIMELINE_PATH: &str = "statuses/user_timeline.json";
const STATUSES_LOOKUP_PATH: &str = "statuses/lookup.json";

/// Client for the two status endpoints, signing every request with the
/// credentials it was built with.
///
/// Query fields are set before a call and used by every following call
/// until replaced. The client is not meant to be shared between threads
/// without external synchronization.
#[derive(Debug)]
pub struct TwitterApi<T> {
    secrets: Secrets,
    transport: T,
    base_url: Url,
    oauth_parameters: OAuthParameters<'static>,
    query_fields: QueryFields,
}

impl<T> TwitterApi<T>
where
    T: Transport,
{
    /// Constructs a new `TwitterApi`.
    ///
    /// # Errors
    ///
    /// This method fails with `Error::Credential` whenever one of the four
    /// credentials is empty.
    pub fn new<TKey, TSecret, TToken, TTokenSecret>(
        consumer_key: TKey,
        consumer_secret: TSecret,
        access_token: TToken,
        access_token_secret: TTokenSecret,
        transport: T,
    ) -> Result<Self>
    where
        TKey: Into<String>,
        TSecret: Into<String>,
        TToken: Into<String>,
        TTokenSecret: Into<String>,
    {
        let secrets = Secrets::new(
            consumer_key,
            consumer_secret,
            access_token,
            access_token_secret,
        )?;
        Self::with_secrets(secrets, transport)
    }

    /// Constructs a new `TwitterApi` from already validated credentials.
    pub fn with_secrets(secrets: Secrets, transport: T) -> Result<Self> {
        Ok(TwitterApi {
            secrets,
            transport,
            base_url: Url::parse(API_BASE_URL)?,
            oauth_parameters: OAuthParameters::new(),
            query_fields: QueryFields::new(),
        })
    }

    /// Replace the API base path, e.g. to point at a test server.
    ///
    /// Endpoint paths are joined onto it, so it should end with `/`.
    pub fn with_base_url(self, base_url: Url) -> Self {
        TwitterApi { base_url, ..self }
    }

    /// Pin the nonce and/or timestamp used for signing.
    pub fn with_oauth_parameters(self, parameters: OAuthParameters<'_>) -> Self {
        TwitterApi {
            oauth_parameters: parameters.into_owned(),
            ..self
        }
    }

    pub fn set_query_fields<F: Into<QueryFields>>(&mut self, fields: F) -> &mut Self {
        self.query_fields = fields.into();
        self
    }

    pub fn query_fields(&self) -> &QueryFields {
        &self.query_fields
    }

    pub fn secrets(&self) -> &Secrets {
        &self.secrets
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch `statuses/user_timeline.json` with the configured query fields.
    ///
    /// # Errors
    ///
    /// See [`TwitterApi::sign_request`]; transport and decode failures are
    /// returned as `Error::Transport` and `Error::ResponseDecode`.
    pub fn fetch_timeline(&self) -> Result<ApiResponse> {
        self.perform_request(USER_TIMELINE_PATH)
    }

    /// Fetch `statuses/lookup.json` with the configured query fields.
    pub fn lookup_statuses(&self) -> Result<ApiResponse> {
        self.perform_request(STATUSES_LOOKUP_PATH)
    }

    /// Sign a GET request to `url` with the configured query fields.
    ///
    /// # Errors
    ///
    /// Fails with `Error::MissingParameters` when no query field is set, and
    /// with `Error::Signer` when a query field collides with an `oauth_*` key.
    pub fn sign_request(&self, url: &Url) -> Result<SignedRequest> {
        if self.query_fields.is_empty() {
            return Err(Error::MissingParameters);
        }
        let authorization = build_auth_header(
            url,
            &self.query_fields,
            &self.secrets,
            &self.oauth_parameters,
        )?;
        Ok(SignedRequest::get(
            url.clone(),
            self.query_fields.clone(),
            &authorization,
        )?)
    }

    fn perform_request(&self, path: &str) -> Result<ApiResponse> {
        let url = self.base_url.join(path)?;
        let request = self.sign_request(&url)?;
        tracing::debug!(
            url = %request.url(),
            query_fields = request.query().len(),
            "sending signed request"
        );

        let body = self.transport.get(&request)?;
        response::decode(&body)
    }
}
