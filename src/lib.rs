/*!
twitter-api-oauth1: fetch JSON from the Twitter v1.1 REST API with
OAuth 1.0a (HMAC-SHA1) signed GET requests.

# Overview

The crate signs each request itself and hands it to a [`Transport`], which
performs the actual HTTP exchange. The bundled [`ReqwestTransport`]
(feature `blocking`, enabled by default) is built on
[reqwest](https://crates.io/crates/reqwest)'s blocking client; any other
HTTP stack can be plugged in by implementing the trait.

# How to use

## Basic usecase - reading a user timeline

```no_run
use twitter_api_oauth1::{ReqwestTransport, TwitterApi};

# fn main() -> twitter_api_oauth1::Result<()> {
// prepare authorization info
let consumer_key = "[CONSUMER_KEY]";
let consumer_secret = "[CONSUMER_SECRET]";
let access_token = "[ACCESS_TOKEN]";
let token_secret = "[TOKEN_SECRET]";

let mut api = TwitterApi::new(
    consumer_key,
    consumer_secret,
    access_token,
    token_secret,
    ReqwestTransport::new(),
)?;

// GET statuses/user_timeline.json?screen_name=twitterapi&count=5
let timeline = api
    .set_query_fields([("screen_name", "twitterapi"), ("count", "5")])
    .fetch_timeline()?;
for status in timeline.as_array().into_iter().flatten() {
    println!("{}", status["text"]);
}

// GET statuses/lookup.json?id=20,432656548536401920
let statuses = api
    .set_query_fields([("id", "20,432656548536401920")])
    .lookup_statuses()?;
println!("{:#}", statuses);
# Ok(())
# }
```

## Signing only

```
use twitter_api_oauth1::{build_auth_header, OAuthParameters, QueryFields, Secrets};
use url::Url;

let secrets = Secrets::new("ck", "cs", "tok", "toks").unwrap();
let url = Url::parse("https://api.twitter.com/1.1/statuses/user_timeline.json").unwrap();
let query = QueryFields::from([("screen_name", "abc")]);
let params = OAuthParameters::new().nonce("n1").timestamp(1_000_000_000u64);

let header = build_auth_header(&url, &query, &secrets, &params).unwrap();
assert!(header.contains("oauth_signature=\"M1WZ1gk57AYcT1r7Ss4YeRFkclU%3D\""));
```
*/
mod client;
mod error;
mod header;
mod parameters;
mod request;
mod response;
mod secrets;
mod signer;
mod transport;

// exposed to external program
pub use client::{TwitterApi, API_BASE_URL};
pub use error::{CredentialError, Error, Result, SignError, SignResult, TransportError};
pub use header::{build_auth_header, current_timestamp, generate_nonce, OAuthParameters};
pub use parameters::QueryFields;
pub use request::SignedRequest;
pub use response::{decode as decode_response, ApiResponse};
pub use secrets::{Secrets, SecretsProvider};
pub use signer::{build_base_string, build_signature, percent_encode, signing_key, Signature};
#[cfg(feature = "blocking")]
pub use transport::ReqwestTransport;
pub use transport::Transport;

// exposed constant variables
/// Represents `oauth_consumer_key`.
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
/// Represents `oauth_nonce`.
pub const OAUTH_NONCE_KEY: &str = "oauth_nonce";
/// Represents `oauth_signature`.
pub const OAUTH_SIGNATURE_KEY: &str = "oauth_signature";
/// Represents `oauth_signature_method`.
pub const OAUTH_SIGNATURE_METHOD_KEY: &str = "oauth_signature_method";
/// Represents `oauth_timestamp`.
pub const OAUTH_TIMESTAMP_KEY: &str = "oauth_timestamp";
/// Represents `oauth_token`.
pub const OAUTH_TOKEN_KEY: &str = "oauth_token";
/// Represents `oauth_version`.
pub const OAUTH_VERSION_KEY: &str = "oauth_version";

// crate-private constant variables
pub(crate) const OAUTH_KEY_PREFIX: &str = "oauth_";
