use std::borrow::Cow;

use chrono::Utc;
use url::Url;
use uuid::Uuid;

use crate::signer::{build_signature, percent_encode};
use crate::{
    QueryFields, SecretsProvider, SignError, SignResult, OAUTH_CONSUMER_KEY, OAUTH_KEY_PREFIX,
    OAUTH_NONCE_KEY, OAUTH_SIGNATURE_KEY, OAUTH_SIGNATURE_METHOD_KEY, OAUTH_TIMESTAMP_KEY,
    OAUTH_TOKEN_KEY, OAUTH_VERSION_KEY,
};

const OAUTH_HEADER_PREFIX: &str = "OAuth ";
const OAUTH_SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";

/// Overrides for the per-request OAuth values.
///
/// Anything left unset is generated on every call: a fresh nonce and the
/// current Unix time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OAuthParameters<'a> {
    nonce: Option<Cow<'a, str>>,
    timestamp: Option<u64>,
}

impl<'a> OAuthParameters<'a> {
    pub fn new() -> Self {
        Default::default()
    }

    /// set the oauth_nonce value
    pub fn nonce<T>(self, nonce: T) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        OAuthParameters {
            nonce: Some(nonce.into()),
            ..self
        }
    }

    /// set the oauth_timestamp value
    pub fn timestamp<T>(self, timestamp: T) -> Self
    where
        T: Into<u64>,
    {
        OAuthParameters {
            timestamp: Some(timestamp.into()),
            ..self
        }
    }

    pub fn into_owned(self) -> OAuthParameters<'static> {
        OAuthParameters {
            nonce: self.nonce.map(|n| Cow::Owned(n.into_owned())),
            timestamp: self.timestamp,
        }
    }
}

/// 32 lowercase hex characters taken from a random (v4) UUID.
pub fn generate_nonce() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Current Unix time in seconds.
pub fn current_timestamp() -> u64 {
    // clamp clocks set before 1970
    u64::try_from(Utc::now().timestamp()).unwrap_or_default()
}

/// Build the `Authorization` header value of a GET request to `url`.
///
/// Only `oauth_*` values end up in the header, sorted by key:
/// `OAuth oauth_consumer_key="...", oauth_nonce="...", ...`.
///
/// # Errors
///
/// Fails with `SignError::DuplicateParameter` when a query field uses the
/// reserved `oauth_` prefix.
pub fn build_auth_header<T: SecretsProvider + ?Sized>(
    url: &Url,
    query_fields: &QueryFields,
    secrets: &T,
    parameters: &OAuthParameters<'_>,
) -> SignResult<String> {
    // oauth_* keys belong to the header only
    if let Some((key, _)) = query_fields
        .iter()
        .find(|(k, _)| k.starts_with(OAUTH_KEY_PREFIX))
    {
        return Err(SignError::DuplicateParameter(key.to_string()));
    }

    let (consumer_key, _) = secrets.get_consumer_key_pair();
    let (token, _) = secrets.get_token_pair();
    let nonce = match parameters.nonce {
        Some(ref nonce) => nonce.to_string(),
        None => generate_nonce(),
    };
    let timestamp = parameters
        .timestamp
        .unwrap_or_else(current_timestamp)
        .to_string();

    // NOTE: items must be kept in alphabetical order
    let mut oauth = vec![
        (OAUTH_CONSUMER_KEY, consumer_key),
        (OAUTH_NONCE_KEY, nonce.as_str()),
        (OAUTH_SIGNATURE_METHOD_KEY, OAUTH_SIGNATURE_METHOD),
        (OAUTH_TIMESTAMP_KEY, timestamp.as_str()),
        (OAUTH_TOKEN_KEY, token),
        (OAUTH_VERSION_KEY, OAUTH_VERSION),
    ];
    let signed = build_signature(url, &oauth, query_fields, secrets)?;
    oauth.push((OAUTH_SIGNATURE_KEY, signed.signature.as_str()));
    oauth.sort();

    let rendered = oauth
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, percent_encode(v)))
        .collect::<Vec<String>>()
        .join(", ");
    Ok(format!("{}{}", OAUTH_HEADER_PREFIX, rendered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Secrets;

    fn header_pairs(header: &str) -> Vec<(String, String)> {
        header
            .strip_prefix("OAuth ")
            .unwrap()
            .split(", ")
            .map(|item| {
                let (k, v) = item.split_once('=').unwrap();
                (k.to_string(), v.trim_matches('"').to_string())
            })
            .collect()
    }

    fn timeline_url() -> Url {
        Url::parse("https://api.twitter.com/1.1/statuses/user_timeline.json").unwrap()
    }

    #[test]
    fn fixed_values_render_exact_header() {
        let secrets = Secrets::new("ck", "cs", "tok", "toks").unwrap();
        let query = QueryFields::from([("screen_name", "abc")]);
        let params = OAuthParameters::new().nonce("n1").timestamp(1_000_000_000u64);

        let header = build_auth_header(&timeline_url(), &query, &secrets, &params).unwrap();
        assert_eq!(
            header,
            "OAuth oauth_consumer_key=\"ck\", oauth_nonce=\"n1\", \
             oauth_signature=\"M1WZ1gk57AYcT1r7Ss4YeRFkclU%3D\", \
             oauth_signature_method=\"HMAC-SHA1\", oauth_timestamp=\"1000000000\", \
             oauth_token=\"tok\", oauth_version=\"1.0\""
        );
    }

    #[test]
    fn keys_are_strictly_ascending() {
        let secrets = Secrets::new("c k", "cs", "t/k", "toks").unwrap();
        let query = QueryFields::from([("zzz", "1"), ("aaa", "2"), ("include_rts", "true")]);
        let header =
            build_auth_header(&timeline_url(), &query, &secrets, &OAuthParameters::new()).unwrap();

        let keys: Vec<String> = header_pairs(&header).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys.len(), 7);
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
        // query fields are signed but not sent in the header
        assert!(keys.iter().all(|k| k.starts_with("oauth_")));
    }

    #[test]
    fn values_are_percent_encoded() {
        let secrets = Secrets::new("c k", "cs", "t/k", "toks").unwrap();
        let query = QueryFields::from([("q", "x")]);
        let header =
            build_auth_header(&timeline_url(), &query, &secrets, &OAuthParameters::new()).unwrap();
        let pairs = header_pairs(&header);
        assert!(pairs.contains(&("oauth_consumer_key".to_string(), "c%20k".to_string())));
        assert!(pairs.contains(&("oauth_token".to_string(), "t%2Fk".to_string())));
    }

    #[test]
    fn generated_values_are_fresh() {
        let first = generate_nonce();
        let second = generate_nonce();
        assert_eq!(first.len(), 32);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(first, second);

        // 2020-01-01T00:00:00Z
        assert!(current_timestamp() > 1_577_836_800);
    }

    #[test]
    fn unset_overrides_vary_per_call() {
        let secrets = Secrets::new("ck", "cs", "tok", "toks").unwrap();
        let query = QueryFields::from([("screen_name", "abc")]);
        let params = OAuthParameters::new().timestamp(1_000_000_000u64);
        let first = build_auth_header(&timeline_url(), &query, &secrets, &params).unwrap();
        let second = build_auth_header(&timeline_url(), &query, &secrets, &params).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn colliding_query_field_fails() {
        let secrets = Secrets::new("ck", "cs", "tok", "toks").unwrap();
        let query = QueryFields::from([("oauth_token", "other")]);
        let result = build_auth_header(&timeline_url(), &query, &secrets, &OAuthParameters::new());
        assert_eq!(
            result,
            Err(SignError::DuplicateParameter("oauth_token".to_string()))
        );
    }

    #[test]
    fn reserved_prefix_query_field_fails() {
        let secrets = Secrets::new("ck", "cs", "tok", "toks").unwrap();
        for key in ["oauth_signature", "oauth_callback", "oauth_"] {
            let query = QueryFields::from([("screen_name", "abc"), (key, "x")]);
            let result =
                build_auth_header(&timeline_url(), &query, &secrets, &OAuthParameters::new());
            assert_eq!(result, Err(SignError::DuplicateParameter(key.to_string())));
        }
    }
}
