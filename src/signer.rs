use std::collections::BTreeMap;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet};
use sha1::Sha1;
use url::Url;

use crate::{QueryFields, SecretsProvider, SignError, SignResult};

type HmacSha1 = Hmac<Sha1>;

const SIGNED_HTTP_METHOD: &str = "GET";

// https://tools.ietf.org/html/rfc5849#section-3.6
// * ALPHA, DIGIT, '-', '.', '_', '~' MUST NOT be encoded.
// * All other characters MUST be encoded.
// * The two hexadecimal characters used to represent encoded
//   characters MUST be uppercase.
const TARGETS_FOR_PARAMS: &AsciiSet = &percent_encoding::NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Result of signing: the base64 HMAC-SHA1 signature (not encoded) and the
/// base string it was computed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub signature: String,
    pub base_string: String,
}

/// Percent-encode `input` with the RFC 3986 unreserved set.
///
/// A space becomes `%20`, never `+`.
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, TARGETS_FOR_PARAMS).to_string()
}

/// `encode(consumer_secret)&encode(token_secret)`
pub fn signing_key<T: SecretsProvider + ?Sized>(secrets: &T) -> String {
    let (_, consumer_secret) = secrets.get_consumer_key_pair();
    let (_, token_secret) = secrets.get_token_pair();
    format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    )
}

/// Build the signature base string of a GET request to `url`.
///
/// `url` must not carry a query string; query values belong to
/// `query_params`. Keys are not encoded, values are.
///
/// # Errors
///
/// Fails with `SignError::DuplicateParameter` when a key appears more than
/// once across `oauth_params` and `query_params`.
pub fn build_base_string(
    url: &Url,
    oauth_params: &[(&str, &str)],
    query_params: &QueryFields,
) -> SignResult<String> {
    let mut merged: BTreeMap<&str, &str> = BTreeMap::new();
    for (key, value) in oauth_params.iter().copied().chain(query_params.iter()) {
        if merged.insert(key, value).is_some() {
            return Err(SignError::DuplicateParameter(key.to_string()));
        }
    }

    let joined = merged
        .iter()
        .map(|(k, v)| format!("{}={}", k, percent_encode(v)))
        .collect::<Vec<String>>()
        .join("&");

    Ok(format!(
        "{}&{}&{}",
        SIGNED_HTTP_METHOD,
        percent_encode(url.as_str()),
        percent_encode(&joined)
    ))
}

/// Sign a GET request to `url` with HMAC-SHA1.
pub fn build_signature<T: SecretsProvider + ?Sized>(
    url: &Url,
    oauth_params: &[(&str, &str)],
    query_params: &QueryFields,
    secrets: &T,
) -> SignResult<Signature> {
    let base_string = build_base_string(url, oauth_params, query_params)?;
    tracing::trace!(base_string = %base_string, "built signature base string");

    // NOTE: HMAC accepts keys of any length, so this never fails in practice.
    let mut mac = HmacSha1::new_from_slice(signing_key(secrets).as_bytes())
        .map_err(|_| SignError::InvalidKeyLength)?;
    mac.update(base_string.as_bytes());
    let signature = STANDARD.encode(mac.finalize().into_bytes());

    Ok(Signature {
        signature,
        base_string,
    })
}
