use http::{header::AUTHORIZATION, HeaderMap, HeaderValue, Method};
use url::Url;

use crate::{QueryFields, SignError, SignResult};

/// A GET request carrying its OAuth `Authorization` header.
///
/// Built for one exchange with the transport and dropped afterwards.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    url: Url,
    query: QueryFields,
    headers: HeaderMap,
}

impl SignedRequest {
    pub(crate) fn get(url: Url, query: QueryFields, authorization: &str) -> SignResult<Self> {
        let mut value = HeaderValue::from_str(authorization)
            .map_err(|_| SignError::InvalidHeaderValue(authorization.to_string()))?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Ok(SignedRequest {
            url,
            query,
            headers,
        })
    }

    /// Target URL, without the query string.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Always `GET`.
    pub fn method(&self) -> Method {
        Method::GET
    }

    pub fn query(&self) -> &QueryFields {
        &self.query
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn authorization(&self) -> Option<&str> {
        self.headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_single_authorization_header() {
        let url = Url::parse("https://api.twitter.com/1.1/statuses/lookup.json").unwrap();
        let query = QueryFields::from([("id", "20")]);
        let req = SignedRequest::get(url.clone(), query.clone(), "OAuth oauth_nonce=\"n1\"").unwrap();

        assert_eq!(req.method(), Method::GET);
        assert_eq!(req.url(), &url);
        assert_eq!(req.query(), &query);
        assert_eq!(req.headers().len(), 1);
        assert_eq!(req.authorization(), Some("OAuth oauth_nonce=\"n1\""));
        assert!(req.headers()[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn rejects_control_characters() {
        let url = Url::parse("https://api.twitter.com/1.1/statuses/lookup.json").unwrap();
        let result = SignedRequest::get(url, QueryFields::new(), "OAuth \n");
        assert!(matches!(result, Err(SignError::InvalidHeaderValue(_))));
    }
}
