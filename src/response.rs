use serde_json::{Map, Value};

use crate::{Error, Result};

/// JSON body returned by the API. Its shape is defined by the endpoint.
pub type ApiResponse = Value;

/// Decode a response body.
///
/// An empty (or whitespace only) body yields an empty JSON object.
///
/// # Errors
///
/// Fails with `Error::ResponseDecode` when a non-empty body is not JSON.
pub fn decode(body: &str) -> Result<ApiResponse> {
    if body.trim().is_empty() {
        tracing::debug!("empty response body");
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_str(body).map_err(|err| {
        tracing::warn!(error = %err, "response body is not a valid JSON");
        Error::from(err)
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_body_is_empty_mapping() {
        for body in ["", "  \r\n"] {
            let decoded = decode(body).unwrap();
            assert_eq!(decoded, json!({}));
        }
    }

    #[test]
    fn object_body() {
        let decoded = decode(r#"{"id":1}"#).unwrap();
        assert_eq!(decoded["id"], json!(1));
        assert_eq!(decoded["id"].as_i64(), Some(1));
    }

    #[test]
    fn array_body() {
        let decoded = decode(r#"[{"id":20,"text":"just setting up my twttr"}]"#).unwrap();
        assert_eq!(decoded.as_array().map(Vec::len), Some(1));
        assert_eq!(decoded[0]["text"], "just setting up my twttr");
    }

    #[test]
    fn malformed_body_is_error() {
        let result = decode("<html>Over capacity</html>");
        assert!(matches!(result, Err(Error::ResponseDecode(_))));
    }
}
