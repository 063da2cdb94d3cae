//! Body decoding for success and error responses.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ValidationError;

/// Decodes a 2xx body into `T`.
///
/// An empty (or whitespace-only) body decodes as JSON `null`, which
/// succeeds for `serde_json::Value`, `Option<_>` and `()` and fails with
/// [`ValidationError::EmptyBody`] for anything else.
///
/// ## Errors
///
/// Returns a [`ValidationError`] if the body is not valid JSON for `T`.
pub fn decode_success<T: DeserializeOwned>(body: &Bytes) -> Result<T, ValidationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return serde_json::from_value(Value::Null).map_err(|_| ValidationError::EmptyBody);
    }
    serde_json::from_slice(body).map_err(ValidationError::JsonParse)
}

/// Decodes a non-2xx body without ever failing.
///
/// JSON bodies are kept as-is, other text becomes a JSON string and an
/// empty body becomes `null`.
pub fn decode_error_body(body: &Bytes) -> Value {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: u64,
    }

    #[test]
    fn success_decodes_typed_json() {
        let item: Item = decode_success(&Bytes::from_static(br#"{"id": 5}"#)).unwrap();
        assert_eq!(item, Item { id: 5 });
    }

    #[test]
    fn empty_success_body_is_null_for_values() {
        let value: Value = decode_success(&Bytes::new()).unwrap();
        assert_eq!(value, Value::Null);
        let unit: Option<Item> = decode_success(&Bytes::from_static(b"  ")).unwrap();
        assert!(unit.is_none());
    }

    #[test]
    fn empty_success_body_fails_for_models() {
        let err = decode_success::<Item>(&Bytes::new()).unwrap_err();
        assert!(matches!(err, ValidationError::EmptyBody));
    }

    #[test]
    fn malformed_success_body_is_a_parse_error() {
        let err = decode_success::<Value>(&Bytes::from_static(b"<html>")).unwrap_err();
        assert!(matches!(err, ValidationError::JsonParse(_)));
    }

    #[test]
    fn error_body_variants() {
        assert_eq!(
            decode_error_body(&Bytes::from_static(br#"{"error":"nope"}"#)),
            json!({"error": "nope"})
        );
        assert_eq!(
            decode_error_body(&Bytes::from_static(b"Bad Gateway")),
            json!("Bad Gateway")
        );
        assert_eq!(decode_error_body(&Bytes::new()), Value::Null);
    }
}
