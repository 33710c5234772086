//! The `{"type": ..., "value": ...}` wrapper around every ICNDB response.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::transport::RequestError;

const SUCCESS: &str = "success";

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    value: Value,
}

/// Decodes a response body and returns its `value` if the envelope reports success.
pub fn success_value(body: &str) -> Result<Value, RequestError> {
    let envelope = serde_json::from_str::<Envelope>(body)?;

    match envelope.kind {
        Some(kind) if kind == SUCCESS => Ok(envelope.value),
        kind => Err(RequestError::Unsuccessful(kind)),
    }
}

/// Like [`success_value`], then deserializes the value into `T`.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, RequestError> {
    Ok(serde_json::from_value(success_value(body)?)?)
}

/// Coerces an arbitrary JSON value into an integer, never failing.
///
/// Strings contribute their leading decimal digits, floats are truncated, booleans are
/// 0 or 1, and containers are 1 unless empty.
pub fn coerce_integer(value: &Value) -> i64 {
    match value {
        Value::Null => 0,
        Value::Bool(value) => i64::from(*value),
        Value::Number(number) => {
            number.as_i64().or_else(|| number.as_f64().map(truncate)).unwrap_or_default()
        }
        Value::String(text) => leading_integer(text),
        Value::Array(items) => i64::from(!items.is_empty()),
        Value::Object(fields) => i64::from(!fields.is_empty()),
    }
}

#[expect(clippy::cast_possible_truncation, reason = "float to int casts saturate")]
fn truncate(number: f64) -> i64 {
    number as i64
}

fn leading_integer(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    // accumulated on the signed side so both i64::MIN and i64::MAX are reachable
    digits.bytes().take_while(u8::is_ascii_digit).fold(0_i64, |total, digit| {
        let digit = i64::from(digit - b'0');
        let total = total.saturating_mul(10);
        if negative { total.saturating_sub(digit) } else { total.saturating_add(digit) }
    })
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_success_value() {
        let value = success_value(r#"{"type":"success","value":[1,2]}"#).unwrap();
        assert_eq!(value, json!([1, 2]));

        let value = success_value(r#"{"type":"success"}"#).unwrap();
        assert_eq!(value, Value::Null);
    }

    #[test]
    fn test_unsuccessful_envelope() {
        let result =
            success_value(r#"{"type":"NoSuchQuoteException","value":"No quote with id=999."}"#);
        let Err(RequestError::Unsuccessful(Some(kind))) = result else {
            panic!("expected Unsuccessful error");
        };
        assert_eq!(kind, "NoSuchQuoteException");

        let result = success_value(r#"{"value":"orphan"}"#);
        let Err(RequestError::Unsuccessful(None)) = result else {
            panic!("expected Unsuccessful error without type");
        };
    }

    #[test]
    fn test_malformed_body() {
        for body in ["", "<html>502</html>", "[1,2,3]", r#""success""#, r#"{"type":1}"#] {
            let Err(RequestError::Decode(_)) = success_value(body) else {
                panic!("expected Decode error for {body:?}");
            };
        }
    }

    #[test]
    fn test_decode_shape_mismatch() {
        let result = decode::<Vec<String>>(r#"{"type":"success","value":{"id":1}}"#);
        let Err(RequestError::Decode(_)) = result else {
            panic!("expected Decode error");
        };
    }

    #[test]
    fn test_coerce_integer() {
        assert_eq!(coerce_integer(&json!(42)), 42);
        assert_eq!(coerce_integer(&json!(-7)), -7);
        assert_eq!(coerce_integer(&json!(3.9)), 3);
        assert_eq!(coerce_integer(&json!(-3.9)), -3);
        assert_eq!(coerce_integer(&json!("42")), 42);
        assert_eq!(coerce_integer(&json!("  42 jokes")), 42);
        assert_eq!(coerce_integer(&json!("-12")), -12);
        assert_eq!(coerce_integer(&json!("+5")), 5);
        assert_eq!(coerce_integer(&json!("abc")), 0);
        assert_eq!(coerce_integer(&json!("")), 0);
        assert_eq!(coerce_integer(&json!("99999999999999999999999")), i64::MAX);
        assert_eq!(coerce_integer(&json!("-9223372036854775808")), i64::MIN);
        assert_eq!(coerce_integer(&json!("-99999999999999999999999")), i64::MIN);
        assert_eq!(coerce_integer(&json!("9223372036854775807")), i64::MAX);
        assert_eq!(coerce_integer(&json!(true)), 1);
        assert_eq!(coerce_integer(&json!(false)), 0);
        assert_eq!(coerce_integer(&Value::Null), 0);
        assert_eq!(coerce_integer(&json!([])), 0);
        assert_eq!(coerce_integer(&json!([0])), 1);
        assert_eq!(coerce_integer(&json!({})), 0);
        assert_eq!(coerce_integer(&json!({"count": 5})), 1);
    }
}
