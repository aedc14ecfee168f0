//! Lenient deserializers for form-driven payloads.
//!
//! The admin frontend submits numbers and flags either as JSON numbers or as
//! strings (`"30"`, `"1"`, `""`). Blank strings and `null` become `None`.

use serde::{de::Error, Deserialize, Deserializer};
use serde_json::Value;

/// `Option<String>` from a string or a number. Blank strings become `None`.
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(D::Error::custom(format!("expected a string, got {}", other))),
    }
}

/// `Option<i32>` from a number, a numeric string, blank or null.
pub fn opt_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .and_then(|v| i32::try_from(v).ok())
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("number out of range: {}", n))),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("expected an integer, got \"{}\"", s))),
        other => Err(D::Error::custom(format!("expected an integer, got {}", other))),
    }
}

/// `Option<f64>` from a number, a numeric string, blank or null.
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(n.as_f64()),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("expected a number, got \"{}\"", s))),
        other => Err(D::Error::custom(format!("expected a number, got {}", other))),
    }
}

/// `Option<bool>` from a bool, 0/1, or the strings "true"/"false"/"1"/"0".
pub fn opt_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(b)),
        Value::Number(n) => Ok(Some(n.as_f64().map(|v| v != 0.0).unwrap_or(false))),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "" => Ok(None),
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(D::Error::custom(format!("expected a boolean, got \"{}\"", s))),
        },
        other => Err(D::Error::custom(format!("expected a boolean, got {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "super::opt_text")]
        text: Option<String>,
        #[serde(default, deserialize_with = "super::opt_i32")]
        count: Option<i32>,
        #[serde(default, deserialize_with = "super::opt_f64")]
        amount: Option<f64>,
        #[serde(default, deserialize_with = "super::opt_bool")]
        flag: Option<bool>,
    }

    fn parse(json: &str) -> Sample {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_accepts_numbers_and_numeric_strings() {
        let s = parse(r#"{"count": "30", "amount": "1500.5", "flag": "1"}"#);
        assert_eq!(s.count, Some(30));
        assert_eq!(s.amount, Some(1500.5));
        assert_eq!(s.flag, Some(true));

        let s = parse(r#"{"count": 7, "amount": 2, "flag": false}"#);
        assert_eq!(s.count, Some(7));
        assert_eq!(s.amount, Some(2.0));
        assert_eq!(s.flag, Some(false));
    }

    #[test]
    fn test_blank_and_missing_are_none() {
        let s = parse(r#"{"count": "", "amount": null}"#);
        assert_eq!(s.count, None);
        assert_eq!(s.amount, None);
        assert_eq!(s.flag, None);
        assert_eq!(s.text, None);
    }

    #[test]
    fn test_text_accepts_numbers_and_drops_blanks() {
        assert_eq!(parse(r#"{"text": 2019}"#).text.as_deref(), Some("2019"));
        assert_eq!(parse(r#"{"text": "   "}"#).text, None);
        assert_eq!(parse(r#"{"text": "REG-1"}"#).text.as_deref(), Some("REG-1"));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(serde_json::from_str::<Sample>(r#"{"count": "many"}"#).is_err());
        assert!(serde_json::from_str::<Sample>(r#"{"flag": "maybe"}"#).is_err());
    }
}
