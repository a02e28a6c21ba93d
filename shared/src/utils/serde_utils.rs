use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn deserialize_as_option_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Value = serde::Deserialize::deserialize(deserializer)?;

    match &value {
        Value::String(s) if !s.is_empty() => Ok(Some(s.to_owned())),
        Value::Number(s) => Ok(Some(s.to_string())),
        _ => Ok(None),
    }
}

pub fn deserialize_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Value = serde::Deserialize::deserialize(deserializer)?;

    match &value {
        Value::String(s) => Ok(s.to_string()),
        Value::Null => Ok(String::new()),
        _ => Ok(value.to_string()),
    }
}

// Checkbox values arrive as bool or as "true"/"false", "1"/"0", "yes"/"no".
pub fn deserialize_as_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).and_then(|value| match value {
        Value::Bool(flag) => Ok(flag),
        Value::Number(num) => Ok(num.as_i64().is_some_and(|n| n != 0)),
        Value::String(text) => match text.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" | "" => Ok(false),
            other => Err(serde::de::Error::custom(format!("invalid boolean value: {other}"))),
        },
        Value::Null => Ok(false),
        other => Err(serde::de::Error::custom(format!("invalid boolean value: {other}"))),
    })
}

pub fn deserialize_number_from_string<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
{
    let raw: Value = Value::deserialize(deserializer)?;

    match raw {
        Value::Number(n) => Ok(n.to_string().parse::<T>().ok()),

        // String -> extract first number
        Value::String(s) => {
            let digits = s.trim().chars()
                .skip_while(|c| !c.is_ascii_digit())
                .take_while(char::is_ascii_digit)
                .collect::<String>();

            if digits.is_empty() {
                return Ok(None);
            }
            Ok(digits.parse::<T>().ok())
        }

        // null or anything else
        _ => Ok(None),
    }
}
