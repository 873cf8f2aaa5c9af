use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Lenient deserializer for timestamps that appear as either integers
/// (Unix milliseconds) or RFC 3339 strings.
///
/// An unrecognized shape yields `None` instead of an error: a record with a
/// mangled timestamp is still a record, and failing here would make the whole
/// line disappear from reconstruction.
pub fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_timestamp))
}

fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        Value::String(s) => s.parse::<DateTime<Utc>>().ok(),
        _ => None,
    }
}
