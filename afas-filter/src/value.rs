use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde_json::Value;
use uuid::Uuid;

/// A filter value before it is written into `filtervalues`.
///
/// `Text` holds strings and `Scalar` the textual form of everything else.
/// Either one, when empty, is written as `""`.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Null,
    Text(String),
    Scalar(String),
}

impl FilterValue {
    /// Wire form: `null`, `""` for empty text, otherwise the plain text.
    ///
    /// Never returns an empty string, so every filter keeps a slot in `filtervalues`.
    pub fn encode(&self) -> String {
        match self {
            FilterValue::Null => "null".to_string(),
            FilterValue::Text(s) | FilterValue::Scalar(s) if s.is_empty() => r#""""#.to_string(),
            FilterValue::Text(s) | FilterValue::Scalar(s) => s.clone(),
        }
    }
}

macro_rules! scalar_from_display {
    ($($t:ty),+ $(,)?) => {
        $(
            impl From<$t> for FilterValue {
                fn from(v: $t) -> Self {
                    FilterValue::Scalar(v.to_string())
                }
            }
        )+
    };
}

scalar_from_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool);

fn float_text(v: f64) -> String {
    if v.is_infinite() {
        let text = if v > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if v == 0.0 {
        // -0 prints as 0 in AFAS filters
        "0".to_string()
    } else {
        v.to_string()
    }
}

impl From<f64> for FilterValue {
    fn from(v: f64) -> Self {
        FilterValue::Scalar(float_text(v))
    }
}

impl From<f32> for FilterValue {
    fn from(v: f32) -> Self {
        if v.is_finite() && v != 0.0 {
            FilterValue::Scalar(v.to_string())
        } else {
            FilterValue::Scalar(float_text(f64::from(v)))
        }
    }
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        FilterValue::Text(v.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        FilterValue::Text(v)
    }
}

impl From<&String> for FilterValue {
    fn from(v: &String) -> Self {
        FilterValue::Text(v.clone())
    }
}

impl From<char> for FilterValue {
    fn from(v: char) -> Self {
        FilterValue::Text(v.to_string())
    }
}

impl<T: Into<FilterValue>> From<Option<T>> for FilterValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => FilterValue::Null,
        }
    }
}

impl From<NaiveDate> for FilterValue {
    fn from(v: NaiveDate) -> Self {
        FilterValue::Scalar(v.format("%Y-%m-%d").to_string())
    }
}

impl From<NaiveDateTime> for FilterValue {
    fn from(v: NaiveDateTime) -> Self {
        FilterValue::Scalar(v.format("%Y-%m-%dT%H:%M:%S").to_string())
    }
}

impl From<DateTime<Utc>> for FilterValue {
    fn from(v: DateTime<Utc>) -> Self {
        FilterValue::Scalar(v.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

impl From<Uuid> for FilterValue {
    fn from(v: Uuid) -> Self {
        FilterValue::Scalar(v.hyphenated().to_string())
    }
}

impl From<Value> for FilterValue {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => FilterValue::Null,
            Value::String(s) => FilterValue::Text(s),
            Value::Bool(b) => b.into(),
            Value::Number(n) => match n.as_f64() {
                Some(f) if n.is_f64() => f.into(),
                _ => FilterValue::Scalar(n.to_string()),
            },
            other => FilterValue::Scalar(other.to_string()),
        }
    }
}

impl From<&Value> for FilterValue {
    fn from(v: &Value) -> Self {
        v.clone().into()
    }
}
