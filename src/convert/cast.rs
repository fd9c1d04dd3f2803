//! Value-level casting into a storage representation
//!
//! Casting is all-or-nothing: the whole output is built before the caller
//! sees it, and the first value that does not fit aborts the cast.
//! Nulls stay null in every target. Casts are lossless: a value that would
//! change (a fractional float into an integer, an out-of-range integer)
//! is rejected rather than truncated.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::table::Value;
use crate::types::ConcreteType;

use super::errors::{ConversionError, ConversionResult};

/// Timestamp layouts accepted from text, after RFC 3339.
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_DISPLAY: &str = "%Y-%m-%d %H:%M:%S%.f";

// 2^63; the first float that does not fit in i64.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// Casts a column's values into `target`.
///
/// `column` is only used for error reporting.
pub fn cast_values(
    column: &str,
    values: &[Value],
    target: ConcreteType,
) -> ConversionResult<Vec<Value>> {
    values
        .iter()
        .enumerate()
        .map(|(row, value)| {
            cast_value(value, target).ok_or_else(|| ConversionError::NotRepresentable {
                column: column.to_string(),
                row,
                value: value.to_string(),
                target,
            })
        })
        .collect()
}

/// Casts one value. `None` means the value does not fit.
fn cast_value(value: &Value, target: ConcreteType) -> Option<Value> {
    if let Value::Null = value {
        return Some(Value::Null);
    }

    match target {
        ConcreteType::Object => Some(value.clone()),
        ConcreteType::Text => to_text(value),
        ConcreteType::Int8 | ConcreteType::Int32 | ConcreteType::Int64 => {
            let (min, max) = target.integer_bounds()?;
            to_integer(value, min, max)
        }
        ConcreteType::Float64 => to_float(value),
        ConcreteType::Float32 => to_float32(value),
        ConcreteType::Bool => to_bool(value),
        ConcreteType::Timestamp => to_timestamp(value),
    }
}

fn to_text(value: &Value) -> Option<Value> {
    let text = match value {
        Value::Null => return Some(Value::Null),
        Value::Float(f) if f.is_nan() => return Some(Value::Null),
        Value::Text(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => format_float(*f),
        Value::Timestamp(ts) => ts.format(TIMESTAMP_DISPLAY).to_string(),
    };
    Some(Value::Text(text))
}

/// Whole floats keep a trailing ".0" so they still read as floats.
fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e16 {
        format!("{:.1}", f)
    } else {
        f.to_string()
    }
}

fn to_integer(value: &Value, min: i64, max: i64) -> Option<Value> {
    let i = match value {
        Value::Null => return Some(Value::Null),
        Value::Float(f) if f.is_nan() => return Some(Value::Null),
        Value::Int(i) => *i,
        Value::Bool(b) => *b as i64,
        Value::Float(f) => {
            if !f.is_finite() || f.fract() != 0.0 || *f < i64::MIN as f64 || *f >= I64_UPPER {
                return None;
            }
            *f as i64
        }
        Value::Text(s) => s.trim().parse::<i64>().ok()?,
        Value::Timestamp(_) => return None,
    };

    (min..=max).contains(&i).then_some(Value::Int(i))
}

fn to_float(value: &Value) -> Option<Value> {
    let f = match value {
        Value::Null => return Some(Value::Null),
        Value::Float(f) => *f,
        Value::Int(i) => *i as f64,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Text(s) => s.trim().parse::<f64>().ok()?,
        Value::Timestamp(_) => return None,
    };
    Some(Value::Float(f))
}

fn to_float32(value: &Value) -> Option<Value> {
    match to_float(value)? {
        Value::Float(f) => {
            let narrowed = f as f32;
            if f.is_finite() && narrowed.is_infinite() {
                return None;
            }
            Some(Value::Float(narrowed as f64))
        }
        other => Some(other),
    }
}

fn to_bool(value: &Value) -> Option<Value> {
    let b = match value {
        Value::Null => return Some(Value::Null),
        Value::Float(f) if f.is_nan() => return Some(Value::Null),
        Value::Bool(b) => *b,
        Value::Int(i) => *i != 0,
        Value::Float(f) => *f != 0.0,
        Value::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => true,
            "false" | "0" => false,
            _ => return None,
        },
        Value::Timestamp(_) => return None,
    };
    Some(Value::Bool(b))
}

fn to_timestamp(value: &Value) -> Option<Value> {
    let ts = match value {
        Value::Null => return Some(Value::Null),
        Value::Float(f) if f.is_nan() => return Some(Value::Null),
        Value::Timestamp(ts) => *ts,
        Value::Int(nanos) => DateTime::<Utc>::from_timestamp_nanos(*nanos).naive_utc(),
        Value::Text(s) => parse_timestamp(s.trim())?,
        Value::Bool(_) | Value::Float(_) => return None,
    };
    Some(Value::Timestamp(ts))
}

fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    for format in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, format) {
            return Some(ts);
        }
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
