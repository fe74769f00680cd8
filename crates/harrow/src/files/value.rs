//! Cell values of DSSAT input tables.

use std::fmt;

use serde::Serialize;

/// One table cell, typed by narrowest fit at parse time.
///
/// DSSAT files carry integers (row numbers, day-of-year dates), reals
/// (genetic coefficients, daily weather) and codes (`IB0001`, `UFGA`) side
/// by side with no schema, so the cell itself records what it parsed as.
/// The missing-data markers `-99` / `-99.0` stay numeric, as they are in the
/// files themselves.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// Parse a raw cell, trying integer, then float, then falling back to
    /// the trimmed text. Never fails; an empty cell is `Str("")`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Ok(i) = trimmed.parse::<i64>() {
            return Value::Integer(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            if f.is_finite() {
                return Value::Float(f);
            }
        }
        Value::Str(trimmed.to_string())
    }

    /// Numeric view, widening integers to float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Str(_) => None,
        }
    }

    /// String view; `None` for numeric cells.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(Value::parse("82001"), Value::Integer(82001));
        assert_eq!(Value::parse(" -99 "), Value::Integer(-99));
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(Value::parse("4.2"), Value::Float(4.2));
        assert_eq!(Value::parse("-82.370"), Value::Float(-82.37));
    }

    #[test]
    fn test_parse_code() {
        assert_eq!(Value::parse("IB0001"), Value::Str("IB0001".to_string()));
        assert_eq!(Value::parse("IB0001").as_str(), Some("IB0001"));
        assert_eq!(Value::parse(""), Value::Str(String::new()));
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(82001), Value::Integer(82001));
        assert_eq!(Value::from(4.2), Value::Float(4.2));
        assert_eq!(Value::from("UFGA"), Value::Str("UFGA".to_string()));
    }

    #[test]
    fn test_as_f64_widens() {
        assert_eq!(Value::Integer(3).as_f64(), Some(3.0));
        assert_eq!(Value::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(Value::Str("x".into()).as_f64(), None);
    }

    #[test]
    fn test_display_roundtrip() {
        assert_eq!(Value::parse("IB0001").to_string(), "IB0001");
        assert_eq!(Value::parse("110").to_string(), "110");
    }
}
