//! Typed leaf values and their `records.config` rendering.

use std::fmt;
use std::str::FromStr;

use serde_yaml::{Number, Value};

/// Wire-level type tag of a `CONFIG` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    String,
    Int,
    Float,
}

impl TypeTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::String => "STRING",
            TypeTag::Int => "INT",
            TypeTag::Float => "FLOAT",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STRING" => Ok(TypeTag::String),
            "INT" => Ok(TypeTag::Int),
            "FLOAT" => Ok(TypeTag::Float),
            other => Err(format!("unknown type tag: {other}")),
        }
    }
}

/// Size suffix understood by Traffic Server integer records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeUnit {
    K,
    M,
    G,
    T,
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SizeUnit::K => "K",
            SizeUnit::M => "M",
            SizeUnit::G => "G",
            SizeUnit::T => "T",
        };
        f.write_str(s)
    }
}

impl FromStr for SizeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "K" => Ok(SizeUnit::K),
            "M" => Ok(SizeUnit::M),
            "G" => Ok(SizeUnit::G),
            "T" => Ok(SizeUnit::T),
            other => Err(format!("unknown size unit: {other}")),
        }
    }
}

/// The closed set of leaf shapes that produce a `CONFIG` line.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    Text(String),
    Bool(bool),
    /// Anything YAML can hold as an integer: `i64::MIN..=u64::MAX`.
    Int(i128),
    /// `[64, M]` in the document, `64M` on the wire.
    Size(i128, SizeUnit),
    Float(f64),
}

impl RecordValue {
    /// Classify a document leaf.
    ///
    /// Checks run in a fixed order: text, boolean, integer, size pair, float.
    /// Booleans are tested before integers so `true` never renders as a plain
    /// number. Any other shape (null, lists, tagged values) yields `None`.
    ///
    /// Scalars follow YAML 1.2: `on`, `yes` and `off` are text, `010` is text
    /// and `0o10` is the integer 8.
    pub fn infer(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(RecordValue::Text(s.clone())),
            Value::Bool(b) => Some(RecordValue::Bool(*b)),
            Value::Number(n) if !n.is_f64() => integer(n).map(RecordValue::Int),
            Value::Sequence(items) => size_pair(items),
            Value::Number(n) => n.as_f64().map(RecordValue::Float),
            _ => None,
        }
    }

    pub fn tag(&self) -> TypeTag {
        match self {
            RecordValue::Text(_) => TypeTag::String,
            RecordValue::Bool(_) | RecordValue::Int(_) | RecordValue::Size(..) => TypeTag::Int,
            RecordValue::Float(_) => TypeTag::Float,
        }
    }
}

impl fmt::Display for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordValue::Text(s) => f.write_str(s),
            RecordValue::Bool(b) => write!(f, "{}", u8::from(*b)),
            RecordValue::Int(i) => write!(f, "{i}"),
            RecordValue::Size(n, unit) => write!(f, "{n}{unit}"),
            // Shortest round-trip form, keeps the fractional part: 1.0, 0.5, 1e-7
            RecordValue::Float(x) => write!(f, "{x:?}"),
        }
    }
}

fn integer(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

fn size_pair(items: &[Value]) -> Option<RecordValue> {
    match items {
        [Value::Number(n), Value::String(unit)] if !n.is_f64() => {
            Some(RecordValue::Size(integer(n)?, unit.parse().ok()?))
        }
        _ => None,
    }
}
