//! # Parameter Parsing
//!
//! Converts the free-form `key=value` tokens callers pass alongside a mode
//! name into a typed [`ParamMap`].
//!
//! Values are interpreted as closed-form literals only, tried in order:
//! boolean (`true`/`false`), integer, float, and finally the raw string
//! verbatim. There is no expression evaluation path. A token like
//! `radius=abc` therefore parses fine (as a string); the type error surfaces
//! later, at the accessor inside the algorithm that expected a number.
//!
//! Tokens without `=` are ignored. Duplicate keys keep the last value.

use serde::Serialize;
use std::collections::HashMap;

/// A single parsed parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Bool(b) => write!(f, "{b}"),
            ParamValue::Int(i) => write!(f, "{i}"),
            ParamValue::Float(x) => write!(f, "{x}"),
            ParamValue::Str(s) => write!(f, "\"{s}\""),
        }
    }
}

/// A parameter was present but held a value of the wrong type.
///
/// Carries enough context for the caller to surface a useful message
/// verbatim, e.g. `invalid value for 'radius': expected a number, got "abc"`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamTypeError {
    pub key: String,
    pub expected: &'static str,
    pub got: String,
}

impl std::fmt::Display for ParamTypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid value for '{}': expected {}, got {}",
            self.key, self.expected, self.got
        )
    }
}

impl std::error::Error for ParamTypeError {}

/// Typed parameter mapping built fresh per invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamMap(HashMap<String, ParamValue>);

impl ParamMap {
    /// Parse a sequence of `key=value` tokens.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut map = HashMap::new();
        for token in tokens {
            let Some((key, value)) = token.as_ref().split_once('=') else {
                continue;
            };
            map.insert(key.to_string(), parse_value(value));
        }
        ParamMap(map)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// Boolean parameter; `None` when absent.
    pub fn get_bool(&self, key: &str) -> Result<Option<bool>, ParamTypeError> {
        match self.0.get(key) {
            None => Ok(None),
            Some(ParamValue::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(self.type_error(key, "a boolean", other)),
        }
    }

    /// Integer parameter; `None` when absent. Floats do not coerce.
    pub fn get_i64(&self, key: &str) -> Result<Option<i64>, ParamTypeError> {
        match self.0.get(key) {
            None => Ok(None),
            Some(ParamValue::Int(i)) => Ok(Some(*i)),
            Some(other) => Err(self.type_error(key, "an integer", other)),
        }
    }

    /// Float parameter; `None` when absent. Integers coerce losslessly.
    pub fn get_f64(&self, key: &str) -> Result<Option<f64>, ParamTypeError> {
        match self.0.get(key) {
            None => Ok(None),
            Some(ParamValue::Float(x)) => Ok(Some(*x)),
            Some(ParamValue::Int(i)) => Ok(Some(*i as f64)),
            Some(other) => Err(self.type_error(key, "a number", other)),
        }
    }

    /// Non-negative integer parameter that must fit in u32; `None` when absent.
    pub fn get_u32(&self, key: &str) -> Result<Option<u32>, ParamTypeError> {
        match self.get_i64(key)? {
            None => Ok(None),
            Some(i) => u32::try_from(i).map(Some).map_err(|_| ParamTypeError {
                key: key.to_string(),
                expected: "a non-negative integer",
                got: i.to_string(),
            }),
        }
    }

    fn type_error(&self, key: &str, expected: &'static str, got: &ParamValue) -> ParamTypeError {
        ParamTypeError {
            key: key.to_string(),
            expected,
            got: got.to_string(),
        }
    }
}

/// Interpret one right-hand side as a literal.
fn parse_value(value: &str) -> ParamValue {
    match value {
        "true" => return ParamValue::Bool(true),
        "false" => return ParamValue::Bool(false),
        _ => {}
    }
    if let Ok(i) = value.parse::<i64>() {
        return ParamValue::Int(i);
    }
    if let Ok(x) = value.parse::<f64>() {
        // "nan"/"inf" pass f64::from_str; keep those as opaque strings
        if x.is_finite() {
            return ParamValue::Float(x);
        }
    }
    ParamValue::Str(value.to_string())
}

/// Documentation for one mode parameter, shown in the mode catalog.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ParamDoc {
    pub name: &'static str,
    pub default: &'static str,
    pub help: &'static str,
}

/// Catalog record for one registered mode.
#[derive(Debug, Clone, Serialize)]
pub struct ModeInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub params: &'static [ParamDoc],
}
