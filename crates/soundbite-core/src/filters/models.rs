//! Filter Model Definitions
//!
//! Defines named audio filters with keyword parameters for FFmpeg filtergraphs.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Parameter Values
// =============================================================================

/// Filter parameter value types
///
/// Rendered with the value's natural string representation: integers without
/// a decimal point, floats with shortest round-trip precision (`2.82843`
/// stays `2.82843`, `2.0` renders as `2`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    String(String),
}

impl ParamValue {
    /// Attempts to get as f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Attempts to get as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Float(v) => Some(*v as i64),
            _ => None,
        }
    }

    /// Attempts to get as string reference
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

// =============================================================================
// Filter Instance
// =============================================================================

/// A named audio filter with ordered keyword parameters
///
/// Parameters keep construction order: the kind's defaults in their declared
/// order, then override-only keys in the order supplied. Overriding a known
/// key replaces its value in place; keys are never removed. Instances are
/// immutable after construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    kind: String,
    params: Vec<(String, ParamValue)>,
}

impl Filter {
    /// Creates a filter from a default parameter set merged with overrides
    pub fn new(
        kind: &str,
        defaults: &[(&str, ParamValue)],
        overrides: &[(&str, ParamValue)],
    ) -> Self {
        let mut params: Vec<(String, ParamValue)> = defaults
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect();

        for (name, value) in overrides {
            match params.iter_mut().find(|(existing, _)| existing == name) {
                Some(entry) => entry.1 = value.clone(),
                None => params.push((name.to_string(), value.clone())),
            }
        }

        Self {
            kind: kind.to_string(),
            params,
        }
    }

    /// Creates an `acompressor` dynamic-range compressor filter
    pub fn compressor(overrides: &[(&str, ParamValue)]) -> Self {
        Self::new(
            "acompressor",
            &[
                ("level_in", ParamValue::Int(1)),
                ("mode", ParamValue::String("downward".to_string())),
                ("threshold", ParamValue::Float(0.1)),
                ("ratio", ParamValue::Int(2)),
                ("attack", ParamValue::Int(20)),
                ("release", ParamValue::Int(250)),
                ("makeup", ParamValue::Int(1)),
                ("knee", ParamValue::Float(2.82843)),
                ("link", ParamValue::String("average".to_string())),
                ("detection", ParamValue::String("rms".to_string())),
                ("mix", ParamValue::Int(1)),
            ],
            overrides,
        )
    }

    /// Creates an `afade` fade-out filter
    pub fn fade_out(overrides: &[(&str, ParamValue)]) -> Self {
        Self::new(
            "afade",
            &[
                ("type", ParamValue::String("out".to_string())),
                ("start_time", ParamValue::Float(1.98)),
                ("duration", ParamValue::Float(0.02)),
                ("curve", ParamValue::String("tri".to_string())),
            ],
            overrides,
        )
    }

    /// Returns the filter kind identifier
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the parameters in serialization order
    pub fn params(&self) -> &[(String, ParamValue)] {
        &self.params
    }

    /// Gets a parameter value by name
    pub fn get_param(&self, name: &str) -> Option<&ParamValue> {
        self.params
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Renders the filter as one filtergraph segment
    ///
    /// Format: `<kind>=<k1>=<v1>:<k2>=<v2>:...`. Values are not quoted or
    /// escaped; callers must keep `=`, `:` and `,` out of parameter values.
    /// An empty parameter map yields a bare `<kind>=`.
    pub fn serialize(&self) -> String {
        let params: Vec<String> = self
            .params
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        format!("{}={}", self.kind, params.join(":"))
    }
}

// =============================================================================
// Tests
// =============================================================================
