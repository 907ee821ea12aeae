// Time series domain model
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Timestamp as sent by the data endpoint, passed through untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Number(serde_json::Number),
    Text(String),
}

impl From<i64> for Timestamp {
    fn from(value: i64) -> Self {
        Timestamp::Number(value.into())
    }
}

impl From<&str> for Timestamp {
    fn from(value: &str) -> Self {
        Timestamp::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub t: Timestamp,
    pub y: Option<f64>,
}

impl SeriesPoint {
    pub fn new(t: impl Into<Timestamp>, y: Option<f64>) -> Self {
        Self { t: t.into(), y }
    }
}

pub type Series = Vec<SeriesPoint>;

/// Why a response body could not be reshaped
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeProblem {
    #[error("response is not a JSON object")]
    NotAnObject,
    #[error("missing \"Time\" array")]
    MissingTime,
    #[error("missing data array for field")]
    MissingField,
    #[error("Time[{0}] is neither a number nor a string")]
    BadTimestamp(usize),
}

/// Result of zipping the "Time" array with a field's values
#[derive(Debug, Clone, PartialEq)]
pub struct Reshaped {
    pub points: Series,
    /// Length of the field array when it disagreed with "Time"
    pub mismatch: Option<usize>,
}

/// Pair `Time[i]` with `body[field][i]` for every index of the Time array.
///
/// The Time array bounds the output: missing trailing values become `None`
/// and surplus values are dropped. Non-numeric values are also `None`.
pub fn reshape(body: &serde_json::Value, field: &str) -> Result<Reshaped, ShapeProblem> {
    let object = body.as_object().ok_or(ShapeProblem::NotAnObject)?;
    let times = object
        .get("Time")
        .and_then(|v| v.as_array())
        .ok_or(ShapeProblem::MissingTime)?;
    let values = object
        .get(field)
        .and_then(|v| v.as_array())
        .ok_or(ShapeProblem::MissingField)?;

    let mut points = Vec::with_capacity(times.len());
    for (i, time) in times.iter().enumerate() {
        let t = match time {
            serde_json::Value::Number(n) => Timestamp::Number(n.clone()),
            serde_json::Value::String(s) => Timestamp::Text(s.clone()),
            _ => return Err(ShapeProblem::BadTimestamp(i)),
        };
        let y = values.get(i).and_then(|v| v.as_f64());
        points.push(SeriesPoint::new(t, y));
    }

    let mismatch = (values.len() != times.len()).then_some(values.len());
    Ok(Reshaped { points, mismatch })
}
