use serde::{Deserialize, Deserializer};

use crate::RippleError;

/// Smallest meaningful network degree (direct friends only).
pub const MIN_DEGREE: u32 = 1;

/// Smallest purchase window that can yield a standard deviation.
pub const MIN_WINDOW: u32 = 2;

/// Validated detection parameters.
///
/// Construction is the only place `D` and `T` are checked, so anything
/// holding a `DetectionParams` can rely on `degree >= 1` and `window >= 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectionParams {
    degree: u32,
    window: u32,
}

impl DetectionParams {
    pub fn new(degree: u32, window: u32) -> Result<Self, RippleError> {
        if degree < MIN_DEGREE {
            return Err(RippleError::InvalidConfig(format!(
                "network degree D must be >= {}, got {}",
                MIN_DEGREE, degree
            )));
        }
        if window < MIN_WINDOW {
            return Err(RippleError::InvalidConfig(format!(
                "purchase window T must be >= {}, got {}",
                MIN_WINDOW, window
            )));
        }
        Ok(Self { degree, window })
    }

    /// Combine the log's configuration record with explicit overrides.
    ///
    /// An override wins over the record; a value missing from both is an error.
    pub fn resolve(
        record: Option<RawParams>,
        degree: Option<u32>,
        window: Option<u32>,
    ) -> Result<Self, RippleError> {
        let degree = match (degree, record) {
            (Some(d), _) => d,
            (None, Some(raw)) => to_u32("D", raw.degree)?,
            (None, None) => {
                return Err(RippleError::InvalidConfig(
                    "network degree D not given and no configuration record found".into(),
                ))
            }
        };
        let window = match (window, record) {
            (Some(t), _) => t,
            (None, Some(raw)) => to_u32("T", raw.window)?,
            (None, None) => {
                return Err(RippleError::InvalidConfig(
                    "purchase window T not given and no configuration record found".into(),
                ))
            }
        };
        Self::new(degree, window)
    }

    /// Network degree `D`.
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Purchase window `T`.
    pub fn window(&self) -> usize {
        self.window as usize
    }
}

/// The configuration record at the head of a batch log, e.g. `{"D":"3", "T":"50"}`.
///
/// Values arrive as strings or integers and are only range-checked by
/// [`DetectionParams::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RawParams {
    #[serde(rename = "D", deserialize_with = "int_or_string")]
    pub degree: i64,
    #[serde(rename = "T", deserialize_with = "int_or_string")]
    pub window: i64,
}

fn to_u32(name: &str, value: i64) -> Result<u32, RippleError> {
    u32::try_from(value).map_err(|_| {
        RippleError::InvalidConfig(format!("{} out of range: {}", name, value))
    })
}

fn int_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Int(i64),
        Text(String),
    }

    match Repr::deserialize(deserializer)? {
        Repr::Int(v) => Ok(v),
        Repr::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("expected an integer, got {:?}", s))),
    }
}
