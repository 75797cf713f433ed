use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::RippleError;

/// Opaque person identifier, exactly as it appears in the event log.
pub type PersonId = String;

/// Position of an event in the combined batch + stream history.
/// Lower is earlier.
pub type SeqIndex = u64;

/// A purchase amount: the parsed value plus the source text it came from.
///
/// Anomaly records echo the source text verbatim, so the two are kept together.
///
/// Only string amounts are accepted from the log. A bare JSON number would
/// lose its source formatting (`12.50` reads back as `12.5`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Amount {
    value: f64,
    raw: String,
}

impl Amount {
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl FromStr for Amount {
    type Err = RippleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| RippleError::InvalidAmount(s.to_string()))?;
        if !value.is_finite() || value < 0.0 {
            return Err(RippleError::InvalidAmount(s.to_string()));
        }
        Ok(Self {
            value,
            raw: s.to_string(),
        })
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl TryFrom<String> for Amount {
    type Error = RippleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A recorded purchase. Immutable once appended to a person's history.
#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    pub amount: Amount,
    /// Display-only; recency is decided by `seq`.
    pub timestamp: String,
    pub seq: SeqIndex,
}

/// One fact from the social network event log.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event_type", rename_all = "lowercase")]
pub enum Event {
    Befriend {
        timestamp: String,
        id1: PersonId,
        id2: PersonId,
    },
    Unfriend {
        timestamp: String,
        id1: PersonId,
        id2: PersonId,
    },
    Purchase {
        timestamp: String,
        id: PersonId,
        amount: Amount,
    },
}

impl Event {
    pub fn befriend(id1: impl Into<String>, id2: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Event::Befriend {
            timestamp: timestamp.into(),
            id1: id1.into(),
            id2: id2.into(),
        }
    }

    pub fn unfriend(id1: impl Into<String>, id2: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Event::Unfriend {
            timestamp: timestamp.into(),
            id1: id1.into(),
            id2: id2.into(),
        }
    }

    pub fn purchase(id: impl Into<String>, amount: Amount, timestamp: impl Into<String>) -> Self {
        Event::Purchase {
            timestamp: timestamp.into(),
            id: id.into(),
            amount,
        }
    }

    /// The `event_type` tag used in the log format.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Befriend { .. } => "befriend",
            Event::Unfriend { .. } => "unfriend",
            Event::Purchase { .. } => "purchase",
        }
    }

    pub fn timestamp(&self) -> &str {
        match self {
            Event::Befriend { timestamp, .. }
            | Event::Unfriend { timestamp, .. }
            | Event::Purchase { timestamp, .. } => timestamp,
        }
    }
}

/// An event paired with its position in the combined history.
#[derive(Debug, Clone, PartialEq)]
pub struct SequencedEvent {
    pub seq: SeqIndex,
    pub event: Event,
}
