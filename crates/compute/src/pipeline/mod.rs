//! Event replay pipeline.
//!
//! - [`history`] builds the starting graph from the batch log.
//! - [`stream`] replays live events, scoring each purchase first.
//! - [`anomaly`] makes the per-purchase threshold decision.

pub mod anomaly;
pub mod history;
pub mod stream;

use ripple_core::{Event, SeqIndex, SequencedEvent};

pub use anomaly::{evaluate, AnomalyRecord, ANOMALY_SIGMA};
pub use history::build_history;
pub use stream::{process_stream, StreamProcessor};

/// Number events by position, starting at `offset`.
pub fn sequence_from<I>(offset: SeqIndex, events: I) -> impl Iterator<Item = SequencedEvent>
where
    I: IntoIterator<Item = Event>,
{
    (offset..)
        .zip(events)
        .map(|(seq, event)| SequencedEvent { seq, event })
}
