//! Event log input and anomaly output.
//!
//! Both sides speak JSON lines: one event (or the configuration record) per
//! input line, one anomaly record per output line.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::IngestError;
pub use reader::{parse_event_log, read_event_log, EventLog};
pub use writer::{write_anomalies, write_anomalies_to_path};
