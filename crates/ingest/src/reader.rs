use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ripple_core::{Event, RawParams};
use serde_json::Value;
use tracing::{info, warn};

use crate::IngestError;

/// A parsed event log: the optional configuration record plus events in file order.
#[derive(Debug, Default)]
pub struct EventLog {
    pub params: Option<RawParams>,
    pub events: Vec<Event>,
}

/// Read one event log from disk.
///
/// Every line must be the configuration record or one of the three known
/// event types. An unrecognised `event_type` is not read as an unfriend: it
/// fails the whole read with [`IngestError::Malformed`] for that line.
pub fn read_event_log(path: &Path) -> Result<EventLog, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let log = parse_event_log(BufReader::new(file))?;
    info!("Read {} events from {}", log.events.len(), path.display());
    Ok(log)
}

/// Parse JSON lines. Blank lines are skipped; any other line that does not
/// parse is an error carrying its 1-based line number.
pub fn parse_event_log<R: BufRead>(reader: R) -> Result<EventLog, IngestError> {
    let mut log = EventLog::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let malformed = |source: serde_json::Error| IngestError::Malformed {
            line: line_no,
            source,
        };

        let value: Value = serde_json::from_str(trimmed).map_err(malformed)?;

        if is_config_record(&value) {
            let params: RawParams = serde_json::from_value(value).map_err(malformed)?;
            if log.params.is_some() {
                warn!(line = line_no, "repeated configuration record, later one wins");
            }
            log.params = Some(params);
            continue;
        }

        let event: Event = serde_json::from_value(value).map_err(malformed)?;
        log.events.push(event);
    }

    Ok(log)
}

fn is_config_record(value: &Value) -> bool {
    value.get("D").is_some()
}
