use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use ripple_compute::AnomalyRecord;
use tracing::info;

use crate::IngestError;

/// Write one JSON object per record, newline-separated, no trailing newline.
pub fn write_anomalies<W: Write>(mut writer: W, records: &[AnomalyRecord]) -> Result<(), IngestError> {
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            writer.write_all(b"\n")?;
        }
        serde_json::to_writer(&mut writer, record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write records to `path`, creating parent directories as needed.
pub fn write_anomalies_to_path(path: &Path, records: &[AnomalyRecord]) -> Result<(), IngestError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    write_anomalies(BufWriter::new(file), records)?;
    info!("Wrote {} anomalies to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, amount: &str) -> AnomalyRecord {
        AnomalyRecord {
            event_type: "purchase".into(),
            timestamp: "2017-06-13 11:33:02".into(),
            id: id.into(),
            amount: amount.into(),
            mean: "29.10".into(),
            sd: "21.46".into(),
        }
    }

    #[test]
    fn one_object_per_line_without_trailing_newline() {
        let mut out = Vec::new();
        write_anomalies(&mut out, &[record("1", "1601.83"), record("2", "99.00")]).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"{"event_type":"purchase","timestamp":"2017-06-13 11:33:02","id":"1","amount":"1601.83","mean":"29.10","sd":"21.46"}"#
        );
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn no_records_writes_nothing() {
        let mut out = Vec::new();
        write_anomalies(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}
