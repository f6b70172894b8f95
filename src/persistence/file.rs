use super::{PersistenceError, PersistenceResult};
use crate::item::{self, ScheduleItem};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

const FIELD_COUNT: usize = 4;

/// Text-field mirror of a `ScheduleItem`, shared by both file formats. Day
/// and time are stored in their canonical text forms.
#[derive(Serialize, Deserialize)]
struct ItemRecord {
    day: String,
    time: String,
    subject: String,
    classroom: String,
}

impl From<&ScheduleItem> for ItemRecord {
    fn from(item: &ScheduleItem) -> Self {
        Self {
            day: item::format_day(item.day).to_string(),
            time: item::format_time(item.time),
            subject: item.subject.clone(),
            classroom: item.classroom.clone(),
        }
    }
}

impl ItemRecord {
    fn into_item(self) -> PersistenceResult<ScheduleItem> {
        let day = item::parse_day(&self.day)
            .ok_or_else(|| PersistenceError::InvalidData(format!("invalid day '{}'", self.day)))?;
        let time = item::parse_time(&self.time).ok_or_else(|| {
            PersistenceError::InvalidData(format!("invalid time '{}'", self.time))
        })?;
        Ok(ScheduleItem {
            day,
            time,
            subject: self.subject,
            classroom: self.classroom,
        })
    }
}

/// Write one `<Day>,<Time>,<Subject>,<Classroom>` line per item, overwriting
/// any file at `path`. Quoting is disabled so the output is a plain comma
/// join; embedded commas in subject or classroom are not escaped.
pub fn save_items_to_csv<P: AsRef<Path>>(
    items: &[ScheduleItem],
    path: P,
) -> PersistenceResult<()> {
    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(file);
    for item in items {
        writer.serialize(ItemRecord::from(item))?;
    }
    writer.flush()?;
    Ok(())
}

/// Read the comma-delimited format back. A line becomes an item only if it
/// has exactly four fields and its day and time parse; every other line is
/// skipped. I/O failures propagate.
pub fn load_items_from_csv<P: AsRef<Path>>(path: P) -> PersistenceResult<Vec<ScheduleItem>> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(file);

    let mut items = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                debug!("skipping unreadable record on line {}: {err}", idx + 1);
                continue;
            }
        };
        if record.len() != FIELD_COUNT {
            debug!(
                "skipping line {} with {} fields instead of {FIELD_COUNT}",
                idx + 1,
                record.len()
            );
            continue;
        }
        let raw = ItemRecord {
            day: record[0].to_string(),
            time: record[1].to_string(),
            subject: record[2].to_string(),
            classroom: record[3].to_string(),
        };
        match raw.into_item() {
            Ok(item) => items.push(item),
            Err(err) => debug!("skipping line {}: {err}", idx + 1),
        }
    }
    Ok(items)
}

pub fn save_items_to_json<P: AsRef<Path>>(
    items: &[ScheduleItem],
    path: P,
) -> PersistenceResult<()> {
    let records: Vec<ItemRecord> = items.iter().map(ItemRecord::from).collect();
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &records)?;
    Ok(())
}

/// Unlike the comma format, the JSON snapshot is strict: any record that
/// fails to convert fails the whole load.
pub fn load_items_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<Vec<ScheduleItem>> {
    let file = File::open(path)?;
    let records: Vec<ItemRecord> = serde_json::from_reader(file)?;
    records.into_iter().map(ItemRecord::into_item).collect()
}
