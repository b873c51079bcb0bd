use crate::connpass::model::EventRecord;
use crate::error::CollectError;
use std::fs::OpenOptions;
use std::path::Path;

pub const DATASET_FILE_NAME: &str = "dataset.csv";
pub const SNAPSHOT_FILE_NAME: &str = "dataset_temp.csv";

/// The schema row. Stays in `EventRecord` field order.
const COLUMNS: [&str; 21] = [
    "event_id",
    "title",
    "catch",
    "event_url",
    "hash_tag",
    "limit",
    "address",
    "place",
    "lat",
    "lon",
    "accepted",
    "waiting",
    "started_at",
    "ended_at",
    "canceled",
    "lottery",
    "firstcome",
    "free",
    "prepaid",
    "postpaid",
    "amount",
];

/// Collected rows in arrival order. Nothing is deduplicated: an event
/// listed under two months of the range appears twice, as listed.
#[derive(Debug, Default)]
pub struct Dataset {
    records: Vec<EventRecord>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, records: Vec<EventRecord>) {
        self.records.extend(records);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    /// Writes every record under the schema header. An empty dataset
    /// writes the header row alone.
    pub fn write_csv(&self, path: &Path) -> Result<(), CollectError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)?;

        writer.write_record(COLUMNS)?;

        for record in &self.records {
            writer.serialize(record)?;
        }

        writer.flush()?;

        Ok(())
    }
}

/// Appends rows to the running snapshot file, writing the header row only
/// while the file is missing or still empty. An append with no rows still
/// leaves the header in place for the months after it.
pub fn append_snapshot(path: &Path, records: &[EventRecord]) -> Result<(), CollectError> {
    let needs_header = match path.metadata() {
        Ok(meta) => meta.len() == 0,
        Err(_) => true,
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if needs_header {
        writer.write_record(COLUMNS)?;
    }

    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(event_id: u64) -> EventRecord {
        EventRecord {
            event_id,
            title: format!("イベント {}", event_id),
            catch: String::new(),
            event_url: format!("https://connpass.com/event/{}/", event_id),
            hash_tag: "rustlang".to_string(),
            limit: Some(20),
            address: "東京都".to_string(),
            place: "会議室A".to_string(),
            lat: "35.6".to_string(),
            lon: "139.7".to_string(),
            accepted: 18,
            waiting: 2,
            started_at: None,
            ended_at: None,
            canceled: Some(1),
            lottery: Some(false),
            firstcome: Some(true),
            free: Some(false),
            prepaid: Some(false),
            postpaid: Some(true),
            amount: Some(1000),
        }
    }

    #[test_log::test]
    fn should_write_one_row_per_record_under_the_schema_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DATASET_FILE_NAME);

        let mut dataset = Dataset::new();
        dataset.extend(vec![record(1), record(2), record(3)]);
        dataset.write_csv(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();

        assert_eq!(
            lines.next().unwrap(),
            "event_id,title,catch,event_url,hash_tag,limit,address,place,lat,lon,\
             accepted,waiting,started_at,ended_at,canceled,lottery,firstcome,free,\
             prepaid,postpaid,amount"
        );
        assert_eq!(lines.count(), 3);
    }

    #[test_log::test]
    fn should_leave_unscraped_columns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DATASET_FILE_NAME);

        let mut unscraped = record(7);
        unscraped.canceled = None;
        unscraped.lottery = None;
        unscraped.firstcome = None;
        unscraped.free = None;
        unscraped.prepaid = None;
        unscraped.postpaid = None;
        unscraped.amount = None;

        let mut dataset = Dataset::new();
        dataset.extend(vec![unscraped]);
        dataset.write_csv(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let row = content.lines().nth(1).unwrap();

        assert!(row.ends_with(",,,,,,,"), "{}", row);
    }

    #[test_log::test]
    fn when_the_dataset_is_empty_should_still_write_the_schema_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DATASET_FILE_NAME);

        Dataset::new().write_csv(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();

        assert!(content.starts_with("event_id,title,"), "{}", content);
        assert_eq!(content.lines().count(), 1);
    }

    #[test_log::test]
    fn should_write_the_snapshot_header_only_once_across_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SNAPSHOT_FILE_NAME);

        append_snapshot(&path, &[record(1)]).unwrap();
        append_snapshot(&path, &[record(2), record(3)]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let header_count = content
            .lines()
            .filter(|line| line.starts_with("event_id,"))
            .count();

        assert_eq!(header_count, 1);
        assert_eq!(content.lines().count(), 4);
    }

    #[test_log::test]
    fn when_the_first_snapshot_append_is_empty_should_not_lose_the_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SNAPSHOT_FILE_NAME);

        append_snapshot(&path, &[]).unwrap();
        append_snapshot(&path, &[record(1)]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();

        assert!(content.starts_with("event_id,title,"), "{}", content);
        assert_eq!(content.lines().count(), 2);
    }
}
