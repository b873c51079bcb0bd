use super::model::{EventDetails, EventRecord, PaymentMethod, RegistrationMethod};
use chrono::{DateTime, FixedOffset};
use serde::de;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

/// One page of the event listing.
#[derive(Debug, Deserialize)]
pub struct EventsResponse {
    pub results_returned: u32,
    pub results_available: u32,
    pub results_start: u32,
    pub events: Vec<ResponseEvent>,
}

// Note: some String fields need the custom deserializer due to being nullable
#[derive(Debug, Deserialize)]
pub struct ResponseEvent {
    pub event_id: u64,
    pub title: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub catch: String,
    pub event_url: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub hash_tag: String,
    pub event_type: String,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub started_at: Option<DateTime<FixedOffset>>,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub ended_at: Option<DateTime<FixedOffset>>,
    pub limit: Option<u32>,
    #[serde(deserialize_with = "deserialize_str")]
    pub address: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub place: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub lat: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub lon: String,
    pub accepted: u32,
    pub waiting: u32,
}

impl ResponseEvent {
    /// Merges the listing fields with the scraped page fields into a row.
    /// Scraping `None` leaves every page-derived column empty.
    pub fn to_record(self, details: Option<EventDetails>) -> EventRecord {
        let (canceled, lottery, firstcome, free, prepaid, postpaid, amount) = match details {
            Some(details) => (
                Some(details.canceled),
                Some(details.registration == RegistrationMethod::Lottery),
                Some(details.registration == RegistrationMethod::FirstCome),
                Some(details.registration == RegistrationMethod::Free),
                Some(details.payment == Some(PaymentMethod::Prepaid)),
                Some(details.payment == Some(PaymentMethod::OnSite)),
                Some(details.amount),
            ),
            None => (None, None, None, None, None, None, None),
        };

        EventRecord {
            event_id: self.event_id,
            title: self.title,
            catch: self.catch,
            event_url: self.event_url,
            hash_tag: self.hash_tag,
            limit: self.limit,
            address: self.address,
            place: self.place,
            lat: self.lat,
            lon: self.lon,
            accepted: self.accepted,
            waiting: self.waiting,
            started_at: self.started_at,
            ended_at: self.ended_at,
            canceled,
            lottery,
            firstcome,
            free,
            prepaid,
            postpaid,
            amount,
        }
    }
}

fn deserialize_str<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

fn deserialize_datetime<'de, D>(d: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(d)? {
        Value::String(s) => {
            if s.is_empty() {
                return Ok(None);
            }

            Ok(DateTime::parse_from_rfc3339(&s)
                .map(Some)
                .unwrap_or_else(|err| {
                    warn!("Failed to parse timestamp. Err: {err}");
                    None
                }))
        }
        Value::Null => Ok(None),
        unknown => Err(de::Error::custom(format!(
            "Found an unknown data type: {}",
            unknown
        ))),
    }
}
