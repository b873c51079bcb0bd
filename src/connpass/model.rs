use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// One dataset row. Field order is the column order of the CSV output.
///
/// The trailing `Option` columns come from scraping the event page; they
/// stay empty when the page could not be fetched.
#[derive(Debug, Clone, Serialize)]
pub struct EventRecord {
    pub event_id: u64,
    pub title: String,
    pub catch: String,
    pub event_url: String,
    pub hash_tag: String,
    pub limit: Option<u32>,
    pub address: String,
    pub place: String,
    pub lat: String,
    pub lon: String,
    pub accepted: u32,
    pub waiting: u32,
    pub started_at: Option<DateTime<FixedOffset>>,
    pub ended_at: Option<DateTime<FixedOffset>>,
    pub canceled: Option<u32>,
    pub lottery: Option<bool>,
    pub firstcome: Option<bool>,
    pub free: Option<bool>,
    pub prepaid: Option<bool>,
    pub postpaid: Option<bool>,
    pub amount: Option<u32>,
}

/// Fields read off an event's page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventDetails {
    pub canceled: u32,
    pub registration: RegistrationMethod,
    pub payment: Option<PaymentMethod>,
    pub amount: u32,
}

#[derive(strum::IntoStaticStr, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationMethod {
    Lottery,
    FirstCome,
    #[default]
    Free,
}

#[derive(strum::IntoStaticStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Prepaid,
    OnSite,
}
