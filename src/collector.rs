use crate::config::model::Config;
use crate::connpass::api::ConnpassAPI;
use crate::connpass::model::EventRecord;
use crate::connpass::scraper::EventPageScraper;
use crate::dataset::{self, Dataset, SNAPSHOT_FILE_NAME};
use crate::error::CollectError;
use crate::month_range::{month_range, YearMonth};
use crate::throttle::Throttle;
use itertools::Itertools;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// Walks the month range and gathers one dataset row per listed
/// participation event, scraping each event's page along the way.
pub struct Collector {
    api: ConnpassAPI,
    scraper: EventPageScraper,
    dataset_dir: PathBuf,
    save_monthly_snapshot: bool,
    event_limit: Option<usize>,
}

impl Collector {
    pub fn new(config: &Config) -> Self {
        let throttle = Throttle::new(config.request_interval);

        Self::with_parts(
            ConnpassAPI::new(config.page_size, throttle.clone()),
            EventPageScraper::new(throttle),
            config,
        )
    }

    pub fn with_parts(api: ConnpassAPI, scraper: EventPageScraper, config: &Config) -> Self {
        Self {
            api,
            scraper,
            dataset_dir: config.dataset_dir.clone(),
            save_monthly_snapshot: config.save_monthly_snapshot,
            event_limit: config.debug_config.event_limit,
        }
    }

    #[instrument(skip(self))]
    pub async fn collect(&self, start: YearMonth, end: YearMonth) -> Result<Dataset, CollectError> {
        let months: Vec<YearMonth> = month_range(start, end).collect();

        info!(
            "Collecting {} months: [{}]",
            months.len(),
            months.iter().join(", ")
        );

        let mut dataset = Dataset::new();

        for ym in months {
            let records = self.collect_month(ym).await?;

            if self.save_monthly_snapshot {
                dataset::append_snapshot(&self.dataset_dir.join(SNAPSHOT_FILE_NAME), &records)?;
            }

            dataset.extend(records);
        }

        info!("Collected {} events in total", dataset.len());

        Ok(dataset)
    }

    async fn collect_month(&self, ym: YearMonth) -> Result<Vec<EventRecord>, CollectError> {
        let mut events = self.api.get_month_events(ym).await?;

        if let Some(limit) = self.event_limit {
            if events.len() > limit {
                debug!("Limiting {} to its first {} events", ym, limit);
                events.truncate(limit);
            }
        }

        let mut records = Vec::with_capacity(events.len());

        for event in events {
            let details = self.scraper.scrape(&event.event_url).await;
            records.push(event.to_record(details));
        }

        Ok(records)
    }
}
