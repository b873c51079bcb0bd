use super::model::EventDetails;
use super::rules::{default_rules, ExtractionRule};
use crate::throttle::Throttle;
use reqwest::Client;
use scraper::Html;
use tracing::{debug, instrument, warn};

/// Fetches event pages and runs the extraction rules over them.
pub struct EventPageScraper {
    client: Client,
    throttle: Throttle,
    rules: Vec<Box<dyn ExtractionRule>>,
}

impl EventPageScraper {
    pub fn new(throttle: Throttle) -> Self {
        Self::with_rules(throttle, default_rules())
    }

    pub fn with_rules(throttle: Throttle, rules: Vec<Box<dyn ExtractionRule>>) -> Self {
        Self {
            client: Client::new(),
            throttle,
            rules,
        }
    }

    /// Scrapes one event page. A page that cannot be fetched is logged and
    /// reported as `None`; the event still makes it into the dataset with
    /// the page-derived columns empty.
    #[instrument(skip(self))]
    pub async fn scrape(&self, event_url: &str) -> Option<EventDetails> {
        self.throttle.wait().await;

        let page_html = match self.fetch_event_page(event_url).await {
            Ok(html) => html,
            Err(err) => {
                warn!("Event page fetch failed, leaving its columns empty: {err}");
                return None;
            }
        };

        let page = Html::parse_document(&page_html);
        let mut details = EventDetails::default();

        for rule in &self.rules {
            rule.apply(&page, event_url, &mut details);
        }

        let registration: &'static str = details.registration.into();
        let payment = details
            .payment
            .map(<&'static str>::from)
            .unwrap_or("unpriced");

        debug!(
            "Scraped page: registration={}, payment={}, amount={}, canceled={}",
            registration, payment, details.amount, details.canceled
        );

        Some(details)
    }

    async fn fetch_event_page(&self, url: &str) -> Result<String, reqwest::Error> {
        self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }
}
