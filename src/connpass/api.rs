use super::dto::{EventsResponse, ResponseEvent};
use crate::error::CollectError;
use crate::month_range::YearMonth;
use crate::throttle::Throttle;
use reqwest::Client;
use tracing::{debug, error, info, instrument, warn};

const CONNPASS_EVENTS_URL: &str = "https://connpass.com/api/v1/event/";
const PARTICIPATION_EVENT_TYPE: &str = "participation";

pub struct ConnpassAPI {
    client: Client,
    base_url: String,
    page_size: u32,
    throttle: Throttle,
}

impl ConnpassAPI {
    pub fn new(page_size: u32, throttle: Throttle) -> Self {
        Self::with_base_url(CONNPASS_EVENTS_URL, page_size, throttle)
    }

    pub fn with_base_url(base_url: impl Into<String>, page_size: u32, throttle: Throttle) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            page_size,
            throttle,
        }
    }

    /**
    Returns the month's participation events in listing order
    * a failed or empty count probe yields an empty month
    * a failed page query is an error, so a month is never half-collected silently
    */
    #[instrument(skip(self))]
    pub async fn get_month_events(&self, ym: YearMonth) -> Result<Vec<ResponseEvent>, CollectError> {
        let available = match self.query_page(ym, 1, 1).await {
            Ok(probe) => probe.results_available,
            Err(err) => {
                warn!("Event count query failed, treating the month as empty: {err}");
                return Ok(Vec::new());
            }
        };

        if available == 0 {
            info!("No events listed");
            return Ok(Vec::new());
        }

        info!("Getting {} listed events", available);

        // The claimed total is only trusted as a paging bound.
        let mut events = Vec::new();
        let mut offset = 1;

        while offset <= available {
            let page = self.query_page(ym, offset, self.page_size).await?;

            debug!(
                "Fetched page: start={}, returned={}",
                page.results_start, page.results_returned
            );

            events.extend(
                page.events
                    .into_iter()
                    .filter(|event| event.event_type == PARTICIPATION_EVENT_TYPE),
            );

            offset += self.page_size;
        }

        info!("Retained {} participation events", events.len());

        Ok(events)
    }

    async fn query_page(
        &self,
        ym: YearMonth,
        start: u32,
        count: u32,
    ) -> Result<EventsResponse, CollectError> {
        self.throttle.wait().await;

        let json_response = self
            .client
            .get(format!(
                "{}?ym={}&start={}&count={}",
                self.base_url, ym, start, count
            ))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        match serde_json::from_str::<EventsResponse>(&json_response) {
            Ok(parsed_response) => Ok(parsed_response),
            Err(e) => {
                error!("Response parse failed: {:?}", e);
                Err(CollectError::InvalidResponse(e))
            }
        }
    }
}
