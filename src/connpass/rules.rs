use super::model::{EventDetails, PaymentMethod, RegistrationMethod};
use lazy_static::lazy_static;
use regex::Regex;
use scraper::{Html, Selector};

// Markers as rendered on the Japanese-only event pages.
const LOTTERY_KEYWORD: &str = "抽選";
const FIRST_COME_KEYWORD: &str = "先着";
const PREPAID_MARKER: &str = "（前払い）";
const ON_SITE_MARKER: &str = "（会場払い）";

lazy_static! {
    static ref PARTICIPANTS_SELECTOR: Selector = Selector::parse("p.participants").unwrap();
    static ref JOIN_FEE_SELECTOR: Selector = Selector::parse("p.join_fee").unwrap();
    static ref ANCHOR_SELECTOR: Selector = Selector::parse("a[href]").unwrap();
    static ref NON_DIGITS: Regex = Regex::new(r"\D").unwrap();
}

/// A single extraction pass over a parsed event page.
///
/// Each rule owns the fields it fills in, so a markup change on the site
/// stays contained to the rule reading the affected block.
pub trait ExtractionRule: Send + Sync {
    fn apply(&self, page: &Html, event_url: &str, details: &mut EventDetails);
}

/// The rules applied to every event page, in order.
pub fn default_rules() -> Vec<Box<dyn ExtractionRule>> {
    vec![
        Box::new(CancelledCountRule),
        Box::new(RegistrationMethodRule),
        Box::new(FeeRule),
    ]
}

/// Reads the cancelled participant count off the anchor linking to the
/// page's cancellation section. No anchor means nobody cancelled.
pub struct CancelledCountRule;

impl ExtractionRule for CancelledCountRule {
    fn apply(&self, page: &Html, event_url: &str, details: &mut EventDetails) {
        let cancelled_href = format!("{}participation/#cancelled", event_url);

        let anchor = page
            .select(&ANCHOR_SELECTOR)
            .find(|anchor| anchor.value().attr("href") == Some(cancelled_href.as_str()));

        if let Some(anchor) = anchor {
            details.canceled = extract_digits(&anchor.text().collect::<String>());
        }
    }
}

/// Classifies how participants get in: the first participants block naming
/// a lottery or first-come order wins; a page naming neither is free entry.
pub struct RegistrationMethodRule;

impl ExtractionRule for RegistrationMethodRule {
    fn apply(&self, page: &Html, _event_url: &str, details: &mut EventDetails) {
        for block in page.select(&PARTICIPANTS_SELECTOR) {
            let text = block.text().collect::<String>();

            if text.contains(LOTTERY_KEYWORD) {
                details.registration = RegistrationMethod::Lottery;
                return;
            }

            if text.contains(FIRST_COME_KEYWORD) {
                details.registration = RegistrationMethod::FirstCome;
                return;
            }
        }
    }
}

/// Reads the payment method and fee from the first fee block carrying a
/// payment marker, e.g. "3,000円（前払い）".
pub struct FeeRule;

impl ExtractionRule for FeeRule {
    fn apply(&self, page: &Html, _event_url: &str, details: &mut EventDetails) {
        for block in page.select(&JOIN_FEE_SELECTOR) {
            let text = block.text().collect::<String>();

            if text.contains(PREPAID_MARKER) {
                details.payment = Some(PaymentMethod::Prepaid);
                details.amount = extract_digits(&text);
                return;
            }

            if text.contains(ON_SITE_MARKER) {
                details.payment = Some(PaymentMethod::OnSite);
                details.amount = extract_digits(&text);
                return;
            }
        }
    }
}

fn extract_digits(text: &str) -> u32 {
    NON_DIGITS.replace_all(text, "").parse().unwrap_or(0)
}
