//! Builds a CSV dataset of connpass events by walking a month range,
//! paging through the public event listing and scraping each event's
//! page for the fields the listing does not expose.

pub mod cli;
pub mod collector;
pub mod config;
pub mod connpass;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod month_range;
pub mod throttle;
