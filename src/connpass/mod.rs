pub mod api;
pub mod dto;
pub mod model;
pub mod rules;
pub mod scraper;
