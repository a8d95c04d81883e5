pub mod catalog;
pub mod client;
pub mod error;
pub mod extract;
pub mod platform;
pub mod probe;
pub mod scrape;
pub mod text;

pub use client::{FetchedPage, StoreClient, StoreUrl};
pub use error::ScrapeError;
pub use scrape::{ScrapeOutcome, StoreScraper};
