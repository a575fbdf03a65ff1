//! Scryfall search queries, page fetching and request pacing.

pub mod client;
pub mod error;
pub mod pacing;
pub mod paginate;
pub mod query;

pub use client::{decode_page, PageSource, ScryfallClient};
pub use error::ScryfallError;
pub use pacing::{pacer_for, FixedDelay, NoDelay, Pacer};
pub use paginate::fetch_all;
pub use query::{Category, Query, API_BASE};
