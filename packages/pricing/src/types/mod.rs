//! Data types for the pricing pipeline.

pub mod config;
pub mod detail;
pub mod record;
pub mod seed;

pub use config::ScrapeConfig;
pub use detail::{DetailArchive, DetailRecord};
pub use record::{Field, Record};
pub use seed::{SeedPrice, SeedPrices};
