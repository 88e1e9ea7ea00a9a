use crate::configuration::Configuration;
use chrono::NaiveDate;
use clap::Parser;
use std::time::Duration;

const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Parser)]
pub struct ConfigurationHandler {
    /// Base URL of the booking service. Falls back to the API_URL
    /// environment variable.
    #[arg(long)]
    api_url: Option<String>,

    #[arg(long, default_value_t = 10)]
    request_timeout_secs: u64,

    /// Venue to inspect.
    #[arg(long, default_value_t = 1)]
    venue: i64,

    /// Date of the slot grid (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,
}

impl ConfigurationHandler {
    pub fn parse_arguments() -> Self {
        dotenvy::dotenv().ok();
        Self::parse()
    }

    pub fn venue_id(&self) -> i64 {
        self.venue
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }
}

impl Configuration for ConfigurationHandler {
    fn api_base_url(&self) -> String {
        self.api_url
            .clone()
            .or_else(|| std::env::var("API_URL").ok())
            .unwrap_or_else(|| DEFAULT_API_URL.into())
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
