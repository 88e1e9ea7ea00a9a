use crate::backend::VenueBackend;
use crate::configuration::Configuration;
use crate::error::BookingError;
use crate::session::Session;
use crate::types::{BookedInterval, Venue, VenuePhoto};
use chrono::{DateTime, NaiveDate, Utc};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BookingRequest {
    venue_id: i64,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BookingCreated {
    id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorPayload {
    error: String,
}

/// `VenueBackend` against the actual booking service.
#[derive(Clone)]
pub struct RestBackend {
    client: reqwest::Client,
    base_url: String,
}

impl RestBackend {
    pub fn new(configuration: &impl Configuration) -> Result<Self, BookingError> {
        let client = reqwest::Client::builder()
            .timeout(configuration.request_timeout())
            .build()
            .map_err(|err| BookingError::Network(err.to_string()))?;
        Ok(Self {
            client,
            base_url: configuration.api_base_url().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{path}", self.base_url)
    }

    async fn parse_or_error<D: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<D, BookingError> {
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        response
            .json()
            .await
            .map_err(|err| BookingError::Network(err.to_string()))
    }

    /// Maps a rejected response onto the error taxonomy. The server sends
    /// `{"error": "..."}` payloads; a missing or unreadable payload falls
    /// back to the status line.
    async fn error_from_response(response: reqwest::Response) -> BookingError {
        let status = response.status();
        let message = match response.json::<ErrorPayload>().await {
            Ok(payload) => payload.error,
            Err(_) => status.to_string(),
        };
        match status {
            StatusCode::UNAUTHORIZED => BookingError::Unauthenticated,
            StatusCode::CONFLICT => BookingError::Conflict(message),
            status if status.is_client_error() => BookingError::Validation(message),
            _ => BookingError::Network(message),
        }
    }
}

fn transport_error(err: reqwest::Error) -> BookingError {
    BookingError::Network(err.to_string())
}

impl VenueBackend for RestBackend {
    async fn venue(&self, venue_id: i64) -> Result<Venue, BookingError> {
        let response = self
            .client
            .get(self.url(&format!("/venues/{venue_id}")))
            .send()
            .await
            .map_err(transport_error)?;
        Self::parse_or_error(response).await
    }

    async fn venue_photos(&self, venue_id: i64) -> Result<Vec<VenuePhoto>, BookingError> {
        let response = self
            .client
            .get(self.url(&format!("/venues/{venue_id}/photos")))
            .send()
            .await
            .map_err(transport_error)?;
        Self::parse_or_error(response).await
    }

    async fn booked_intervals(
        &self,
        venue_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<BookedInterval>, BookingError> {
        debug!(venue_id, %date, "fetching booked intervals");
        let response = self
            .client
            .get(self.url(&format!("/venues/{venue_id}/slots")))
            .query(&[("date", date.format("%Y-%m-%d").to_string())])
            .send()
            .await
            .map_err(transport_error)?;
        Self::parse_or_error(response).await
    }

    async fn create_booking(
        &self,
        session: &Session,
        venue_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i64, BookingError> {
        let request = BookingRequest {
            venue_id,
            start_time: start,
            end_time: end,
        };
        let response = self
            .client
            .post(self.url("/bookings"))
            .bearer_auth(session.bearer_token())
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;
        let created: BookingCreated = Self::parse_or_error(response).await?;
        Ok(created.id)
    }
}
