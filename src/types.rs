use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub sport_category: String,
    pub description: String,
    pub address: String,
    pub price_per_hour: f64,
    #[serde(flatten)]
    pub operating_hours: OperatingHours,
}

/// Daily booking window of a venue, hour granularity, 24h clock ("09:00").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatingHours {
    pub opening_time: String,
    pub closing_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch_start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch_end_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenuePhoto {
    pub id: i64,
    pub image_url: String,
}

/// Half-open interval `[start_time, end_time)` of an existing reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookedInterval {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Canceled,
}

impl BookingStatus {
    /// Pending bookings hold their slot before payment; only canceled
    /// bookings free it up again.
    pub fn blocks_slot(&self) -> bool {
        !matches!(self, BookingStatus::Canceled)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub venue_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: BookingStatus,
}

impl Booking {
    pub fn interval(&self) -> BookedInterval {
        BookedInterval {
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}
