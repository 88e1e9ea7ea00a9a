use crate::error::BookingError;
use crate::session::Session;
use crate::types::{BookedInterval, Venue, VenuePhoto};
use chrono::{DateTime, NaiveDate, Utc};

/// Seam to the external booking service. The server is the sole authority
/// on slot occupancy; everything read through here is advisory.
pub trait VenueBackend: Clone + Send + Sync + 'static {
    fn venue(
        &self,
        venue_id: i64,
    ) -> impl std::future::Future<Output = Result<Venue, BookingError>> + Send;

    fn venue_photos(
        &self,
        venue_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<VenuePhoto>, BookingError>> + Send;

    /// Booked intervals of one calendar day, newest server state.
    fn booked_intervals(
        &self,
        venue_id: i64,
        date: NaiveDate,
    ) -> impl std::future::Future<Output = Result<Vec<BookedInterval>, BookingError>> + Send;

    /// Creates a booking for `[start, end)` if the interval is still free.
    fn create_booking(
        &self,
        session: &Session,
        venue_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> impl std::future::Future<Output = Result<i64, BookingError>> + Send;

    /// Venue details and photos are independent read-only resources, so
    /// both requests run concurrently.
    fn venue_with_photos(
        &self,
        venue_id: i64,
    ) -> impl std::future::Future<Output = Result<(Venue, Vec<VenuePhoto>), BookingError>> + Send
    {
        async move { tokio::try_join!(self.venue(venue_id), self.venue_photos(venue_id)) }
    }
}
