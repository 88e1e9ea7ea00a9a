use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex,
    },
};

use crate::backend::VenueBackend;
use crate::error::BookingError;
use crate::session::Session;
use crate::types::{BookedInterval, Venue, VenuePhoto};
use chrono::{DateTime, NaiveDate, Utc};

pub struct MockVenueBackendInner {
    pub calls_to_venue: AtomicU64,
    pub calls_to_venue_photos: AtomicU64,
    pub calls_to_booked_intervals: AtomicU64,
    pub calls_to_create_booking: AtomicU64,
    pub venue: Mutex<Option<Venue>>,
    pub photos: Mutex<Vec<VenuePhoto>>,
    // Responses are consumed front to back; the last one is sticky so a
    // flow may refetch more often than a test enqueues.
    pub interval_responses: Mutex<VecDeque<Vec<BookedInterval>>>,
    pub create_responses: Mutex<VecDeque<Result<i64, BookingError>>>,
}

#[derive(Clone)]
pub struct MockVenueBackend(pub Arc<MockVenueBackendInner>);

impl MockVenueBackend {
    pub fn new() -> Self {
        Self(Arc::new(MockVenueBackendInner {
            calls_to_venue: AtomicU64::default(),
            calls_to_venue_photos: AtomicU64::default(),
            calls_to_booked_intervals: AtomicU64::default(),
            calls_to_create_booking: AtomicU64::default(),
            venue: Mutex::default(),
            photos: Mutex::default(),
            interval_responses: Mutex::default(),
            create_responses: Mutex::default(),
        }))
    }

    pub fn enqueue_intervals(&self, intervals: Vec<BookedInterval>) {
        self.0
            .interval_responses
            .lock()
            .unwrap()
            .push_back(intervals);
    }

    pub fn enqueue_create_response(&self, response: Result<i64, BookingError>) {
        self.0.create_responses.lock().unwrap().push_back(response);
    }

    fn next_intervals(&self) -> Vec<BookedInterval> {
        let mut responses = self.0.interval_responses.lock().unwrap();
        if responses.len() > 1 {
            responses.pop_front().unwrap()
        } else {
            responses.front().cloned().unwrap_or_default()
        }
    }

    fn next_create_response(&self) -> Result<i64, BookingError> {
        let mut responses = self.0.create_responses.lock().unwrap();
        if responses.len() > 1 {
            responses.pop_front().unwrap()
        } else {
            responses.front().cloned().unwrap_or(Ok(1))
        }
    }
}

impl VenueBackend for MockVenueBackend {
    async fn venue(&self, _venue_id: i64) -> Result<Venue, BookingError> {
        self.0.calls_to_venue.fetch_add(1, Ordering::SeqCst);
        self.0
            .venue
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| BookingError::Validation("venue not found".into()))
    }

    async fn venue_photos(&self, _venue_id: i64) -> Result<Vec<VenuePhoto>, BookingError> {
        self.0.calls_to_venue_photos.fetch_add(1, Ordering::SeqCst);
        Ok(self.0.photos.lock().unwrap().clone())
    }

    async fn booked_intervals(
        &self,
        _venue_id: i64,
        _date: NaiveDate,
    ) -> Result<Vec<BookedInterval>, BookingError> {
        self.0
            .calls_to_booked_intervals
            .fetch_add(1, Ordering::SeqCst);
        Ok(self.next_intervals())
    }

    async fn create_booking(
        &self,
        _session: &Session,
        _venue_id: i64,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Result<i64, BookingError> {
        self.0.calls_to_create_booking.fetch_add(1, Ordering::SeqCst);
        self.next_create_response()
    }
}
