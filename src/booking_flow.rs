use crate::availability::{generate_slots, is_slot_occupied, slot_start};
use crate::backend::VenueBackend;
use crate::error::BookingError;
use crate::session::Session;
use crate::types::{BookedInterval, OperatingHours};
use chrono::{Duration, NaiveDate};
use tracing::{info, warn};

/// Where a slot-selection session currently stands.
///
/// `Idle → DateChosen → SlotsLoaded → SlotSelected → Submitting`, then
/// `Succeeded`, `Failed`, or back to `SlotsLoaded` after a conflict.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowState {
    Idle,
    DateChosen,
    SlotsLoaded,
    SlotSelected,
    Submitting,
    Succeeded { booking_id: i64 },
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotAvailability {
    pub label: String,
    pub occupied: bool,
}

/// Drives one reservation attempt for a venue: date choice, availability
/// snapshot, slot selection, submission. The server stays authoritative;
/// the snapshot here is only ever advisory, and a rejected submission
/// refreshes it instead of trusting it.
pub struct BookingFlow<T: VenueBackend> {
    backend: T,
    venue_id: i64,
    operating_hours: OperatingHours,
    state: FlowState,
    selected_date: Option<NaiveDate>,
    selected_slot: Option<String>,
    booked_intervals: Vec<BookedInterval>,
}

impl<T: VenueBackend> BookingFlow<T> {
    pub fn new(backend: T, venue_id: i64, operating_hours: OperatingHours) -> Self {
        Self {
            backend,
            venue_id,
            operating_hours,
            state: FlowState::Idle,
            selected_date: None,
            selected_slot: None,
            booked_intervals: Vec::new(),
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn selected_slot(&self) -> Option<&str> {
        self.selected_slot.as_deref()
    }

    /// Picks the day to book on. A slot selection is scoped to one date,
    /// so switching dates drops it along with the interval snapshot.
    pub fn choose_date(&mut self, date: NaiveDate) {
        self.selected_date = Some(date);
        self.selected_slot = None;
        self.booked_intervals.clear();
        self.state = FlowState::DateChosen;
    }

    /// Fetches the chosen day's booked intervals. On failure the previous
    /// snapshot and state are kept, so a stale grid is never presented as
    /// fresh.
    pub async fn load_slots(&mut self) -> Result<(), BookingError> {
        let date = self
            .selected_date
            .ok_or_else(|| BookingError::Validation("no date chosen".into()))?;

        let intervals = self.backend.booked_intervals(self.venue_id, date).await?;
        self.booked_intervals = intervals;
        self.selected_slot = None;
        self.state = FlowState::SlotsLoaded;
        Ok(())
    }

    /// Records the chosen hour label. Purely local; the selection is not
    /// checked against the server and may be stale by submission time.
    pub fn select_slot(&mut self, label: &str) -> Result<(), BookingError> {
        match self.state {
            FlowState::SlotsLoaded | FlowState::SlotSelected => {
                self.selected_slot = Some(label.to_string());
                self.state = FlowState::SlotSelected;
                Ok(())
            }
            _ => Err(BookingError::Validation(
                "slot selected before availability was loaded".into(),
            )),
        }
    }

    /// The grid to render: every label of the operating window with its
    /// occupancy from the latest snapshot. Malformed operating hours fail
    /// here rather than producing a misleading grid.
    pub fn available_slots(&self) -> Result<Vec<SlotAvailability>, BookingError> {
        let date = self
            .selected_date
            .ok_or_else(|| BookingError::Validation("no date chosen".into()))?;

        generate_slots(&self.operating_hours)?
            .into_iter()
            .map(|label| {
                let start = slot_start(date, &label)?;
                Ok(SlotAvailability {
                    occupied: is_slot_occupied(start, &self.booked_intervals),
                    label,
                })
            })
            .collect()
    }

    /// Submits the selected slot as a one-hour booking. Preconditions are
    /// checked before anything goes on the wire: a live session, and the
    /// accepted terms flag. A conflict rejection refreshes the snapshot
    /// and returns the flow to `SlotsLoaded`; the date choice survives.
    pub async fn submit_booking(
        &mut self,
        session: Option<&Session>,
        terms_accepted: bool,
    ) -> Result<i64, BookingError> {
        let date = self
            .selected_date
            .ok_or_else(|| BookingError::Validation("no date chosen".into()))?;
        let label = self
            .selected_slot
            .clone()
            .ok_or_else(|| BookingError::Validation("no slot selected".into()))?;

        let Some(session) = session else {
            return Err(BookingError::Unauthenticated);
        };
        if !terms_accepted {
            return Err(BookingError::PreconditionFailed);
        }

        let start = slot_start(date, &label)?;
        // One hour, fixed. The duration is not configurable.
        let end = start + Duration::hours(1);

        self.state = FlowState::Submitting;
        match self
            .backend
            .create_booking(session, self.venue_id, start, end)
            .await
        {
            Ok(booking_id) => {
                info!(booking_id, venue_id = self.venue_id, "booking created");
                self.state = FlowState::Succeeded { booking_id };
                Ok(booking_id)
            }
            Err(err) if err.is_conflict() => {
                warn!(venue_id = self.venue_id, %date, slot = %label, "slot raced away, refreshing availability");
                self.refresh_after_conflict(date, &label).await;
                Err(err)
            }
            Err(err) => {
                warn!(venue_id = self.venue_id, %err, "booking failed");
                self.state = FlowState::Failed;
                Err(err)
            }
        }
    }

    /// Drops the session back to `Idle`. Abandoning before submission has
    /// no side effect anywhere.
    pub fn reset(&mut self) {
        self.selected_date = None;
        self.selected_slot = None;
        self.booked_intervals.clear();
        self.state = FlowState::Idle;
    }

    // The conflict-retry leg: refetch the day's intervals and clear the
    // selection if the refreshed occupancy covers it. If even the refetch
    // fails the last successful snapshot stays in place.
    async fn refresh_after_conflict(&mut self, date: NaiveDate, label: &str) {
        match self.backend.booked_intervals(self.venue_id, date).await {
            Ok(intervals) => self.booked_intervals = intervals,
            Err(err) => {
                warn!(%err, "could not refresh availability after conflict");
            }
        }

        let selection_occupied = match slot_start(date, label) {
            Ok(start) => is_slot_occupied(start, &self.booked_intervals),
            Err(_) => true,
        };
        if selection_occupied {
            self.selected_slot = None;
        }
        self.state = FlowState::SlotsLoaded;
    }
}
