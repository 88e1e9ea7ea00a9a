use crate::error::BookingError;
use crate::types::{BookedInterval, Booking, OperatingHours};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

/// Parses the hour out of an "HH:MM" time string. Minutes are ignored,
/// slots are hour-aligned.
fn parse_hour(time: &str) -> Result<u32, BookingError> {
    let hour_part = time
        .split(':')
        .next()
        .ok_or_else(|| BookingError::InvalidConfiguration(format!("empty time: {time:?}")))?;
    let hour: u32 = hour_part
        .trim()
        .parse()
        .map_err(|_| BookingError::InvalidConfiguration(format!("unparsable time: {time:?}")))?;
    if hour > 24 {
        return Err(BookingError::InvalidConfiguration(format!(
            "hour out of range: {time:?}"
        )));
    }
    Ok(hour)
}

/// Generates the bookable hour labels for one day: every full hour from
/// opening (inclusive) to closing (exclusive), minus the lunch window.
/// An empty range yields an empty list, not an error.
pub fn generate_slots(hours: &OperatingHours) -> Result<Vec<String>, BookingError> {
    let opening = parse_hour(&hours.opening_time)?;
    let closing = parse_hour(&hours.closing_time)?;

    let lunch = match (&hours.lunch_start_time, &hours.lunch_end_time) {
        (Some(start), Some(end)) => Some((parse_hour(start)?, parse_hour(end)?)),
        _ => None,
    };

    let mut slots = Vec::new();
    for hour in opening..closing {
        if let Some((lunch_start, lunch_end)) = lunch {
            if hour >= lunch_start && hour < lunch_end {
                continue;
            }
        }
        slots.push(format!("{hour:02}:00"));
    }
    Ok(slots)
}

/// Start instant of a slot: the chosen date and hour label interpreted in
/// the local timezone, converted to UTC.
pub fn slot_start(date: NaiveDate, label: &str) -> Result<DateTime<Utc>, BookingError> {
    let hour = parse_hour(label)?;
    let naive = date
        .and_hms_opt(hour, 0, 0)
        .ok_or_else(|| BookingError::InvalidConfiguration(format!("invalid slot hour: {label:?}")))?;
    let local = Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| {
            BookingError::InvalidConfiguration(format!("slot does not exist locally: {naive}"))
        })?;
    Ok(local.with_timezone(&Utc))
}

/// A slot is occupied when its start instant falls inside an existing
/// reservation's half-open span. This is a containment test on the start
/// instant, not a general overlap test: all intervals are hour-aligned,
/// so the two are equivalent here.
pub fn is_slot_occupied(slot_start: DateTime<Utc>, intervals: &[BookedInterval]) -> bool {
    intervals
        .iter()
        .any(|interval| interval.start_time <= slot_start && slot_start < interval.end_time)
}

/// Intervals of the bookings that block a slot. Canceled bookings free
/// their slot; pending ones keep holding it until paid or canceled.
pub fn blocking_intervals(bookings: &[Booking]) -> Vec<BookedInterval> {
    bookings
        .iter()
        .filter(|booking| booking.status.blocks_slot())
        .map(Booking::interval)
        .collect()
}
