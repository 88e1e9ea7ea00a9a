use chrono::Local;
use tracing::error;
use tracing_subscriber::EnvFilter;
use venue_booking::backend::VenueBackend;
use venue_booking::booking_flow::BookingFlow;
use venue_booking::configuration_handler::ConfigurationHandler;
use venue_booking::rest_backend::RestBackend;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("#################");
    println!("# Venue Booking #");
    println!("#################");

    let configuration = ConfigurationHandler::parse_arguments();
    let backend = match RestBackend::new(&configuration) {
        Ok(backend) => backend,
        Err(err) => {
            error!(%err, "Failed to build the REST client");
            return;
        }
    };

    let (venue, photos) = match backend.venue_with_photos(configuration.venue_id()).await {
        Ok(result) => result,
        Err(err) => {
            error!(%err, "Failed to load the venue. Is the booking service running?");
            return;
        }
    };
    println!(
        "{}, {} ({} photos, {} per hour)",
        venue.name,
        venue.address,
        photos.len(),
        venue.price_per_hour
    );

    let date = configuration
        .date()
        .unwrap_or_else(|| Local::now().date_naive());
    let mut flow = BookingFlow::new(backend, venue.id, venue.operating_hours.clone());
    flow.choose_date(date);
    if let Err(err) = flow.load_slots().await {
        error!(%err, "Failed to load booked slots");
        return;
    }

    println!("Slots on {date}:");
    match flow.available_slots() {
        Ok(slots) => {
            for slot in slots {
                let marker = if slot.occupied { "booked" } else { "free" };
                println!("  {} [{marker}]", slot.label);
            }
        }
        Err(err) => error!(%err, "Venue has invalid operating hours"),
    }
}
