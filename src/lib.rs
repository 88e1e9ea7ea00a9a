//! Client-side core of the venue-booking application: slot availability
//! computation and the reservation flow with its conflict-retry loop.
//! The booking service stays authoritative; everything here is advisory.

pub mod availability;
pub mod backend;
pub mod booking_flow;
pub mod configuration;
pub mod configuration_handler;
pub mod error;
pub mod rest_backend;
pub mod session;
#[cfg(test)]
mod testutils;
pub mod types;
