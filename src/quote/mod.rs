//! Quote calculator module for home-cleaning bookings.
//!
//! Deterministic, table-driven pricing: base price from four fixed tables,
//! a frequency discount on the base, itemized add-on surcharges, a flat
//! travel fee, and 11% tax. Called over HTTP/JSON by the booking site and by
//! a voice assistant through its tool-call envelope.

pub mod calculators;
pub mod extras;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;
pub mod tables;

// Re-export commonly used items
pub use calculators::round_money;
pub use routes::router;
pub use services::QuoteError;
