//! Quote calculator API for home-cleaning bookings.
//!
//! One POST endpoint prices a cleaning from room counts, home size, service
//! frequency, add-ons, and location, and replies in a voice-assistant
//! tool-call-compatible envelope. See the `quote` module for the pricing
//! rules.

use axum::http::{header, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod quote;

/// Build the application router with the CORS layer applied.
///
/// The voice platform calls cross-origin and preflights with OPTIONS, so the
/// layer allows any origin, POST/OPTIONS, and the content-type header.
pub fn app() -> Router {
    quote::router().layer(cors())
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
