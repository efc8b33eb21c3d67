//! Quote orchestration: validate the parameter set, then run the calculator.
//!
//! Validation only checks presence. Values the pricing tables don't recognize
//! are allowed through and price at zero / no discount / no fee - that
//! permissive fallback is load-bearing for the voice integration, which
//! prefers a degraded quote over a hard failure. (It also means a typo'd
//! bucket silently prices at $0; known trade-off, do not "fix" here.)

use thiserror::Error;

use crate::quote::calculators::{compute_quote, QuoteInputs, QuoteTotals};
use crate::quote::requests::QuoteParams;

/// Recoverable quote failures, reported inside the caller's envelope.
#[derive(Debug, Clone, Error)]
pub enum QuoteError {
    #[error("bedrooms, bathrooms, sqft_range, basement, frequency, and location are required")]
    MissingFields,

    #[error("{0}")]
    Computation(String),
}

/// Validate the parameter set and compute the quote.
pub fn calculate_quote(params: &QuoteParams) -> Result<QuoteTotals, QuoteError> {
    let inputs = validate(params)?;
    Ok(compute_quote(&inputs))
}

/// Check the required fields are present and non-empty, then assemble the
/// calculator inputs with defaults applied for the optional ones.
fn validate(params: &QuoteParams) -> Result<QuoteInputs, QuoteError> {
    let bedrooms = params.bedrooms.ok_or(QuoteError::MissingFields)?;
    let bathrooms = params.bathrooms.ok_or(QuoteError::MissingFields)?;
    let sqft_range = required_str(params.sqft_range.as_deref())?;
    let basement = required_str(params.basement.as_deref())?;
    let frequency = required_str(params.frequency.as_deref())?;
    let location = required_str(params.location.as_deref())?;

    Ok(QuoteInputs {
        bedrooms,
        bathrooms,
        sqft_range,
        basement,
        frequency,
        extras: params.extras.clone().unwrap_or_default(),
        furniture_present: params.furniture_present.unwrap_or(false),
        location,
    })
}

fn required_str(value: Option<&str>) -> Result<String, QuoteError> {
    match value {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(QuoteError::MissingFields),
    }
}
