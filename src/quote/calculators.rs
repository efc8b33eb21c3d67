//! Core quote calculation functions.
//!
//! Pure functions for pricing math - no transport or envelope concerns.
//! All intermediate amounts stay at full `Decimal` precision; rounding to
//! cents happens only when totals are placed into a response.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::quote::extras::total_extras;
use crate::quote::tables;

/// Sales tax applied to the subtotal.
const TAX_RATE: Decimal = dec!(0.11);

/// Round to specified decimal places, halves away from zero.
///
/// Matches conventional cash rounding: 568.125 becomes 568.13, not the
/// banker's 568.12.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use cleanquote_api::quote::round_money;
///
/// assert_eq!(round_money(dec!(568.125), 2), dec!(568.13));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// assert_eq!(round_money(dec!(1.235), 2), dec!(1.24));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Validated quote parameters (used in compute_quote).
///
/// Field values are not constrained to the pricing tables: anything the
/// tables don't recognize prices at zero downstream.
#[derive(Debug, Clone)]
pub struct QuoteInputs {
    pub bedrooms: Decimal,
    pub bathrooms: Decimal,
    pub sqft_range: String,
    pub basement: String,
    pub frequency: String,
    pub extras: String,
    pub furniture_present: bool,
    pub location: String,
}

/// Full-precision quote amounts (rounded only at the response boundary).
#[derive(Debug, Clone)]
pub struct QuoteTotals {
    pub base: Decimal,
    pub discounted_base: Decimal,
    pub extras: Decimal,
    pub travel: Decimal,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Compute a quote from validated inputs.
///
/// `base` is the sum of the four independent table lookups. The frequency
/// discount applies to `base` only - extras and the travel fee are never
/// discounted.
pub fn compute_quote(inputs: &QuoteInputs) -> QuoteTotals {
    let base = tables::sqft_price(&inputs.sqft_range)
        + tables::bedroom_price(inputs.bedrooms)
        + tables::bathroom_price(inputs.bathrooms)
        + tables::basement_price(&inputs.basement);

    let discounted_base = base * tables::frequency_multiplier(&inputs.frequency);

    let extras = total_extras(&inputs.extras, &inputs.sqft_range, inputs.furniture_present);
    let travel = tables::travel_fee(&inputs.location);

    let subtotal = discounted_base + extras + travel;
    let tax = subtotal * TAX_RATE;
    let total = subtotal + tax;

    QuoteTotals {
        base,
        discounted_base,
        extras,
        travel,
        subtotal,
        tax,
        total,
    }
}
