//! Fixed pricing tables for quote calculation.
//!
//! Every table is a closed mapping baked into the binary - there is no
//! dynamic configuration. Lookups are deliberately permissive: a key that is
//! not in its table prices at zero (or, for frequency, a 1.0 multiplier)
//! instead of failing, so the calling voice integration degrades gracefully
//! on unanticipated input.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Base price per square-footage bucket.
const SQFT_PRICES: [(&str, Decimal); 12] = [
    ("≤700", dec!(93.75)),
    ("700-1000", dec!(130.00)),
    ("1001-1500", dec!(170.00)),
    ("1501-2200", dec!(200.00)),
    ("2201-2800", dec!(250.00)),
    ("2801-3200", dec!(300.00)),
    ("3201-3600", dec!(350.00)),
    ("3601-4000", dec!(400.00)),
    ("4001-4400", dec!(425.00)),
    ("4401-4800", dec!(450.00)),
    ("4801-5200", dec!(500.00)),
    ("5201-5600", dec!(550.00)),
];

/// Base price per bedroom count.
const BEDROOM_PRICES: [(Decimal, Decimal); 6] = [
    (dec!(1), dec!(37.50)),
    (dec!(2), dec!(75.00)),
    (dec!(3), dec!(112.50)),
    (dec!(4), dec!(150.00)),
    (dec!(5), dec!(187.50)),
    (dec!(6), dec!(225.00)),
];

/// Base price per bathroom count (half-baths allowed).
const BATHROOM_PRICES: [(Decimal, Decimal); 9] = [
    (dec!(1), dec!(50.00)),
    (dec!(1.5), dec!(75.00)),
    (dec!(2), dec!(100.00)),
    (dec!(2.5), dec!(125.00)),
    (dec!(3), dec!(150.00)),
    (dec!(3.5), dec!(175.00)),
    (dec!(4), dec!(200.00)),
    (dec!(4.5), dec!(225.00)),
    (dec!(5), dec!(250.00)),
];

/// Base price per basement finish level.
const BASEMENT_PRICES: [(&str, Decimal); 3] = [
    ("none", Decimal::ZERO),
    ("unfinished", dec!(37.50)),
    ("finished", dec!(50.00)),
];

/// Multiplier applied to the base price for recurring service.
const FREQUENCY_MULTIPLIERS: [(&str, Decimal); 4] = [
    ("one-time", dec!(1.0)),
    ("weekly", dec!(0.85)),
    ("bi-weekly", dec!(0.875)),
    ("monthly", dec!(0.90)),
];

/// Flat travel fee per service-area location.
const TRAVEL_FEES: [(&str, Decimal); 7] = [
    ("Saskatoon", Decimal::ZERO),
    ("Corman Park", dec!(25)),
    ("Cathedral Bluffs", dec!(25)),
    ("Grasswood Estates", dec!(25)),
    ("Martensville", dec!(45)),
    ("Warman", dec!(50)),
    ("Dundurn", dec!(60)),
];

/// Price for a square-footage bucket; unknown buckets price at zero.
pub fn sqft_price(sqft_range: &str) -> Decimal {
    lookup_str(&SQFT_PRICES, sqft_range)
}

/// Price for a bedroom count; unknown counts price at zero.
pub fn bedroom_price(bedrooms: Decimal) -> Decimal {
    lookup_dec(&BEDROOM_PRICES, bedrooms)
}

/// Price for a bathroom count; unknown counts price at zero.
pub fn bathroom_price(bathrooms: Decimal) -> Decimal {
    lookup_dec(&BATHROOM_PRICES, bathrooms)
}

/// Price for a basement finish level; unknown levels price at zero.
pub fn basement_price(basement: &str) -> Decimal {
    lookup_str(&BASEMENT_PRICES, basement)
}

/// Discount multiplier for a service frequency.
///
/// Unknown frequencies get no discount (multiplier 1.0) rather than an error.
pub fn frequency_multiplier(frequency: &str) -> Decimal {
    FREQUENCY_MULTIPLIERS
        .iter()
        .find(|(key, _)| *key == frequency)
        .map(|(_, multiplier)| *multiplier)
        .unwrap_or(Decimal::ONE)
}

/// Flat travel fee for a service-area location; unknown locations are free.
pub fn travel_fee(location: &str) -> Decimal {
    lookup_str(&TRAVEL_FEES, location)
}

fn lookup_str(table: &[(&str, Decimal)], key: &str) -> Decimal {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, price)| *price)
        .unwrap_or(Decimal::ZERO)
}

fn lookup_dec(table: &[(Decimal, Decimal)], key: Decimal) -> Decimal {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, price)| *price)
        .unwrap_or(Decimal::ZERO)
}
