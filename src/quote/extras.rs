//! Add-on service pricing.
//!
//! Extras arrive as a comma-separated token list ("oven,pets"). Each token is
//! priced independently and the amounts accumulate, so duplicate tokens
//! double-count. Unrecognized tokens contribute nothing - same permissive
//! policy as the base-price tables.
//!
//! Several add-ons are tiered by the home's square-footage bucket. A tier
//! table is an ordered slice of `SqftTier` entries evaluated first-match-wins;
//! an entry with an empty bucket list is the catch-all for everything larger.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// One price bracket in a square-footage tier table.
///
/// `buckets` lists the `sqft_range` values the bracket covers; an empty list
/// matches any bucket (including unknown ones) and must come last.
struct SqftTier {
    buckets: &'static [&'static str],
    amount: Decimal,
}

const DEEP_CLEAN_TIERS: [SqftTier; 4] = [
    SqftTier { buckets: &["≤700", "700-1000"], amount: dec!(150.00) },
    SqftTier { buckets: &["1001-1500"], amount: dec!(200.00) },
    SqftTier { buckets: &["1501-2200"], amount: dec!(225.00) },
    SqftTier { buckets: &[], amount: dec!(300.00) },
];

// Furnished move-out cleans price identically to a deep clean; the unfurnished
// table is cheaper and merges the two middle brackets.
const MOVE_OUT_UNFURNISHED_TIERS: [SqftTier; 3] = [
    SqftTier { buckets: &["≤700", "700-1000"], amount: dec!(100.00) },
    SqftTier { buckets: &["1001-1500", "1501-2200"], amount: dec!(150.00) },
    SqftTier { buckets: &[], amount: dec!(200.00) },
];

const WINDOWS_BLINDS_TIERS: [SqftTier; 4] = [
    SqftTier { buckets: &["≤700", "700-1000"], amount: dec!(75.00) },
    SqftTier { buckets: &["1001-1500"], amount: dec!(125.00) },
    SqftTier { buckets: &["1501-2200"], amount: dec!(175.00) },
    SqftTier { buckets: &[], amount: dec!(200.00) },
];

const KITCHEN_CABINETS_TIERS: [SqftTier; 4] = [
    SqftTier { buckets: &["≤700", "700-1000"], amount: dec!(100.00) },
    SqftTier { buckets: &["1001-1500"], amount: dec!(150.00) },
    SqftTier { buckets: &["1501-2200"], amount: dec!(200.00) },
    SqftTier { buckets: &[], amount: dec!(250.00) },
];

/// Add-ons with a single flat fee regardless of home size.
const FLAT_FEES: [(&str, Decimal); 9] = [
    ("fridge_empty", dec!(50.00)),
    ("fridge_full", dec!(75.00)),
    ("oven", dec!(50.00)),
    ("dishes", dec!(20.00)),
    ("organization", dec!(50.00)),
    ("laundry_folding", dec!(50.00)),
    ("upholstery", dec!(50.00)),
    ("pets", dec!(25.00)),
    ("stain_removal", dec!(75.00)),
];

/// Per-room carpet-cleaning rates, matched against the token in this order.
const CARPET_ROOM_RATES: [(&str, Decimal); 4] = [
    ("bedroom", dec!(75.00)),
    ("living_room", dec!(85.00)),
    ("hallway", dec!(35.00)),
    ("staircase", dec!(45.00)),
];

/// Split a raw extras string into trimmed tokens, dropping empties.
pub fn parse_extras(extras: &str) -> Vec<&str> {
    extras
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Total surcharge for a raw extras string.
pub fn total_extras(extras: &str, sqft_range: &str, furniture_present: bool) -> Decimal {
    parse_extras(extras)
        .iter()
        .map(|token| extra_amount(token, sqft_range, furniture_present))
        .sum()
}

/// Surcharge for a single add-on token; unrecognized tokens price at zero.
pub fn extra_amount(token: &str, sqft_range: &str, furniture_present: bool) -> Decimal {
    match token {
        "deep_clean" => tiered_amount(&DEEP_CLEAN_TIERS, sqft_range),
        "move_out" => {
            if furniture_present {
                tiered_amount(&DEEP_CLEAN_TIERS, sqft_range)
            } else {
                tiered_amount(&MOVE_OUT_UNFURNISHED_TIERS, sqft_range)
            }
        }
        "windows_blinds" => tiered_amount(&WINDOWS_BLINDS_TIERS, sqft_range),
        "kitchen_cabinets" => tiered_amount(&KITCHEN_CABINETS_TIERS, sqft_range),
        _ => {
            if let Some((_, fee)) = FLAT_FEES.iter().find(|(key, _)| *key == token) {
                *fee
            } else {
                carpet_amount(token)
            }
        }
    }
}

fn tiered_amount(tiers: &[SqftTier], sqft_range: &str) -> Decimal {
    tiers
        .iter()
        .find(|tier| tier.buckets.is_empty() || tier.buckets.contains(&sqft_range))
        .map(|tier| tier.amount)
        .unwrap_or(Decimal::ZERO)
}

/// Price a parametric carpet token of the form `carpet_<N>_<room-kind>`.
///
/// `N` is the room count; the charge is `N` times the per-room rate. A token
/// without a parseable count, or naming no known room kind, prices at zero.
fn carpet_amount(token: &str) -> Decimal {
    let Some(rest) = token.strip_prefix("carpet_") else {
        return Decimal::ZERO;
    };

    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        &rest[..end]
    };
    let Ok(count) = digits.parse::<u32>() else {
        return Decimal::ZERO;
    };

    CARPET_ROOM_RATES
        .iter()
        .find(|(room, _)| rest.contains(room))
        .map(|(_, rate)| Decimal::from(count) * *rate)
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== parsing tests ====================

    #[test]
    fn test_parse_extras_empty() {
        assert!(parse_extras("").is_empty());
        assert!(parse_extras("   ").is_empty());
        assert!(parse_extras(",,").is_empty());
    }

    #[test]
    fn test_parse_extras_trims_tokens() {
        assert_eq!(parse_extras(" oven , pets "), vec!["oven", "pets"]);
        assert_eq!(parse_extras("oven,"), vec!["oven"]);
    }

    // ==================== flat fee tests ====================

    #[test]
    fn test_flat_fees() {
        assert_eq!(extra_amount("fridge_empty", "≤700", false), dec!(50.00));
        assert_eq!(extra_amount("fridge_full", "≤700", false), dec!(75.00));
        assert_eq!(extra_amount("oven", "≤700", false), dec!(50.00));
        assert_eq!(extra_amount("dishes", "≤700", false), dec!(20.00));
        assert_eq!(extra_amount("organization", "≤700", false), dec!(50.00));
        assert_eq!(extra_amount("laundry_folding", "≤700", false), dec!(50.00));
        assert_eq!(extra_amount("upholstery", "≤700", false), dec!(50.00));
        assert_eq!(extra_amount("pets", "≤700", false), dec!(25.00));
        assert_eq!(extra_amount("stain_removal", "≤700", false), dec!(75.00));
    }

    #[test]
    fn test_flat_fee_ignores_sqft() {
        assert_eq!(extra_amount("oven", "5201-5600", false), dec!(50.00));
        assert_eq!(extra_amount("oven", "not-a-bucket", false), dec!(50.00));
    }

    #[test]
    fn test_unmatched_token_is_free() {
        assert_eq!(extra_amount("sauna", "≤700", false), Decimal::ZERO);
        assert_eq!(extra_amount("Oven", "≤700", false), Decimal::ZERO);
    }

    // ==================== tiered add-on tests ====================

    #[test]
    fn test_deep_clean_tiers() {
        assert_eq!(extra_amount("deep_clean", "≤700", false), dec!(150.00));
        assert_eq!(extra_amount("deep_clean", "700-1000", false), dec!(150.00));
        assert_eq!(extra_amount("deep_clean", "1001-1500", false), dec!(200.00));
        assert_eq!(extra_amount("deep_clean", "1501-2200", false), dec!(225.00));
        assert_eq!(extra_amount("deep_clean", "2201-2800", false), dec!(300.00));
        assert_eq!(extra_amount("deep_clean", "5201-5600", false), dec!(300.00));
    }

    #[test]
    fn test_deep_clean_unknown_bucket_hits_catch_all() {
        assert_eq!(extra_amount("deep_clean", "mansion", false), dec!(300.00));
    }

    #[test]
    fn test_move_out_furnished_matches_deep_clean() {
        for bucket in ["≤700", "700-1000", "1001-1500", "1501-2200", "3601-4000"] {
            assert_eq!(
                extra_amount("move_out", bucket, true),
                extra_amount("deep_clean", bucket, true),
                "furnished move_out diverged from deep_clean for {bucket}"
            );
        }
    }

    #[test]
    fn test_move_out_unfurnished_tiers() {
        assert_eq!(extra_amount("move_out", "≤700", false), dec!(100.00));
        assert_eq!(extra_amount("move_out", "700-1000", false), dec!(100.00));
        assert_eq!(extra_amount("move_out", "1001-1500", false), dec!(150.00));
        assert_eq!(extra_amount("move_out", "1501-2200", false), dec!(150.00));
        assert_eq!(extra_amount("move_out", "2201-2800", false), dec!(200.00));
    }

    #[test]
    fn test_move_out_furnished_1001_1500_is_200() {
        assert_eq!(extra_amount("move_out", "1001-1500", true), dec!(200.00));
    }

    #[test]
    fn test_windows_blinds_tiers() {
        assert_eq!(extra_amount("windows_blinds", "≤700", false), dec!(75.00));
        assert_eq!(extra_amount("windows_blinds", "1001-1500", false), dec!(125.00));
        assert_eq!(extra_amount("windows_blinds", "1501-2200", false), dec!(175.00));
        assert_eq!(extra_amount("windows_blinds", "2801-3200", false), dec!(200.00));
    }

    #[test]
    fn test_kitchen_cabinets_tiers() {
        assert_eq!(extra_amount("kitchen_cabinets", "700-1000", false), dec!(100.00));
        assert_eq!(extra_amount("kitchen_cabinets", "1001-1500", false), dec!(150.00));
        assert_eq!(extra_amount("kitchen_cabinets", "1501-2200", false), dec!(200.00));
        assert_eq!(extra_amount("kitchen_cabinets", "4001-4400", false), dec!(250.00));
    }

    // ==================== carpet token tests ====================

    #[test]
    fn test_carpet_tokens() {
        assert_eq!(extra_amount("carpet_3_bedroom", "≤700", false), dec!(225.00));
        assert_eq!(extra_amount("carpet_2_living_room", "≤700", false), dec!(170.00));
        assert_eq!(extra_amount("carpet_1_hallway", "≤700", false), dec!(35.00));
        assert_eq!(extra_amount("carpet_4_staircase", "≤700", false), dec!(180.00));
    }

    #[test]
    fn test_carpet_zero_count() {
        assert_eq!(extra_amount("carpet_0_hallway", "≤700", false), Decimal::ZERO);
    }

    #[test]
    fn test_carpet_malformed_count_is_free() {
        assert_eq!(extra_amount("carpet_x_bedroom", "≤700", false), Decimal::ZERO);
        assert_eq!(extra_amount("carpet__bedroom", "≤700", false), Decimal::ZERO);
    }

    #[test]
    fn test_carpet_unknown_room_is_free() {
        assert_eq!(extra_amount("carpet_3_garage", "≤700", false), Decimal::ZERO);
    }

    // ==================== accumulation tests ====================

    #[test]
    fn test_total_extras_is_additive() {
        let total = total_extras("oven,pets", "≤700", false);
        assert_eq!(total, dec!(75.00));
        assert_eq!(
            total,
            extra_amount("oven", "≤700", false) + extra_amount("pets", "≤700", false)
        );
    }

    #[test]
    fn test_total_extras_order_independent() {
        assert_eq!(
            total_extras("oven,pets", "≤700", false),
            total_extras("pets,oven", "≤700", false)
        );
    }

    #[test]
    fn test_total_extras_duplicates_double_count() {
        assert_eq!(total_extras("oven,oven", "≤700", false), dec!(100.00));
    }

    #[test]
    fn test_total_extras_skips_unmatched_tokens() {
        assert_eq!(total_extras("oven,hot_tub,pets", "≤700", false), dec!(75.00));
    }

    #[test]
    fn test_total_extras_empty_is_zero() {
        assert_eq!(total_extras("", "≤700", false), Decimal::ZERO);
    }
}
