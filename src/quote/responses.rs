//! Response DTOs for the quote API.
//!
//! Success and failure both travel inside the same outer envelope,
//! `{ "results": [entry] }`, whatever the call style - the voice platform
//! treats a bare error object as a protocol violation. The entry shape does
//! depend on the style: tool calls get `{ "toolCallId", "result" }` with the
//! result object JSON-encoded into a string, flat callers get the result
//! object's fields inline.
//!
//! Amounts are rounded to cents here and nowhere earlier.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::quote::calculators::{round_money, QuoteTotals};
use crate::quote::requests::CallStyle;
use crate::quote::services::QuoteError;

/// Component amounts behind the subtotal.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteBreakdown {
    #[serde(with = "rust_decimal::serde::float")]
    pub base: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub discounted_base: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub extras: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub travel: Decimal,
}

/// A priced quote, ready for the wire.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteSuccess {
    pub success: bool,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub breakdown: QuoteBreakdown,
}

impl QuoteSuccess {
    /// Round the full-precision totals to cents for reporting.
    ///
    /// The travel fee is a whole-cent constant and passes through as-is.
    pub fn from_totals(totals: &QuoteTotals) -> Self {
        Self {
            success: true,
            subtotal: round_money(totals.subtotal, 2),
            tax: round_money(totals.tax, 2),
            total: round_money(totals.total, 2),
            breakdown: QuoteBreakdown {
                base: round_money(totals.base, 2),
                discounted_base: round_money(totals.discounted_base, 2),
                extras: round_money(totals.extras, 2),
                travel: totals.travel,
            },
        }
    }
}

/// A reported failure: an error kind plus a human-readable message.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteFailure {
    pub success: bool,
    pub error: String,
    pub message: String,
}

impl QuoteFailure {
    pub fn from_error(err: &QuoteError) -> Self {
        let (error, message) = match err {
            QuoteError::MissingFields => {
                ("Missing required fields".to_string(), err.to_string())
            }
            QuoteError::Computation(detail) => {
                (detail.clone(), "Calculation failed".to_string())
            }
        };
        Self { success: false, error, message }
    }

    /// The 405 body for non-POST requests.
    pub fn method_not_allowed() -> Self {
        Self {
            success: false,
            error: "Method not allowed".to_string(),
            message: "Only POST requests are accepted".to_string(),
        }
    }
}

/// Either outcome of a quote request.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum QuoteOutcome {
    Success(QuoteSuccess),
    Failure(QuoteFailure),
}

/// The outer envelope every response uses.
#[derive(Debug, Serialize)]
pub struct ResultsEnvelope {
    pub results: Vec<ResultsEntry>,
}

/// One element of `results`, shaped per call style.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ResultsEntry {
    ToolCall(ToolCallResult),
    Flat(FlatResult),
}

/// Tool-call entry: correlation id plus the result object as a JSON string.
#[derive(Debug, Serialize)]
pub struct ToolCallResult {
    #[serde(rename = "toolCallId")]
    pub tool_call_id: Option<String>,
    pub result: String,
}

/// Flat entry: the result object inline, correlation id pinned to null.
#[derive(Debug, Serialize)]
pub struct FlatResult {
    #[serde(rename = "toolCallId")]
    pub tool_call_id: Option<String>,
    #[serde(flatten)]
    pub outcome: QuoteOutcome,
}

/// Wrap an outcome in the envelope the caller expects.
///
/// Stringifying the result object for a tool-call entry is the only fallible
/// step; the caller maps that to a computation failure.
pub fn shape(style: &CallStyle, outcome: QuoteOutcome) -> Result<ResultsEnvelope, serde_json::Error> {
    let entry = match style {
        CallStyle::ToolCall { correlation_id } => ResultsEntry::ToolCall(ToolCallResult {
            tool_call_id: correlation_id.clone(),
            result: serde_json::to_string(&outcome)?,
        }),
        CallStyle::Flat => ResultsEntry::Flat(FlatResult {
            tool_call_id: None,
            outcome,
        }),
    };

    Ok(ResultsEnvelope { results: vec![entry] })
}
