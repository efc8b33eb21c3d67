//! Request DTOs for the quote API.
//!
//! Two envelope shapes reach the endpoint: a flat JSON body with the quote
//! parameters at the top level, and the voice platform's tool-call envelope
//! nesting them under `message.toolCalls[0].function.arguments` alongside a
//! correlation id. Both normalize to the same `(QuoteParams, CallStyle)` pair
//! before any pricing runs.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Flat quote parameters, all optional at the wire level.
///
/// Presence of the required fields is checked by the validator, not serde, so
/// a missing field produces the integration's expected error object instead
/// of a deserialization failure. `bedrooms`/`bathrooms` accept JSON numbers
/// or numeric strings (voice transcription is not picky about types).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteParams {
    #[serde(default)]
    pub bedrooms: Option<Decimal>,
    #[serde(default)]
    pub bathrooms: Option<Decimal>,
    #[serde(default)]
    pub sqft_range: Option<String>,
    #[serde(default)]
    pub basement: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub extras: Option<String>,
    #[serde(default)]
    pub furniture_present: Option<bool>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Tool-call envelope: `{ "message": { "toolCalls": [ ... ] } }`.
#[derive(Debug, Deserialize)]
pub struct ToolCallEnvelope {
    pub message: ToolCallMessage,
}

#[derive(Debug, Deserialize)]
pub struct ToolCallMessage {
    #[serde(rename = "toolCalls")]
    pub tool_calls: Vec<ToolCall>,
}

#[derive(Debug, Deserialize)]
pub struct ToolCall {
    #[serde(default)]
    pub id: Option<String>,
    pub function: ToolCallFunction,
}

#[derive(Debug, Deserialize)]
pub struct ToolCallFunction {
    pub arguments: QuoteParams,
}

/// The two request shapes the endpoint accepts.
///
/// Untagged: the tool-call variant is tried first because the flat variant,
/// being all-optional, matches any JSON object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum QuoteEnvelope {
    ToolCall(ToolCallEnvelope),
    Flat(QuoteParams),
}

/// How the caller invoked us, which fixes the response shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallStyle {
    /// Plain JSON body; response entries embed the result object directly.
    Flat,
    /// Tool-call envelope; response entries wrap the result as a JSON string
    /// tagged with the correlation id (echoed as null when the call carried
    /// none).
    ToolCall { correlation_id: Option<String> },
}

/// Unwrap either envelope shape into flat parameters plus the call style.
///
/// A tool-call envelope with an empty `toolCalls` array normalizes to empty
/// parameters - the validator then reports the missing fields inside the
/// tool-call response shape the caller expects.
pub fn normalize(envelope: QuoteEnvelope) -> (QuoteParams, CallStyle) {
    match envelope {
        QuoteEnvelope::Flat(params) => (params, CallStyle::Flat),
        QuoteEnvelope::ToolCall(outer) => {
            match outer.message.tool_calls.into_iter().next() {
                Some(call) => (
                    call.function.arguments,
                    CallStyle::ToolCall { correlation_id: call.id },
                ),
                None => (
                    QuoteParams::default(),
                    CallStyle::ToolCall { correlation_id: None },
                ),
            }
        }
    }
}
