//! Quote route handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::{debug, info, warn};

use crate::quote::requests::{normalize, CallStyle, QuoteEnvelope};
use crate::quote::responses::{self, QuoteFailure, QuoteOutcome, QuoteSuccess, ResultsEnvelope};
use crate::quote::services::{self, QuoteError};

/// Router for the quote API.
pub fn router() -> Router {
    Router::new().route(
        "/api/calculate-quote",
        post(calculate_quote).fallback(method_not_allowed),
    )
}

/// POST /api/calculate-quote
///
/// Accepts either a flat parameter body or the voice platform's tool-call
/// envelope, prices the booking, and answers in the envelope shape matching
/// the call style. 400 on missing fields, 500 if shaping the response fails.
async fn calculate_quote(Json(envelope): Json<QuoteEnvelope>) -> Response {
    let (params, style) = normalize(envelope);
    debug!(?params, ?style, "received quote request");

    match services::calculate_quote(&params) {
        Ok(totals) => {
            let success = QuoteSuccess::from_totals(&totals);
            info!(
                total = %success.total,
                subtotal = %success.subtotal,
                "quote calculated"
            );
            respond(StatusCode::OK, &style, QuoteOutcome::Success(success))
        }
        Err(err) => {
            let status = match err {
                QuoteError::MissingFields => StatusCode::BAD_REQUEST,
                QuoteError::Computation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            warn!(%err, "quote request failed");
            respond(status, &style, QuoteOutcome::Failure(QuoteFailure::from_error(&err)))
        }
    }
}

/// Shape the outcome for the call style; a shaping failure degrades to a
/// computation error in the flat shape, which cannot itself fail to shape.
fn respond(status: StatusCode, style: &CallStyle, outcome: QuoteOutcome) -> Response {
    match responses::shape(style, outcome) {
        Ok(envelope) => (status, Json(envelope)).into_response(),
        Err(err) => {
            warn!(%err, "failed to encode tool-call result");
            let failure = QuoteFailure::from_error(&QuoteError::Computation(err.to_string()));
            let envelope = ResultsEnvelope {
                results: vec![responses::ResultsEntry::Flat(responses::FlatResult {
                    tool_call_id: None,
                    outcome: QuoteOutcome::Failure(failure),
                })],
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(envelope)).into_response()
        }
    }
}

/// Any non-POST method on the quote route. OPTIONS preflights are answered
/// by the CORS layer before they get here.
async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(QuoteFailure::method_not_allowed()),
    )
        .into_response()
}
