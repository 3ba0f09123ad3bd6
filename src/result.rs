use crate::headers::Headers;
use crate::origin::BoxError;
use thiserror::Error;

/// CORS headers written to the response and the status the decider set, if any.
///
/// `Vary` is appended separately and is not part of `headers`.
#[derive(Debug, Clone)]
pub struct CorsResult {
    pub headers: Headers,
    pub status: Option<u16>,
}

/// What the decider did with a request.
#[derive(Debug, Clone)]
pub enum CorsDecision {
    Preflight(CorsResult),
    Simple(CorsResult),
    NotApplicable,
}

impl CorsDecision {
    pub fn is_preflight(&self) -> bool {
        matches!(self, CorsDecision::Preflight(_))
    }
}

/// Errors that can be produced during CORS evaluation.
#[derive(Debug, Error)]
pub enum CorsError {
    #[error("origin resolver failed: {0}")]
    OriginResolution(#[source] BoxError),
}
