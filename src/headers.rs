use crate::constants::header;
use crate::response::CorsResponse;
use indexmap::IndexMap;

/// Ordered header name/value pairs.
pub type Headers = IndexMap<String, String>;

/// Headers staged by the decider before they are written to the response.
#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::with_estimate(6)
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(estimate),
        }
    }

    pub(crate) fn push<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        self.headers.insert(name.into(), value.into());
    }

    pub(crate) fn push_opt<N: Into<String>>(&mut self, name: N, value: Option<&str>) {
        if let Some(value) = value {
            self.push(name, value);
        }
    }

    pub(crate) fn push_credentials(&mut self, enabled: bool) {
        if enabled {
            self.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
    }

    /// Writes every staged header onto the response, overwriting previous values.
    pub(crate) fn apply_to<R: CorsResponse + ?Sized>(&self, response: &mut R) {
        for (name, value) in &self.headers {
            response.set_header(name, value);
        }
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
