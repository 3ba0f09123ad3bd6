use std::borrow::Cow;

use crate::headers::Headers;
use crate::util::normalize_lower;

/// Every value a response carries for one header name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombinedHeader<'a> {
    Absent,
    /// Repeated lines joined with `", "`.
    Text(Cow<'a, str>),
    /// At least one value is not valid text; callers must not rewrite it.
    Opaque,
}

/// Mutable view of the outgoing response the decider annotates.
///
/// Header names are matched case-insensitively. Implementations must ignore
/// mutations they cannot represent rather than fail.
pub trait CorsResponse {
    fn header(&self, name: &str) -> Option<&str>;

    /// Reads a header that may be repeated across several lines.
    ///
    /// The default wraps [`header`](Self::header), which suits maps holding one
    /// value per name.
    fn combined_header(&self, name: &str) -> CombinedHeader<'_> {
        match self.header(name) {
            Some(value) => CombinedHeader::Text(Cow::Borrowed(value)),
            None => CombinedHeader::Absent,
        }
    }

    /// Replaces every value of `name` with `value`.
    fn set_header(&mut self, name: &str, value: &str);

    fn status(&self) -> u16;

    fn set_status(&mut self, status: u16);

    /// Whether the head of the response has already been written to the client.
    fn headers_sent(&self) -> bool {
        false
    }
}

/// Framework-independent response head: status, ordered headers and a sent flag.
///
/// Header names are stored lowercased.
#[derive(Debug, Clone)]
pub struct ResponseParts {
    status: u16,
    headers: Headers,
    headers_sent: bool,
}

impl Default for ResponseParts {
    fn default() -> Self {
        Self {
            status: 200,
            headers: Headers::new(),
            headers_sent: false,
        }
    }
}

impl ResponseParts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.set_header(name, value);
        self
    }

    /// Marks the head as transmitted. Later `Vary` updates become no-ops.
    pub fn mark_sent(&mut self) {
        self.headers_sent = true;
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn into_headers(self) -> Headers {
        self.headers
    }
}

impl CorsResponse for ResponseParts {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(normalize_lower(name).as_str())
            .map(String::as_str)
    }

    fn set_header(&mut self, name: &str, value: &str) {
        self.headers.insert(normalize_lower(name), value.to_owned());
    }

    fn status(&self) -> u16 {
        self.status
    }

    fn set_status(&mut self, status: u16) {
        self.status = status;
    }

    fn headers_sent(&self) -> bool {
        self.headers_sent
    }
}

#[cfg(feature = "http")]
mod http_impl {
    use std::borrow::Cow;

    use super::{CombinedHeader, CorsResponse};
    use http::header::{HeaderMap, HeaderName, HeaderValue};
    use http::StatusCode;

    fn get<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
        headers.get(name).and_then(|value| value.to_str().ok())
    }

    fn get_all<'a>(headers: &'a HeaderMap, name: &str) -> CombinedHeader<'a> {
        let mut values = headers.get_all(name).iter();
        let Some(first) = values.next() else {
            return CombinedHeader::Absent;
        };
        let Ok(first) = first.to_str() else {
            return CombinedHeader::Opaque;
        };

        let mut combined = Cow::Borrowed(first);
        for value in values {
            let Ok(value) = value.to_str() else {
                return CombinedHeader::Opaque;
            };
            let buffer = combined.to_mut();
            buffer.push_str(", ");
            buffer.push_str(value);
        }
        CombinedHeader::Text(combined)
    }

    fn insert(headers: &mut HeaderMap, name: &str, value: &str) {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => tracing::warn!(header = name, "dropping CORS header with invalid name or value"),
        }
    }

    fn status_code(status: u16) -> Option<StatusCode> {
        let code = StatusCode::from_u16(status).ok();
        if code.is_none() {
            tracing::warn!(status, "ignoring invalid status code");
        }
        code
    }

    impl<B> CorsResponse for http::Response<B> {
        fn header(&self, name: &str) -> Option<&str> {
            get(self.headers(), name)
        }

        fn combined_header(&self, name: &str) -> CombinedHeader<'_> {
            get_all(self.headers(), name)
        }

        fn set_header(&mut self, name: &str, value: &str) {
            insert(self.headers_mut(), name, value)
        }

        fn status(&self) -> u16 {
            http::Response::status(self).as_u16()
        }

        fn set_status(&mut self, status: u16) {
            if let Some(code) = status_code(status) {
                *self.status_mut() = code;
            }
        }
    }

    impl CorsResponse for http::response::Parts {
        fn header(&self, name: &str) -> Option<&str> {
            get(&self.headers, name)
        }

        fn combined_header(&self, name: &str) -> CombinedHeader<'_> {
            get_all(&self.headers, name)
        }

        fn set_header(&mut self, name: &str, value: &str) {
            insert(&mut self.headers, name, value)
        }

        fn status(&self) -> u16 {
            self.status.as_u16()
        }

        fn set_status(&mut self, status: u16) {
            if let Some(code) = status_code(status) {
                self.status = code;
            }
        }
    }
}

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;
