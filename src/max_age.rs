use std::time::Duration;

/// Value of the `Access-Control-Max-Age` response header, kept in its decimal string form.
///
/// An explicit zero is still sent as `0`. Koa-style middleware that tests the option
/// for truthiness omits the header in that case; only a blank string omits it here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaxAge(String);

impl MaxAge {
    pub fn seconds(value: u64) -> Self {
        Self(value.to_string())
    }

    pub fn header_value(&self) -> Option<String> {
        let value = self.0.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_owned())
        }
    }
}

impl From<u64> for MaxAge {
    fn from(value: u64) -> Self {
        Self::seconds(value)
    }
}

impl From<Duration> for MaxAge {
    fn from(value: Duration) -> Self {
        Self::seconds(value.as_secs())
    }
}

impl From<&str> for MaxAge {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for MaxAge {
    fn from(value: String) -> Self {
        Self(value)
    }
}
