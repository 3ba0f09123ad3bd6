use crate::constants::method;
use crate::max_age::MaxAge;
use crate::origin::Origin;
use crate::token_list::TokenList;

/// User-facing configuration for [`Cors`](crate::Cors).
///
/// Every field is optional except `credentials`; the defaults echo the request
/// origin and advertise `GET,HEAD,PUT,POST,DELETE,PATCH` on preflight.
#[derive(Clone, Debug)]
pub struct CorsOptions {
    pub origin: Origin,
    pub allow_methods: Option<TokenList>,
    pub expose_headers: Option<TokenList>,
    pub allow_headers: Option<TokenList>,
    pub max_age: Option<MaxAge>,
    pub credentials: bool,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origin: Origin::Mirror,
            allow_methods: Some(TokenList::list(method::DEFAULT_ALLOWED)),
            expose_headers: None,
            allow_headers: None,
            max_age: None,
            credentials: false,
        }
    }
}

impl CorsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin<O: Into<Origin>>(mut self, origin: O) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn allow_methods<T: Into<TokenList>>(mut self, methods: T) -> Self {
        self.allow_methods = Some(methods.into());
        self
    }

    /// Omits `Access-Control-Allow-Methods` from preflight responses.
    pub fn without_allow_methods(mut self) -> Self {
        self.allow_methods = None;
        self
    }

    pub fn expose_headers<T: Into<TokenList>>(mut self, headers: T) -> Self {
        self.expose_headers = Some(headers.into());
        self
    }

    /// When unset, preflight responses echo `Access-Control-Request-Headers`.
    pub fn allow_headers<T: Into<TokenList>>(mut self, headers: T) -> Self {
        self.allow_headers = Some(headers.into());
        self
    }

    pub fn max_age<M: Into<MaxAge>>(mut self, max_age: M) -> Self {
        self.max_age = Some(max_age.into());
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = enabled;
        self
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
