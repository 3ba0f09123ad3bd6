use crate::constants::{header, method, status};
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use crate::origin::Origin;
use crate::response::CorsResponse;
use crate::result::{CorsDecision, CorsError, CorsResult};
use crate::util::{equals_ignore_case, non_empty};
use crate::vary::append_vary;

/// CORS decider built once from [`CorsOptions`] and invoked per request.
///
/// List-valued options are joined into header values at construction, so a
/// `Cors` holds nothing but ready-to-send strings and the origin source.
#[derive(Clone, Debug)]
pub struct Cors {
    origin: Origin,
    allow_methods: Option<String>,
    expose_headers: Option<String>,
    allow_headers: Option<String>,
    max_age: Option<String>,
    credentials: bool,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Self {
        let CorsOptions {
            origin,
            allow_methods,
            expose_headers,
            allow_headers,
            max_age,
            credentials,
        } = options;

        Self {
            origin,
            allow_methods: allow_methods.and_then(|value| value.header_value()),
            expose_headers: expose_headers.and_then(|value| value.header_value()),
            allow_headers: allow_headers.and_then(|value| value.header_value()),
            max_age: max_age.and_then(|value| value.header_value()),
            credentials,
        }
    }

    /// Annotates `response` for `request`.
    ///
    /// Always appends `Origin` to `Vary` while the head is unsent. Sets the
    /// `Access-Control-*` headers for cross-origin requests and status `204` for
    /// preflights; the response itself is never ended. Only a failing origin
    /// resolver produces an error.
    pub async fn decide<R>(
        &self,
        request: &RequestContext<'_>,
        response: &mut R,
    ) -> Result<CorsDecision, CorsError>
    where
        R: CorsResponse + ?Sized,
    {
        append_vary(response, header::ORIGIN);

        let Some(request_origin) = non_empty(request.origin) else {
            tracing::debug!(method = request.method, "no Origin header; skipping CORS");
            return Ok(CorsDecision::NotApplicable);
        };

        let resolved = self
            .origin
            .resolve(request_origin, request)
            .await
            .map_err(|err| {
                tracing::warn!(origin = request_origin, error = %err, "origin resolver failed");
                CorsError::OriginResolution(err)
            })?;

        let Some(allow_origin) = resolved else {
            tracing::debug!(origin = request_origin, "origin denied");
            return Ok(CorsDecision::NotApplicable);
        };

        if equals_ignore_case(request.method, method::OPTIONS) {
            Ok(self.process_preflight(request, &allow_origin, response))
        } else {
            Ok(self.process_simple(&allow_origin, response))
        }
    }

    fn process_simple<R>(&self, allow_origin: &str, response: &mut R) -> CorsDecision
    where
        R: CorsResponse + ?Sized,
    {
        let mut headers = HeaderCollection::with_estimate(3);
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin);
        headers.push_credentials(self.credentials);
        headers.push_opt(
            header::ACCESS_CONTROL_EXPOSE_HEADERS,
            self.expose_headers.as_deref(),
        );
        headers.apply_to(response);

        tracing::trace!(origin = allow_origin, "annotated simple request");

        CorsDecision::Simple(CorsResult {
            headers: headers.into_headers(),
            status: None,
        })
    }

    fn process_preflight<R>(
        &self,
        request: &RequestContext<'_>,
        allow_origin: &str,
        response: &mut R,
    ) -> CorsDecision
    where
        R: CorsResponse + ?Sized,
    {
        if non_empty(request.access_control_request_method).is_none() {
            tracing::debug!("OPTIONS without Access-Control-Request-Method; not a preflight");
            return CorsDecision::NotApplicable;
        }

        let allow_headers = self
            .allow_headers
            .as_deref()
            .or_else(|| non_empty(request.access_control_request_headers));

        let mut headers = HeaderCollection::new();
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin);
        headers.push_credentials(self.credentials);
        headers.push_opt(header::ACCESS_CONTROL_MAX_AGE, self.max_age.as_deref());
        headers.push_opt(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            self.allow_methods.as_deref(),
        );
        headers.push_opt(header::ACCESS_CONTROL_ALLOW_HEADERS, allow_headers);
        headers.apply_to(response);
        response.set_status(status::NO_CONTENT);

        tracing::debug!(origin = allow_origin, "answered preflight request");

        CorsDecision::Preflight(CorsResult {
            headers: headers.into_headers(),
            status: Some(status::NO_CONTENT),
        })
    }
}

impl From<CorsOptions> for Cors {
    fn from(options: CorsOptions) -> Self {
        Self::new(options)
    }
}

impl Default for Cors {
    fn default() -> Self {
        Self::new(CorsOptions::default())
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
