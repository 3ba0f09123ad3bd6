#![allow(dead_code)]

use corsen_rs::constants::method;
use corsen_rs::{
    Cors, CorsDecision, CorsError, CorsOptions, MaxAge, Origin, RequestContext, ResponseParts,
    TokenList,
};

#[derive(Default)]
pub struct CorsBuilder {
    options: CorsOptions,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: Origin) -> Self {
        self.options.origin = origin;
        self
    }

    pub fn allow_methods(mut self, methods: impl Into<TokenList>) -> Self {
        self.options = self.options.allow_methods(methods);
        self
    }

    pub fn without_allow_methods(mut self) -> Self {
        self.options = self.options.without_allow_methods();
        self
    }

    pub fn allow_headers(mut self, headers: impl Into<TokenList>) -> Self {
        self.options = self.options.allow_headers(headers);
        self
    }

    pub fn expose_headers(mut self, headers: impl Into<TokenList>) -> Self {
        self.options = self.options.expose_headers(headers);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.options.credentials = enabled;
        self
    }

    pub fn max_age(mut self, value: impl Into<MaxAge>) -> Self {
        self.options.max_age = Some(value.into());
        self
    }

    pub fn build(self) -> Cors {
        Cors::new(self.options)
    }
}

/// Outcome of running the decider against a fresh (or supplied) response.
pub struct Exchange {
    pub decision: CorsDecision,
    pub response: ResponseParts,
}

pub struct SimpleRequestBuilder {
    method: String,
    path: String,
    origin: Option<String>,
    response: ResponseParts,
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            path: "/".into(),
            origin: None,
            response: ResponseParts::new(),
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn response(mut self, response: ResponseParts) -> Self {
        self.response = response;
        self
    }

    pub async fn try_decide(self, cors: &Cors) -> (Result<CorsDecision, CorsError>, ResponseParts) {
        let SimpleRequestBuilder {
            method,
            path,
            origin,
            mut response,
        } = self;
        let ctx = RequestContext {
            method: &method,
            path: &path,
            origin: origin.as_deref(),
            access_control_request_method: None,
            access_control_request_headers: None,
        };
        let result = cors.decide(&ctx, &mut response).await;
        (result, response)
    }

    pub async fn decide(self, cors: &Cors) -> Exchange {
        let (result, response) = self.try_decide(cors).await;
        Exchange {
            decision: result.expect("simple request evaluation should succeed"),
            response,
        }
    }
}

pub struct PreflightRequestBuilder {
    path: String,
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
    response: ResponseParts,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self {
            path: "/".into(),
            origin: None,
            request_method: None,
            request_headers: None,
            response: ResponseParts::new(),
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn response(mut self, response: ResponseParts) -> Self {
        self.response = response;
        self
    }

    pub async fn try_decide(self, cors: &Cors) -> (Result<CorsDecision, CorsError>, ResponseParts) {
        let PreflightRequestBuilder {
            path,
            origin,
            request_method,
            request_headers,
            mut response,
        } = self;
        let ctx = RequestContext {
            method: method::OPTIONS,
            path: &path,
            origin: origin.as_deref(),
            access_control_request_method: request_method.as_deref(),
            access_control_request_headers: request_headers.as_deref(),
        };
        let result = cors.decide(&ctx, &mut response).await;
        (result, response)
    }

    pub async fn decide(self, cors: &Cors) -> Exchange {
        let (result, response) = self.try_decide(cors).await;
        Exchange {
            decision: result.expect("preflight request evaluation should succeed"),
            response,
        }
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
