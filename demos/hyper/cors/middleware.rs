use std::future::Future;
use std::pin::Pin;

use corsen_rs::{CorsError, RequestContext};
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::http::StatusCode;
use hyper::service::Service;
use hyper::{Request, Response};

use super::SharedCors;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

pub type CorsBody = Full<Bytes>;

/// Runs the inner service, then lets the decider annotate the response before it is sent.
#[derive(Clone)]
pub struct CorsService<S> {
    inner: S,
    cors: SharedCors,
}

impl<S> CorsService<S> {
    pub fn new(cors: SharedCors, inner: S) -> Self {
        Self { inner, cors }
    }
}

impl<S> Service<Request<Incoming>> for CorsService<S>
where
    S: Service<Request<Incoming>, Response = Response<CorsBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
{
    type Response = Response<CorsBody>;
    type Error = S::Error;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let cors = self.cors.clone();
        let inner = self.inner.clone();
        let owned_ctx = OwnedRequestContext::from_request(&req);

        Box::pin(async move {
            let mut response = inner.call(req).await?;

            match cors
                .decide(&owned_ctx.as_request_context(), &mut response)
                .await
            {
                Ok(decision) if decision.is_preflight() => {
                    *response.body_mut() = Full::new(Bytes::new());
                }
                Ok(_) => {}
                Err(err) => return Ok(internal_error(err)),
            }

            Ok(response)
        })
    }
}

fn internal_error(err: CorsError) -> Response<CorsBody> {
    let mut response = Response::new(Full::new(Bytes::from(format!("CORS error: {err}"))));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
}

struct OwnedRequestContext {
    method: String,
    path: String,
    origin: Option<String>,
    access_control_request_method: Option<String>,
    access_control_request_headers: Option<String>,
}

impl OwnedRequestContext {
    fn from_request(request: &Request<Incoming>) -> Self {
        let ctx = RequestContext::from_http(request);

        Self {
            method: ctx.method.to_owned(),
            path: ctx.path.to_owned(),
            origin: ctx.origin.map(str::to_owned),
            access_control_request_method: ctx.access_control_request_method.map(str::to_owned),
            access_control_request_headers: ctx.access_control_request_headers.map(str::to_owned),
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            path: &self.path,
            origin: self.origin.as_deref(),
            access_control_request_method: self.access_control_request_method.as_deref(),
            access_control_request_headers: self.access_control_request_headers.as_deref(),
        }
    }
}
