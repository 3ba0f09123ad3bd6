use std::convert::Infallible;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::http::{HeaderValue, Method, StatusCode, header};
use hyper::service::{Service, service_fn};
use hyper::{Request, Response};

use crate::cors::SharedAppState;
use crate::cors::middleware::CorsBody;

pub fn router(
    state: SharedAppState,
) -> impl Service<
    Request<Incoming>,
    Response = Response<CorsBody>,
    Error = Infallible,
    Future: Send + 'static,
> + Clone
+ Send
+ 'static {
    service_fn(move |req| handle(state.clone(), req))
}

async fn handle(
    state: SharedAppState,
    req: Request<Incoming>,
) -> Result<Response<CorsBody>, Infallible> {
    let response = match (req.method(), req.uri().path()) {
        (&Method::GET, "/greet") => plain(StatusCode::OK, state.greeting),
        (_, "/greet") => plain(StatusCode::METHOD_NOT_ALLOWED, "only GET is routed here"),
        _ => plain(StatusCode::NOT_FOUND, "no such route"),
    };

    tracing::info!(
        method = %req.method(),
        path = req.uri().path(),
        status = response.status().as_u16(),
        "routed request"
    );

    Ok(response)
}

fn plain(status: StatusCode, body: &'static str) -> Response<CorsBody> {
    let mut response = Response::new(Full::new(Bytes::from_static(body.as_bytes())));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    response
}
