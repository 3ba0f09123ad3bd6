use std::sync::Arc;

use corsen_rs::{BoxError, Cors, CorsOptions, Origin};

pub type SharedCors = Arc<Cors>;
pub type SharedAppState = Arc<AppState>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

/// Allows any origin served from localhost, looked up asynchronously.
pub fn build_state() -> SharedAppState {
    let options = CorsOptions::new()
        .origin(Origin::resolver(|ctx| {
            let origin = ctx.origin.map(str::to_owned);
            async move {
                let allowed = origin.filter(|origin| {
                    origin.starts_with("http://localhost") || origin.starts_with("http://127.0.0.1")
                });
                Ok::<_, BoxError>(allowed)
            }
        }))
        .allow_methods(["GET", "POST", "OPTIONS"])
        .allow_headers(["Content-Type", "X-Requested-With", "X-Demo-Trace"])
        .expose_headers(["X-Demo-Trace"])
        .credentials(true)
        .max_age(600_u64);

    Arc::new(AppState {
        cors: Arc::new(Cors::new(options)),
        greeting: "Welcome to the corsen hyper demo!",
    })
}

pub mod middleware;
