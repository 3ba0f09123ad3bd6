use crate::context::RequestContext;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type OriginFuture = Pin<Box<dyn Future<Output = Result<Option<String>, BoxError>> + Send>>;

pub type OriginCallbackFn = dyn for<'a> Fn(&RequestContext<'a>) -> Option<String> + Send + Sync;

pub type OriginResolverFn = dyn for<'a> Fn(&RequestContext<'a>) -> OriginFuture + Send + Sync;

/// Source of the `Access-Control-Allow-Origin` value.
///
/// Callbacks return `None` (or an empty string) to deny the request, in which
/// case no CORS headers are emitted.
#[derive(Clone, Default)]
pub enum Origin {
    /// Echo the request's own `Origin` header.
    #[default]
    Mirror,
    /// Always answer with the configured value, e.g. `*`.
    Exact(String),
    /// Decide synchronously per request.
    Custom(Arc<OriginCallbackFn>),
    /// Decide asynchronously per request. A failed future fails the whole decision.
    Resolver(Arc<OriginResolverFn>),
}

impl Origin {
    pub fn mirror() -> Self {
        Self::Mirror
    }

    pub fn any() -> Self {
        Self::Exact("*".to_string())
    }

    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn custom<F>(callback: F) -> Self
    where
        F: for<'a> Fn(&RequestContext<'a>) -> Option<String> + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(callback))
    }

    /// Echoes the request origin when `predicate` accepts it.
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: for<'a> Fn(&str, &RequestContext<'a>) -> bool + Send + Sync + 'static,
    {
        Self::custom(move |ctx| {
            ctx.origin
                .filter(|&origin| predicate(origin, ctx))
                .map(str::to_owned)
        })
    }

    pub fn resolver<F, Fut, E>(resolver: F) -> Self
    where
        F: for<'a> Fn(&RequestContext<'a>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Option<String>, E>> + Send + 'static,
        E: Into<BoxError>,
    {
        Self::Resolver(boxed_resolver(move |ctx| {
            let pending = resolver(ctx);
            let future: OriginFuture = Box::pin(async move { pending.await.map_err(Into::into) });
            future
        }))
    }

    /// Resolves the allowed origin for a request that carries `request_origin`.
    ///
    /// `Ok(None)` means the request is denied.
    pub async fn resolve(
        &self,
        request_origin: &str,
        ctx: &RequestContext<'_>,
    ) -> Result<Option<String>, BoxError> {
        let resolved = match self {
            Origin::Mirror => Some(request_origin.to_owned()),
            Origin::Exact(value) if value.is_empty() => Some(request_origin.to_owned()),
            Origin::Exact(value) => Some(value.clone()),
            Origin::Custom(callback) => callback(ctx),
            Origin::Resolver(resolver) => resolver(ctx).await?,
        };

        Ok(resolved.filter(|value| !value.is_empty()))
    }
}

fn boxed_resolver<F>(resolver: F) -> Arc<OriginResolverFn>
where
    F: for<'a> Fn(&RequestContext<'a>) -> OriginFuture + Send + Sync + 'static,
{
    Arc::new(resolver)
}

impl fmt::Debug for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Mirror => f.write_str("Mirror"),
            Origin::Exact(value) => f.debug_tuple("Exact").field(value).finish(),
            Origin::Custom(_) => f.write_str("Custom(..)"),
            Origin::Resolver(_) => f.write_str("Resolver(..)"),
        }
    }
}

impl From<&str> for Origin {
    fn from(value: &str) -> Self {
        Self::exact(value)
    }
}

impl From<String> for Origin {
    fn from(value: String) -> Self {
        Self::Exact(value)
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
