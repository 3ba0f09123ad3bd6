pub mod constants;
mod context;
mod cors;
mod headers;
mod max_age;
mod options;
mod origin;
mod response;
mod result;
mod token_list;
mod util;
mod vary;

#[cfg(feature = "serde")]
pub mod config;

pub use context::RequestContext;
pub use cors::Cors;
pub use headers::Headers;
pub use max_age::MaxAge;
pub use options::CorsOptions;
pub use origin::{BoxError, Origin, OriginCallbackFn, OriginFuture, OriginResolverFn};
pub use response::{CombinedHeader, CorsResponse, ResponseParts};
pub use result::{CorsDecision, CorsError, CorsResult};
pub use token_list::TokenList;
pub use util::equals_ignore_case;
pub use vary::append_vary;
