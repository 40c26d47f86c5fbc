//! Minimal request pipeline model
//!
//! The host framework owns the real pipeline; this module carries just
//! enough of one for the flash lifecycle to hook into: a request with typed
//! extensions and a session handle, a response with an optional template
//! name and a render-time context, and an ordered middleware chain.

mod context;
mod extensions;
mod middleware;
mod request;
mod response;

pub use context::Context;
pub use extensions::Extensions;
pub use middleware::{Handler, Middleware, MiddlewareChain};
pub use request::{Request, RequestBuilder};
pub use response::Response;
