//! # flashbag
//!
//! Session-backed flash messages for request/response pipelines.
//!
//! Handlers queue short-lived, typed notification strings ("info",
//! "warning", "success", "danger") that survive a redirect and are displayed
//! exactly once on the next rendered page. The messages live as a single
//! serialized table under one fixed session key; the middleware moves them
//! into the render-time context the first time a response names a template.
//!
//! ## Lifecycle
//!
//! 1. [`FlashMiddleware`] builds a [`FlashStore`] from the request's session
//!    and attaches it to the request extensions.
//! 2. Handlers retrieve the store and queue messages, then typically
//!    redirect.
//! 3. On the first subsequent response that names a template, the middleware
//!    pops every queued message into the response's render [`Context`](http::Context)
//!    under a fixed key, clearing the session.
//! 4. The view layer calls [`render_messages`] to turn the table into
//!    markup through the configured [`FlashRenderer`].
//!
//! ## Example
//!
//! ```
//! use async_trait::async_trait;
//! use flashbag::http::{Handler, MiddlewareChain, Request, Response};
//! use flashbag::{
//!     render_messages, FlashConfig, FlashMiddleware, FlashStore, MemorySession,
//! };
//! use std::sync::Arc;
//!
//! struct ShowPage;
//!
//! #[async_trait]
//! impl Handler for ShowPage {
//!     async fn handle(&self, request: Request) -> flashbag::Result<Response> {
//!         let store = request.extensions.get::<FlashStore>().unwrap();
//!         store.add_success("Article saved")?;
//!         Ok(Response::ok().with_template("articles/detail.html"))
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let config = FlashConfig::default();
//! let mut chain = MiddlewareChain::new(Arc::new(ShowPage));
//! FlashMiddleware::enable(&mut chain, config.clone());
//!
//! let session = MemorySession::new().into_shared();
//! let request = Request::builder().session(session).build().unwrap();
//! let response = chain.handle(request).await.unwrap();
//!
//! let html = render_messages(response.context(), &config, "success");
//! assert!(html.contains("Article saved"));
//! # });
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod levels;
pub mod middleware;
pub mod render;
pub mod session;
pub mod store;

pub use config::{DEFAULT_CONTEXT_KEY, DEFAULT_SESSION_KEY, FlashConfig};
pub use error::{Error, Result};
pub use levels::Level;
pub use middleware::FlashMiddleware;
pub use render::{FlashRenderer, ListRenderer, render_messages};
pub use session::{MemorySession, Session, SharedSession};
pub use store::{FlashStore, MessageTable};
