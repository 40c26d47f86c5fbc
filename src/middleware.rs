//! Flash message lifecycle middleware
//!
//! Binds the two lifecycle hooks into one wrapping middleware: on the way
//! in, a [`FlashStore`] is built from the request's session and attached to
//! the request extensions; on the way out, if the response names a template,
//! every queued message is popped from the session into the response's
//! render context.
//!
//! Register this middleware *after* the host's session middleware. Being the
//! innermost registration means its request half runs last (after the
//! session is attached) and its response half runs first (before any
//! session-cookie persistence sees the mutated session).

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::config::FlashConfig;
use crate::error::{Error, Result};
use crate::http::{Handler, Middleware, MiddlewareChain, Request, Response};
use crate::store::FlashStore;

/// Middleware moving flash messages between session and render context
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use flashbag::http::{Handler, MiddlewareChain, Request, Response};
/// use flashbag::{FlashConfig, FlashMiddleware, FlashStore, MemorySession};
/// use std::sync::Arc;
///
/// struct SaveHandler;
///
/// #[async_trait]
/// impl Handler for SaveHandler {
///     async fn handle(&self, request: Request) -> flashbag::Result<Response> {
///         let store = request.extensions.get::<FlashStore>().unwrap();
///         store.add_success("Saved")?;
///         Ok(Response::temporary_redirect("/done"))
///     }
/// }
///
/// # tokio_test::block_on(async {
/// let mut chain = MiddlewareChain::new(Arc::new(SaveHandler));
/// FlashMiddleware::enable(&mut chain, FlashConfig::default());
///
/// let session = MemorySession::new().into_shared();
/// let request = Request::builder().session(session.clone()).build().unwrap();
/// let response = chain.handle(request).await.unwrap();
///
/// // No template named: the message stays queued for the next request
/// assert!(response.template_name().is_none());
/// let store = FlashStore::new(session, &FlashConfig::default()).unwrap();
/// assert_eq!(store.peek("success").unwrap(), Some(vec!["Saved".to_string()]));
/// # });
/// ```
pub struct FlashMiddleware {
	config: FlashConfig,
}

impl FlashMiddleware {
	/// Create the middleware with the given configuration
	pub fn new(config: FlashConfig) -> Self {
		Self { config }
	}

	/// Create the middleware with the default configuration
	pub fn with_defaults() -> Self {
		Self::new(FlashConfig::default())
	}

	/// Register the flash lifecycle on a middleware chain
	///
	/// Appends the middleware, making it the innermost registration so far:
	/// its request half runs right before the handler and its response half
	/// right after, ahead of every previously registered middleware's
	/// response pass.
	pub fn enable(chain: &mut MiddlewareChain, config: FlashConfig) {
		chain.add_middleware(Arc::new(Self::new(config)));
	}
}

impl Default for FlashMiddleware {
	fn default() -> Self {
		Self::with_defaults()
	}
}

#[async_trait]
impl Middleware for FlashMiddleware {
	async fn process(&self, request: Request, next: Arc<dyn Handler>) -> Result<Response> {
		let session = request.session().ok_or_else(|| {
			Error::InvalidArgument(
				"flash middleware requires a session on the request; \
				 register it after the session middleware"
					.to_string(),
			)
		})?;

		let store = FlashStore::new(session, &self.config)?;
		request.extensions.insert(store.clone());

		let mut response = next.handle(request).await?;

		// Messages move out of the session only when a view is about to
		// render; otherwise they survive untouched for the next request.
		if response.template_name().is_some()
			&& let Some(table) = store.pop_all()?
			&& !table.is_empty()
		{
			debug!(kinds = table.len(), "flash messages moved to render context");
			response.context_mut().insert(self.config.context_key(), table)?;
		}

		Ok(response)
	}
}
