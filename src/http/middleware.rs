//! Handler and middleware traits, and the ordered middleware chain
//!
//! The chain is the explicit callback registry the host framework invokes:
//! middleware registered earlier wraps middleware registered later, so the
//! first registration runs first on the way in and last on the way out.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::Result;

use super::{Request, Response};

/// Processes a request into a response
#[async_trait]
pub trait Handler: Send + Sync {
	/// Handle an HTTP request
	///
	/// # Errors
	///
	/// Returns an error when the request cannot be processed.
	async fn handle(&self, request: Request) -> Result<Response>;
}

#[async_trait]
impl<T: Handler + ?Sized> Handler for Arc<T> {
	async fn handle(&self, request: Request) -> Result<Response> {
		(**self).handle(request).await
	}
}

/// Wraps a handler to run logic before and after it
#[async_trait]
pub trait Middleware: Send + Sync {
	/// Process a request, delegating to `next` for the inner pipeline
	///
	/// # Errors
	///
	/// Returns an error when this middleware or the inner pipeline fails.
	async fn process(&self, request: Request, next: Arc<dyn Handler>) -> Result<Response>;
}

/// Ordered middleware registry composed into a single handler
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use flashbag::http::{Handler, MiddlewareChain, Request, Response};
/// use std::sync::Arc;
///
/// struct Hello;
///
/// #[async_trait]
/// impl Handler for Hello {
///     async fn handle(&self, _request: Request) -> flashbag::Result<Response> {
///         Ok(Response::ok().with_body("hello"))
///     }
/// }
///
/// # tokio_test::block_on(async {
/// let chain = MiddlewareChain::new(Arc::new(Hello));
/// let request = Request::builder().build().unwrap();
/// let response = chain.handle(request).await.unwrap();
/// assert_eq!(response.body, bytes::Bytes::from("hello"));
/// # });
/// ```
pub struct MiddlewareChain {
	middlewares: Vec<Arc<dyn Middleware>>,
	handler: Arc<dyn Handler>,
}

impl MiddlewareChain {
	/// Create a chain around the innermost handler
	pub fn new(handler: Arc<dyn Handler>) -> Self {
		Self {
			middlewares: Vec::new(),
			handler,
		}
	}

	/// Append a middleware, builder style
	pub fn with_middleware(mut self, middleware: Arc<dyn Middleware>) -> Self {
		self.middlewares.push(middleware);
		self
	}

	/// Append a middleware
	pub fn add_middleware(&mut self, middleware: Arc<dyn Middleware>) {
		self.middlewares.push(middleware);
	}
}

#[async_trait]
impl Handler for MiddlewareChain {
	async fn handle(&self, request: Request) -> Result<Response> {
		let mut current: Arc<dyn Handler> = self.handler.clone();
		for middleware in self.middlewares.iter().rev() {
			current = Arc::new(ComposedHandler {
				middleware: middleware.clone(),
				next: current,
			});
		}
		current.handle(request).await
	}
}

struct ComposedHandler {
	middleware: Arc<dyn Middleware>,
	next: Arc<dyn Handler>,
}

#[async_trait]
impl Handler for ComposedHandler {
	async fn handle(&self, request: Request) -> Result<Response> {
		self.middleware.process(request, self.next.clone()).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	struct EchoHandler {
		body: String,
	}

	#[async_trait]
	impl Handler for EchoHandler {
		async fn handle(&self, _request: Request) -> Result<Response> {
			Ok(Response::ok().with_body(self.body.clone()))
		}
	}

	struct PrefixMiddleware {
		prefix: String,
	}

	#[async_trait]
	impl Middleware for PrefixMiddleware {
		async fn process(&self, request: Request, next: Arc<dyn Handler>) -> Result<Response> {
			let response = next.handle(request).await?;
			let body = String::from_utf8(response.body.to_vec()).unwrap_or_default();
			Ok(Response::ok().with_body(format!("{}{}", self.prefix, body)))
		}
	}

	fn request() -> Request {
		Request::builder().build().unwrap()
	}

	#[rstest]
	#[tokio::test]
	async fn test_empty_chain_calls_handler() {
		let chain = MiddlewareChain::new(Arc::new(EchoHandler {
			body: "base".to_string(),
		}));

		let response = chain.handle(request()).await.unwrap();
		assert_eq!(response.body, bytes::Bytes::from("base"));
	}

	#[rstest]
	#[tokio::test]
	async fn test_middleware_run_in_registration_order() {
		let chain = MiddlewareChain::new(Arc::new(EchoHandler {
			body: "base".to_string(),
		}))
		.with_middleware(Arc::new(PrefixMiddleware {
			prefix: "outer:".to_string(),
		}))
		.with_middleware(Arc::new(PrefixMiddleware {
			prefix: "inner:".to_string(),
		}));

		let response = chain.handle(request()).await.unwrap();
		// First registered wraps the rest, so its prefix lands last
		assert_eq!(response.body, bytes::Bytes::from("outer:inner:base"));
	}

	#[rstest]
	#[tokio::test]
	async fn test_add_middleware_appends() {
		let mut chain = MiddlewareChain::new(Arc::new(EchoHandler {
			body: "base".to_string(),
		}));
		chain.add_middleware(Arc::new(PrefixMiddleware {
			prefix: "added:".to_string(),
		}));

		let response = chain.handle(request()).await.unwrap();
		assert_eq!(response.body, bytes::Bytes::from("added:base"));
	}
}
