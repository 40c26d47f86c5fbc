//! HTTP response representation
//!
//! A response optionally names a template to render; only then does the
//! flash middleware move messages into the render [`Context`]. Redirect
//! responses name no template, so queued messages stay in the session for
//! the next request.

use bytes::Bytes;
use hyper::header::{HeaderValue, LOCATION};
use hyper::{HeaderMap, StatusCode};

use super::Context;

/// HTTP response with an optional template name and render context
#[derive(Debug)]
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
	template_name: Option<String>,
	context: Context,
}

impl Response {
	/// Create a response with the given status code
	///
	/// # Examples
	///
	/// ```
	/// use flashbag::http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::new(StatusCode::OK);
	/// assert_eq!(response.status, StatusCode::OK);
	/// assert!(response.template_name().is_none());
	/// ```
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
			template_name: None,
			context: Context::new(),
		}
	}

	/// Create a `200 OK` response
	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}

	/// Create a `302 Found` redirect to `location`
	///
	/// # Examples
	///
	/// ```
	/// use flashbag::http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::temporary_redirect("/articles");
	/// assert_eq!(response.status, StatusCode::FOUND);
	/// assert_eq!(
	///     response.headers.get("location").unwrap().to_str().unwrap(),
	///     "/articles"
	/// );
	/// ```
	pub fn temporary_redirect(location: impl AsRef<str>) -> Self {
		let mut response = Self::new(StatusCode::FOUND);
		if let Ok(value) = HeaderValue::from_str(location.as_ref()) {
			response.headers.insert(LOCATION, value);
		}
		response
	}

	/// Set the response body
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Name the template this response renders with
	///
	/// # Examples
	///
	/// ```
	/// use flashbag::http::Response;
	///
	/// let response = Response::ok().with_template("articles/list.html");
	/// assert_eq!(response.template_name(), Some("articles/list.html"));
	/// ```
	pub fn with_template(mut self, name: impl Into<String>) -> Self {
		self.template_name = Some(name.into());
		self
	}

	/// The template this response renders with, if any
	pub fn template_name(&self) -> Option<&str> {
		self.template_name.as_deref()
	}

	/// The render-time context
	pub fn context(&self) -> &Context {
		&self.context
	}

	/// Mutable access to the render-time context
	pub fn context_mut(&mut self) -> &mut Context {
		&mut self.context
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_ok_response() {
		let response = Response::ok();
		assert_eq!(response.status, StatusCode::OK);
		assert!(response.body.is_empty());
		assert!(response.context().is_empty());
	}

	#[test]
	fn test_template_gate() {
		let plain = Response::ok();
		assert!(plain.template_name().is_none());

		let rendered = Response::ok().with_template("home.html");
		assert_eq!(rendered.template_name(), Some("home.html"));
	}

	#[test]
	fn test_redirect_sets_location() {
		let response = Response::temporary_redirect("/next");
		assert_eq!(response.status, StatusCode::FOUND);
		assert_eq!(response.headers.get(LOCATION).unwrap(), "/next");
		assert!(response.template_name().is_none());
	}

	#[test]
	fn test_context_mutation() {
		let mut response = Response::ok().with_template("home.html");
		response.context_mut().insert("title", "Home").unwrap();
		assert_eq!(*response.context().get("title").unwrap(), "Home");
	}

	#[test]
	fn test_with_body() {
		let response = Response::ok().with_body("rendered page");
		assert_eq!(response.body, Bytes::from("rendered page"));
	}
}
