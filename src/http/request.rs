//! HTTP request representation

use bytes::Bytes;
use hyper::{HeaderMap, Method, Uri, Version};

use crate::error::{Error, Result};
use crate::session::SharedSession;

use super::Extensions;

/// HTTP request with typed extensions and an optional session handle
///
/// # Examples
///
/// ```
/// use flashbag::http::Request;
/// use hyper::Method;
///
/// let request = Request::builder()
///     .method(Method::POST)
///     .uri("/articles")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path(), "/articles");
/// assert!(request.session().is_none());
/// ```
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub version: Version,
	pub headers: HeaderMap,
	pub body: Bytes,
	pub extensions: Extensions,
	session: Option<SharedSession>,
}

impl std::fmt::Debug for Request {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Request")
			.field("method", &self.method)
			.field("uri", &self.uri)
			.field("version", &self.version)
			.field("headers", &self.headers)
			.field("body", &self.body)
			.field("extensions", &"<extensions>")
			.field("session", &self.session.as_ref().map(|_| "<session>"))
			.finish()
	}
}

impl Request {
	/// Start building a request
	pub fn builder() -> RequestBuilder {
		RequestBuilder::default()
	}

	/// The request path
	pub fn path(&self) -> &str {
		self.uri.path()
	}

	/// The session handle attached to this request, if any
	pub fn session(&self) -> Option<SharedSession> {
		self.session.clone()
	}

	/// Attach a session handle to this request
	pub fn set_session(&mut self, session: SharedSession) {
		self.session = Some(session);
	}
}

/// Builder for [`Request`]
#[derive(Default)]
pub struct RequestBuilder {
	method: Option<Method>,
	uri: Option<String>,
	version: Option<Version>,
	headers: Option<HeaderMap>,
	body: Option<Bytes>,
	session: Option<SharedSession>,
}

impl RequestBuilder {
	/// Set the request method (default `GET`)
	pub fn method(mut self, method: Method) -> Self {
		self.method = Some(method);
		self
	}

	/// Set the request uri (default `/`)
	pub fn uri(mut self, uri: impl Into<String>) -> Self {
		self.uri = Some(uri.into());
		self
	}

	/// Set the HTTP version (default `HTTP/1.1`)
	pub fn version(mut self, version: Version) -> Self {
		self.version = Some(version);
		self
	}

	/// Set the request headers
	pub fn headers(mut self, headers: HeaderMap) -> Self {
		self.headers = Some(headers);
		self
	}

	/// Set the request body
	pub fn body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = Some(body.into());
		self
	}

	/// Attach a session handle
	pub fn session(mut self, session: SharedSession) -> Self {
		self.session = Some(session);
		self
	}

	/// Build the request
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidArgument`] when the uri does not parse.
	pub fn build(self) -> Result<Request> {
		let uri: Uri = self
			.uri
			.as_deref()
			.unwrap_or("/")
			.parse()
			.map_err(|e| Error::InvalidArgument(format!("invalid uri: {}", e)))?;

		Ok(Request {
			method: self.method.unwrap_or(Method::GET),
			uri,
			version: self.version.unwrap_or(Version::HTTP_11),
			headers: self.headers.unwrap_or_default(),
			body: self.body.unwrap_or_default(),
			extensions: Extensions::new(),
			session: self.session,
		})
	}
}
