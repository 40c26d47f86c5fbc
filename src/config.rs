//! Flash message configuration
//!
//! The configuration carries the two fixed keys (session key and render
//! context key) and the renderer capability. The renderer is a strategy
//! object passed in explicitly at construction time, not looked up from any
//! ambient registry.

use std::sync::Arc;

use crate::render::{FlashRenderer, ListRenderer};

/// Default session key holding the serialized message table
pub const DEFAULT_SESSION_KEY: &str = "_flash_messages";

/// Default key under which the table lands in the render context
pub const DEFAULT_CONTEXT_KEY: &str = "flash_messages";

/// Configuration for the flash store and middleware
///
/// # Examples
///
/// ```
/// use flashbag::FlashConfig;
///
/// let config = FlashConfig::default();
/// assert_eq!(config.session_key(), "_flash_messages");
/// assert_eq!(config.context_key(), "flash_messages");
/// ```
#[derive(Clone)]
pub struct FlashConfig {
	session_key: String,
	context_key: String,
	renderer: Arc<dyn FlashRenderer>,
}

impl FlashConfig {
	/// Create a configuration with the default keys and renderer
	pub fn new() -> Self {
		Self {
			session_key: DEFAULT_SESSION_KEY.to_string(),
			context_key: DEFAULT_CONTEXT_KEY.to_string(),
			renderer: Arc::new(ListRenderer),
		}
	}

	/// Set the session key the message table is stored under
	///
	/// # Examples
	///
	/// ```
	/// use flashbag::FlashConfig;
	///
	/// let config = FlashConfig::new().with_session_key("_notices");
	/// assert_eq!(config.session_key(), "_notices");
	/// ```
	pub fn with_session_key(mut self, key: impl Into<String>) -> Self {
		self.session_key = key.into();
		self
	}

	/// Set the render context key the table is attached under
	///
	/// # Examples
	///
	/// ```
	/// use flashbag::FlashConfig;
	///
	/// let config = FlashConfig::new().with_context_key("notices");
	/// assert_eq!(config.context_key(), "notices");
	/// ```
	pub fn with_context_key(mut self, key: impl Into<String>) -> Self {
		self.context_key = key.into();
		self
	}

	/// Set the renderer used by the view-side helper
	///
	/// # Examples
	///
	/// ```
	/// use flashbag::{FlashConfig, FlashRenderer};
	///
	/// struct PlainRenderer;
	///
	/// impl FlashRenderer for PlainRenderer {
	///     fn render(&self, _kind: &str, messages: &[String]) -> String {
	///         messages.join("\n")
	///     }
	/// }
	///
	/// let config = FlashConfig::new().with_renderer(PlainRenderer);
	/// assert_eq!(config.renderer().render("info", &["hi".to_string()]), "hi");
	/// ```
	pub fn with_renderer(mut self, renderer: impl FlashRenderer + 'static) -> Self {
		self.renderer = Arc::new(renderer);
		self
	}

	/// The session key the message table is stored under
	pub fn session_key(&self) -> &str {
		&self.session_key
	}

	/// The render context key the table is attached under
	pub fn context_key(&self) -> &str {
		&self.context_key
	}

	/// The configured renderer capability
	pub fn renderer(&self) -> Arc<dyn FlashRenderer> {
		Arc::clone(&self.renderer)
	}
}

impl Default for FlashConfig {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for FlashConfig {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FlashConfig")
			.field("session_key", &self.session_key)
			.field("context_key", &self.context_key)
			.finish_non_exhaustive()
	}
}
