//! Rendering of flash messages into markup
//!
//! The renderer is a capability supplied by [`FlashConfig`](crate::FlashConfig):
//! a strategy object turning a message list into markup for one kind. The
//! view layer calls [`render_messages`] against the render-time context the
//! middleware populated; absent entries render as empty output.

use crate::config::FlashConfig;
use crate::http::Context;
use crate::store::MessageTable;

/// Turns a list of messages of one kind into markup
pub trait FlashRenderer: Send + Sync {
	/// Render `messages` of the given `kind` into a markup string
	fn render(&self, kind: &str, messages: &[String]) -> String;
}

/// Default renderer producing an HTML unordered list
///
/// Message text is HTML-escaped; the list carries `flash` and `flash-{kind}`
/// classes so stylesheets can color each kind.
///
/// # Examples
///
/// ```
/// use flashbag::{FlashRenderer, ListRenderer};
///
/// let renderer = ListRenderer;
/// let html = renderer.render("info", &["Saved".to_string()]);
/// assert_eq!(html, "<ul class=\"flash flash-info\"><li>Saved</li></ul>");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ListRenderer;

impl FlashRenderer for ListRenderer {
	fn render(&self, kind: &str, messages: &[String]) -> String {
		if messages.is_empty() {
			return String::new();
		}
		let mut html = format!("<ul class=\"flash flash-{}\">", escape_html(kind));
		for message in messages {
			html.push_str("<li>");
			html.push_str(&escape_html(message));
			html.push_str("</li>");
		}
		html.push_str("</ul>");
		html
	}
}

/// Render the messages of one kind from a render-time context
///
/// Reads the message table the middleware stored under the configured
/// context key, looks up the list for `kind`, and delegates to the
/// configuration-supplied renderer. Returns the empty string when the table
/// or the kind is absent.
///
/// # Examples
///
/// ```
/// use flashbag::http::Context;
/// use flashbag::{render_messages, FlashConfig};
/// use std::collections::HashMap;
///
/// let config = FlashConfig::default();
/// let mut context = Context::new();
/// let table: HashMap<String, Vec<String>> =
///     [("info".to_string(), vec!["Saved".to_string()])].into();
/// context.insert(config.context_key(), &table).unwrap();
///
/// let html = render_messages(&context, &config, "info");
/// assert!(html.contains("<li>Saved</li>"));
///
/// assert_eq!(render_messages(&context, &config, "warning"), "");
/// ```
pub fn render_messages(context: &Context, config: &FlashConfig, kind: &str) -> String {
	let Some(value) = context.get(config.context_key()) else {
		return String::new();
	};
	let Ok(table) = serde_json::from_value::<MessageTable>(value.clone()) else {
		return String::new();
	};
	match table.get(kind) {
		Some(messages) => config.renderer().render(kind, messages),
		None => String::new(),
	}
}

/// Escape HTML special characters
///
/// # Examples
///
/// ```
/// use flashbag::render::escape_html;
///
/// assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
/// assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
/// ```
pub fn escape_html(s: &str) -> String {
	let mut escaped = String::with_capacity(s.len());
	for c in s.chars() {
		match c {
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'&' => escaped.push_str("&amp;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(c),
		}
	}
	escaped
}
