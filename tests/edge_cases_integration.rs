//! Edge Case Integration Tests
//!
//! Error paths and boundary behavior of the flash lifecycle: missing
//! sessions, malformed stored data, custom configuration, and the
//! danger/error alias.


use fixtures::{QueueAndRedirect, RenderPage, context_table, flash_chain, request_with_session, session};
use flashbag::http::{Handler, Request};
use flashbag::{
	Error, FlashConfig, FlashRenderer, FlashStore, Level, render_messages,
};
use rstest::rstest;
use std::sync::Arc;

/// Test: a request without a session fails with an argument error
#[rstest]
#[tokio::test]
async fn test_missing_session_fails() {
	let chain = flash_chain(
		Arc::new(RenderPage { template: "home.html" }),
		FlashConfig::default(),
	);
	let request = Request::builder().build().unwrap();

	let err = chain.handle(request).await.unwrap_err();
	assert!(matches!(err, Error::InvalidArgument(_)));
}

/// Test: malformed stored table surfaces a serialization error, not silent
/// repair
#[rstest]
#[tokio::test]
async fn test_malformed_session_value_is_an_error() {
	let config = FlashConfig::default();
	let session = session();
	{
		let mut guard = session.lock().unwrap_or_else(|e| e.into_inner());
		guard
			.set(config.session_key(), "][ not a table".to_string())
			.unwrap();
	}

	let chain = flash_chain(Arc::new(RenderPage { template: "home.html" }), config);
	let err = chain.handle(request_with_session(&session)).await.unwrap_err();
	assert!(matches!(err, Error::Serialization(_)));
}

/// Test: rendering with nothing queued attaches nothing to the context
#[rstest]
#[tokio::test]
async fn test_empty_session_renders_without_context_entry() {
	let config = FlashConfig::default();
	let session = session();

	let chain = flash_chain(Arc::new(RenderPage { template: "home.html" }), config.clone());
	let response = chain.handle(request_with_session(&session)).await.unwrap();

	assert!(context_table(&response, &config).is_none());
	assert!(response.context().is_empty());
}

/// Test: repeated template-less responses keep accumulating messages
#[rstest]
#[tokio::test]
async fn test_messages_accumulate_across_redirects() {
	let config = FlashConfig::default();
	let session = session();

	for text in ["First", "Second"] {
		let chain = flash_chain(
			Arc::new(QueueAndRedirect {
				messages: vec![("info", text)],
				location: "/",
			}),
			config.clone(),
		);
		chain.handle(request_with_session(&session)).await.unwrap();
	}

	let chain = flash_chain(Arc::new(RenderPage { template: "home.html" }), config.clone());
	let response = chain.handle(request_with_session(&session)).await.unwrap();

	let table = context_table(&response, &config).unwrap();
	assert_eq!(
		table["info"],
		vec!["First".to_string(), "Second".to_string()]
	);
}

/// Test: error-level messages render under the danger kind
#[rstest]
#[tokio::test]
async fn test_error_alias_renders_as_danger() {
	let config = FlashConfig::default();
	let session = session();

	let store = FlashStore::new(session.clone(), &config).unwrap();
	store.add_error("Something broke").unwrap();
	store.add_danger("And again").unwrap();

	let chain = flash_chain(Arc::new(RenderPage { template: "home.html" }), config.clone());
	let response = chain.handle(request_with_session(&session)).await.unwrap();

	let html = render_messages(response.context(), &config, Level::Danger.tag());
	assert!(html.contains("Something broke"));
	assert!(html.contains("And again"));
	assert_eq!(render_messages(response.context(), &config, "error"), "");
}

/// Test: custom keys and renderer flow through the whole pipeline
#[rstest]
#[tokio::test]
async fn test_custom_configuration_end_to_end() {
	struct PlainRenderer;

	impl FlashRenderer for PlainRenderer {
		fn render(&self, kind: &str, messages: &[String]) -> String {
			format!("[{}] {}", kind, messages.join("; "))
		}
	}

	let config = FlashConfig::new()
		.with_session_key("_notices")
		.with_context_key("notices")
		.with_renderer(PlainRenderer);
	let session = session();

	let chain = flash_chain(
		Arc::new(QueueAndRedirect {
			messages: vec![("info", "One"), ("info", "Two")],
			location: "/",
		}),
		config.clone(),
	);
	chain.handle(request_with_session(&session)).await.unwrap();

	// The table sits under the custom session key
	{
		let guard = session.lock().unwrap_or_else(|e| e.into_inner());
		assert!(guard.get("_notices").unwrap().is_some());
		assert_eq!(guard.get("_flash_messages").unwrap(), None);
	}

	let chain = flash_chain(Arc::new(RenderPage { template: "home.html" }), config.clone());
	let response = chain.handle(request_with_session(&session)).await.unwrap();

	assert!(response.context().contains_key("notices"));
	assert_eq!(
		render_messages(response.context(), &config, "info"),
		"[info] One; Two"
	);
}

/// Test: message text is HTML-escaped by the default renderer end to end
#[rstest]
#[tokio::test]
async fn test_default_renderer_escapes_untrusted_text() {
	let config = FlashConfig::default();
	let session = session();

	let chain = flash_chain(
		Arc::new(QueueAndRedirect {
			messages: vec![("danger", "<b>bold</b> & \"quoted\"")],
			location: "/",
		}),
		config.clone(),
	);
	chain.handle(request_with_session(&session)).await.unwrap();

	let chain = flash_chain(Arc::new(RenderPage { template: "home.html" }), config.clone());
	let response = chain.handle(request_with_session(&session)).await.unwrap();

	let html = render_messages(response.context(), &config, "danger");
	assert!(html.contains("&lt;b&gt;bold&lt;/b&gt; &amp; &quot;quoted&quot;"));
	assert!(!html.contains("<b>"));
}
