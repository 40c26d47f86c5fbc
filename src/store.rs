//! Session-backed flash message store
//!
//! The store keeps a single mapping of message kind to ordered message list,
//! serialized as one JSON object under one fixed session key. The table is
//! deserialized lazily on each read and fully rewritten on each mutation;
//! popping everything deletes the key outright.

use std::collections::HashMap;
use std::sync::MutexGuard;

use tracing::debug;

use crate::config::FlashConfig;
use crate::error::{Error, Result};
use crate::levels::Level;
use crate::session::{Session, SharedSession};

/// Mapping from message kind to ordered message list
pub type MessageTable = HashMap<String, Vec<String>>;

/// Session-backed flash message store
///
/// Cloning the store clones the session handle, not the messages: all clones
/// read and write the same session key. The middleware inserts a clone into
/// the request extensions so handlers can queue messages.
///
/// # Examples
///
/// ```
/// use flashbag::{FlashConfig, FlashStore, MemorySession};
///
/// let session = MemorySession::new().into_shared();
/// let store = FlashStore::new(session, &FlashConfig::default()).unwrap();
///
/// store.add("info", "Saved").unwrap();
/// store.add("info", "Done").unwrap();
///
/// assert_eq!(
///     store.peek("info").unwrap(),
///     Some(vec!["Saved".to_string(), "Done".to_string()])
/// );
/// ```
#[derive(Clone)]
pub struct FlashStore {
	session: SharedSession,
	session_key: String,
}

impl std::fmt::Debug for FlashStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FlashStore")
			.field("session", &"<session>")
			.field("session_key", &self.session_key)
			.finish()
	}
}

impl FlashStore {
	/// Create a store bound to a session and configuration
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidArgument`] when the configured session key is
	/// empty.
	pub fn new(session: SharedSession, config: &FlashConfig) -> Result<Self> {
		if config.session_key().is_empty() {
			return Err(Error::InvalidArgument(
				"flash session key must not be empty".to_string(),
			));
		}
		Ok(Self {
			session,
			session_key: config.session_key().to_string(),
		})
	}

	/// Queue a message of the given kind
	///
	/// Appends `text` to the list for `kind`, creating the list if missing,
	/// and writes the table back to the session.
	pub fn add(&self, kind: impl Into<String>, text: impl Into<String>) -> Result<()> {
		let kind = kind.into();
		let text = text.into();
		let mut session = self.lock_session();
		let mut table = self.load(&*session)?;
		table.entry(kind.clone()).or_default().push(text);
		self.save(&mut *session, &table)?;
		debug!(kind = %kind, "queued flash message");
		Ok(())
	}

	/// Queue a message under the kind tag of `level`
	pub fn add_level(&self, level: Level, text: impl Into<String>) -> Result<()> {
		self.add(level.tag(), text)
	}

	/// Queue an `"info"` message
	pub fn add_info(&self, text: impl Into<String>) -> Result<()> {
		self.add_level(Level::Info, text)
	}

	/// Queue a `"success"` message
	pub fn add_success(&self, text: impl Into<String>) -> Result<()> {
		self.add_level(Level::Success, text)
	}

	/// Queue a `"warning"` message
	pub fn add_warning(&self, text: impl Into<String>) -> Result<()> {
		self.add_level(Level::Warning, text)
	}

	/// Queue a `"danger"` message
	pub fn add_danger(&self, text: impl Into<String>) -> Result<()> {
		self.add_level(Level::Danger, text)
	}

	/// Queue a `"danger"` message under the `Error` alias
	pub fn add_error(&self, text: impl Into<String>) -> Result<()> {
		self.add_level(Level::Error, text)
	}

	/// Read the messages of one kind without consuming them
	///
	/// Returns `None` when the kind or the whole table is absent.
	pub fn peek(&self, kind: &str) -> Result<Option<Vec<String>>> {
		let session = self.lock_session();
		let table = self.load(&*session)?;
		Ok(table.get(kind).cloned())
	}

	/// Take the messages of one kind, removing them from the session
	///
	/// Removes the `kind` entry and rewrites the (possibly now-empty) table.
	/// Returns `None` when the kind or the whole table is absent.
	///
	/// # Examples
	///
	/// ```
	/// use flashbag::{FlashStore, MemorySession};
	///
	/// let session = MemorySession::new().into_shared();
	/// let store = FlashStore::new(session, &Default::default()).unwrap();
	///
	/// store.add("danger", "Oops").unwrap();
	/// assert_eq!(store.pop("danger").unwrap(), Some(vec!["Oops".to_string()]));
	/// assert_eq!(store.peek("danger").unwrap(), None);
	/// ```
	pub fn pop(&self, kind: &str) -> Result<Option<Vec<String>>> {
		let mut session = self.lock_session();
		let mut table = self.load(&*session)?;
		let Some(messages) = table.remove(kind) else {
			return Ok(None);
		};
		self.save(&mut *session, &table)?;
		debug!(kind = %kind, count = messages.len(), "popped flash messages");
		Ok(Some(messages))
	}

	/// Take the entire message table, deleting the session key
	///
	/// Returns `None` when no table was stored. The session key is removed
	/// outright rather than rewritten as an empty table.
	pub fn pop_all(&self) -> Result<Option<MessageTable>> {
		let mut session = self.lock_session();
		let Some(raw) = session.get(&self.session_key)? else {
			return Ok(None);
		};
		let table: MessageTable = serde_json::from_str(&raw)?;
		session.delete(&self.session_key)?;
		debug!(kinds = table.len(), "popped all flash messages");
		Ok(Some(table))
	}

	fn lock_session(&self) -> MutexGuard<'_, dyn Session + 'static> {
		self.session.lock().unwrap_or_else(|e| e.into_inner())
	}

	fn load(&self, session: &dyn Session) -> Result<MessageTable> {
		match session.get(&self.session_key)? {
			Some(raw) => Ok(serde_json::from_str(&raw)?),
			None => Ok(MessageTable::new()),
		}
	}

	fn save(&self, session: &mut dyn Session, table: &MessageTable) -> Result<()> {
		let raw = serde_json::to_string(table)?;
		session.set(&self.session_key, raw)
	}
}
