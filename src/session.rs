//! Session key-value store abstraction
//!
//! The flash store reads and writes exactly one key in a per-client session.
//! The session itself (cookie persistence, expiry, per-session isolation) is
//! the host framework's concern; this crate only needs get/set/delete on
//! opaque string values.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::error::Result;

/// Per-client session key-value store
///
/// Values are opaque strings. Implementations backed by fallible storage
/// (cookies, Redis, a database) surface failures through the `Result`
/// returns; purely in-memory implementations never fail.
pub trait Session: Send + Sync {
	/// Get the value stored under `key`, if any
	fn get(&self, key: &str) -> Result<Option<String>>;

	/// Store `value` under `key`, replacing any previous value
	fn set(&mut self, key: &str, value: String) -> Result<()>;

	/// Remove the value stored under `key`, if any
	fn delete(&mut self, key: &str) -> Result<()>;
}

/// Shared handle to a session, attachable to a request
///
/// The mutex guards the handle itself so it can cross the `Send + Sync`
/// pipeline traits; same-session request isolation remains delegated to the
/// host session implementation.
pub type SharedSession = Arc<Mutex<dyn Session>>;

/// In-memory session backed by a `HashMap`
///
/// Used by tests, doctests, and demos. Production deployments supply their
/// own [`Session`] implementation bound to the host framework's session
/// machinery.
///
/// # Examples
///
/// ```
/// use flashbag::{MemorySession, Session};
///
/// let mut session = MemorySession::new();
/// session.set("theme", "dark".to_string()).unwrap();
/// assert_eq!(session.get("theme").unwrap(), Some("dark".to_string()));
///
/// session.delete("theme").unwrap();
/// assert_eq!(session.get("theme").unwrap(), None);
/// ```
#[derive(Debug)]
pub struct MemorySession {
	id: String,
	data: HashMap<String, String>,
}

impl Default for MemorySession {
	fn default() -> Self {
		Self::new()
	}
}

impl MemorySession {
	/// Create a new empty session with a random id
	pub fn new() -> Self {
		Self {
			id: Uuid::new_v4().to_string(),
			data: HashMap::new(),
		}
	}

	/// The session id
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Number of keys stored in the session
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Whether the session holds no keys
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Wrap this session into a [`SharedSession`] handle
	///
	/// # Examples
	///
	/// ```
	/// use flashbag::MemorySession;
	///
	/// let session = MemorySession::new().into_shared();
	/// let store = flashbag::FlashStore::new(session, &Default::default()).unwrap();
	/// store.add_info("Welcome back").unwrap();
	/// ```
	pub fn into_shared(self) -> SharedSession {
		Arc::new(Mutex::new(self))
	}
}

impl Session for MemorySession {
	fn get(&self, key: &str) -> Result<Option<String>> {
		Ok(self.data.get(key).cloned())
	}

	fn set(&mut self, key: &str, value: String) -> Result<()> {
		self.data.insert(key.to_string(), value);
		Ok(())
	}

	fn delete(&mut self, key: &str) -> Result<()> {
		self.data.remove(key);
		Ok(())
	}
}
