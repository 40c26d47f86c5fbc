//! Render-time data bag
//!
//! A `Context` travels with the response into the view-rendering step and is
//! discarded afterwards; it is never persisted.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// Data bag handed to the view-rendering step
///
/// # Examples
///
/// ```
/// use flashbag::http::Context;
///
/// let mut context = Context::new();
/// context.insert("title", "Dashboard").unwrap();
///
/// assert_eq!(*context.get("title").unwrap(), "Dashboard");
/// assert!(context.get("missing").is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct Context {
	values: HashMap<String, Value>,
}

impl Context {
	/// Create an empty context
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert a serializable value under `key`
	///
	/// # Errors
	///
	/// Returns [`Error::Serialization`](crate::Error::Serialization) when the
	/// value cannot be converted to JSON.
	pub fn insert<T: Serialize>(&mut self, key: impl Into<String>, value: T) -> Result<()> {
		self.values.insert(key.into(), serde_json::to_value(value)?);
		Ok(())
	}

	/// Get the value stored under `key`, if any
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.values.get(key)
	}

	/// Whether a value is stored under `key`
	pub fn contains_key(&self, key: &str) -> bool {
		self.values.contains_key(key)
	}

	/// Whether the context holds no values
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Number of values in the context
	pub fn len(&self) -> usize {
		self.values.len()
	}
}
