//! Type-keyed storage attached to requests
//!
//! The middleware stores the request's [`FlashStore`](crate::FlashStore)
//! here; handlers retrieve it by type.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Type-keyed extension storage
///
/// Clones share the same underlying map, so a value inserted through one
/// clone is visible through the others.
///
/// # Examples
///
/// ```
/// use flashbag::http::Extensions;
///
/// let extensions = Extensions::new();
/// extensions.insert(7u32);
///
/// let clone = extensions.clone();
/// assert_eq!(clone.get::<u32>(), Some(7));
/// ```
#[derive(Clone, Default)]
pub struct Extensions {
	map: Arc<Mutex<HashMap<TypeId, Box<dyn Any + Send + Sync>>>>,
}

impl Extensions {
	/// Create an empty extension map
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert a value, replacing any previous value of the same type
	pub fn insert<T: Send + Sync + 'static>(&self, value: T) {
		let mut map = self.map.lock().unwrap_or_else(|e| e.into_inner());
		map.insert(TypeId::of::<T>(), Box::new(value));
	}

	/// Get a cloned value by type
	pub fn get<T>(&self) -> Option<T>
	where
		T: Clone + Send + Sync + 'static,
	{
		let map = self.map.lock().unwrap_or_else(|e| e.into_inner());
		map.get(&TypeId::of::<T>())
			.and_then(|boxed| boxed.downcast_ref::<T>())
			.cloned()
	}

	/// Whether a value of the given type is present
	pub fn contains<T: Send + Sync + 'static>(&self) -> bool {
		let map = self.map.lock().unwrap_or_else(|e| e.into_inner());
		map.contains_key(&TypeId::of::<T>())
	}

	/// Remove and return a value by type
	pub fn remove<T>(&self) -> Option<T>
	where
		T: Send + Sync + 'static,
	{
		let mut map = self.map.lock().unwrap_or_else(|e| e.into_inner());
		let boxed = map.remove(&TypeId::of::<T>())?;
		boxed.downcast::<T>().ok().map(|value| *value)
	}
}
