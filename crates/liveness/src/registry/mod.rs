use std::collections::BTreeSet;

use parking_lot::Mutex;

use crate::RuntimeId;


static GLOBAL: LivenessRegistry = LivenessRegistry::new();

/// Set of currently live runtime identities.
///
/// Every operation takes the same mutex for the duration of one set
/// operation, so registrations, unregistrations and queries are totally
/// ordered. Nothing runs under the lock besides the set access itself.
///
/// Mutation is crate-private; lifecycle owners go through
/// [`LivenessGuard`](crate::LivenessGuard).
#[derive(Debug, Default)]
pub struct LivenessRegistry {
	live: Mutex<BTreeSet<RuntimeId>>,
}

impl LivenessRegistry {
	/// Creates an empty registry.
	///
	/// Most callers want [`Self::global`]. Owned instances are for embedders
	/// that scope liveness to a subsystem.
	pub const fn new() -> Self {
		Self {
			live: Mutex::new(BTreeSet::new()),
		}
	}

	/// Returns the process-wide registry.
	pub fn global() -> &'static Self {
		&GLOBAL
	}

	/// Adds `id` to the live set. Returns `false`, leaving the set unchanged,
	/// if it was already present.
	pub(crate) fn register(&self, id: RuntimeId) -> bool {
		let inserted = self.live.lock().insert(id);
		if inserted {
			tracing::trace!(runtime = %id, "liveness.register");
		}
		inserted
	}

	/// Removes `id` from the live set. Absent identities are ignored.
	pub(crate) fn unregister(&self, id: RuntimeId) {
		let removed = self.live.lock().remove(&id);
		if removed {
			tracing::trace!(runtime = %id, "liveness.unregister");
		} else {
			tracing::debug!(runtime = %id, "liveness.unregister.absent");
		}
	}

	/// Returns whether `id` is registered right now.
	///
	/// The answer may be stale as soon as this returns.
	pub fn is_alive(&self, id: RuntimeId) -> bool {
		self.live.lock().contains(&id)
	}

	/// Returns whether the runtime behind a raw pointer is registered right now.
	///
	/// # Panics
	///
	/// Panics if `runtime` is null, before taking the lock.
	pub fn is_alive_ptr<T: ?Sized>(&self, runtime: *const T) -> bool {
		assert!(!runtime.is_null(), "runtime is null");
		RuntimeId::from_ptr(runtime).is_some_and(|id| self.is_alive(id))
	}

	/// Returns the number of live runtimes.
	pub fn live_count(&self) -> usize {
		self.live.lock().len()
	}

	/// Returns live identities in ascending order.
	pub fn snapshot(&self) -> Vec<RuntimeId> {
		self.live.lock().iter().copied().collect()
	}
}
