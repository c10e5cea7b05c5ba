use crate::{LivenessError, LivenessRegistry, RuntimeId};

/// Registration held by the owner of one runtime.
///
/// The runtime is alive from construction of the guard until it is dropped or
/// [released](Self::release). Teardown must end liveness before any state the
/// runtime needs is invalidated, so owners either declare the guard as their
/// first field or release it at the top of their own `Drop`.
///
/// A guard created over an identity that is already live does not own the
/// registration and leaves it in place when dropped.
#[derive(Debug)]
#[must_use = "dropping the guard unregisters the runtime"]
pub struct LivenessGuard<'r> {
	registry: &'r LivenessRegistry,
	id: RuntimeId,
	owned: bool,
}

impl LivenessGuard<'static> {
	/// Registers `id` in the global registry.
	pub fn register(id: RuntimeId) -> Self {
		Self::register_in(LivenessRegistry::global(), id)
	}

	/// Registers `id` in the global registry, failing if it is already live.
	pub fn try_register(id: RuntimeId) -> Result<Self, LivenessError> {
		Self::try_register_in(LivenessRegistry::global(), id)
	}
}

impl<'r> LivenessGuard<'r> {
	/// Registers `id` in `registry`.
	pub fn register_in(registry: &'r LivenessRegistry, id: RuntimeId) -> Self {
		let owned = registry.register(id);
		if !owned {
			tracing::warn!(runtime = %id, "liveness.register.duplicate");
		}
		Self { registry, id, owned }
	}

	/// Registers `id` in `registry`, failing if it is already live.
	pub fn try_register_in(registry: &'r LivenessRegistry, id: RuntimeId) -> Result<Self, LivenessError> {
		if registry.register(id) {
			Ok(Self { registry, id, owned: true })
		} else {
			Err(LivenessError::AlreadyRegistered(id))
		}
	}

	/// Returns the registered identity.
	pub const fn id(&self) -> RuntimeId {
		self.id
	}

	/// Returns a liveness token for handing to other threads.
	pub const fn capture(&self) -> CapturedRuntime<'r> {
		CapturedRuntime {
			registry: self.registry,
			id: self.id,
		}
	}

	/// Ends liveness now.
	pub fn release(self) {
		drop(self);
	}
}

impl Drop for LivenessGuard<'_> {
	fn drop(&mut self) {
		if self.owned {
			self.registry.unregister(self.id);
		}
	}
}

/// Identity of a runtime captured for later use on another thread.
///
/// Carries no pointer to the runtime. Holders check [`Self::is_alive`] and
/// must rule out concurrent teardown themselves before acting on a `true`.
#[derive(Debug, Clone, Copy)]
pub struct CapturedRuntime<'r> {
	registry: &'r LivenessRegistry,
	id: RuntimeId,
}

impl CapturedRuntime<'static> {
	/// Captures `id` against the global registry without registering it.
	pub fn global(id: RuntimeId) -> Self {
		Self {
			registry: LivenessRegistry::global(),
			id,
		}
	}
}

impl<'r> CapturedRuntime<'r> {
	/// Captures `id` against `registry` without registering it.
	pub const fn new(registry: &'r LivenessRegistry, id: RuntimeId) -> Self {
		Self { registry, id }
	}

	/// Returns the captured identity.
	pub const fn id(&self) -> RuntimeId {
		self.id
	}

	/// Returns whether the captured runtime is registered right now.
	pub fn is_alive(&self) -> bool {
		self.registry.is_alive(self.id)
	}
}
