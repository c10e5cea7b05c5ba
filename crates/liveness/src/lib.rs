//! Process-wide liveness registry for runtimes referenced across threads.
//!
//! A runtime may be built on one thread and torn down on another while other
//! threads still hold identities captured from it. Before touching a captured
//! runtime, those threads ask the registry whether it is still alive.
//!
//! Only the lifecycle owner mutates the registry, through a [`LivenessGuard`].
//! Everyone else queries through [`is_runtime_alive`], [`LivenessRegistry::is_alive`]
//! or a [`CapturedRuntime`].
//!
//! A positive answer holds only at the instant of the check. Callers must
//! prevent concurrent teardown between the check and any use of the runtime,
//! e.g. by running both on the runtime's own thread.

mod error;
mod guard;
mod id;
mod registry;

pub use error::LivenessError;
pub use guard::{CapturedRuntime, LivenessGuard};
pub use id::RuntimeId;
pub use registry::LivenessRegistry;

/// Returns whether the runtime behind `runtime` is registered in the global registry.
///
/// # Panics
///
/// Panics if `runtime` is null.
pub fn is_runtime_alive<T: ?Sized>(runtime: *const T) -> bool {
	LivenessRegistry::global().is_alive_ptr(runtime)
}
