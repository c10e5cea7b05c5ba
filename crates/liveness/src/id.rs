use std::fmt;
use std::num::NonZeroUsize;
use std::ptr::NonNull;

use crate::LivenessError;

/// Opaque identity of one runtime instance.
///
/// Derived from the runtime's address, so it is stable for as long as the
/// runtime does not move. The registry compares identities and never
/// dereferences them. Zero-sized values share addresses and must not be used
/// as identity sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuntimeId(NonZeroUsize);

impl RuntimeId {
	/// Returns the identity of the runtime behind `runtime`.
	pub fn of<T: ?Sized>(runtime: &T) -> Self {
		Self(NonNull::from(runtime).addr())
	}

	/// Returns the identity behind a raw pointer, or `None` if it is null.
	pub fn from_ptr<T: ?Sized>(runtime: *const T) -> Option<Self> {
		NonNull::new(runtime.cast_mut()).map(|ptr| Self(ptr.addr()))
	}

	/// Like [`Self::from_ptr`], reporting null as [`LivenessError::NullRuntime`].
	pub fn try_from_ptr<T: ?Sized>(runtime: *const T) -> Result<Self, LivenessError> {
		Self::from_ptr(runtime).ok_or(LivenessError::NullRuntime)
	}

	/// Returns the raw address value.
	pub const fn addr(self) -> usize {
		self.0.get()
	}
}

impl fmt::Display for RuntimeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:#x}", self.0.get())
	}
}
