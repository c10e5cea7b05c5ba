use thiserror::Error;

use crate::RuntimeId;

/// Errors from the fallible registration and identity constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LivenessError {
	/// A null pointer was offered as a runtime identity.
	#[error("runtime is null")]
	NullRuntime,

	/// The identity is already present in the registry.
	#[error("runtime {0} is already registered")]
	AlreadyRegistered(RuntimeId),
}
