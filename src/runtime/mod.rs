//! Runtime contract of a generated fake, expressed in Rust.
//!
//! The Swift fakes emitted by [`crate::generator`] rely on a small set of
//! behaviors: identity equality, a call log queried by stub, and two binding
//! stores with different overwrite rules. This module provides the same
//! behaviors for fakes written by hand in Rust.
//!
//! ```
//! use std::cell::RefCell;
//! use fakegen::runtime::{Identity, InstanceState, StubDescriptor};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum ClockMethod {
//!     Now,
//! }
//!
//! impl Identity for ClockMethod {
//!     fn ordinal(&self) -> usize {
//!         0
//!     }
//! }
//!
//! let state = RefCell::new(InstanceState::default());
//! let stub = StubDescriptor::<_, u64>::new(ClockMethod::Now);
//! state.borrow_mut().bindings.bind(stub.clone(), 42);
//!
//! state.borrow_mut().calls.record(stub.clone());
//! assert_eq!(state.borrow().bindings.expect_return(&stub), 42);
//! assert!(state.borrow().calls.did_call(&stub));
//! ```

pub mod bindings;
pub mod calls;
pub mod state;

pub use bindings::{InstanceBindings, SharedBindings};
pub use calls::CallLog;
pub use state::{
    reset_shared_state, shared_state, with_shared_state, InstanceState, SharedState,
};

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Method identity: one value per faked method, payload per argument.
pub trait Identity: PartialEq + fmt::Debug + Send + 'static {
    /// Declaration position of the method, stable across payloads.
    fn ordinal(&self) -> usize;
}

/// Payload compared by object identity instead of by value.
pub struct ByRef<T: ?Sized>(pub Arc<T>);

impl<T> ByRef<T> {
    pub fn new(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl<T: ?Sized> Clone for ByRef<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> PartialEq for ByRef<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: ?Sized> Eq for ByRef<T> {}

impl<T: ?Sized> fmt::Debug for ByRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByRef({:p})", Arc::as_ptr(&self.0))
    }
}

impl<T: ?Sized> From<Arc<T>> for ByRef<T> {
    fn from(value: Arc<T>) -> Self {
        Self(value)
    }
}

/// An identity tagged with the result type its method produces.
///
/// Two descriptors of the same type are equal when their identities are.
/// Logs and bindings keep the whole descriptor, so `R` decides which
/// entries a query can see.
pub struct StubDescriptor<I, R> {
    method: I,
    _result: PhantomData<fn() -> R>,
}

impl<I: Identity, R: 'static> StubDescriptor<I, R> {
    pub fn new(method: I) -> Self {
        Self {
            method,
            _result: PhantomData,
        }
    }

    pub fn method(&self) -> &I {
        &self.method
    }

    pub fn into_method(self) -> I {
        self.method
    }
}

impl<I: Clone, R> Clone for StubDescriptor<I, R> {
    fn clone(&self) -> Self {
        Self {
            method: self.method.clone(),
            _result: PhantomData,
        }
    }
}

impl<I: PartialEq, R> PartialEq for StubDescriptor<I, R> {
    fn eq(&self, other: &Self) -> bool {
        self.method == other.method
    }
}

impl<I: fmt::Debug, R> fmt::Debug for StubDescriptor<I, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StubDescriptor")
            .field("method", &self.method)
            .field("result", &std::any::type_name::<R>())
            .finish()
    }
}
