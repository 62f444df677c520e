//! Stubbed return values.
//!
//! Instance bindings are an ordered list searched front to back, so the
//! earliest binding for a stub keeps answering. Shared bindings are keyed:
//! binding the same stub again replaces the previous value. A stub is its
//! identity together with its result type.

use std::any::{self, Any};
use std::fmt;

use super::{Identity, StubDescriptor};

enum Resolution<R> {
    Bound(R),
    Missing,
    WrongType(&'static str),
}

/// Bindings keyed by the whole stub, so the same identity bound under two
/// result types keeps two entries.
#[derive(Default)]
struct BindingTable {
    entries: Vec<(Box<dyn Any + Send>, Box<dyn Any + Send>)>,
}

impl BindingTable {
    fn position<I: Identity, R: 'static>(&self, stub: &StubDescriptor<I, R>) -> Option<usize> {
        self.entries
            .iter()
            .position(|(key, _)| key.downcast_ref::<StubDescriptor<I, R>>() == Some(stub))
    }

    fn push<I: Identity, R: 'static>(
        &mut self,
        stub: StubDescriptor<I, R>,
        value: Box<dyn Any + Send>,
    ) {
        self.entries.push((Box::new(stub), value));
    }

    fn resolve<I: Identity, R: Clone + 'static>(&self, stub: &StubDescriptor<I, R>) -> Resolution<R> {
        let Some(index) = self.position(stub) else {
            return Resolution::Missing;
        };
        match self.entries[index].1.downcast_ref::<R>() {
            Some(value) => Resolution::Bound(value.clone()),
            None => Resolution::WrongType(any::type_name::<R>()),
        }
    }

    fn expect<I: Identity, R: Clone + 'static>(&self, stub: &StubDescriptor<I, R>) -> R {
        match self.resolve(stub) {
            Resolution::Bound(value) => value,
            Resolution::Missing => panic!("No return value stubbed for {:?}", stub.method()),
            Resolution::WrongType(expected) => panic!(
                "Return value stubbed for {:?} is not a {}",
                stub.method(),
                expected
            ),
        }
    }
}

/// Per-instance bindings; the first binding for a stub wins.
#[derive(Default)]
pub struct InstanceBindings {
    table: BindingTable,
}

impl InstanceBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind<I: Identity, R: Send + 'static>(&mut self, stub: StubDescriptor<I, R>, value: R) {
        self.table.push(stub, Box::new(value));
    }

    /// Bind a value whose type is only checked when the method is invoked.
    pub fn bind_any<I: Identity, R: 'static>(
        &mut self,
        stub: StubDescriptor<I, R>,
        value: Box<dyn Any + Send>,
    ) {
        self.table.push(stub, value);
    }

    pub fn return_for<I: Identity, R: Clone + 'static>(
        &self,
        stub: &StubDescriptor<I, R>,
    ) -> Option<R> {
        match self.table.resolve(stub) {
            Resolution::Bound(value) => Some(value),
            Resolution::Missing | Resolution::WrongType(_) => None,
        }
    }

    /// Bound value for `stub`.
    ///
    /// # Panics
    ///
    /// When nothing is bound for the stub, or the bound value is not an `R`.
    pub fn expect_return<I: Identity, R: Clone + 'static>(&self, stub: &StubDescriptor<I, R>) -> R {
        self.table.expect(stub)
    }

    pub fn len(&self) -> usize {
        self.table.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.table.entries.clear();
    }
}

/// Bindings shared by every instance of a fake type; the last write wins.
#[derive(Default)]
pub struct SharedBindings {
    table: BindingTable,
}

impl SharedBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind<I: Identity, R: Send + 'static>(&mut self, stub: StubDescriptor<I, R>, value: R) {
        self.bind_any(stub, Box::new(value));
    }

    pub fn bind_any<I: Identity, R: 'static>(
        &mut self,
        stub: StubDescriptor<I, R>,
        value: Box<dyn Any + Send>,
    ) {
        match self.table.position(&stub) {
            Some(index) => self.table.entries[index].1 = value,
            None => self.table.push(stub, value),
        }
    }

    pub fn return_for<I: Identity, R: Clone + 'static>(
        &self,
        stub: &StubDescriptor<I, R>,
    ) -> Option<R> {
        match self.table.resolve(stub) {
            Resolution::Bound(value) => Some(value),
            Resolution::Missing | Resolution::WrongType(_) => None,
        }
    }

    /// Bound value for `stub`.
    ///
    /// # Panics
    ///
    /// When nothing is bound for the stub, or the bound value is not an `R`.
    pub fn expect_return<I: Identity, R: Clone + 'static>(&self, stub: &StubDescriptor<I, R>) -> R {
        self.table.expect(stub)
    }

    pub fn len(&self) -> usize {
        self.table.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.table.entries.clear();
    }
}

impl fmt::Debug for InstanceBindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceBindings")
            .field("entries", &self.len())
            .finish()
    }
}

impl fmt::Debug for SharedBindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedBindings")
            .field("entries", &self.len())
            .finish()
    }
}
