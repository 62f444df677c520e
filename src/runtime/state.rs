use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use super::{CallLog, InstanceBindings, SharedBindings};

/// Calls and bindings owned by one fake instance.
#[derive(Debug, Default)]
pub struct InstanceState {
    pub calls: CallLog,
    pub bindings: InstanceBindings,
}

/// Calls and bindings shared by all instances of one fake type.
///
/// The state lives for the whole process and is visible from every thread.
/// Nothing clears it implicitly; call [`reset_shared_state`] between tests or
/// install a fresh state with [`with_shared_state`].
#[derive(Debug, Default)]
pub struct SharedState {
    pub calls: CallLog,
    pub bindings: SharedBindings,
}

impl SharedState {
    pub fn reset(&mut self) {
        self.calls.clear();
        self.bindings.clear();
    }
}

type Registry = HashMap<TypeId, Arc<Mutex<SharedState>>>;

static SHARED: Lazy<Mutex<Registry>> = Lazy::new(|| Mutex::new(HashMap::new()));

/// Shared state for fake type `F`, created on first use.
pub fn shared_state<F: 'static>() -> Arc<Mutex<SharedState>> {
    Arc::clone(SHARED.lock().entry(TypeId::of::<F>()).or_default())
}

/// Install `state` as the shared state for `F`, returning the one it replaces.
pub fn with_shared_state<F: 'static>(
    state: Arc<Mutex<SharedState>>,
) -> Option<Arc<Mutex<SharedState>>> {
    SHARED.lock().insert(TypeId::of::<F>(), state)
}

/// Clear the calls and bindings recorded for fake type `F`.
pub fn reset_shared_state<F: 'static>() {
    shared_state::<F>().lock().reset();
}
