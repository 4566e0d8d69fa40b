use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;

use crate::{Error, State};

/// Owned copies of every snapshot-able state, taken at dispatch time.
///
/// Commands run off the UI thread, so they read from this instead of the live context.
#[derive(Default)]
pub struct CommandSnapshot {
    inner: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl std::fmt::Debug for CommandSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSnapshot")
            .field("states", &self.inner.len())
            .finish()
    }
}

impl CommandSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_cloned(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        self.inner.insert(id, value);
    }

    /// Insert a state directly. Mostly useful when driving a command by hand in tests.
    pub fn with<T: State + Clone>(mut self, state: T) -> Self {
        self.inner.insert(TypeId::of::<T>(), Box::new(state));
        self
    }

    pub fn state<T: State + Clone>(&self) -> Result<T, Error> {
        self.inner
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .cloned()
            .ok_or(Error::SnapshotMissing {
                type_name: type_name::<T>(),
            })
    }
}
