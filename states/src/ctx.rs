use std::any::{TypeId, type_name};
use std::collections::BTreeMap;
use std::sync::Arc;

use flume::{Receiver, Sender};
use log::{debug, warn};
use tokio_util::sync::CancellationToken;

use crate::updater::Update;
use crate::{
    Command, CommandFuture, CommandSnapshot, Error, State, StateSyncStatus, TaskHandle, TaskId,
    Updater,
};

/// Owner of every registered state and command.
///
/// Lives on the UI thread. Async work reaches it only through [`Updater`] and is
/// applied in [`StateCtx::sync_updates`], once per frame.
pub struct StateCtx {
    states: BTreeMap<TypeId, (Box<dyn State>, StateSyncStatus)>,
    commands: BTreeMap<TypeId, Arc<dyn Command>>,
    tasks: BTreeMap<TypeId, TaskHandle>,
    generations: BTreeMap<TypeId, u64>,
    send: Sender<Update>,
    recv: Receiver<Update>,
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("commands", &self.commands.len())
            .field("tasks", &self.tasks.len())
            .field("pending_updates", &self.recv.len())
            .finish()
    }
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            states: BTreeMap::new(),
            commands: BTreeMap::new(),
            tasks: BTreeMap::new(),
            generations: BTreeMap::new(),
            send,
            recv,
        }
    }

    /// Register a state. Registering the same type twice replaces the old value.
    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(
            TypeId::of::<T>(),
            (Box::new(state), StateSyncStatus::Init),
        );
    }

    pub fn record_command<C: Command>(&mut self, command: C) {
        self.commands.insert(TypeId::of::<C>(), Arc::new(command));
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|(state, _)| state.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found(type_name::<T>(), "StateCtx::try_state"))
    }

    /// # Panics
    /// Panics if `T` was never registered with [`StateCtx::add_state`].
    pub fn state<T: State>(&self) -> &T {
        match self.try_state::<T>() {
            Ok(state) => state,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_state_mut<T: State>(&mut self) -> Result<&mut T, Error> {
        let (state, status) = self
            .states
            .get_mut(&TypeId::of::<T>())
            .ok_or_else(|| Error::state_not_found(type_name::<T>(), "StateCtx::try_state_mut"))?;
        *status = StateSyncStatus::Dirty;
        state
            .as_any_mut()
            .downcast_mut::<T>()
            .ok_or_else(|| Error::state_not_found(type_name::<T>(), "type id mismatch"))
    }

    /// Mutable access; marks the state dirty.
    ///
    /// # Panics
    /// Panics if `T` was never registered with [`StateCtx::add_state`].
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        match self.try_state_mut::<T>() {
            Ok(state) => state,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn sync_status<T: State>(&self) -> Option<StateSyncStatus> {
        self.states
            .get(&TypeId::of::<T>())
            .map(|(_, status)| *status)
    }

    pub fn mark_clean<T: State>(&mut self) {
        if let Some((_, status)) = self.states.get_mut(&TypeId::of::<T>()) {
            *status = StateSyncStatus::Clean;
        }
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    /// Owned copies of every state that opts into snapshots.
    pub fn snapshot(&self) -> CommandSnapshot {
        let mut snap = CommandSnapshot::new();
        for (id, (state, _)) in &self.states {
            if let Some(cloned) = state.snapshot() {
                snap.insert_cloned(*id, cloned);
            }
        }
        snap
    }

    /// Apply every queued update. Returns how many were applied.
    pub fn sync_updates(&mut self) -> usize {
        let mut applied = 0;
        for update in self.recv.try_iter() {
            match self.states.get_mut(&update.id) {
                Some((state, status)) => {
                    (update.apply)(state.as_any_mut());
                    *status = StateSyncStatus::Dirty;
                    applied += 1;
                }
                None => warn!("Dropping update for unregistered state {}", update.type_name),
            }
        }
        applied
    }

    /// Spawn command `C` against a fresh snapshot.
    ///
    /// The previous task of the same command type, if still running, is cancelled
    /// once the new one has been spawned.
    pub fn dispatch<C: Command>(&mut self) -> Result<TaskId, Error> {
        let id = TypeId::of::<C>();
        let name = type_name::<C>();
        let command = self
            .commands
            .get(&id)
            .cloned()
            .ok_or(Error::CommandNotFound { type_name: name })?;

        let generation = self.generations.get(&id).copied().unwrap_or(0) + 1;
        let task_id = TaskId::new(id, generation);
        let cancel = CancellationToken::new();

        let future = command.run(self.snapshot(), self.updater(), cancel.clone());
        spawn(future, cancel.clone(), name)?;
        debug!("Dispatched {name} (generation {generation})");

        self.generations.insert(id, generation);
        if let Some(previous) = self.tasks.insert(id, TaskHandle::new(task_id, cancel)) {
            debug!(
                "Cancelling {name} generation {}",
                previous.id().generation()
            );
            previous.cancel();
        }

        Ok(task_id)
    }

    /// The most recent dispatch of `C`, if any.
    pub fn latest_task<C: Command>(&self) -> Option<&TaskHandle> {
        self.tasks.get(&TypeId::of::<C>())
    }
}

async fn guarded(future: CommandFuture, cancel: CancellationToken, name: &'static str) {
    tokio::select! {
        () = cancel.cancelled() => debug!("{name} cancelled before completion"),
        () = future => {}
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn(future: CommandFuture, cancel: CancellationToken, name: &'static str) -> Result<(), Error> {
    let Ok(handle) = tokio::runtime::Handle::try_current() else {
        return Err(Error::NoRuntime { type_name: name });
    };
    // Detached; completion is observed through the updater.
    drop(handle.spawn(guarded(future, cancel, name)));
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn spawn(future: CommandFuture, cancel: CancellationToken, name: &'static str) -> Result<(), Error> {
    wasm_bindgen_futures::spawn_local(guarded(future, cancel, name));
    Ok(())
}
