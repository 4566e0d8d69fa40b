use std::any::{Any, TypeId, type_name};

use flume::Sender;
use log::warn;

use crate::State;

type Mutation = Box<dyn FnOnce(&mut dyn Any) + Send>;

/// A queued in-place mutation of one state.
pub struct Update {
    pub(crate) id: TypeId,
    pub(crate) type_name: &'static str,
    pub(crate) apply: Mutation,
}

/// Send side of the context's update queue.
///
/// Commands hold one of these and push mutations from whatever task they run on;
/// nothing is applied until the UI thread calls [`StateCtx::sync_updates`](crate::StateCtx::sync_updates).
#[derive(Clone)]
pub struct Updater {
    send: Sender<Update>,
}

impl std::fmt::Debug for Updater {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Updater")
            .field("pending", &self.send.len())
            .finish()
    }
}

impl Updater {
    pub(crate) fn new(send: Sender<Update>) -> Self {
        Self { send }
    }

    pub fn update<T, F>(&self, f: F)
    where
        T: State,
        F: FnOnce(&mut T) + Send + 'static,
    {
        let apply: Mutation = Box::new(move |any: &mut dyn Any| {
            if let Some(state) = any.downcast_mut::<T>() {
                f(state);
            }
        });
        let update = Update {
            id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            apply,
        };
        if self.send.send(update).is_err() {
            warn!("Dropping update for {}: state context is gone", type_name::<T>());
        }
    }
}
