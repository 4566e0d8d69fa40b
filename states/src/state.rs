use std::any::Any;

/// A value stored in [`StateCtx`](crate::StateCtx), keyed by its concrete type.
///
/// Implementors that commands need to read must override [`State::snapshot`]
/// so the context can hand the command an owned copy.
pub trait State: Any + Send {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }
}

/// Shorthand for the common `snapshot` body of a `Clone` state.
pub fn snapshot_clone<T: State + Clone>(state: &T) -> Option<Box<dyn Any + Send>> {
    Some(Box::new(state.clone()))
}
