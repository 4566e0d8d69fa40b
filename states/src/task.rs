//! Identity and cancellation for dispatched command tasks.
//!
//! Every dispatch of a command type gets a fresh [`TaskId`] whose generation is one
//! higher than the previous dispatch of the same type. The context keeps a
//! [`TaskHandle`] for the newest one and cancels the older handle when a new
//! dispatch happens, so at most one task per command type is authoritative.

use std::any::TypeId;

use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Higher values were dispatched later.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Cooperative cancellation handle for one dispatched task.
///
/// Cancelling does not abort anything by force; the spawned future races the
/// command body against `cancelled()` and drops the body when the token fires.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}
