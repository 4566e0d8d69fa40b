//! Frame-synchronised state container for egui apps.
//!
//! UI code reads and mutates [`State`]s through [`StateCtx`]. Side effects live in
//! [`Command`]s, which are dispatched explicitly, run on the async runtime against a
//! [`CommandSnapshot`], and report back through an [`Updater`].

mod command;
mod ctx;
mod error;
mod snapshot;
mod state;
mod state_sync_status;
mod task;
mod updater;

pub use command::{Command, CommandFuture};
pub use ctx::StateCtx;
pub use error::Error;
pub use snapshot::CommandSnapshot;
pub use state::{State, snapshot_clone};
pub use state_sync_status::StateSyncStatus;
pub use task::{TaskHandle, TaskId};
pub use tokio_util::sync::CancellationToken;
pub use updater::Updater;
