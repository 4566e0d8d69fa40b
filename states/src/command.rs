use std::any::Any;
use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::{CommandSnapshot, Updater};

pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// A manual-only side effect (network IO and the like).
///
/// Commands never run implicitly: the UI dispatches them via
/// [`StateCtx::dispatch`](crate::StateCtx::dispatch), they read inputs from the
/// snapshot, and they report back through the [`Updater`].
pub trait Command: Any + Send + Sync {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> CommandFuture;
}
