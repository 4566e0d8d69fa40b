#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateSyncStatus {
    /// Registered, never touched since.
    #[default]
    Init,
    /// Changed since the last time the UI acknowledged it.
    Dirty,
    Clean,
}
