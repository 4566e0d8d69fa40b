use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("State not found: {type_name}, context: {context}")]
    StateNotFound {
        type_name: &'static str,
        context: String,
    },
    #[error("Command not found: {type_name}")]
    CommandNotFound { type_name: &'static str },
    #[error("Snapshot for {type_name} is missing")]
    SnapshotMissing { type_name: &'static str },
    #[error("No async runtime available to spawn {type_name}")]
    NoRuntime { type_name: &'static str },
}

impl Error {
    pub fn state_not_found(type_name: &'static str, context: impl Into<String>) -> Self {
        Self::StateNotFound {
            type_name,
            context: context.into(),
        }
    }
}
