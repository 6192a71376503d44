use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, RenderError>;

/// Every variant is terminal for the run: there is no partial-render
/// recovery, no retry, and no fallback image.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("{} not found", .0.display())]
    MissingInput(PathBuf),

    #[error("invalid network description: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("node count {declared} does not match the {found} identifiers listed across layers")]
    CountMismatch { declared: usize, found: usize },

    #[error("slot pool of {declared} entries exhausted with nodes still unplaced")]
    SlotExhaustion { declared: usize },

    #[error("connection references unknown node {0:?}")]
    UnknownNodeReference(String),

    #[error("failed to write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
