use thiserror::Error;

/// Reasons the camera request in `GazeTracker` initialization can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GazeError {
    #[error("video capture is not available: {0}")]
    CaptureUnavailable(String),
    #[error("video capture permission denied: {0}")]
    PermissionDenied(String),
    #[error("gaze initialization already in progress")]
    AlreadyInitializing,
}

/// Unknown names coming from the embedding page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown visualization kind '{0}'")]
    Visualization(String),
    #[error("unknown gaze event kind '{0}'")]
    GazeEventKind(String),
}
