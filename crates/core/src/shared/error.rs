use thiserror::Error;

/// Errors surfaced by the filter pipeline and its beautify stage.
///
/// "No face found" is deliberately not represented here: it is a normal
/// branch that yields a passthrough result.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Input frame is not a well-formed 3-channel image.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// The external landmark or object detector failed to initialize or run.
    /// Propagated to the caller; the core has no fallback detection logic.
    #[error("detector unavailable: {0}")]
    DetectorUnavailable(String),
}
