use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// Rejected before any fragment is dispatched.
    #[error("worker count must be at least 1")]
    InvalidWorkerCount,
    /// A counter worker did not complete; the whole run is discarded.
    #[error("worker failed: {0}")]
    WorkerFailure(String),
}
