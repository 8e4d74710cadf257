/// Stage boundaries reported while a pipeline run progresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineEvent {
    /// Text was split; `fragments` workers' worth of input exists.
    Partitioned { fragments: usize },
    /// One fragment was counted by a worker.
    FragmentCounted {
        index: usize,
        distinct_words: usize,
    },
    /// All partial maps were merged.
    Merged { distinct_words: usize },
    /// The merged map was reduced to a ranked list.
    Ranked { entries: usize },
}

/// Injected progress capability; keeps the core free of ambient logging.
pub trait PipelineObserver: Send + Sync {
    fn emit(&self, event: PipelineEvent);
}

/// Observer that discards every event; the default for library callers.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {
    fn emit(&self, _event: PipelineEvent) {}
}
