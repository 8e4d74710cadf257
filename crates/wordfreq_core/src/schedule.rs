use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::thread;

use crate::count::{count_fragment, FrequencyMap};
use crate::error::PipelineError;
use crate::fragment::{partition, TextFragment};
use crate::merge::merge;
use crate::observer::{PipelineEvent, PipelineObserver};
use crate::rank::{top_k, RankedEntry};

/// How the worker pool communicates partial results back.
///
/// Both strategies run a fixed-width pool and produce identical merged
/// counts; they differ only in the hand-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Workers own their partial maps exclusively and send them over a
    /// channel. No shared mutable state.
    #[default]
    Isolated,
    /// Workers append partial maps to one mutex-guarded collection. The
    /// collection is never read until every worker has joined.
    SharedMemory,
}

#[derive(Debug, Clone)]
pub struct PipelineSettings {
    /// Worker pool width; must be at least 1.
    pub workers: usize,
    /// How many of the most frequent words to keep.
    pub top_k: usize,
    pub strategy: ExecutionStrategy,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            workers: num_cpus::get().max(1),
            top_k: 10,
            strategy: ExecutionStrategy::default(),
        }
    }
}

/// Run the full pipeline: partition, fan out, merge, rank.
///
/// Empty text is not an error; it yields an empty ranked list. A worker
/// failure aborts the run as a whole and no partial result is returned.
pub fn run_pipeline(
    text: &str,
    settings: &PipelineSettings,
    observer: &dyn PipelineObserver,
) -> Result<Vec<RankedEntry>, PipelineError> {
    let merged = merged_counts(text, settings, observer)?;
    let ranked = top_k(&merged, settings.top_k);
    observer.emit(PipelineEvent::Ranked {
        entries: ranked.len(),
    });
    Ok(ranked)
}

/// Partition `text`, count every fragment with up to `settings.workers`
/// concurrent workers, and merge the partial maps.
///
/// Blocks until every worker has completed (full barrier); no fragment's
/// result is dropped and none is counted twice.
pub fn merged_counts(
    text: &str,
    settings: &PipelineSettings,
    observer: &dyn PipelineObserver,
) -> Result<FrequencyMap, PipelineError> {
    if settings.workers == 0 {
        return Err(PipelineError::InvalidWorkerCount);
    }

    let fragments = partition(text, settings.workers);
    observer.emit(PipelineEvent::Partitioned {
        fragments: fragments.len(),
    });

    let width = settings.workers.min(fragments.len());
    let partials = match settings.strategy {
        ExecutionStrategy::Isolated => count_isolated(&fragments, width, observer)?,
        ExecutionStrategy::SharedMemory => count_shared(&fragments, width, observer)?,
    };

    let merged = merge(partials);
    observer.emit(PipelineEvent::Merged {
        distinct_words: merged.len(),
    });
    Ok(merged)
}

/// Isolated strategy: fragments are fanned out over a work channel, each
/// worker counts into memory it exclusively owns and sends the finished
/// map back over a result channel.
fn count_isolated(
    fragments: &[TextFragment<'_>],
    width: usize,
    observer: &dyn PipelineObserver,
) -> Result<Vec<FrequencyMap>, PipelineError> {
    let (work_tx, work_rx) = crossbeam_channel::unbounded::<(usize, TextFragment<'_>)>();
    let (result_tx, result_rx) = crossbeam_channel::unbounded::<FrequencyMap>();

    for item in fragments.iter().copied().enumerate() {
        work_tx
            .send(item)
            .map_err(|_| PipelineError::WorkerFailure("work queue closed early".into()))?;
    }
    drop(work_tx);

    let all_joined = thread::scope(|scope| {
        let mut handles = Vec::with_capacity(width);
        for _ in 0..width {
            let work_rx = work_rx.clone();
            let result_tx = result_tx.clone();
            handles.push(scope.spawn(move || {
                while let Ok((index, fragment)) = work_rx.recv() {
                    let counts = count_fragment(&fragment);
                    observer.emit(PipelineEvent::FragmentCounted {
                        index,
                        distinct_words: counts.len(),
                    });
                    if result_tx.send(counts).is_err() {
                        return;
                    }
                }
            }));
        }
        join_all(handles)
    });
    drop(result_tx);

    if !all_joined {
        return Err(PipelineError::WorkerFailure("counter worker panicked".into()));
    }

    let partials: Vec<FrequencyMap> = result_rx.iter().collect();
    if partials.len() != fragments.len() {
        return Err(PipelineError::WorkerFailure(format!(
            "expected {} partial maps, collected {}",
            fragments.len(),
            partials.len()
        )));
    }
    Ok(partials)
}

/// Shared-memory strategy: workers claim fragment indices from an atomic
/// cursor and append their maps to one mutex-guarded collection. Appends
/// are mutually exclusive; nothing reads the collection until the barrier.
fn count_shared(
    fragments: &[TextFragment<'_>],
    width: usize,
    observer: &dyn PipelineObserver,
) -> Result<Vec<FrequencyMap>, PipelineError> {
    let next_index = AtomicUsize::new(0);
    let partials = Mutex::new(Vec::with_capacity(fragments.len()));

    let all_joined = thread::scope(|scope| {
        let mut handles = Vec::with_capacity(width);
        for _ in 0..width {
            handles.push(scope.spawn(|| {
                loop {
                    let index = next_index.fetch_add(1, Ordering::Relaxed);
                    let Some(fragment) = fragments.get(index) else {
                        return;
                    };
                    let counts = count_fragment(fragment);
                    observer.emit(PipelineEvent::FragmentCounted {
                        index,
                        distinct_words: counts.len(),
                    });
                    match partials.lock() {
                        Ok(mut guard) => guard.push(counts),
                        // A sibling panicked while holding the lock; the
                        // join below reports the failure.
                        Err(_) => return,
                    }
                }
            }));
        }
        join_all(handles)
    });

    if !all_joined {
        return Err(PipelineError::WorkerFailure("counter worker panicked".into()));
    }

    let partials = partials
        .into_inner()
        .map_err(|_| PipelineError::WorkerFailure("result collection poisoned".into()))?;
    if partials.len() != fragments.len() {
        return Err(PipelineError::WorkerFailure(format!(
            "expected {} partial maps, collected {}",
            fragments.len(),
            partials.len()
        )));
    }
    Ok(partials)
}

/// Join every handle even after a failure; leaving a panicked handle to
/// the scope's implicit join would propagate the panic to the caller
/// instead of letting the scheduler report it as an error.
fn join_all<T>(handles: Vec<thread::ScopedJoinHandle<'_, T>>) -> bool {
    let mut all_ok = true;
    for handle in handles {
        if handle.join().is_err() {
            all_ok = false;
        }
    }
    all_ok
}
