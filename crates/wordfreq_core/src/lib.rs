//! Wordfreq core: pure map-reduce word-count pipeline.
//!
//! Raw text is partitioned into contiguous fragments, each fragment is
//! counted by a worker, the partial counts are merged by summation, and
//! the merged map is reduced to a top-K list ordered ascending by count.
mod count;
mod error;
mod fragment;
mod merge;
mod observer;
mod rank;
mod schedule;
mod token;

pub use count::{count_fragment, FrequencyMap};
pub use error::PipelineError;
pub use fragment::{partition, TextFragment};
pub use merge::merge;
pub use observer::{NoopObserver, PipelineEvent, PipelineObserver};
pub use rank::{top_k, RankedEntry};
pub use schedule::{merged_counts, run_pipeline, ExecutionStrategy, PipelineSettings};
pub use token::tokens;
