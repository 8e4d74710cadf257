use std::sync::Mutex;

use pretty_assertions::assert_eq;
use wordfreq_core::{
    count_fragment, merge, merged_counts, partition, run_pipeline, ExecutionStrategy,
    FrequencyMap, NoopObserver, PipelineEvent, PipelineObserver, PipelineSettings,
};

fn settings(workers: usize, top_k: usize, strategy: ExecutionStrategy) -> PipelineSettings {
    PipelineSettings {
        workers,
        top_k,
        strategy,
    }
}

fn whole_text_counts(text: &str) -> FrequencyMap {
    let fragments = partition(text, 1);
    assert_eq!(fragments.len(), 1);
    count_fragment(&fragments[0])
}

#[derive(Default)]
struct RecordingObserver {
    events: Mutex<Vec<PipelineEvent>>,
}

impl RecordingObserver {
    fn take(&self) -> Vec<PipelineEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl PipelineObserver for RecordingObserver {
    fn emit(&self, event: PipelineEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[test]
fn merged_fragment_counts_equal_whole_text_counts_without_boundary_splits() {
    pipeline_logging::initialize_for_tests();

    // Single-letter words can never straddle a fragment boundary, so the
    // merge invariant holds exactly: merged per-fragment counts equal the
    // count over the undivided text.
    let text = "a b c a b a a c b a d d";
    let expected = whole_text_counts(text);
    for workers in 1..=8 {
        let fragments = partition(text, workers);
        let merged = merge(fragments.iter().map(count_fragment));
        assert_eq!(merged, expected, "workers = {workers}");
    }
}

#[test]
fn words_split_at_a_fragment_boundary_count_as_two_tokens() {
    // "abcd" partitioned into two 2-byte fragments splits the only word.
    // This is the accepted accuracy caveat of byte-range partitioning.
    let fragments = partition("abcd", 2);
    assert_eq!(fragments.len(), 2);
    let merged = merge(fragments.iter().map(count_fragment));
    assert_eq!(merged.get("ab"), Some(&1));
    assert_eq!(merged.get("cd"), Some(&1));
    assert_eq!(merged.get("abcd"), None);
}

#[test]
fn both_strategies_produce_identical_merged_counts() {
    let text = "the quick brown fox jumps over the lazy dog the end";
    for workers in 1..=6 {
        let isolated = merged_counts(
            text,
            &settings(workers, 10, ExecutionStrategy::Isolated),
            &NoopObserver,
        )
        .unwrap();
        let shared = merged_counts(
            text,
            &settings(workers, 10, ExecutionStrategy::SharedMemory),
            &NoopObserver,
        )
        .unwrap();
        assert_eq!(isolated, shared, "workers = {workers}");
    }
}

#[test]
fn case_folded_counts_and_top_two_selection() {
    let text = "the quick brown fox the Quick FOX";

    // Counted as one fragment: case folding merges the variants.
    let counts = whole_text_counts(text);
    let expected: FrequencyMap = [("the", 2), ("quick", 2), ("brown", 1), ("fox", 2)]
        .into_iter()
        .map(|(word, count)| (word.to_string(), count))
        .collect();
    assert_eq!(counts, expected);

    // Top-2 keeps two of the three words tied at count 2, ascending.
    let ranked = run_pipeline(
        text,
        &settings(1, 2, ExecutionStrategy::Isolated),
        &NoopObserver,
    )
    .unwrap();
    assert_eq!(ranked.len(), 2);
    for entry in &ranked {
        assert_eq!(entry.count, 2);
        assert_ne!(entry.word, "brown");
    }
    assert!(ranked[0].count <= ranked[1].count);
}

#[test]
fn empty_text_yields_empty_ranked_list() {
    let ranked = run_pipeline(
        "",
        &settings(4, 10, ExecutionStrategy::Isolated),
        &NoopObserver,
    )
    .unwrap();
    assert!(ranked.is_empty());

    let merged = merged_counts(
        "",
        &settings(4, 10, ExecutionStrategy::SharedMemory),
        &NoopObserver,
    )
    .unwrap();
    assert!(merged.is_empty());
}

#[test]
fn repeated_word_across_three_workers() {
    // Nine bytes over three workers puts every chunk boundary after a
    // space, so the repeated word is never split.
    let text = "go go go ";
    let merged = merged_counts(
        text,
        &settings(3, 1, ExecutionStrategy::Isolated),
        &NoopObserver,
    )
    .unwrap();
    assert_eq!(merged.len(), 1);
    assert_eq!(merged.get("go"), Some(&3));

    let ranked = run_pipeline(
        text,
        &settings(3, 1, ExecutionStrategy::SharedMemory),
        &NoopObserver,
    )
    .unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].word, "go");
    assert_eq!(ranked[0].count, 3);
}

#[test]
fn ranked_output_is_ascending_and_bounded_by_k() {
    let text = "e d d c c c b b b b a a a a a";
    let ranked = run_pipeline(
        text,
        &settings(2, 3, ExecutionStrategy::Isolated),
        &NoopObserver,
    )
    .unwrap();
    assert!(ranked.len() <= 3);
    for window in ranked.windows(2) {
        assert!(window[0].count <= window[1].count);
    }
}

#[test]
fn observer_sees_every_stage_boundary() {
    let observer = RecordingObserver::default();
    let text = "a b c d e f g h";
    let ranked = run_pipeline(
        text,
        &settings(2, 3, ExecutionStrategy::Isolated),
        &observer,
    )
    .unwrap();

    let events = observer.take();
    let fragments = match events.first() {
        Some(PipelineEvent::Partitioned { fragments }) => *fragments,
        other => panic!("expected Partitioned first, got {other:?}"),
    };

    let counted = events
        .iter()
        .filter(|event| matches!(event, PipelineEvent::FragmentCounted { .. }))
        .count();
    assert_eq!(counted, fragments);

    assert!(events
        .iter()
        .any(|event| matches!(event, PipelineEvent::Merged { .. })));
    assert_eq!(
        events.last(),
        Some(&PipelineEvent::Ranked {
            entries: ranked.len()
        })
    );
}
