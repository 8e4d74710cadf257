use wordfreq_core::{PipelineEvent, PipelineObserver};

/// Pipeline observer that reports stage boundaries through the `log`
/// facade; keeps logging injected rather than ambient in the core.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl PipelineObserver for LogObserver {
    fn emit(&self, event: PipelineEvent) {
        match event {
            PipelineEvent::Partitioned { fragments } => {
                log::info!("partitioned text into {fragments} fragment(s)");
            }
            PipelineEvent::FragmentCounted {
                index,
                distinct_words,
            } => {
                log::debug!("fragment {index} counted: {distinct_words} distinct word(s)");
            }
            PipelineEvent::Merged { distinct_words } => {
                log::info!("merged counts: {distinct_words} distinct word(s)");
            }
            PipelineEvent::Ranked { entries } => {
                log::info!("ranked top {entries} word(s)");
            }
        }
    }
}
