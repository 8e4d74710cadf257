//! Wordfreq engine: external collaborators around the core pipeline.
//!
//! The core only sees an opaque text string and hands back a ranked list;
//! this crate supplies the text (HTTP fetch) and consumes the list
//! (terminal bar chart), plus a log-backed pipeline observer.
mod chart;
mod fetch;
mod observer;

pub use chart::{ChartSink, TextBarChart};
pub use fetch::{
    FailureKind, FetchError, FetchEvent, FetchMetadata, FetchSettings, FetchedText,
    LogProgressSink, ProgressSink, ReqwestTextSource, TextSource,
};
pub use observer::LogObserver;
