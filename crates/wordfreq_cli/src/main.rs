//! Command-line entry point: fetch a page, run the map-reduce word-count
//! pipeline over it, and draw a frequency bar chart.

use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use pipeline_logging::LogDestination;
use wordfreq_core::{run_pipeline, ExecutionStrategy, PipelineSettings};
use wordfreq_engine::{
    ChartSink, FetchSettings, LogObserver, LogProgressSink, ReqwestTextSource, TextBarChart,
    TextSource,
};

#[derive(Debug, Parser)]
#[command(
    name = "wordfreq",
    about = "Analyze the most frequent words of a web page with a parallel map-reduce pipeline"
)]
struct Cli {
    /// Address of the http web page to analyze.
    #[arg(short, long)]
    url: String,

    /// Number of top words to report.
    #[arg(short = 'w', long, default_value_t = 10)]
    words: usize,

    /// Number of concurrent counter workers.
    #[arg(short = 'p', long, default_value_t = 5)]
    workers: usize,

    /// How workers hand their partial counts back.
    #[arg(long, value_enum, default_value = "isolated")]
    strategy: StrategyArg,

    /// Where log output goes.
    #[arg(long, value_enum, default_value = "terminal")]
    log: LogArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Workers send partial maps over a channel.
    Isolated,
    /// Workers append partial maps to a shared locked collection.
    Shared,
}

impl From<StrategyArg> for ExecutionStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Isolated => ExecutionStrategy::Isolated,
            StrategyArg::Shared => ExecutionStrategy::SharedMemory,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogArg {
    Terminal,
    File,
    Both,
}

impl From<LogArg> for LogDestination {
    fn from(arg: LogArg) -> Self {
        match arg {
            LogArg::Terminal => LogDestination::Terminal,
            LogArg::File => LogDestination::File,
            LogArg::Both => LogDestination::Both,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    pipeline_logging::initialize(cli.log.into(), LevelFilter::Info);

    let source = ReqwestTextSource::new(FetchSettings::default());
    let fetched = source.fetch_text(&cli.url, &LogProgressSink).await?;
    log::info!(
        "fetched {} bytes from {}",
        fetched.metadata.byte_len,
        fetched.metadata.final_url
    );

    let settings = PipelineSettings {
        workers: cli.workers,
        top_k: cli.words,
        strategy: cli.strategy.into(),
    };

    // The pool blocks until every worker joins; keep it off the runtime.
    let text = fetched.text;
    let ranked =
        tokio::task::spawn_blocking(move || run_pipeline(&text, &settings, &LogObserver)).await??;

    let chart = TextBarChart::default();
    let mut stdout = io::stdout().lock();
    chart.render(&ranked, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
