pub mod error;
pub mod models;
pub mod services;

use std::io;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use error::AnalysisResult;
use models::Report;
use services::{extract_text, Detector, RuleBasedModel};

static PROCESS_START: OnceLock<Instant> = OnceLock::new();

fn elapsed_ms() -> u128 {
    PROCESS_START
        .get()
        .map(|t| t.elapsed().as_millis())
        .unwrap_or(0)
}

/// Initialize console logging on stderr; stdout is reserved for the report.
/// `RUST_LOG` overrides the default `warn` filter.
pub fn init_logging() {
    PROCESS_START.get_or_init(Instant::now);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(cfg!(debug_assertions))
        .with_target(true);

    // A subscriber may already be installed when embedded in another binary.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init();

    info!(version = env!("CARGO_PKG_VERSION"), "logging.initialized");
}

/// Extract `path`, analyze it with the default model and thresholds, and print
/// the report to stdout.
pub fn run(path: &Path) -> AnalysisResult<Report> {
    PROCESS_START.get_or_init(Instant::now);

    let text = extract_text(path)?;
    let detector = Detector::new(RuleBasedModel::new());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = detector.analyze_text(&text, &mut out)?;

    info!(
        elapsed_ms = elapsed_ms(),
        sentences = report.total_sentences,
        verdict = %report.verdict,
        "run.done"
    );
    Ok(report)
}
