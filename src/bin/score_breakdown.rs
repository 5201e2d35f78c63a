// Score Breakdown
// Per-sentence tokens and sub-feature scores for tuning the scorer

use aichecker_lib::services::text_processor::normalize_text;
use aichecker_lib::services::{extract_text, Detector, LanguageModel, RuleBasedModel};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Show tokens and sub-feature scores for every sentence of a document")]
struct Args {
    /// Input file (.txt, .docx, .pdf, .pptx)
    #[arg(value_name = "FILE")]
    path: PathBuf,

    /// Maximum number of sentences to print
    #[arg(long, default_value_t = 50)]
    limit: usize,

    /// Print the full report as JSON instead of the table
    #[arg(long)]
    json: bool,
}

fn preview(s: &str, max_chars: usize) -> String {
    let mut out: String = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        out.push_str("...");
    }
    out.replace('\n', " ")
}

fn main() -> Result<()> {
    let args = Args::parse();
    aichecker_lib::init_logging();

    let extracted = extract_text(&args.path)
        .with_context(|| format!("extracting {}", args.path.display()))?;
    let detector = Detector::new(RuleBasedModel::new());

    if args.json {
        let report = detector.analyze(&extracted);
        let json = serde_json::to_string_pretty(&report).context("serializing report")?;
        println!("{}", json);
        return Ok(());
    }

    let text = normalize_text(&extracted);
    let spans = detector.model().sentences(&text);

    println!("File: {}", args.path.display());
    println!("Extracted: {} chars ({} bytes)", text.chars().count(), text.len());
    println!("Sentences: {}", spans.len());
    let config = detector.config();
    println!(
        "Thresholds: ai-likely > {} possibly-ai > {} length cap {} chars",
        config.ai_likely_threshold, config.possibly_ai_threshold, config.length_cap_chars
    );
    println!();

    for (i, span) in spans.iter().take(args.limit).enumerate() {
        let tokens = detector.model().tokenize(&span.text);
        let tags: Vec<String> = tokens
            .iter()
            .map(|t| format!("{}/{}", t.text, t.role.tag()))
            .collect();
        let result = detector.score_sentence(&span.text);
        let f = result.features;
        println!(
            "[S{:04}] bytes=[{},{}] len={:.2} cc={:.2} div={:.2} read={:.2} score={:.3} {}  {}",
            i,
            span.start,
            span.end,
            f.length,
            f.conjunction,
            f.diversity,
            f.readability,
            result.score,
            result.label,
            preview(&span.text, 100)
        );
        println!("        tokens: {}", preview(&tags.join(" "), 160));
    }
    if spans.len() > args.limit {
        println!("... ({} more sentences)", spans.len() - args.limit);
    }

    Ok(())
}
