// Report Rendering
// Human-readable, line-oriented summary of a document analysis

use std::io::{self, Write};

use crate::models::{Label, Report};

pub fn write_report<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "🧠 Estimated AI-style writing: {}% of the text.",
        report.ai_percent
    )?;
    writeln!(out)?;

    for sent in &report.sentences {
        writeln!(
            out,
            "{} {} ({}%) → {}",
            sent.label.icon(),
            sent.label,
            sent.percent(),
            sent.text
        )?;
    }

    writeln!(out)?;
    writeln!(out, "--- Summary Report ---")?;
    writeln!(out, "Total sentences analyzed: {}", report.total_sentences)?;
    writeln!(out, "Average AI-likeness score : {}%", report.ai_percent)?;
    writeln!(
        out,
        "{} {:<22}: {}",
        Label::HumanLike.icon(),
        "Human-like sentences",
        report.counts.human_like
    )?;
    writeln!(
        out,
        "{} {:<22}: {}",
        Label::PossiblyAi.icon(),
        "Possibly-AI sentences",
        report.counts.possibly_ai
    )?;
    writeln!(
        out,
        "{} {:<22}: {}",
        Label::AiLikely.icon(),
        "AI-likely sentences",
        report.counts.ai_likely
    )?;
    writeln!(
        out,
        "🧠 Final verdict: {} ({})",
        report.verdict.sentence(),
        report.verdict
    )?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FeatureScores, LabelCounts, SentenceResult, Verdict};

    fn render(report: &Report) -> String {
        let mut out = Vec::new();
        write_report(report, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_lines() {
        let report = Report {
            sentences: vec![SentenceResult {
                text: "Hello there.".to_string(),
                score: 0.704,
                label: Label::AiLikely,
                features: FeatureScores::default(),
            }],
            total_sentences: 1,
            counts: LabelCounts {
                ai_likely: 1,
                possibly_ai: 0,
                human_like: 0,
            },
            mean_score: 0.704,
            ai_percent: 70.4,
            verdict: Verdict::AiGenerated,
        };
        let text = render(&report);
        assert!(text.contains("Estimated AI-style writing: 70.4% of the text."));
        assert!(text.contains("⚠️ AI-likely (70%) → Hello there."));
        assert!(text.contains("Total sentences analyzed: 1"));
        assert!(text.contains("AI-likely sentences   : 1"));
        assert!(text.contains("Final verdict: This text is likely AI-generated. (AI-generated)"));
    }

    #[test]
    fn test_empty_report_has_no_sentence_lines() {
        let report = Report {
            sentences: Vec::new(),
            total_sentences: 0,
            counts: LabelCounts::default(),
            mean_score: 0.0,
            ai_percent: 0.0,
            verdict: Verdict::HumanWritten,
        };
        let text = render(&report);
        assert!(text.contains("Estimated AI-style writing: 0% of the text."));
        assert!(!text.contains("→"));
        assert!(text.contains("likely written by a human"));
    }
}
