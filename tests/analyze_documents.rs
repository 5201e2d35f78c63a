use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use aichecker_lib::error::AnalysisError;
use aichecker_lib::models::{Label, Verdict};
use aichecker_lib::services::{extract_text, Detector, RuleBasedModel};
use docx_rs::{Docx, Paragraph, Run};
use tempfile::TempDir;

fn write_docx(dir: &Path, paragraphs: &[&str]) -> PathBuf {
    let path = dir.join("essay.docx");
    let docx = paragraphs.iter().fold(Docx::new(), |doc, text| {
        doc.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)))
    });
    let file = File::create(&path).unwrap();
    docx.build().pack(file).unwrap();
    path
}

fn slide_xml(paragraphs: &[&str]) -> String {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<a:p><a:r><a:t>{p}</a:t></a:r></a:p>"))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"><p:cSld><p:spTree><p:sp><p:txBody>{body}</p:txBody></p:sp></p:spTree></p:cSld></p:sld>"#
    )
}

fn write_pptx(dir: &Path, slides: &[(u32, Vec<&str>)]) -> PathBuf {
    let path = dir.join("deck.pptx");
    let file = File::create(&path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    for (number, paragraphs) in slides {
        zip.start_file(format!("ppt/slides/slide{number}.xml"), options)
            .unwrap();
        zip.write_all(slide_xml(paragraphs).as_bytes()).unwrap();
    }
    zip.start_file("ppt/presentation.xml", options).unwrap();
    zip.write_all(b"<p:presentation/>").unwrap();
    zip.finish().unwrap();
    path
}

#[test]
fn test_txt_document_end_to_end() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sample.TXT");
    std::fs::write(&path, "This is a simple test sentence.").unwrap();

    let text = extract_text(&path).unwrap();
    let report = Detector::new(RuleBasedModel::new()).analyze(&text);
    assert_eq!(report.total_sentences, 1);
    assert_eq!(report.sentences[0].label, Label::HumanLike);
    assert_eq!(report.verdict, Verdict::HumanWritten);
}

#[test]
fn test_docx_paragraphs_are_joined_by_newline() {
    let dir = TempDir::new().unwrap();
    let path = write_docx(dir.path(), &["First paragraph here.", "Second paragraph here."]);

    let text = extract_text(&path).unwrap();
    assert_eq!(text, "First paragraph here.\nSecond paragraph here.");

    let report = Detector::new(RuleBasedModel::new()).analyze(&text);
    assert_eq!(report.total_sentences, 2);
    assert_eq!(report.counts.total(), 2);
}

#[test]
fn test_pptx_slides_in_numeric_order() {
    let dir = TempDir::new().unwrap();
    let path = write_pptx(
        dir.path(),
        &[
            (10, vec!["Tenth slide."]),
            (2, vec!["Second slide title", "Second slide body."]),
            (1, vec!["First slide."]),
        ],
    );

    let text = extract_text(&path).unwrap();
    assert_eq!(
        text,
        "First slide.\nSecond slide title\nSecond slide body.\nTenth slide."
    );
}

#[test]
fn test_repetitive_document_is_ai_generated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("generated.txt");
    let sentence = format!("{}.", "synergy leverage paradigm and ".repeat(10).trim());
    std::fs::write(&path, format!("{sentence}\n\n{sentence}")).unwrap();

    let text = extract_text(&path).unwrap();
    let mut out = Vec::new();
    let report = Detector::new(RuleBasedModel::new())
        .analyze_text(&text, &mut out)
        .unwrap();
    assert_eq!(report.counts.ai_likely, 2);
    assert_eq!(report.verdict, Verdict::AiGenerated);

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("Total sentences analyzed: 2"));
    assert!(printed.contains("(AI-generated)"));
}

#[test]
fn test_empty_text_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    std::fs::write(&path, "\n\n   \n").unwrap();

    let text = extract_text(&path).unwrap();
    let report = Detector::new(RuleBasedModel::new()).analyze(&text);
    assert_eq!(report.total_sentences, 0);
    assert_eq!(report.ai_percent, 0.0);
    assert_eq!(report.verdict, Verdict::HumanWritten);
}

#[test]
fn test_markdown_is_unsupported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.md");
    std::fs::write(&path, "# Notes").unwrap();

    let err = aichecker_lib::run(&path).unwrap_err();
    assert!(matches!(err, AnalysisError::UnsupportedFormat { .. }));
    assert_eq!(err.to_string(), "Unsupported file type: .md");
}
