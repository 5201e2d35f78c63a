// Document Extraction
// Plain text out of .txt, .docx, .pdf and .pptx inputs

use std::fmt;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use quick_xml::events::Event;
use quick_xml::Reader as XmlReader;
use tracing::{debug, info};
use zip::ZipArchive;

use crate::error::{AnalysisError, AnalysisResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    PlainText,
    Docx,
    Pdf,
    Pptx,
}

impl DocumentFormat {
    /// Detect the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> AnalysisResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "txt" => Ok(Self::PlainText),
            "docx" => Ok(Self::Docx),
            "pdf" => Ok(Self::Pdf),
            "pptx" => Ok(Self::Pptx),
            _ => Err(AnalysisError::UnsupportedFormat {
                extension: if ext.is_empty() {
                    "(none)".to_string()
                } else {
                    format!(".{ext}")
                },
            }),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::PlainText => "txt",
            Self::Docx => "docx",
            Self::Pdf => "pdf",
            Self::Pptx => "pptx",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Extract the full text of a supported document.
pub fn extract_text(path: &Path) -> AnalysisResult<String> {
    let format = DocumentFormat::from_path(path)?;
    let text = match format {
        DocumentFormat::PlainText => extract_plain_text(path)?,
        DocumentFormat::Docx => extract_docx(path)?,
        DocumentFormat::Pdf => extract_pdf(path)?,
        DocumentFormat::Pptx => extract_pptx(path)?,
    };

    info!(
        path = %path.display(),
        format = %format,
        chars = text.chars().count(),
        "extract.done"
    );
    Ok(text)
}

fn read_error(path: &Path, source: std::io::Error) -> AnalysisError {
    AnalysisError::Read {
        path: path.to_path_buf(),
        source,
    }
}

fn extract_plain_text(path: &Path) -> AnalysisResult<String> {
    fs::read_to_string(path).map_err(|e| read_error(path, e))
}

/// Body paragraphs in order, run texts concatenated, one paragraph per line.
fn extract_docx(path: &Path) -> AnalysisResult<String> {
    let bytes = fs::read(path).map_err(|e| read_error(path, e))?;
    let docx = docx_rs::read_docx(&bytes)
        .map_err(|e| AnalysisError::extraction(DocumentFormat::Docx, e))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(&para.children)),
            _ => None,
        })
        .collect();

    debug!(paragraphs = paragraphs.len(), "extract.docx");
    Ok(paragraphs.join("\n"))
}

/// Text of a paragraph's runs, including runs nested in hyperlinks.
fn paragraph_text(children: &[ParagraphChild]) -> String {
    children
        .iter()
        .map(|pc| match pc {
            ParagraphChild::Run(run) => run_text(&run.children),
            ParagraphChild::Hyperlink(link) => paragraph_text(&link.children),
            _ => String::new(),
        })
        .collect()
}

fn run_text(children: &[RunChild]) -> String {
    children
        .iter()
        .filter_map(|rc| match rc {
            RunChild::Text(t) => Some(t.text.as_str()),
            RunChild::Tab(_) => Some("\t"),
            _ => None,
        })
        .collect()
}

/// Document text, newline-terminated when non-empty.
fn extract_pdf(path: &Path) -> AnalysisResult<String> {
    let bytes = fs::read(path).map_err(|e| read_error(path, e))?;
    let mut text = pdf_extract::extract_text_from_mem(&bytes)
        .map_err(|e| AnalysisError::extraction(DocumentFormat::Pdf, e))?;

    if !text.trim().is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    debug!(bytes = bytes.len(), "extract.pdf");
    Ok(text)
}

/// Slide number from an archive entry such as `ppt/slides/slide12.xml`.
fn slide_number(name: &str) -> Option<u32> {
    name.strip_prefix("ppt/slides/slide")?
        .strip_suffix(".xml")?
        .parse()
        .ok()
}

/// Slides in slide-number order, one text paragraph per line.
fn extract_pptx(path: &Path) -> AnalysisResult<String> {
    let file = File::open(path).map_err(|e| read_error(path, e))?;
    let mut archive = ZipArchive::new(file)
        .map_err(|e| AnalysisError::extraction(DocumentFormat::Pptx, e))?;

    let mut slides: Vec<(u32, String)> = archive
        .file_names()
        .filter_map(|name| slide_number(name).map(|n| (n, name.to_string())))
        .collect();
    slides.sort_by_key(|(n, _)| *n);

    let mut lines: Vec<String> = Vec::new();
    for (_, name) in &slides {
        let mut entry = archive
            .by_name(name)
            .map_err(|e| AnalysisError::extraction(DocumentFormat::Pptx, e))?;
        let mut xml = String::new();
        entry
            .read_to_string(&mut xml)
            .map_err(|e| read_error(path, e))?;
        lines.extend(slide_paragraphs(&xml)?);
    }

    debug!(slides = slides.len(), "extract.pptx");
    Ok(lines.join("\n"))
}

fn ends_with_tag(name: &[u8], tag: &[u8]) -> bool {
    if name == tag {
        return true;
    }
    name.len() > tag.len() + 1
        && name.ends_with(tag)
        && name[name.len() - tag.len() - 1] == b':'
}

/// Text paragraphs (`a:p`) of one slide, built from their `a:t` runs.
/// Empty paragraphs are skipped.
fn slide_paragraphs(xml: &str) -> AnalysisResult<Vec<String>> {
    let mut reader = XmlReader::from_str(xml);
    let mut buf = Vec::new();
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(start)) => {
                if ends_with_tag(start.name().as_ref(), b"t") {
                    in_text = true;
                }
            }
            Ok(Event::Text(text)) if in_text => {
                let text = text
                    .unescape()
                    .map_err(|e| AnalysisError::extraction(DocumentFormat::Pptx, e))?;
                current.push_str(&text);
            }
            Ok(Event::End(end)) => {
                let name = end.name();
                if ends_with_tag(name.as_ref(), b"t") {
                    in_text = false;
                } else if ends_with_tag(name.as_ref(), b"p") {
                    if current.trim().is_empty() {
                        current.clear();
                    } else {
                        paragraphs.push(std::mem::take(&mut current));
                    }
                }
            }
            Ok(Event::Empty(empty)) => {
                if ends_with_tag(empty.name().as_ref(), b"br") {
                    current.push('\n');
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(AnalysisError::extraction(DocumentFormat::Pptx, e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}
