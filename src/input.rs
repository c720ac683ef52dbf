// Turning uploaded files into plain text for the summarizer.
use anyhow::{anyhow, Context, Result};
use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::SummarizeError;

/// File extensions `read_document` can turn into text.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "md", "pdf", "docx"];

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

pub fn is_supported(path: &Path) -> bool {
    SUPPORTED_EXTENSIONS.contains(&extension(path).as_str())
}

/// Read a document as plain text.
///
/// Text files must be UTF-8. PDFs go through `pdf-extract`; Word documents
/// give their non-blank paragraphs, one per line. Anything else is rejected
/// with a readable message.
pub fn read_document(path: &Path) -> Result<String> {
    let ext = extension(path);
    let text = match ext.as_str() {
        "txt" | "md" | "" => {
            let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
            decode_text(bytes).with_context(|| format!("{} is not a text file", path.display()))?
        }
        "pdf" => pdf_extract::extract_text(path)
            .map_err(|e| anyhow!("PDF extraction failed for {}: {}", path.display(), e))?,
        "docx" => {
            let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
            docx_text(&bytes)
                .map_err(|e| anyhow!("DOCX extraction failed for {}: {}", path.display(), e))?
        }
        _ => return Err(anyhow!("Unsupported file format: {}", ext)),
    };
    debug!(path = %path.display(), bytes = text.len(), "read document");
    Ok(text)
}

fn docx_text(bytes: &[u8]) -> std::result::Result<String, docx_rs::ReaderError> {
    let docx = docx_rs::read_docx(bytes)?;
    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(paragraph_text(&p.children)),
            _ => None,
        })
        .filter(|text| !text.trim().is_empty())
        .collect();
    Ok(paragraphs.join("\n"))
}

fn paragraph_text(children: &[ParagraphChild]) -> String {
    let mut text = String::new();
    for child in children {
        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                match rc {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Tab(_) => text.push('\t'),
                    RunChild::Break(_) => text.push('\n'),
                    _ => {}
                }
            }
        }
    }
    text
}

/// Decode raw bytes as UTF-8 text.
pub fn decode_text(bytes: Vec<u8>) -> std::result::Result<String, SummarizeError> {
    String::from_utf8(bytes).map_err(|e| SummarizeError::InvalidInput(e.utf8_error()))
}
