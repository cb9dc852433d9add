//! Format-specific decoders. Each turns a file on disk into ordered text fragments
//! (pages for PDF, paragraphs for Word). Joining is the extractor's job.

use std::path::Path;

use anyhow::{Context, Result};
use docx_rs::{DocumentChild, Paragraph, Table, TableCellContent, TableChild, TableRowChild};

/// A decoding capability for one file format.
pub trait Decoder: Send + Sync {
    fn decode(&self, path: &Path) -> Result<Vec<String>>;
}

/// One fragment per page, via `pdf-extract`.
pub struct PdfDecoder;

impl Decoder for PdfDecoder {
    fn decode(&self, path: &Path) -> Result<Vec<String>> {
        let pages = pdf_extract::extract_text_by_pages(path).context("could not read PDF")?;
        Ok(pages)
    }
}

/// Office Open XML documents. One fragment per paragraph, table cells included
/// in document order.
pub struct DocxDecoder;

impl Decoder for DocxDecoder {
    fn decode(&self, path: &Path) -> Result<Vec<String>> {
        let bytes = std::fs::read(path).context("could not read DOCX file")?;
        let docx = docx_rs::read_docx(&bytes).context("could not parse DOCX")?;

        let mut fragments = Vec::new();
        for child in &docx.document.children {
            match child {
                DocumentChild::Paragraph(p) => push_paragraph(&mut fragments, p),
                DocumentChild::Table(t) => push_table(&mut fragments, t),
                _ => {}
            }
        }
        Ok(fragments)
    }
}

fn push_paragraph(fragments: &mut Vec<String>, paragraph: &Paragraph) {
    let text = paragraph.raw_text();
    if !text.trim().is_empty() {
        fragments.push(text);
    }
}

#[allow(irrefutable_let_patterns)]
fn push_table(fragments: &mut Vec<String>, table: &Table) {
    for row in &table.rows {
        let TableChild::TableRow(row) = row else { continue };
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell else { continue };
            for content in &cell.children {
                if let TableCellContent::Paragraph(p) = content {
                    push_paragraph(fragments, p);
                }
            }
        }
    }
}

/// Legacy binary `.doc` files. There is no pure-Rust reader for the format, so
/// this keeps runs of readable text out of a lossy decode. Word stores text
/// either as 8-bit runs or as UTF-16LE, so both readings are tried and the one
/// yielding more text wins. Anything else ends up empty and the extractor
/// rejects it.
pub struct LegacyDocDecoder;

const MIN_RUN_CHARS: usize = 4;

impl Decoder for LegacyDocDecoder {
    fn decode(&self, path: &Path) -> Result<Vec<String>> {
        let bytes = std::fs::read(path).context("could not read DOC file")?;
        let narrow = readable_runs(&String::from_utf8_lossy(&bytes));
        let wide = readable_runs(&decode_utf16le_lossy(&bytes));
        Ok(if run_chars(&wide) > run_chars(&narrow) { wide } else { narrow })
    }
}

fn decode_utf16le_lossy(bytes: &[u8]) -> String {
    let units = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
    char::decode_utf16(units)
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

fn run_chars(runs: &[String]) -> usize {
    runs.iter().map(|run| run.chars().count()).sum()
}

fn readable_runs(decoded: &str) -> Vec<String> {
    decoded
        .split(|c: char| c == char::REPLACEMENT_CHARACTER || (c.is_control() && c != '\n' && c != '\t'))
        .map(str::trim)
        .filter(|run| run.chars().count() >= MIN_RUN_CHARS && run.chars().any(char::is_alphabetic))
        .map(String::from)
        .collect()
}

/// Plain UTF-8 text. A single fragment; invalid UTF-8 is an error.
pub struct TextDecoder;

impl Decoder for TextDecoder {
    fn decode(&self, path: &Path) -> Result<Vec<String>> {
        let text = std::fs::read_to_string(path).context("could not read text file as UTF-8")?;
        Ok(vec![text])
    }
}
