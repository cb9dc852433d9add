use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::documents::decoders::{Decoder, DocxDecoder, LegacyDocDecoder, PdfDecoder, TextDecoder};
use crate::documents::file_type::FileType;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Failed to parse document: {filename}. Error: {source}")]
    ExtractionFailed {
        filename: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Could not extract text from resume or resume is empty.")]
    EmptyDocument,
}

/// Plain text pulled out of one uploaded file. Never blank.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedDocument {
    pub text: String,
}

/// Routes a stored file to the decoder for its declared type and flattens the
/// fragments into one string.
#[derive(Clone)]
pub struct DocumentExtractor {
    pdf: Arc<dyn Decoder>,
    docx: Arc<dyn Decoder>,
    doc: Arc<dyn Decoder>,
    txt: Arc<dyn Decoder>,
}

impl Default for DocumentExtractor {
    fn default() -> Self {
        Self {
            pdf: Arc::new(PdfDecoder),
            docx: Arc::new(DocxDecoder),
            doc: Arc::new(LegacyDocDecoder),
            txt: Arc::new(TextDecoder),
        }
    }
}

impl DocumentExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the decoder used for one file type.
    #[cfg(test)]
    pub fn with_decoder(mut self, file_type: FileType, decoder: Arc<dyn Decoder>) -> Self {
        match file_type {
            FileType::Pdf => self.pdf = decoder,
            FileType::Docx => self.docx = decoder,
            FileType::Doc => self.doc = decoder,
            FileType::Txt => self.txt = decoder,
        }
        self
    }

    fn decoder_for(&self, file_type: FileType) -> &dyn Decoder {
        match file_type {
            FileType::Pdf => self.pdf.as_ref(),
            FileType::Docx => self.docx.as_ref(),
            FileType::Doc => self.doc.as_ref(),
            FileType::Txt => self.txt.as_ref(),
        }
    }

    /// Extracts text from the file at `path`. The type comes from `filename`
    /// (the name the client declared), not from `path`.
    ///
    /// Fragments are joined with a single space in decoder order. A result that
    /// is blank after trimming is `EmptyDocument`.
    pub fn extract(&self, path: &Path, filename: &str) -> Result<ExtractedDocument, ExtractError> {
        let file_type = FileType::from_filename(filename)
            .ok_or_else(|| ExtractError::UnsupportedFileType(filename.to_string()))?;

        // pdf-extract panics on some malformed files; that is a decode failure too.
        let decoder = self.decoder_for(file_type);
        let fragments = panic::catch_unwind(AssertUnwindSafe(|| decoder.decode(path)))
            .unwrap_or_else(|payload| Err(anyhow::anyhow!("decoder panicked: {}", panic_message(&*payload))))
            .map_err(|source| ExtractError::ExtractionFailed {
                filename: filename.to_string(),
                source,
            })?;

        let text = fragments.join(" ");
        debug!(
            "Extracted {} chars from {file_type} resume ({} fragments)",
            text.len(),
            fragments.len()
        );

        if text.trim().is_empty() {
            return Err(ExtractError::EmptyDocument);
        }

        Ok(ExtractedDocument { text })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg
    } else {
        "unknown panic"
    }
}
