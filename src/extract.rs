use crate::error::{MenuError, Result};

const PDF_MAGIC: &[u8] = b"%PDF";

pub trait ExtractText {
    fn extract_text(&self, bytes: &[u8]) -> Result<String>;
}

/// Text extraction backed by `pdf-extract`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl ExtractText for PdfTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String> {
        if !bytes.starts_with(PDF_MAGIC) {
            return Err(MenuError::DocumentLoad("missing %PDF header".to_string()));
        }
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| MenuError::DocumentLoad(e.to_string()))?;
        tracing::debug!("extracted text from {} page(s)", pages.len());
        Ok(pages.concat())
    }
}
