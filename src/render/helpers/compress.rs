//! PDF compression helper
//!
//! Uses lopdf to compress PDF streams after printpdf generates uncompressed output.

use std::io::Cursor;

use crate::error::RenderError;

/// Compress all streams of a PDF and re-serialize it.
pub fn compress_pdf(uncompressed: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut doc = lopdf::Document::load_mem(uncompressed).map_err(|e| {
        RenderError::PdfGeneration(format!("Failed to parse PDF for compression: {}", e))
    })?;

    doc.compress();

    let mut output = Cursor::new(Vec::new());
    doc.save_to(&mut output)
        .map_err(|e| RenderError::PdfGeneration(format!("Failed to save compressed PDF: {}", e)))?;

    Ok(output.into_inner())
}

/// Compress, keeping the original bytes when lopdf cannot process them
pub fn compress_or_keep(bytes: Vec<u8>) -> Vec<u8> {
    match compress_pdf(&bytes) {
        Ok(compressed) => {
            log::debug!(
                "Compressed PDF from {} to {} bytes",
                bytes.len(),
                compressed.len()
            );
            compressed
        }
        Err(e) => {
            log::warn!("{}; writing uncompressed output", e);
            bytes
        }
    }
}
