//! Best-effort PDF text extraction.

use tracing::warn;

/// Plain text of a PDF. Returns an empty string when the document cannot be read;
/// callers decide whether empty text is an error.
pub async fn extract_pdf_text(bytes: bytes::Bytes) -> String {
    let outcome = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes)).await;

    match outcome {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            warn!("PDF text extraction failed: {e}");
            String::new()
        }
        // The extractor panics on some malformed inputs.
        Err(e) => {
            warn!("PDF text extraction aborted: {e}");
            String::new()
        }
    }
}
