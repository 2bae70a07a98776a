//! Pull the transaction pages out of a statement PDF.
//!
//! Statements open with a cover/summary page that carries no transaction
//! rows, so page 1 is always dropped and the remaining pages are joined
//! into one text blob for the prompt.

use std::path::Path;

use tally_core::{Result, TallyError};

/// Extract the text of pages 2..N, each page followed by a blank line.
///
/// A document with fewer than 2 pages yields an empty string: nothing is
/// eligible, but that is not an ingestion failure.
pub fn extract_statement_text(path: &Path) -> Result<String> {
    let pages = pdf_extract::extract_text_by_pages(path)
        .map_err(|e| TallyError::DocumentRead(format!("{}: {e}", path.display())))?;

    log::debug!("{}: {} page(s)", path.display(), pages.len());

    if pages.len() < 2 {
        return Ok(String::new());
    }

    let mut text = String::new();
    for page in &pages[1..] {
        text.push_str(page);
        text.push_str("\n\n");
    }

    log::info!(
        "extracted {} chars from {} transaction page(s)",
        text.len(),
        pages.len() - 1
    );
    Ok(text)
}
