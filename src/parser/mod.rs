pub mod document;
pub mod extract;
pub mod fields;
pub mod sections;

use tracing::warn;

use crate::error::CompanyError;
use crate::record::{CompanyRecord, ContactFallback};
use document::ParsedDocument;

/// Pipeline: markup → document → sentinel check → sections → record.
///
/// Sentinel pages short-circuit before any section is read.
pub fn process_page(
    usdot: &str,
    markup: &str,
    fallback: &ContactFallback,
) -> Result<CompanyRecord, CompanyError> {
    let doc = ParsedDocument::load(markup);
    if doc.is_not_found() {
        let err = CompanyError::not_found(usdot);
        warn!("SAFER has no active record for usdot {}", err.usdot());
        return Err(err);
    }
    let sections = sections::extract_all(&doc);
    Ok(extract::build(usdot, &sections, fallback))
}

// ── Tests ──
