pub mod dom;
pub mod links;
pub mod members;

use std::fs;
use std::path::Path;

use scraper::Html;
use serde::Serialize;
use thiserror::Error;

use crate::diag::Diagnostics;

/// One documented member pulled out of a page's member list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentBlock {
    /// Permalink fragment relative to the documentation root; empty when
    /// resolution failed (degraded, see `Diagnostic::UnresolvedLink`).
    pub link: String,
    pub short_comment: Option<String>,
    pub full_comment: Option<String>,
    pub is_deprecated: bool,
    /// Present only when `is_deprecated` and the page recorded a rationale.
    pub deprecated_comment: Option<String>,
}

#[derive(Debug, Error)]
pub enum PageError {
    /// A well-formed page has exactly one `id="template"` region.
    #[error("expected exactly one template region, found {0}")]
    MalformedTemplate(usize),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Parse one documentation page file into its member comment blocks.
pub fn extract_page(path: &Path, diags: &mut Diagnostics) -> Result<Vec<CommentBlock>, PageError> {
    let html = fs::read_to_string(path)?;
    extract_members(&html, diags)
}

/// Locate the single `id="template"` member-list region and map every
/// `<li>` beneath it through the single-item rule, in document order.
pub fn extract_members(html: &str, diags: &mut Diagnostics) -> Result<Vec<CommentBlock>, PageError> {
    let doc = Html::parse_document(html);
    let templates = dom::template_nodes(&doc);
    if templates.len() != 1 {
        return Err(PageError::MalformedTemplate(templates.len()));
    }
    Ok(dom::list_items(templates[0])
        .map(|item| members::comment_block(item, diags))
        .collect())
}

// ── Tests ──
