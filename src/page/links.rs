use scraper::ElementRef;

use super::dom;
use crate::diag::{Diagnostic, Diagnostics};

/// Pick the permalink for one member item.
///
/// An item renders several anchor-id markers (overloads and generic variants
/// produce multiple id spellings) and several hyperlinks (the permalink plus
/// cross-references to parameter and return types). The permalink is the
/// first hyperlink whose visible text contains the first marker's text.
/// Failure to match degrades to an empty link, never an error.
pub fn resolve(item: ElementRef<'_>, diags: &mut Diagnostics) -> String {
    let Some(marker) = dom::anchor_marker(item).map(dom::text_of) else {
        diags.warn(Diagnostic::UnresolvedLink { marker: None });
        return String::new();
    };

    for anchor in dom::hyperlinks(item) {
        let Some(href) = dom::attr(anchor, "href") else {
            continue;
        };
        if href.is_empty() {
            continue;
        }
        if dom::text_of(anchor).contains(&marker) {
            // Pages reference siblings via a relative parent path; records
            // are root-relative, so one leading segment comes off.
            return href.strip_prefix("../").unwrap_or(href).to_string();
        }
    }

    diags.warn(Diagnostic::UnresolvedLink { marker: Some(marker) });
    String::new()
}

// ── Tests ──
