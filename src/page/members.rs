use scraper::ElementRef;

use super::{dom, links, CommentBlock};
use crate::diag::{Diagnostic, Diagnostics};

/// Marker scaladoc leaves in the rendered text of deprecated members.
const DEPRECATED_MARKER: &str = "@deprecated";

/// Map one member `<li>` to its comment block.
pub fn comment_block(item: ElementRef<'_>, diags: &mut Diagnostics) -> CommentBlock {
    let short_comment = dom::short_comment(item).map(dom::text_of);

    // Pages carry a separate long-form `comment cmt` node, but the emitted
    // record repeats the short text for both fields whenever the long-form
    // node exists. Reproduced as-is pending product clarification.
    let full_comment = if dom::full_comment(item).is_some() {
        short_comment.clone()
    } else {
        None
    };

    let deprecated = dom::deprecated_name(item);
    let is_deprecated = deprecated.is_some();
    let deprecated_comment =
        deprecated.and_then(|el| dom::attr(el, "title").map(str::to_string));

    let link = links::resolve(item, diags);

    if deprecated_comment.as_deref().unwrap_or("").is_empty()
        && dom::text_of(item).contains(DEPRECATED_MARKER)
    {
        diags.warn(Diagnostic::DeprecatedMarkerWithoutComment { link: link.clone() });
    }

    CommentBlock {
        link,
        short_comment,
        full_comment,
        is_deprecated,
        deprecated_comment,
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn first_item(html: &str, diags: &mut Diagnostics) -> CommentBlock {
        let doc = Html::parse_document(html);
        let sel = Selector::parse("li").unwrap();
        let item = doc.select(&sel).next().expect("fixture has an <li>");
        comment_block(item, diags)
    }

    #[test]
    fn short_comment_only() {
        let mut diags = Diagnostics::new();
        let block = first_item(
            r#"<li><p class="shortcomment cmt">Adds two things.</p></li>"#,
            &mut diags,
        );
        assert_eq!(block.short_comment.as_deref(), Some("Adds two things."));
        assert_eq!(block.full_comment, None);
        assert!(!block.is_deprecated);
        assert_eq!(block.deprecated_comment, None);
    }

    #[test]
    fn full_comment_repeats_short_text() {
        let mut diags = Diagnostics::new();
        let block = first_item(
            r#"<li>
                <p class="shortcomment cmt">Short text.</p>
                <div class="comment cmt"><p>Long body that is not emitted.</p></div>
            </li>"#,
            &mut diags,
        );
        assert_eq!(block.short_comment.as_deref(), Some("Short text."));
        assert_eq!(block.full_comment.as_deref(), Some("Short text."));
    }

    #[test]
    fn full_comment_absent_without_short_node() {
        let mut diags = Diagnostics::new();
        let block = first_item(
            r#"<li><div class="comment cmt"><p>Long body.</p></div></li>"#,
            &mut diags,
        );
        assert_eq!(block.short_comment, None);
        assert_eq!(block.full_comment, None);
    }

    #[test]
    fn deprecated_name_sets_flag_and_rationale() {
        let mut diags = Diagnostics::new();
        let block = first_item(
            r#"<li><span class="name deprecated" title="use foo instead">bar</span></li>"#,
            &mut diags,
        );
        assert!(block.is_deprecated);
        assert_eq!(block.deprecated_comment.as_deref(), Some("use foo instead"));
        assert_eq!(block.short_comment, None);
        assert_eq!(block.full_comment, None);
    }

    #[test]
    fn deprecated_name_without_title_has_no_rationale() {
        let mut diags = Diagnostics::new();
        let block = first_item(
            r#"<li><span class="name deprecated">bar</span></li>"#,
            &mut diags,
        );
        assert!(block.is_deprecated);
        assert_eq!(block.deprecated_comment, None);
    }

    #[test]
    fn deprecated_marker_without_rationale_is_flagged() {
        let mut diags = Diagnostics::new();
        let block = first_item(
            r#"<li><p class="shortcomment cmt">@deprecated since 1.0</p></li>"#,
            &mut diags,
        );
        // Output fields are unchanged by the data-quality check.
        assert!(!block.is_deprecated);
        assert!(diags
            .items()
            .iter()
            .any(|d| matches!(d, Diagnostic::DeprecatedMarkerWithoutComment { .. })));
    }

    #[test]
    fn deprecated_marker_with_rationale_is_not_flagged() {
        let mut diags = Diagnostics::new();
        first_item(
            r#"<li>
                <span class="name deprecated" title="use foo">bar</span>
                <p class="shortcomment cmt">@deprecated use foo</p>
            </li>"#,
            &mut diags,
        );
        assert!(!diags
            .items()
            .iter()
            .any(|d| matches!(d, Diagnostic::DeprecatedMarkerWithoutComment { .. })));
    }
}
