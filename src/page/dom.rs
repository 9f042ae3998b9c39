//! Thin seam over the HTML library: the extraction rules only need
//! find-by-id, find-by-class-set, descendant tag scans, attributes and
//! concatenated text, so that is all that is exposed here.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

static SEL_TEMPLATE: LazyLock<Selector> = LazyLock::new(|| sel("#template"));
static SEL_LIST_ITEM: LazyLock<Selector> = LazyLock::new(|| sel("li"));
static SEL_SHORT_COMMENT: LazyLock<Selector> = LazyLock::new(|| sel(".shortcomment.cmt"));
static SEL_FULL_COMMENT: LazyLock<Selector> = LazyLock::new(|| sel(".comment.cmt"));
static SEL_DEPRECATED_NAME: LazyLock<Selector> = LazyLock::new(|| sel(".name.deprecated"));
static SEL_ANCHOR_MARKER: LazyLock<Selector> = LazyLock::new(|| sel(".anchorToMember"));
static SEL_HYPERLINK: LazyLock<Selector> = LazyLock::new(|| sel("a"));

fn sel(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// All nodes carrying `id="template"`, in document order. Generated pages
/// are expected to have exactly one; duplicates are a malformation the
/// caller checks for.
pub fn template_nodes(doc: &scraper::Html) -> Vec<ElementRef<'_>> {
    doc.select(&SEL_TEMPLATE).collect()
}

/// Every `<li>` descendant of `scope`, in document order.
pub fn list_items<'a>(scope: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    scope.select(&SEL_LIST_ITEM)
}

pub fn short_comment(item: ElementRef<'_>) -> Option<ElementRef<'_>> {
    item.select(&SEL_SHORT_COMMENT).next()
}

pub fn full_comment(item: ElementRef<'_>) -> Option<ElementRef<'_>> {
    item.select(&SEL_FULL_COMMENT).next()
}

pub fn deprecated_name(item: ElementRef<'_>) -> Option<ElementRef<'_>> {
    item.select(&SEL_DEPRECATED_NAME).next()
}

pub fn anchor_marker(item: ElementRef<'_>) -> Option<ElementRef<'_>> {
    item.select(&SEL_ANCHOR_MARKER).next()
}

pub fn hyperlinks<'a>(item: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    item.select(&SEL_HYPERLINK)
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

/// Concatenated visible text of a node and its descendants, verbatim.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}
