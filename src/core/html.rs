// src/core/html.rs

// Typed traversal over a parsed page. The profile layout is
// "labeled section → next sibling block → sub-group → anchors"; each step
// is one function here so page specs read as a chain of them.

use scraper::{ElementRef, Html};

use super::fold::normalize_ws;

/// Every element below `root` in document order, `root` itself excluded.
pub fn descendants<'a>(root: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    root.descendants().skip(1).filter_map(ElementRef::wrap)
}

/// Elements directly under `el`, skipping text and comments.
pub fn child_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    el.children().filter_map(ElementRef::wrap)
}

/// Text nodes directly under `el`, whitespace-normalized.
pub fn own_text(el: ElementRef<'_>) -> String {
    let raw: String = el
        .children()
        .filter_map(|c| c.value().as_text().map(|t| &**t))
        .collect();
    normalize_ws(&raw)
}

/// All text under `el`, whitespace-normalized.
pub fn element_text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

pub fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

/// First `<tag>` whose own text is exactly `label`, e.g. `<div>Genre</div>`.
/// Matching on own text picks the innermost element, not a wrapper that
/// happens to contain nothing else.
pub fn labeled_section<'a>(doc: &'a Html, tag: &str, label: &str) -> Option<ElementRef<'a>> {
    descendants(doc.root_element()).find(|el| el.value().name() == tag && own_text(*el) == label)
}

/// The next sibling element named `tag`, skipping anything else in between.
pub fn next_sibling_element<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    el.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sib| sib.value().name() == tag)
}

/// The last `<tag>` below `el` in document order.
pub fn last_descendant<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    descendants(el).filter(|d| d.value().name() == tag).last()
}

pub fn descendant_anchors<'a>(el: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    descendants(el).filter(|d| d.value().name() == "a").collect()
}
