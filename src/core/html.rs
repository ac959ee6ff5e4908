// src/core/html.rs
//! Small, tolerant readers over parsed HTML.
//! Each returns plain strings; page-specific meaning lives in `specs`.

use scraper::{ElementRef, Html, Selector};

use crate::core::sanitize::normalize_ws;

fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}

/// Lazy-loading pages park a tiny SVG in `src` and the real image in `data-src`.
fn is_placeholder(src: &str) -> bool {
    src.is_empty() || src.starts_with("data:image/svg")
}

/// Every `<img>` with a non-empty `alt`, as `(alt, src)`.
/// Prefers `data-src` / `data-lazy-src` when `src` is a placeholder.
pub fn image_records(doc: &str) -> Vec<(String, String)> {
    let Some(img) = selector("img") else { return Vec::new() };
    let html = Html::parse_document(doc);

    let mut out = Vec::new();
    for el in html.select(&img) {
        let attrs = el.value();
        let alt = normalize_ws(attrs.attr("alt").unwrap_or(""));
        if alt.is_empty() { continue; }

        let mut src = attrs.attr("src").unwrap_or("").trim();
        if is_placeholder(src) {
            if let Some(lazy) = attrs.attr("data-src").or_else(|| attrs.attr("data-lazy-src")) {
                src = lazy.trim();
            }
        }
        if src.is_empty() { continue; }
        out.push((alt, s!(src)));
    }
    out
}

/// `<p><a href>` pairs as `(text, href)`. Index pages list one player per paragraph.
pub fn paragraph_links(doc: &str) -> Vec<(String, String)> {
    let Some(links) = selector("p > a[href]") else { return Vec::new() };
    let html = Html::parse_document(doc);

    html.select(&links)
        .filter_map(|a| {
            let text = normalize_ws(&a.text().collect::<String>());
            let href = a.value().attr("href")?.trim();
            if text.is_empty() || href.is_empty() { return None; }
            Some((text, s!(href)))
        })
        .collect()
}

/// Text following the `<strong>` whose label contains `label`, inside `container`.
///
/// ```text
/// <div id="meta"><p><strong>Position:</strong> Forward ▪ ...</p></div>
/// ```
/// yields `" Forward ▪ ..."`; callers clean it.
pub fn labelled_field(doc: &str, container: &str, label: &str) -> Option<String> {
    let scope = selector(container)?;
    let strong = selector("strong")?;
    let html = Html::parse_document(doc);
    let meta = html.select(&scope).next()?;

    let tag = meta
        .select(&strong)
        .find(|s| s.text().collect::<String>().contains(label))?;

    let sibling = tag.next_sibling()?;
    if let Some(text) = sibling.value().as_text() {
        return Some(text.to_string());
    }
    ElementRef::wrap(sibling).map(|el| el.text().collect::<String>())
}

/// All visible text of the document, whitespace-collapsed.
pub fn page_text(doc: &str) -> String {
    let html = Html::parse_document(doc);
    let parts: Vec<&str> = html.root_element().text().collect();
    normalize_ws(&parts.join(" "))
}
