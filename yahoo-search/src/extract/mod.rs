//! HTML and JSON extraction for each Yahoo endpoint
//!
//! Each submodule turns a raw response body into one result type. The
//! helpers here cover the pieces every extractor needs: cached selectors,
//! whitespace-normalised text, non-empty attributes and Yahoo's redirect
//! links.

pub mod autocomplete;
pub mod news;
pub mod videos;
pub mod weather;
pub mod web;

use scraper::{ElementRef, Node};

/// Parse a CSS selector once and cache it for the life of the process
macro_rules! selector {
    ($css:expr) => {{
        static SELECTOR: std::sync::LazyLock<scraper::Selector> = std::sync::LazyLock::new(|| {
            scraper::Selector::parse($css).expect("static selector is valid CSS")
        });
        &*SELECTOR
    }};
}

pub(crate) use selector;

/// Collapse runs of whitespace into single spaces and trim
pub(crate) fn normalize(text: &str) -> Option<String> {
    let joined = text.split_whitespace().collect::<Vec<_>>().join(" ");
    (!joined.is_empty()).then_some(joined)
}

/// All descendant text of an element, inline markup flattened
pub(crate) fn text_of(element: ElementRef<'_>) -> Option<String> {
    normalize(&element.text().collect::<String>())
}

/// A non-empty attribute value
pub(crate) fn attr(element: ElementRef<'_>, name: &str) -> Option<String> {
    element
        .value()
        .attr(name)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Text carried by a child node: the text itself, or the flattened element
fn child_text(node: &Node, element: Option<ElementRef<'_>>) -> Option<String> {
    match node {
        Node::Text(text) => normalize(text),
        Node::Element(_) => element.and_then(text_of),
        _ => None,
    }
}

/// The first child node that carries text, skipping blank text nodes
pub(crate) fn first_child_text(element: ElementRef<'_>) -> Option<String> {
    element
        .children()
        .find_map(|node| child_text(node.value(), ElementRef::wrap(node)))
}

/// The last child node that carries text, skipping blank text nodes
pub(crate) fn last_child_text(element: ElementRef<'_>) -> Option<String> {
    element
        .children()
        .rev()
        .find_map(|node| child_text(node.value(), ElementRef::wrap(node)))
}

/// Child elements, ignoring text and comment nodes
pub(crate) fn child_elements<'a>(element: ElementRef<'a>) -> impl DoubleEndedIterator<Item = ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap)
}

/// Unwrap a Yahoo redirect link (`.../RU=<encoded target>/RK=...`)
///
/// Links without an `RU=` segment are returned unchanged.
pub fn resolve_redirect(href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    let path = url::Url::parse(href)
        .map(|u| u.path().to_string())
        .unwrap_or_else(|_| href.to_string());

    let Some((_, rest)) = path.split_once("RU=") else {
        return Some(href.to_string());
    };

    let encoded = rest.split('/').next().unwrap_or_default();
    let decoded = urlencoding::decode(encoded)
        .map(|d| d.into_owned())
        .unwrap_or_else(|_| encoded.to_string());

    (!decoded.is_empty()).then_some(decoded)
}

/// Turn a Yahoo image proxy URL into the absolute image URL it wraps
///
/// The proxy appends the original `https://` URL to its own path; the last
/// occurrence is the original. Protocol-relative URLs get `https:`.
pub fn resolve_image(src: &str) -> Option<String> {
    let src = src.trim();
    if src.is_empty() || src.starts_with("data:") {
        return None;
    }

    if let Some(idx) = src.rfind("https://") {
        return Some(src[idx..].to_string());
    }

    if let Some(rest) = src.strip_prefix("//") {
        return Some(format!("https://{rest}"));
    }

    Some(src.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  a \n\t b  "), Some("a b".to_string()));
        assert_eq!(normalize(" \n "), None);
    }

    #[test]
    fn test_text_of_flattens_inline_markup() {
        let html = Html::parse_fragment("<p>Rich <b>dark</b> <strong>choc</strong>olate\n bar</p>");
        let p = html.select(selector!("p")).next().unwrap();
        assert_eq!(text_of(p), Some("Rich dark chocolate bar".to_string()));
    }

    #[test]
    fn test_first_and_last_child_text_skip_blank_nodes() {
        let html = Html::parse_fragment("<div>\n  <span>first</span>\n middle <em>last</em>\n</div>");
        let div = html.select(selector!("div")).next().unwrap();
        assert_eq!(first_child_text(div), Some("first".to_string()));
        assert_eq!(last_child_text(div), Some("last".to_string()));
        assert_eq!(child_elements(div).count(), 2);
    }

    #[test]
    fn test_attr_ignores_blank() {
        let html = Html::parse_fragment(r#"<a href=" " title="x">t</a>"#);
        let a = html.select(selector!("a")).next().unwrap();
        assert_eq!(attr(a, "href"), None);
        assert_eq!(attr(a, "title"), Some("x".to_string()));
        assert_eq!(attr(a, "missing"), None);
    }

    #[test]
    fn test_resolve_redirect() {
        let href = "https://r.search.yahoo.com/_ylt=AwrPq/RV=2/RE=1700000000/RO=10/RU=https%3a%2f%2fen.wikipedia.org%2fwiki%2fChocolate/RK=2/RS=abc-";
        assert_eq!(
            resolve_redirect(href),
            Some("https://en.wikipedia.org/wiki/Chocolate".to_string())
        );
    }

    #[test]
    fn test_resolve_redirect_passthrough() {
        assert_eq!(
            resolve_redirect("https://example.com/page"),
            Some("https://example.com/page".to_string())
        );
        assert_eq!(resolve_redirect(""), None);
    }

    #[test]
    fn test_resolve_image() {
        assert_eq!(
            resolve_image("https://s.yimg.com/fz/api/res/1.2/abc--/https://upload.wikimedia.org/choc.jpg"),
            Some("https://upload.wikimedia.org/choc.jpg".to_string())
        );
        assert_eq!(
            resolve_image("//s.yimg.com/img.png"),
            Some("https://s.yimg.com/img.png".to_string())
        );
        assert_eq!(resolve_image("data:image/gif;base64,R0lGOD"), None);
    }
}
