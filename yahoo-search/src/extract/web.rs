//! Web search results page

use scraper::{ElementRef, Html};

use super::{attr, first_child_text, last_child_text, resolve_image, resolve_redirect, selector, text_of};
use crate::error::{Context, Operation, Result};
use crate::types::{AlsoTryItem, CardResult, CardResultSource, PageResult, RelatedSearch, SearchResult};

const RESULTS_ANCHOR: &str = ".reg.searchCenterMiddle";

/// Parse a Yahoo web search results page
///
/// Fails with an extraction error when the results container is missing,
/// which is how a markup change shows up. A page with a container but no
/// results parses to an empty `pages`.
pub fn parse_search(html: &str, query: &str) -> Result<SearchResult> {
    let ctx = Context::new(Operation::Search, query);
    let document = Html::parse_document(html);

    let results = document
        .select(selector!(".reg.searchCenterMiddle"))
        .next()
        .ok_or_else(|| ctx.missing(format!("'{RESULTS_ANCHOR}' (search results)")))?;

    let pages: Vec<PageResult> = results
        .select(selector!(".dd.algo.algo-sr"))
        .filter_map(parse_page)
        .collect();

    let card = document
        .select(selector!(".cardReg.searchRightTop"))
        .next()
        .map(parse_card)
        .filter(|card| !card.is_empty());

    let also_try = document
        .select(selector!("ol.cardReg.searchTop .compDlink li span a"))
        .filter_map(|a| {
            Some(AlsoTryItem {
                link: attr(a, "href")?,
                text: text_of(a)?,
            })
        })
        .collect();

    let related_searches = document
        .select(selector!("ol.scf.reg.searchCenterFooter tbody tr td a"))
        .filter_map(|a| {
            Some(RelatedSearch {
                link: attr(a, "href")?,
                text: text_of(a)?,
            })
        })
        .collect();

    Ok(SearchResult {
        also_try,
        pages,
        card,
        related_searches,
    })
}

fn parse_page(item: ElementRef<'_>) -> Option<PageResult> {
    // Yahoo sometimes renders more than one anchor; the last one wins
    let anchor = item.select(selector!("div.compTitle h3 a")).last();

    let (title, link) = match anchor {
        Some(a) => (
            last_child_text(a),
            attr(a, "href").as_deref().and_then(resolve_redirect),
        ),
        None => (None, None),
    };

    let (Some(title), Some(link)) = (title, link) else {
        tracing::debug!("dropping result without title or link");
        return None;
    };

    let text = item.select(selector!(".compText.aAbs p")).last().and_then(text_of);

    Some(PageResult { title, link, text })
}

fn parse_card(card: ElementRef<'_>) -> CardResult {
    let image = card
        .select(selector!("img"))
        .next()
        .and_then(|img| attr(img, "src"))
        .as_deref()
        .and_then(resolve_image);

    let heading = card
        .select(selector!("p.pl-15.pr-10 span"))
        .next()
        .and_then(text_of);

    let inner = card.select(selector!("div.compText p")).next();

    let text = inner.and_then(first_child_text);

    let source = inner
        .and_then(|p| p.select(selector!("a")).next())
        .and_then(|a| {
            Some(CardResultSource {
                link: attr(a, "href").as_deref().and_then(resolve_redirect)?,
                text: text_of(a)?,
            })
        });

    CardResult {
        image,
        heading,
        text,
        source,
    }
}
